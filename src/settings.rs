use crate::catalog::CatalogLayout;
use crate::error::{ExplorerError, Result};
use crate::utils::constants::{DEFAULT_CHART_SIZE, DEFAULT_EXCLUDED_CATEGORY};
use config::{Config, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Contents of `settings.yml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(rename = "FabSim3", alias = "fabsim3")]
    pub fabsim3: FabSimSettings,

    #[serde(default)]
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FabSimSettings {
    pub location: PathBuf,
    pub input_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    pub excluded_categories: Vec<String>,
    /// Region map sample size (0 = every building)
    pub map_sample_cap: usize,
    pub chart_size: u32,
    pub layout: LayoutKind,
    pub subpath: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    #[default]
    Flat,
    Nested,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            excluded_categories: vec![DEFAULT_EXCLUDED_CATEGORY.to_string()],
            map_sample_cap: 0,
            chart_size: DEFAULT_CHART_SIZE,
            layout: LayoutKind::Flat,
            subpath: None,
        }
    }
}

impl Settings {
    /// Load settings from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ExplorerError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let settings: Settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Yaml))
            .build()?
            .try_deserialize()?;

        debug!("Loaded settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }

    /// Base input directory: `FabSim3.location` joined with `FabSim3.input_path`.
    pub fn input_dir(&self) -> PathBuf {
        self.fabsim3.location.join(&self.fabsim3.input_path)
    }

    pub fn layout(&self) -> CatalogLayout {
        match self.dashboard.layout {
            LayoutKind::Flat => CatalogLayout::Flat,
            LayoutKind::Nested => CatalogLayout::Nested {
                subpath: self.dashboard.subpath.clone().unwrap_or_default(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::Builder;

    fn yaml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".yml").tempfile().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_input_dir() -> Result<()> {
        let file = yaml_file("FabSim3:\n  location: /opt/FabSim3\n  input_path: plugins/FabFlee/config_files\n");

        let settings = Settings::load(file.path())?;

        assert_eq!(
            settings.input_dir(),
            PathBuf::from("/opt/FabSim3/plugins/FabFlee/config_files")
        );
        assert_eq!(settings.dashboard.excluded_categories, vec!["House"]);
        assert_eq!(settings.dashboard.map_sample_cap, 0);
        assert_eq!(settings.layout(), CatalogLayout::Flat);

        Ok(())
    }

    #[test]
    fn test_dashboard_section() -> Result<()> {
        let file = yaml_file(
            "FabSim3:\n  location: /opt/FabSim3\n  input_path: input\n\
             dashboard:\n  excluded_categories: [House, Garage]\n  map_sample_cap: 500\n  \
             layout: nested\n  subpath: source_data\n",
        );

        let settings = Settings::load(file.path())?;

        assert_eq!(settings.dashboard.excluded_categories, vec!["House", "Garage"]);
        assert_eq!(settings.dashboard.map_sample_cap, 500);
        assert_eq!(settings.dashboard.chart_size, 500);
        assert_eq!(
            settings.layout(),
            CatalogLayout::Nested {
                subpath: PathBuf::from("source_data")
            }
        );

        Ok(())
    }

    #[test]
    fn test_missing_settings_file() {
        assert!(matches!(
            Settings::load(Path::new("no/such/settings.yml")),
            Err(ExplorerError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn test_missing_key() {
        let file = yaml_file("FabSim3:\n  location: /opt/FabSim3\n");
        assert!(matches!(
            Settings::load(file.path()),
            Err(ExplorerError::Settings(_))
        ));
    }
}
