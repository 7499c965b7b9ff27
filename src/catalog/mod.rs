use crate::error::{ExplorerError, Result};
use crate::models::Region;
use crate::utils::constants::NO_SELECTION;
use crate::utils::filename::location_from_filename;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where a region's building file lives relative to the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogLayout {
    /// `<base>/<slug>_buildings.csv`
    #[default]
    Flat,
    /// `<base>/<slug>/<subpath>/<slug>_buildings.csv`
    Nested { subpath: PathBuf },
}

pub struct LocationCatalog {
    base_dir: PathBuf,
    layout: CatalogLayout,
}

impl LocationCatalog {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            layout: CatalogLayout::Flat,
        }
    }

    pub fn with_layout(mut self, layout: CatalogLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Regions found in the data directory, sorted by display name.
    pub fn regions(&self) -> Result<Vec<Region>> {
        if !self.base_dir.is_dir() {
            return Err(ExplorerError::NotFound {
                path: self.base_dir.clone(),
            });
        }

        let mut regions = BTreeSet::new();

        for entry in fs::read_dir(&self.base_dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let name = name.to_str().ok_or_else(|| {
                ExplorerError::invalid_name(&name.to_string_lossy(), "not valid UTF-8")
            })?;

            let region = if entry.file_type()?.is_dir() {
                Region::from_slug(name)?
            } else {
                Region::from_display(&location_from_filename(name)?)?
            };

            debug!("Catalog entry {} -> {}", name, region);
            regions.insert(region);
        }

        Ok(regions.into_iter().collect())
    }

    /// Display names for the location selector, led by the no-selection sentinel.
    pub fn list_locations(&self) -> Result<Vec<String>> {
        let mut locations = vec![NO_SELECTION.to_string()];
        locations.extend(
            self.regions()?
                .into_iter()
                .map(|region| region.display_name().to_string()),
        );
        Ok(locations)
    }

    /// Path of the building file for `region` under the configured layout.
    pub fn resolve(&self, region: &Region) -> PathBuf {
        match &self.layout {
            CatalogLayout::Flat => self.base_dir.join(region.filename()),
            CatalogLayout::Nested { subpath } => self
                .base_dir
                .join(region.slug())
                .join(subpath)
                .join(region.filename()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs::File;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        File::create(dir.join(name)).unwrap();
    }

    #[test]
    fn test_list_locations_from_files() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "york_buildings.csv");
        touch(dir.path(), "oxford_buildings.csv");

        let catalog = LocationCatalog::new(dir.path());
        assert_eq!(
            catalog.list_locations().unwrap(),
            vec!["None", "Oxford", "York"]
        );
    }

    #[test]
    fn test_list_locations_mixes_dirs_and_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("st_albans")).unwrap();
        fs::create_dir(dir.path().join("bath")).unwrap();
        touch(dir.path(), "bath_buildings.csv");
        touch(dir.path(), "leeds_buildings.csv");

        let catalog = LocationCatalog::new(dir.path());
        assert_eq!(
            catalog.list_locations().unwrap(),
            vec!["None", "Bath", "Leeds", "St Albans"]
        );
    }

    #[test]
    fn test_empty_directory_lists_sentinel_only() {
        let dir = TempDir::new().unwrap();
        let catalog = LocationCatalog::new(dir.path());
        assert_eq!(catalog.list_locations().unwrap(), vec!["None"]);
    }

    #[test]
    fn test_malformed_entry_is_rejected() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "oxford_buildings.csv");
        touch(dir.path(), "notes.txt");

        let catalog = LocationCatalog::new(dir.path());
        assert!(matches!(
            catalog.list_locations(),
            Err(ExplorerError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_missing_directory() {
        let catalog = LocationCatalog::new("/definitely/not/here");
        assert!(matches!(
            catalog.list_locations(),
            Err(ExplorerError::NotFound { .. })
        ));
    }

    #[test]
    fn test_resolve_layouts() {
        let region = Region::from_slug("st_albans").unwrap();

        let flat = LocationCatalog::new("data");
        assert_eq!(
            flat.resolve(&region),
            PathBuf::from("data/st_albans_buildings.csv")
        );

        let nested = LocationCatalog::new("data").with_layout(CatalogLayout::Nested {
            subpath: PathBuf::from("input/osm"),
        });
        assert_eq!(
            nested.resolve(&region),
            PathBuf::from("data/st_albans/input/osm/st_albans_buildings.csv")
        );
    }
}
