use crate::error::{ExplorerError, Result};
use crate::models::BuildingRecord;
use crate::utils::filename::title_case;
use csv::{ReaderBuilder, StringRecord};
use std::path::Path;
use tracing::{debug, info};
use validator::Validate;

/// How CSV columns map onto the four record fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ColumnMapping {
    /// First four columns are category, longitude, latitude, area
    #[default]
    Positional,
    /// Columns looked up by header name
    Named {
        category: String,
        longitude: String,
        latitude: String,
        area: String,
    },
}

/// Header indices resolved from a [`ColumnMapping`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnIndices {
    category: usize,
    longitude: usize,
    latitude: usize,
    area: usize,
}

impl ColumnMapping {
    fn resolve(&self, headers: &StringRecord) -> Result<ColumnIndices> {
        match self {
            ColumnMapping::Positional => {
                const FIELDS: [&str; 4] = ["category", "longitude", "latitude", "area"];
                if headers.len() < FIELDS.len() {
                    return Err(ExplorerError::MissingColumn(format!(
                        "{} (expected 4 columns, found {})",
                        FIELDS[headers.len()],
                        headers.len()
                    )));
                }
                Ok(ColumnIndices {
                    category: 0,
                    longitude: 1,
                    latitude: 2,
                    area: 3,
                })
            }
            ColumnMapping::Named {
                category,
                longitude,
                latitude,
                area,
            } => {
                let find = |name: &str| {
                    headers
                        .iter()
                        .position(|h| h.trim() == name)
                        .ok_or_else(|| ExplorerError::MissingColumn(name.to_string()))
                };
                Ok(ColumnIndices {
                    category: find(category)?,
                    longitude: find(longitude)?,
                    latitude: find(latitude)?,
                    area: find(area)?,
                })
            }
        }
    }
}

pub struct BuildingReader {
    mapping: ColumnMapping,
}

impl BuildingReader {
    pub fn new() -> Self {
        Self {
            mapping: ColumnMapping::Positional,
        }
    }

    pub fn with_mapping(mapping: ColumnMapping) -> Self {
        Self { mapping }
    }

    /// Read building records from a headered CSV file, sorted by category.
    pub fn read_buildings(&self, path: &Path) -> Result<Vec<BuildingRecord>> {
        if !path.is_file() {
            return Err(ExplorerError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
        let columns = self.mapping.resolve(reader.headers()?)?;
        debug!("Resolved columns {:?} for {}", columns, path.display());

        let mut records = Vec::new();
        for result in reader.records() {
            let row = result?;
            records.push(self.parse_row(&row, columns)?);
        }

        records.sort_by(|a, b| a.category.cmp(&b.category));

        info!("Loaded {} records from {}", records.len(), path.display());
        Ok(records)
    }

    fn parse_row(&self, row: &StringRecord, columns: ColumnIndices) -> Result<BuildingRecord> {
        let line = row.position().map_or(0, |p| p.line());

        let field = |index: usize| {
            row.get(index).map(str::trim).ok_or_else(|| {
                ExplorerError::InvalidFormat(format!("line {}: missing field {}", line, index))
            })
        };
        let number = |index: usize| -> Result<f64> {
            let raw = field(index)?;
            raw.parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| {
                    ExplorerError::InvalidFormat(format!("line {}: invalid number '{}'", line, raw))
                })
        };

        let record = BuildingRecord {
            category: title_case(field(columns.category)?),
            longitude: number(columns.longitude)?,
            latitude: number(columns.latitude)?,
            area: number(columns.area)?,
        };
        record.validate()?;

        Ok(record)
    }
}

impl Default for BuildingReader {
    fn default() -> Self {
        Self::new()
    }
}
