use serde::{Deserialize, Serialize};

/// One row of the `presampled_points` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresampledPoint {
    pub units: i64,
    pub vacant: bool,
    pub zip_code: String,
    /// Longitude
    pub x: f64,
    /// Latitude
    pub y: f64,
    pub building_type: String,
}

impl PresampledPoint {
    pub fn new(
        units: i64,
        vacant: bool,
        zip_code: impl Into<String>,
        x: f64,
        y: f64,
        building_type: impl Into<String>,
    ) -> Self {
        Self {
            units,
            vacant,
            zip_code: zip_code.into(),
            x,
            y,
            building_type: building_type.into(),
        }
    }
}
