use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BuildingRecord {
    #[validate(length(min = 1))]
    pub category: String,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = 0.0))]
    pub area: f64,
}

impl BuildingRecord {
    pub fn new(category: impl Into<String>, longitude: f64, latitude: f64, area: f64) -> Self {
        Self {
            category: category.into(),
            longitude,
            latitude,
            area,
        }
    }
}
