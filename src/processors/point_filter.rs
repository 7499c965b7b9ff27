use crate::error::{ExplorerError, Result};
use crate::models::PresampledPoint;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Tri-state vacancy filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VacancyFilter {
    #[default]
    Any,
    Vacant,
    Occupied,
}

impl VacancyFilter {
    fn accepts(&self, vacant: bool) -> bool {
        match self {
            VacancyFilter::Any => true,
            VacancyFilter::Vacant => vacant,
            VacancyFilter::Occupied => !vacant,
        }
    }
}

impl FromStr for VacancyFilter {
    type Err = ExplorerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "any" => Ok(VacancyFilter::Any),
            "vacant" => Ok(VacancyFilter::Vacant),
            "occupied" => Ok(VacancyFilter::Occupied),
            other => Err(ExplorerError::InvalidFormat(format!(
                "unknown vacancy filter '{}', expected any, vacant or occupied",
                other
            ))),
        }
    }
}

/// Filters applied to presampled points. Unset fields do not constrain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointFilter {
    pub min_units: Option<i64>,
    pub max_units: Option<i64>,
    /// Empty means every building type passes
    pub building_types: BTreeSet<String>,
    pub zip_contains: Option<String>,
    pub vacancy: VacancyFilter,
}

impl PointFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_units(mut self, min: Option<i64>, max: Option<i64>) -> Self {
        self.min_units = min;
        self.max_units = max;
        self
    }

    pub fn with_building_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.building_types = types.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_zip(mut self, fragment: impl Into<String>) -> Self {
        self.zip_contains = Some(fragment.into());
        self
    }

    pub fn with_vacancy(mut self, vacancy: VacancyFilter) -> Self {
        self.vacancy = vacancy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if let (Some(min), Some(max)) = (self.min_units, self.max_units) {
            if min > max {
                return Err(ExplorerError::InvalidFormat(format!(
                    "unit range is empty: min {} > max {}",
                    min, max
                )));
            }
        }
        Ok(())
    }

    pub fn matches(&self, point: &PresampledPoint) -> bool {
        self.min_units.map_or(true, |min| point.units >= min)
            && self.max_units.map_or(true, |max| point.units <= max)
            && (self.building_types.is_empty() || self.building_types.contains(&point.building_type))
            && self
                .zip_contains
                .as_deref()
                .map_or(true, |fragment| point.zip_code.contains(fragment))
            && self.vacancy.accepts(point.vacant)
    }

    /// Points passing every active filter, in their original order.
    pub fn apply(&self, points: &[PresampledPoint]) -> Result<Vec<PresampledPoint>> {
        self.validate()?;
        Ok(points.iter().filter(|p| self.matches(p)).cloned().collect())
    }
}
