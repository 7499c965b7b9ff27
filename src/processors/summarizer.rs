use crate::error::{ExplorerError, Result};
use crate::models::{BuildingRecord, SummaryRow};
use crate::utils::constants::DEFAULT_EXCLUDED_CATEGORY;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Groups building records by category and aggregates their area.
#[derive(Debug, Clone)]
pub struct Summarizer {
    excluded: BTreeSet<String>,
}

impl Summarizer {
    pub fn new() -> Self {
        Self {
            excluded: BTreeSet::from([DEFAULT_EXCLUDED_CATEGORY.to_string()]),
        }
    }

    /// Replace the set of categories dropped from every summary.
    pub fn with_excluded<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            excluded: categories.into_iter().map(Into::into).collect(),
        }
    }

    pub fn excluded(&self) -> &BTreeSet<String> {
        &self.excluded
    }

    /// Sum, count and mean of area per category, in category order.
    pub fn summarize(&self, records: &[BuildingRecord]) -> Result<Vec<SummaryRow>> {
        if records.is_empty() {
            return Err(ExplorerError::EmptyInput);
        }

        let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
        for record in records {
            let entry = groups.entry(record.category.as_str()).or_insert((0.0, 0));
            entry.0 += record.area;
            entry.1 += 1;
        }

        let summary: Vec<SummaryRow> = groups
            .into_iter()
            .filter(|(category, _)| !self.excluded.contains(*category))
            .map(|(category, (total_area, count))| SummaryRow {
                category: category.to_string(),
                total_area,
                count,
                mean_area: total_area / count as f64,
            })
            .collect();

        debug!(
            "Summarized {} records into {} categories",
            records.len(),
            summary.len()
        );
        Ok(summary)
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}
