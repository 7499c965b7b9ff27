use serde::{Deserialize, Serialize};

/// Per-category aggregate of building area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    #[serde(rename = "Type")]
    pub category: String,

    #[serde(rename = "Area")]
    pub total_area: f64,

    #[serde(rename = "Count")]
    pub count: usize,

    #[serde(rename = "Mean Area")]
    pub mean_area: f64,
}

/// Numeric columns of a summary, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryMeasure {
    Area,
    Count,
    MeanArea,
}

impl SummaryMeasure {
    pub const ALL: [SummaryMeasure; 3] = [
        SummaryMeasure::Area,
        SummaryMeasure::Count,
        SummaryMeasure::MeanArea,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SummaryMeasure::Area => "Area",
            SummaryMeasure::Count => "Count",
            SummaryMeasure::MeanArea => "Mean Area",
        }
    }

    pub fn value(&self, row: &SummaryRow) -> f64 {
        match self {
            SummaryMeasure::Area => row.total_area,
            SummaryMeasure::Count => row.count as f64,
            SummaryMeasure::MeanArea => row.mean_area,
        }
    }
}
