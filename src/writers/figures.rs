//! Plotly figure documents (`{"data": [...], "layout": {...}}`) for the
//! summary pies and the map scatter plot.

use crate::error::{ExplorerError, Result};
use crate::models::{BuildingRecord, PresampledPoint, SummaryMeasure, SummaryRow};
use crate::utils::constants::{DEFAULT_MAP_ZOOM, MAP_TOKEN_ENV};
use crate::writers::colors::CategoryColors;
use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

/// Anything that can be drawn as a colored point on the map.
pub trait MapPoint {
    fn category(&self) -> &str;
    fn longitude(&self) -> f64;
    fn latitude(&self) -> f64;
}

impl MapPoint for BuildingRecord {
    fn category(&self) -> &str {
        &self.category
    }

    fn longitude(&self) -> f64 {
        self.longitude
    }

    fn latitude(&self) -> f64 {
        self.latitude
    }
}

impl MapPoint for PresampledPoint {
    fn category(&self) -> &str {
        &self.building_type
    }

    fn longitude(&self) -> f64 {
        self.x
    }

    fn latitude(&self) -> f64 {
        self.y
    }
}

/// Tile style for the map figure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MapStyle {
    #[default]
    OpenStreetMap,
    Mapbox { token: String },
}

impl MapStyle {
    /// Mapbox tiles when an access token is set, open tiles otherwise.
    pub fn from_env() -> Self {
        match std::env::var(MAP_TOKEN_ENV) {
            Ok(token) if !token.trim().is_empty() => MapStyle::Mapbox { token },
            _ => MapStyle::OpenStreetMap,
        }
    }

    fn mapbox_layout(&self, center: (f64, f64)) -> Value {
        let mut mapbox = json!({
            "zoom": DEFAULT_MAP_ZOOM,
            "center": { "lat": center.0, "lon": center.1 },
        });
        match self {
            MapStyle::OpenStreetMap => {
                mapbox["style"] = json!("open-street-map");
            }
            MapStyle::Mapbox { token } => {
                mapbox["style"] = json!("streets");
                mapbox["accesstoken"] = json!(token);
            }
        }
        mapbox
    }
}

/// One pie chart per summary measure, keyed by the measure.
pub fn pie_figures(
    summary: &[SummaryRow],
    colors: &CategoryColors,
    size: u32,
) -> Result<Vec<(SummaryMeasure, Figure)>> {
    if summary.is_empty() {
        return Err(ExplorerError::EmptyInput);
    }

    let labels: Vec<&str> = summary.iter().map(|row| row.category.as_str()).collect();
    let marker_colors: Vec<&str> = labels.iter().map(|c| colors.get(c)).collect();

    Ok(SummaryMeasure::ALL
        .iter()
        .map(|measure| {
            let values: Vec<f64> = summary.iter().map(|row| measure.value(row)).collect();
            let figure = Figure {
                data: vec![json!({
                    "type": "pie",
                    "labels": labels,
                    "values": values,
                    "marker": { "colors": marker_colors },
                    "textinfo": "label",
                    "textposition": "inside",
                })],
                layout: json!({
                    "width": size,
                    "height": size,
                    "showlegend": false,
                    "autosize": true,
                }),
            };
            (*measure, figure)
        })
        .collect())
}

/// Scatter-map figure with one trace per category. When there are more
/// than `cap` points (0 = no cap) a sample is drawn instead, see
/// [`sample_points`].
pub fn map_figure<P: MapPoint>(
    points: &[P],
    colors: &CategoryColors,
    style: &MapStyle,
    cap: usize,
) -> Result<Figure> {
    if points.is_empty() {
        return Err(ExplorerError::EmptyInput);
    }

    let shown = sample_points(points, cap);
    if shown.len() < points.len() {
        warn!("Map sampled {} of {} points", shown.len(), points.len());
    }

    let mut traces: BTreeMap<&str, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    let (mut lat_sum, mut lon_sum) = (0.0, 0.0);
    for point in shown.iter().copied() {
        let (lats, lons) = traces.entry(point.category()).or_default();
        lats.push(point.latitude());
        lons.push(point.longitude());
        lat_sum += point.latitude();
        lon_sum += point.longitude();
    }
    let center = (lat_sum / shown.len() as f64, lon_sum / shown.len() as f64);

    let data = traces
        .into_iter()
        .map(|(category, (lat, lon))| {
            json!({
                "type": "scattermapbox",
                "mode": "markers",
                "name": category,
                "lat": lat,
                "lon": lon,
                "marker": { "color": colors.get(category) },
            })
        })
        .collect();

    Ok(Figure {
        data,
        layout: json!({
            "mapbox": style.mapbox_layout(center),
            "margin": { "r": 0, "t": 0, "l": 0, "b": 0 },
            "legend": { "title": { "text": "Type" } },
        }),
    })
}

/// Sample roughly `cap` points (0 = keep all), evenly strided within each
/// category. Each category's share is proportional to its size but never
/// below one point, so every category present keeps a trace; with many
/// small categories the result can exceed `cap` by at most the number of
/// categories.
pub fn sample_points<P: MapPoint>(points: &[P], cap: usize) -> Vec<&P> {
    if cap == 0 || points.len() <= cap {
        return points.iter().collect();
    }

    let mut groups: BTreeMap<&str, Vec<&P>> = BTreeMap::new();
    for point in points {
        groups.entry(point.category()).or_default().push(point);
    }

    let total = points.len();
    let mut sampled = Vec::with_capacity(cap);
    for group in groups.values() {
        let quota = (group.len() * cap / total).max(1);
        sampled.extend((0..quota).map(|i| group[i * group.len() / quota]));
    }
    sampled
}
