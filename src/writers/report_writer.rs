use crate::error::Result;
use crate::models::{BuildingRecord, PresampledPoint, Selection, SummaryRow};
use crate::utils::constants::DEFAULT_CHART_SIZE;
use crate::writers::colors::CategoryColors;
use crate::writers::figures::{map_figure, pie_figures, Figure, MapStyle};
use chrono::Local;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tracing::info;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

/// Everything one render needs; nothing is read from global state.
#[derive(Debug, Clone)]
pub struct ReportRequest {
    pub selection: Selection,
    pub map_style: MapStyle,
    pub chart_size: u32,
    /// Points drawn on the map before sampling kicks in (0 = all)
    pub map_sample_cap: usize,
    /// Categories left out of the summary; they keep their map color
    pub excluded: BTreeSet<String>,
}

impl ReportRequest {
    pub fn new(selection: Selection) -> Self {
        Self {
            selection,
            map_style: MapStyle::OpenStreetMap,
            chart_size: DEFAULT_CHART_SIZE,
            map_sample_cap: 0,
            excluded: BTreeSet::new(),
        }
    }

    pub fn with_map_style(mut self, style: MapStyle) -> Self {
        self.map_style = style;
        self
    }

    pub fn with_chart_size(mut self, size: u32) -> Self {
        self.chart_size = size;
        self
    }

    pub fn with_map_sample_cap(mut self, cap: usize) -> Self {
        self.map_sample_cap = cap;
        self
    }

    pub fn with_excluded(mut self, excluded: BTreeSet<String>) -> Self {
        self.excluded = excluded;
        self
    }
}

/// Render the region page: summary table, one pie per measure, then the
/// map. Returns `None` when nothing is selected.
pub fn render_region_report(
    request: &ReportRequest,
    summary: &[SummaryRow],
    records: &[BuildingRecord],
) -> Result<Option<String>> {
    let region = match request.selection.region() {
        Some(region) => region,
        None => return Ok(None),
    };

    let colors = CategoryColors::new(
        records.iter().map(|r| r.category.as_str()),
        request.excluded.iter().map(String::as_str),
    );

    let mut page = HtmlPage::new(&format!("Map Application: {}", region));
    page.heading(2, "Summary");
    page.summary_table(summary);

    if summary.is_empty() {
        page.paragraph("No categories left to summarize.");
    } else {
        page.heading(2, "Summary Plots");
        page.open_row();
        for (measure, figure) in pie_figures(summary, &colors, request.chart_size)? {
            page.figure(measure.title(), &figure)?;
        }
        page.close_row();
    }

    page.heading(2, "Map");
    if records.is_empty() {
        page.paragraph("No buildings to map.");
    } else {
        let map = map_figure(records, &colors, &request.map_style, request.map_sample_cap)?;
        page.figure("", &map)?;
    }

    Ok(Some(page.finish()))
}

/// Render a map of filtered presampled points, sampled down to roughly
/// `map_sample_cap` points (0 = all).
pub fn render_points_report(
    points: &[PresampledPoint],
    map_style: &MapStyle,
    map_sample_cap: usize,
) -> Result<String> {
    let colors = CategoryColors::new(
        points.iter().map(|p| p.building_type.as_str()),
        std::iter::empty(),
    );

    let mut page = HtmlPage::new("Presampled Points");
    page.paragraph(&format!("{} points match the current filters.", points.len()));

    if !points.is_empty() {
        let map = map_figure(points, &colors, map_style, map_sample_cap)?;
        page.figure("", &map)?;
    }

    Ok(page.finish())
}

/// Write a rendered page, creating parent directories as needed.
pub fn write_report(html: &str, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html)?;
    info!("Wrote report to {}", path.display());
    Ok(())
}

struct HtmlPage {
    body: String,
    figures: usize,
}

impl HtmlPage {
    fn new(title: &str) -> Self {
        let body = format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{0}</title>\n\
             <script src=\"{1}\"></script>\n\
             <style>body{{font-family:sans-serif;margin:2em}}.row{{display:flex;flex-wrap:wrap;gap:1em}}\
             table{{border-collapse:collapse}}td,th{{border:1px solid #ccc;padding:4px 8px;text-align:right}}</style>\n\
             </head>\n<body>\n<h1>{0}</h1>\n",
            escape(title),
            PLOTLY_CDN
        );
        Self { body, figures: 0 }
    }

    fn heading(&mut self, level: u8, text: &str) {
        self.body
            .push_str(&format!("<hr>\n<h{0}>{1}</h{0}>\n", level, escape(text)));
    }

    fn paragraph(&mut self, text: &str) {
        self.body.push_str(&format!("<p>{}</p>\n", escape(text)));
    }

    fn open_row(&mut self) {
        self.body.push_str("<div class=\"row\">\n");
    }

    fn close_row(&mut self) {
        self.body.push_str("</div>\n");
    }

    fn summary_table(&mut self, summary: &[SummaryRow]) {
        self.body
            .push_str("<table>\n<tr><th>Type</th><th>Area</th><th>Count</th><th>Mean Area</th></tr>\n");
        for row in summary {
            self.body.push_str(&format!(
                "<tr><td>{}</td><td>{:.2}</td><td>{}</td><td>{:.2}</td></tr>\n",
                escape(&row.category),
                row.total_area,
                row.count,
                row.mean_area
            ));
        }
        self.body.push_str("</table>\n");
    }

    fn figure(&mut self, title: &str, figure: &Figure) -> Result<()> {
        self.figures += 1;
        let id = format!("figure-{}", self.figures);
        // "</" would end the script element early
        let data = serde_json::to_string(&figure.data)?.replace("</", "<\\/");
        let layout = serde_json::to_string(&figure.layout)?.replace("</", "<\\/");

        self.body.push_str("<div>\n");
        if !title.is_empty() {
            self.body.push_str(&format!("<h3>{}</h3>\n", escape(title)));
        }
        self.body.push_str(&format!(
            "<div id=\"{0}\"></div>\n<script>Plotly.newPlot(\"{0}\", {1}, {2});</script>\n</div>\n",
            id, data, layout
        ));
        Ok(())
    }

    fn finish(mut self) -> String {
        self.body.push_str(&format!(
            "<footer><small>Generated {}</small></footer>\n</body>\n</html>\n",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        ));
        self.body
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
