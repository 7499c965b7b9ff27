use crate::catalog::LocationCatalog;
use crate::error::Result;
use crate::models::{BuildingRecord, Region, Selection, SummaryRow};
use crate::processors::Summarizer;
use crate::readers::BuildingReader;
use crate::settings::Settings;
use crate::writers::{render_region_report, MapStyle, ReportRequest};
use tracing::info;

/// Catalog, reader and summarizer wired together for one data directory.
pub struct RegionExplorer {
    catalog: LocationCatalog,
    reader: BuildingReader,
    summarizer: Summarizer,
}

impl RegionExplorer {
    pub fn new(catalog: LocationCatalog) -> Self {
        Self {
            catalog,
            reader: BuildingReader::new(),
            summarizer: Summarizer::new(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let catalog = LocationCatalog::new(settings.input_dir()).with_layout(settings.layout());
        Self::new(catalog).with_summarizer(Summarizer::with_excluded(
            settings.dashboard.excluded_categories.iter().cloned(),
        ))
    }

    pub fn with_reader(mut self, reader: BuildingReader) -> Self {
        self.reader = reader;
        self
    }

    pub fn with_summarizer(mut self, summarizer: Summarizer) -> Self {
        self.summarizer = summarizer;
        self
    }

    pub fn catalog(&self) -> &LocationCatalog {
        &self.catalog
    }

    pub fn summarizer(&self) -> &Summarizer {
        &self.summarizer
    }

    pub fn list_locations(&self) -> Result<Vec<String>> {
        self.catalog.list_locations()
    }

    pub fn load(&self, region: &Region) -> Result<Vec<BuildingRecord>> {
        let path = self.catalog.resolve(region);
        info!("Loading {} from {}", region, path.display());
        self.reader.read_buildings(&path)
    }

    pub fn summarize(&self, records: &[BuildingRecord]) -> Result<Vec<SummaryRow>> {
        self.summarizer.summarize(records)
    }

    /// Records and summary for a location-list entry; `None` for the sentinel.
    pub fn select(&self, location: &str) -> Result<Option<(Vec<BuildingRecord>, Vec<SummaryRow>)>> {
        match Selection::parse(location)? {
            Selection::None => Ok(None),
            Selection::Region(region) => {
                let records = self.load(&region)?;
                let summary = self.summarize(&records)?;
                Ok(Some((records, summary)))
            }
        }
    }

    /// A report request for `selection` carrying this explorer's exclusions.
    pub fn request(&self, selection: Selection, map_style: MapStyle) -> ReportRequest {
        ReportRequest::new(selection)
            .with_map_style(map_style)
            .with_excluded(self.summarizer.excluded().clone())
    }

    /// Load, summarize and render the page for `request`'s selection.
    pub fn render(&self, request: &ReportRequest) -> Result<Option<String>> {
        let region = match request.selection.region() {
            Some(region) => region,
            None => return Ok(None),
        };

        let records = self.load(region)?;
        let summary = self.summarize(&records)?;
        render_region_report(request, &summary, &records)
    }
}
