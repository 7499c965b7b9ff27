use pretty_assertions::assert_eq;
use region_explorer::catalog::{CatalogLayout, LocationCatalog};
use region_explorer::models::{Region, Selection, SummaryRow};
use region_explorer::processors::Summarizer;
use region_explorer::settings::Settings;
use region_explorer::writers::{MapStyle, ReportRequest};
use region_explorer::{ExplorerError, RegionExplorer};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const OXFORD: &str = "building,longitude,latitude,area\n\
                      house,-1.2577,51.7520,10.0\n\
                      shop,-1.2580,51.7530,20.0\n\
                      SHOP,-1.2590,51.7540,30.0\n\
                      church,-1.2600,51.7550,120.0\n";

fn write_data_dir(dir: &Path) {
    fs::write(dir.join("oxford_buildings.csv"), OXFORD).unwrap();
    fs::write(
        dir.join("york_buildings.csv"),
        "building,longitude,latitude,area\nhouse,-1.08,53.96,12.0\n",
    )
    .unwrap();
}

#[test]
fn test_list_load_and_summarize() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    write_data_dir(dir.path());

    let explorer = RegionExplorer::new(LocationCatalog::new(dir.path()));

    assert_eq!(explorer.list_locations().unwrap(), vec!["None", "Oxford", "York"]);

    let (records, summary) = explorer.select("Oxford").unwrap().unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(
        summary,
        vec![
            SummaryRow {
                category: "Church".to_string(),
                total_area: 120.0,
                count: 1,
                mean_area: 120.0,
            },
            SummaryRow {
                category: "Shop".to_string(),
                total_area: 50.0,
                count: 2,
                mean_area: 25.0,
            },
        ]
    );

    let non_house = records.iter().filter(|r| r.category != "House").count();
    assert_eq!(summary.iter().map(|r| r.count).sum::<usize>(), non_house);
}

#[test]
fn test_only_houses_summarizes_to_nothing() {
    let dir = TempDir::new().unwrap();
    write_data_dir(dir.path());

    let explorer = RegionExplorer::new(LocationCatalog::new(dir.path()));
    let (_, summary) = explorer.select("York").unwrap().unwrap();
    assert!(summary.is_empty());
}

#[test]
fn test_sentinel_selects_nothing() {
    let dir = TempDir::new().unwrap();
    write_data_dir(dir.path());

    let explorer = RegionExplorer::new(LocationCatalog::new(dir.path()));
    assert!(explorer.select("None").unwrap().is_none());

    let request = explorer.request(Selection::None, MapStyle::OpenStreetMap);
    assert!(explorer.render(&request).unwrap().is_none());
}

#[test]
fn test_missing_region_file() {
    let dir = TempDir::new().unwrap();
    write_data_dir(dir.path());

    let explorer = RegionExplorer::new(LocationCatalog::new(dir.path()));
    let region = Region::from_slug("leeds").unwrap();
    assert!(matches!(
        explorer.load(&region),
        Err(ExplorerError::NotFound { .. })
    ));
}

#[test]
fn test_nested_layout_from_settings() {
    let root = TempDir::new().unwrap();
    let input = root.path().join("input");
    let nested = input.join("st_albans").join("osm");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("st_albans_buildings.csv"), OXFORD).unwrap();

    let settings_path = root.path().join("settings.yml");
    fs::write(
        &settings_path,
        format!(
            "FabSim3:\n  location: {}\n  input_path: input\n\
             dashboard:\n  layout: nested\n  subpath: osm\n  excluded_categories: [Church]\n",
            root.path().display()
        ),
    )
    .unwrap();

    let settings = Settings::load(&settings_path).unwrap();
    assert_eq!(
        settings.layout(),
        CatalogLayout::Nested {
            subpath: "osm".into()
        }
    );

    let explorer = RegionExplorer::from_settings(&settings);
    assert_eq!(explorer.list_locations().unwrap(), vec!["None", "St Albans"]);

    let (_, summary) = explorer.select("St Albans").unwrap().unwrap();
    let categories: Vec<&str> = summary.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(categories, vec!["House", "Shop"]);
}

#[test]
fn test_render_report() {
    let dir = TempDir::new().unwrap();
    write_data_dir(dir.path());

    let explorer = RegionExplorer::new(LocationCatalog::new(dir.path()))
        .with_summarizer(Summarizer::new());
    let selection = Selection::parse("Oxford").unwrap();
    let request: ReportRequest = explorer
        .request(selection, MapStyle::OpenStreetMap)
        .with_map_sample_cap(2);

    let html = explorer.render(&request).unwrap().unwrap();

    assert!(html.contains("Map Application: Oxford"));
    assert!(html.contains("open-street-map"));
    assert_eq!(html.matches("Plotly.newPlot").count(), 4);
    // Sampling below the category count still draws every category
    for category in ["House", "Shop", "Church"] {
        assert!(
            html.contains(&format!(r#""name":"{}""#, category)),
            "no map trace for {}",
            category
        );
    }
}
