use crate::catalog::LocationCatalog;
use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::explorer::RegionExplorer;
use crate::models::{Selection, SummaryRow};
use crate::processors::PointFilter;
use crate::readers::PointStore;
use crate::settings::{DashboardSettings, Settings};
use crate::utils::filename::generate_default_report_filename;
use crate::utils::constants::POINTS_MAP_SAMPLE_CAP;
use crate::writers::{render_points_report, write_report, MapStyle};
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, Level};

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::List => {
            let (explorer, _) = open_explorer(&cli.settings, cli.data_dir.as_deref())?;
            for location in explorer.list_locations()? {
                println!("{}", location);
            }
        }

        Commands::Summary { location, json } => {
            let (explorer, _) = open_explorer(&cli.settings, cli.data_dir.as_deref())?;

            let Some((records, summary)) = explorer.select(&location)? else {
                println!("No location selected");
                return Ok(());
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{} ({} buildings)", location, records.len());
                print_summary(&summary);
            }
        }

        Commands::Render {
            location,
            output_file,
            map_sample_cap,
        } => {
            let (explorer, dashboard) = open_explorer(&cli.settings, cli.data_dir.as_deref())?;

            let selection = Selection::parse(&location)?;
            let Some(region) = selection.region().cloned() else {
                println!("No location selected - nothing to render");
                return Ok(());
            };

            let request = explorer
                .request(selection, MapStyle::from_env())
                .with_chart_size(dashboard.chart_size)
                .with_map_sample_cap(map_sample_cap.unwrap_or(dashboard.map_sample_cap));

            if let Some(html) = explorer.render(&request)? {
                let output_file =
                    output_file.unwrap_or_else(|| generate_default_report_filename(region.slug()));
                write_report(&html, &output_file)?;
                println!("Report written to {}", output_file.display());
            }
        }

        Commands::Points {
            database,
            min_units,
            max_units,
            building_types,
            zip,
            vacancy,
            output_file,
            map_sample_cap,
        } => {
            let mut filter = PointFilter::new()
                .with_units(min_units, max_units)
                .with_building_types(building_types)
                .with_vacancy(vacancy);
            if let Some(zip) = zip {
                filter = filter.with_zip(zip);
            }
            debug!("Point filter: {:?}", filter);

            let store = PointStore::open(&database)?;
            let points = filter.apply(&store.load_all()?)?;

            let mut by_type: BTreeMap<&str, usize> = BTreeMap::new();
            for point in &points {
                *by_type.entry(point.building_type.as_str()).or_default() += 1;
            }

            println!("{} points match", points.len());
            for (building_type, count) in &by_type {
                println!("  {:<24} {:>8}", building_type, count);
            }

            if let Some(output_file) = output_file {
                let html = render_points_report(
                    &points,
                    &MapStyle::from_env(),
                    map_sample_cap.unwrap_or(POINTS_MAP_SAMPLE_CAP),
                )?;
                write_report(&html, &output_file)?;
                println!("Map written to {}", output_file.display());
            }
        }
    }

    Ok(())
}

/// Build the explorer from `--data-dir` when given, otherwise from the settings file.
fn open_explorer(
    settings_path: &Path,
    data_dir: Option<&Path>,
) -> Result<(RegionExplorer, DashboardSettings)> {
    match data_dir {
        Some(dir) => Ok((
            RegionExplorer::new(LocationCatalog::new(dir)),
            DashboardSettings::default(),
        )),
        None => {
            let settings = Settings::load(settings_path)?;
            debug!("Input directory: {}", settings.input_dir().display());
            Ok((RegionExplorer::from_settings(&settings), settings.dashboard))
        }
    }
}

fn print_summary(summary: &[SummaryRow]) {
    println!(
        "{:<24} {:>14} {:>8} {:>14}",
        "Type", "Area", "Count", "Mean Area"
    );
    for row in summary {
        println!(
            "{:<24} {:>14.2} {:>8} {:>14.2}",
            row.category, row.total_area, row.count, row.mean_area
        );
    }
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = match log_file {
        Some(path) => builder
            .with_ansi(false)
            .with_writer(Mutex::new(File::create(path)?))
            .try_init(),
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    Ok(())
}
