use crate::processors::VacancyFilter;
use crate::utils::constants::DEFAULT_SETTINGS_FILE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "region-explorer")]
#[command(about = "Browse per-region building data, summaries and maps")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short,
        long,
        global = true,
        default_value = DEFAULT_SETTINGS_FILE,
        help = "Settings file providing FabSim3.location and FabSim3.input_path"
    )]
    pub settings: PathBuf,

    #[arg(
        short,
        long,
        global = true,
        help = "Data directory (skips the settings file)"
    )]
    pub data_dir: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the available locations
    List,

    /// Print the per-category summary for a location
    Summary {
        #[arg(short, long, help = "Location display name, e.g. 'St Albans'")]
        location: String,

        #[arg(long, help = "Print the summary as JSON")]
        json: bool,
    },

    /// Write an HTML report with summary pies and a map
    Render {
        #[arg(short, long, help = "Location display name, e.g. 'St Albans'")]
        location: String,

        #[arg(
            short,
            long,
            help = "Output HTML file path [default: output/{slug}-report-{YYMMDD}.html]"
        )]
        output_file: Option<PathBuf>,

        #[arg(long, help = "Maximum points drawn on the map (0 = all)")]
        map_sample_cap: Option<usize>,
    },

    /// Filter presampled points from a SQLite database
    Points {
        #[arg(long, help = "SQLite database containing presampled_points")]
        database: PathBuf,

        #[arg(long)]
        min_units: Option<i64>,

        #[arg(long)]
        max_units: Option<i64>,

        #[arg(long = "building-type", help = "Building type to keep (repeatable)")]
        building_types: Vec<String>,

        #[arg(long, help = "Keep zip codes containing this text")]
        zip: Option<String>,

        #[arg(long, default_value = "any", help = "any, vacant or occupied")]
        vacancy: VacancyFilter,

        #[arg(short, long, help = "Write a map report to this HTML file")]
        output_file: Option<PathBuf>,

        #[arg(long, help = "Maximum points drawn on the map (0 = all)")]
        map_sample_cap: Option<usize>,
    },
}
