/// Naming convention for per-region building files
pub const BUILDINGS_SUFFIX: &str = "_buildings";
pub const CSV_EXTENSION: &str = "csv";

/// Sentinel shown first in every location list, meaning "no selection"
pub const NO_SELECTION: &str = "None";

/// Category dropped from summaries unless overridden
pub const DEFAULT_EXCLUDED_CATEGORY: &str = "House";

/// Settings defaults
pub const DEFAULT_SETTINGS_FILE: &str = "settings.yml";
pub const DEFAULT_CHART_SIZE: u32 = 500;
/// Points map sample size; region maps draw every building unless configured
pub const POINTS_MAP_SAMPLE_CAP: usize = 10_000;
pub const DEFAULT_MAP_ZOOM: u32 = 10;

/// Environment variable holding a Mapbox access token
pub const MAP_TOKEN_ENV: &str = "MAPBOX_ACCESS_TOKEN";

/// Point store
pub const POINTS_TABLE: &str = "presampled_points";
pub const POINT_COLUMNS: [&str; 6] = ["units", "vacant", "zip_code", "x", "y", "building_type"];

/// Plotly's default qualitative palette
pub const CATEGORY_COLORS: [&str; 10] = [
    "#1f77b4", // muted blue
    "#ff7f0e", // safety orange
    "#2ca02c", // cooked asparagus green
    "#d62728", // brick red
    "#9467bd", // muted purple
    "#8c564b", // chestnut brown
    "#e377c2", // raspberry yogurt pink
    "#7f7f7f", // middle gray
    "#bcbd22", // curry yellow-green
    "#17becf", // blue-teal
];
