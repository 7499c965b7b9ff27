pub mod colors;
pub mod figures;
pub mod report_writer;

pub use colors::CategoryColors;
pub use figures::{map_figure, pie_figures, sample_points, Figure, MapPoint, MapStyle};
pub use report_writer::{render_points_report, render_region_report, write_report, ReportRequest};
