pub mod constants;
pub mod filename;

pub use constants::*;
pub use filename::{
    display_to_slug, generate_default_report_filename, location_from_filename,
    location_to_filename, slug_to_display, title_case, validate_slug,
};
