use crate::error::{ExplorerError, Result};
use crate::utils::constants::{BUILDINGS_SUFFIX, CSV_EXTENSION, NO_SELECTION};
use chrono::{Datelike, Local};
use std::path::PathBuf;

/// Title-case text: a letter is upper-cased when the character before it is
/// not a letter, lower-cased otherwise.
///
/// # Examples
/// ```
/// use region_explorer::utils::title_case;
///
/// assert_eq!(title_case("st albans"), "St Albans");
/// assert_eq!(title_case("RETAIL"), "Retail");
/// ```
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }

    out
}

/// Check that `slug` can round-trip through a display name.
pub fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() {
        return Err(ExplorerError::invalid_name(slug, "slug is empty"));
    }

    if let Some(c) = slug
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_' || *c == '-'))
    {
        return Err(ExplorerError::invalid_name(
            slug,
            &format!("unexpected character '{}'", c),
        ));
    }

    if title_case(&slug.replace('_', " ")) == NO_SELECTION {
        return Err(ExplorerError::invalid_name(
            slug,
            "collides with the no-selection sentinel",
        ));
    }

    Ok(())
}

/// Slug to display name: `st_albans` -> `St Albans`.
pub fn slug_to_display(slug: &str) -> Result<String> {
    validate_slug(slug)?;
    Ok(title_case(&slug.replace('_', " ")))
}

/// Display name to slug: `St Albans` -> `st_albans`.
pub fn display_to_slug(display: &str) -> String {
    display.to_lowercase().replace(' ', "_")
}

/// Extract the display name from a `<slug>_buildings.csv` filename.
pub fn location_from_filename(filename: &str) -> Result<String> {
    let stem = filename
        .strip_suffix(&format!(".{}", CSV_EXTENSION))
        .ok_or_else(|| ExplorerError::invalid_name(filename, "filename must be a CSV file"))?;

    let slug = stem.strip_suffix(BUILDINGS_SUFFIX).ok_or_else(|| {
        ExplorerError::invalid_name(filename, "filename must end with '_buildings'")
    })?;

    slug_to_display(slug)
}

/// Build the `<slug>_buildings.csv` filename for a display name.
pub fn location_to_filename(display: &str) -> String {
    format!(
        "{}{}.{}",
        display_to_slug(display),
        BUILDINGS_SUFFIX,
        CSV_EXTENSION
    )
}

/// Generate default report filename with format: output/{slug}-report-{YYMMDD}.html
pub fn generate_default_report_filename(slug: &str) -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    let filename = format!("{}-report-{:02}{:02}{:02}.html", slug, year, month, day);
    PathBuf::from("output").join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("oxford"), "Oxford");
        assert_eq!(title_case("stoke-on-trent"), "Stoke-On-Trent");
        assert_eq!(title_case("area51b"), "Area51B");
        assert_eq!(title_case("HOUSE"), "House");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_location_from_filename() {
        assert_eq!(location_from_filename("oxford_buildings.csv").unwrap(), "Oxford");
        assert_eq!(
            location_from_filename("milton_keynes_buildings.csv").unwrap(),
            "Milton Keynes"
        );
    }

    #[test]
    fn test_malformed_filenames() {
        for name in [
            "oxford_buildings.txt",
            "oxford.csv",
            "oxford_buildings",
            "_buildings.csv",
            "Oxford_buildings.csv",
            "none_buildings.csv",
        ] {
            assert!(
                matches!(
                    location_from_filename(name),
                    Err(ExplorerError::InvalidName { .. })
                ),
                "{} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_naming_round_trip() {
        for slug in ["oxford", "st_albans", "stoke-on-trent", "area51b", "a__b", "_x"] {
            let filename = format!("{}_buildings.csv", slug);
            let display = location_from_filename(&filename).unwrap();
            assert_eq!(location_to_filename(&display), filename);
            assert_eq!(display_to_slug(&slug_to_display(slug).unwrap()), slug);
        }
    }

    #[test]
    fn test_generate_default_report_filename() {
        let filename = generate_default_report_filename("oxford");
        let filename_str = filename.to_string_lossy();

        assert!(filename_str.starts_with("output/oxford-report-"));
        assert!(filename_str.ends_with(".html"));
    }
}
