use crate::error::Result;
use crate::utils::constants::NO_SELECTION;
use crate::utils::filename::{display_to_slug, location_to_filename, slug_to_display};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A geographic dataset, known by its display name and filesystem slug.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Region {
    display: String,
    slug: String,
}

impl Region {
    pub fn from_slug(slug: &str) -> Result<Self> {
        let display = slug_to_display(slug)?;
        Ok(Self {
            display,
            slug: slug.to_string(),
        })
    }

    /// Resolve a display name back to its region. The name must be the exact
    /// display form of a valid slug.
    pub fn from_display(display: &str) -> Result<Self> {
        let slug = display_to_slug(display);
        let region = Self::from_slug(&slug)?;

        if region.display != display {
            return Err(crate::error::ExplorerError::invalid_name(
                display,
                &format!("not a display name, did you mean '{}'?", region.display),
            ));
        }

        Ok(region)
    }

    pub fn display_name(&self) -> &str {
        &self.display
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn filename(&self) -> String {
        location_to_filename(&self.display)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

/// What the user picked from the location list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    None,
    Region(Region),
}

impl Selection {
    /// Parse a location-list entry; the sentinel maps to [`Selection::None`].
    pub fn parse(location: &str) -> Result<Self> {
        if location.is_empty() || location == NO_SELECTION {
            return Ok(Selection::None);
        }
        Region::from_display(location).map(Selection::Region)
    }

    pub fn region(&self) -> Option<&Region> {
        match self {
            Selection::None => None,
            Selection::Region(region) => Some(region),
        }
    }
}
