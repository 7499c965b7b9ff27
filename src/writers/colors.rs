use crate::utils::constants::CATEGORY_COLORS;
use std::collections::BTreeMap;

/// Category → hex color. Categories are sorted before pairing with the
/// palette so the same set of categories always gets the same colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryColors {
    mapping: BTreeMap<String, &'static str>,
}

impl CategoryColors {
    /// Build from the categories present in the data plus `always`, which
    /// holds categories that must keep a slot even when absent (excluded
    /// summary categories that still show up on the map).
    pub fn new<'a, I, J>(present: I, always: J) -> Self
    where
        I: IntoIterator<Item = &'a str>,
        J: IntoIterator<Item = &'a str>,
    {
        let mut mapping: BTreeMap<String, &'static str> = present
            .into_iter()
            .chain(always)
            .map(|c| (c.to_string(), ""))
            .collect();

        for (value, color) in mapping
            .values_mut()
            .zip(CATEGORY_COLORS.iter().copied().cycle())
        {
            *value = color;
        }

        Self { mapping }
    }

    pub fn get(&self, category: &str) -> &'static str {
        self.mapping.get(category).copied().unwrap_or(CATEGORY_COLORS[7])
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}
