//! Structured place hierarchy
//!
//! This module contains the hierarchical decomposition of a free-text place
//! string and the granularity levels used when comparing or formatting places.

use serde::{Deserialize, Serialize};

/// Granularity level for place comparison and formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceLevel {
    /// Country only
    Country,
    /// Region (derived from state for US places)
    Region,
    /// State
    State,
    /// County
    County,
    /// City
    City,
    /// Every available level
    Full,
}

/// Hierarchical decomposition of a free-text place string
///
/// Fields are filled right to left from the comma-separated input, most general
/// token first. When a third un-typed token appears after a city is already set,
/// the previous city value is demoted into `site` and the newer, more specific
/// token becomes `city`; the resulting field assignment is kept for compatibility
/// with stored data even though the naming reads inverted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceHierarchy {
    /// Country, canonicalized through the variant table when recognized,
    /// otherwise the raw segment
    pub country: Option<String>,
    /// State, canonicalized to the full US state name when recognized
    pub state: Option<String>,
    /// Region derived from the state via the static region table
    pub region: Option<String>,
    /// County segment (contains "county", "parish", or "borough")
    pub county: Option<String>,
    /// City-level token
    pub city: Option<String>,
    /// Sub-city token produced by the city demotion rule
    pub site: Option<String>,
}

impl PlaceHierarchy {
    /// Whether no level was recognized or retained
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.country.is_none()
            && self.state.is_none()
            && self.region.is_none()
            && self.county.is_none()
            && self.city.is_none()
            && self.site.is_none()
    }

    /// The value stored at one granularity level
    #[must_use]
    pub fn level_value(&self, level: PlaceLevel) -> Option<&str> {
        match level {
            PlaceLevel::Country => self.country.as_deref(),
            PlaceLevel::Region => self.region.as_deref(),
            PlaceLevel::State => self.state.as_deref(),
            PlaceLevel::County => self.county.as_deref(),
            PlaceLevel::City | PlaceLevel::Full => self.city.as_deref(),
        }
    }
}
