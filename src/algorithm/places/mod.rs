//! Free-text place normalization
//!
//! Parses a comma-separated place string into a `PlaceHierarchy` using the
//! static state/region/country tables. Pure functions throughout: no I/O, same
//! output for the same input.

pub mod tables;

use self::tables::{UNITED_STATES, lookup_country, lookup_state, region_for_state};
use crate::models::{PlaceHierarchy, PlaceLevel};

/// Parse a free-text place string into a hierarchy
///
/// Segments are processed right to left, most general first. The rightmost
/// segment is tried as a country, then as a US state, and is otherwise retained
/// verbatim as an unrecognized country. Every other segment is tried as a US
/// state (state-before-country inputs exist in the wild), then as a county-like
/// token ("county"/"parish"/"borough"), and otherwise lands on the city level,
/// demoting any previously set city into `site`.
///
/// Never fails: empty input yields an empty hierarchy, unknown tokens are kept
/// as best-guess values.
#[must_use]
pub fn normalize_place(raw: &str) -> PlaceHierarchy {
    let mut hierarchy = PlaceHierarchy::default();
    let segments: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect();

    for (position, segment) in segments.iter().rev().enumerate() {
        if position == 0 {
            if let Some(country) = lookup_country(segment) {
                hierarchy.country = Some(country.to_string());
            } else if let Some(state) = lookup_state(segment) {
                apply_state(&mut hierarchy, state);
            } else {
                hierarchy.country = Some((*segment).to_string());
            }
            continue;
        }

        if let Some(state) = lookup_state(segment) {
            apply_state(&mut hierarchy, state);
            continue;
        }

        let lower = segment.to_lowercase();
        if lower.contains("county") || lower.contains("parish") || lower.contains("borough") {
            hierarchy.county = Some((*segment).to_string());
            continue;
        }

        // A second city-level token is more specific than the one before it
        // (we are moving toward the left end of the string); the earlier value
        // is demoted to `site`.
        if let Some(previous) = hierarchy.city.take() {
            hierarchy.site = Some(previous);
        }
        hierarchy.city = Some((*segment).to_string());
    }

    hierarchy
}

/// Record a recognized US state: canonical name, region, and the country
/// default when no country was parsed yet
fn apply_state(hierarchy: &mut PlaceHierarchy, state: &str) {
    hierarchy.state = Some(state.to_string());
    hierarchy.region = region_for_state(state).map(ToString::to_string);
    if hierarchy.country.is_none() {
        hierarchy.country = Some(UNITED_STATES.to_string());
    }
}

/// Render a hierarchy as a display string at the requested granularity
#[must_use]
pub fn format_place(hierarchy: &PlaceHierarchy, level: PlaceLevel) -> String {
    let join = |parts: &[&Option<String>]| -> String {
        parts
            .iter()
            .filter_map(|part| part.as_deref())
            .collect::<Vec<_>>()
            .join(", ")
    };

    match level {
        PlaceLevel::Full => join(&[
            &hierarchy.city,
            &hierarchy.county,
            &hierarchy.state,
            &hierarchy.country,
        ]),
        PlaceLevel::City => join(&[&hierarchy.city, &hierarchy.state]),
        PlaceLevel::County => join(&[&hierarchy.county, &hierarchy.state]),
        PlaceLevel::State => hierarchy
            .state
            .clone()
            .or_else(|| hierarchy.country.clone())
            .unwrap_or_default(),
        PlaceLevel::Region => get_region(hierarchy).unwrap_or_default(),
        PlaceLevel::Country => hierarchy.country.clone().unwrap_or_default(),
    }
}

/// Region for a hierarchy
///
/// Uses the stored region, else derives one from the state, else falls back to
/// a non-US country name as a pseudo-region so foreign places still group on a
/// map.
#[must_use]
pub fn get_region(hierarchy: &PlaceHierarchy) -> Option<String> {
    if let Some(region) = &hierarchy.region {
        return Some(region.clone());
    }
    if let Some(state) = &hierarchy.state
        && let Some(region) = region_for_state(state)
    {
        return Some(region.to_string());
    }
    hierarchy
        .country
        .as_ref()
        .filter(|country| country.as_str() != UNITED_STATES)
        .cloned()
}

/// Compare two hierarchies at a chosen granularity
///
/// Both sides must carry the compared level; comparisons are case-insensitive.
/// County and city comparisons also require matching states, since those names
/// repeat across states.
#[must_use]
pub fn is_same_location(a: &PlaceHierarchy, b: &PlaceHierarchy, level: PlaceLevel) -> bool {
    let eq = |x: &Option<String>, y: &Option<String>| -> bool {
        match (x, y) {
            (Some(x), Some(y)) => x.eq_ignore_ascii_case(y),
            _ => false,
        }
    };

    match level {
        PlaceLevel::Country => eq(&a.country, &b.country),
        PlaceLevel::Region => match (get_region(a), get_region(b)) {
            (Some(x), Some(y)) => x.eq_ignore_ascii_case(&y),
            _ => false,
        },
        PlaceLevel::State => eq(&a.state, &b.state),
        PlaceLevel::County => eq(&a.county, &b.county) && eq(&a.state, &b.state),
        PlaceLevel::City => eq(&a.city, &b.city) && eq(&a.state, &b.state),
        PlaceLevel::Full => {
            eq(&a.city, &b.city)
                && a.county.as_deref().map(str::to_lowercase)
                    == b.county.as_deref().map(str::to_lowercase)
                && a.state.as_deref().map(str::to_lowercase)
                    == b.state.as_deref().map(str::to_lowercase)
                && a.country.as_deref().map(str::to_lowercase)
                    == b.country.as_deref().map(str::to_lowercase)
        }
    }
}
