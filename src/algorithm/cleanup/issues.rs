//! Per-location data-quality issue detection
//!
//! Issues are advisory data for review panels, never exceptions. Severity
//! reflects how likely the location is to need a correction.

use indexmap::IndexMap;
use itertools::Itertools;

use super::similarity;
use crate::algorithm::places::tables::UNITED_STATES;
use crate::models::{
    IssueSeverity, LocationIssue, LocationIssueKind, LocationSummary, PlaceHierarchy,
};

/// Detect all issues for one location string
///
/// `summaries` provides the comparison context for duplicate detection; the
/// location itself may or may not be registered in it.
#[must_use]
pub fn detect_location_issues(
    name: &str,
    hierarchy: &PlaceHierarchy,
    summaries: &IndexMap<String, LocationSummary>,
) -> Vec<LocationIssue> {
    let mut issues = Vec::new();
    let segments = comma_segments(name);

    if has_duplicate_segments(name) {
        issues.push(LocationIssue {
            kind: LocationIssueKind::DuplicateParts,
            severity: IssueSeverity::Warning,
            message: format!("\"{name}\" repeats a name part"),
            suggestion: Some(dedup_segments(name)),
            related: None,
        });
    }

    let only_country_qualifier =
        segments.len() == 2 && segments[1].eq_ignore_ascii_case("united states");
    if segments.len() == 1 || only_country_qualifier {
        issues.push(LocationIssue {
            kind: LocationIssueKind::TooGeneric,
            severity: IssueSeverity::Info,
            message: format!("\"{name}\" is very generic"),
            suggestion: Some("Add city or county detail if known".to_string()),
            related: None,
        });
    }

    if hierarchy.state.is_some() && hierarchy.county.is_none() {
        issues.push(LocationIssue {
            kind: LocationIssueKind::MissingCounty,
            severity: IssueSeverity::Info,
            message: format!("\"{name}\" has a state but no county"),
            suggestion: None,
            related: None,
        });
    }

    let outside_us = hierarchy
        .country
        .as_ref()
        .is_some_and(|country| country != UNITED_STATES);
    if hierarchy.state.is_none()
        && !outside_us
        && (hierarchy.county.is_some() || hierarchy.city.is_some())
    {
        issues.push(LocationIssue {
            kind: LocationIssueKind::MissingState,
            severity: IssueSeverity::Info,
            message: format!("\"{name}\" has no state information"),
            suggestion: None,
            related: None,
        });
    }

    let similar = similarity::find_similar_locations(name, hierarchy, summaries);
    if !similar.is_empty() {
        issues.push(LocationIssue {
            kind: LocationIssueKind::PossibleDuplicate,
            severity: IssueSeverity::Warning,
            message: format!(
                "\"{name}\" looks like {} other location{}",
                similar.len(),
                if similar.len() == 1 { "" } else { "s" }
            ),
            suggestion: Some("Review and merge if these denote the same place".to_string()),
            related: Some(similar),
        });
    }

    issues
}

/// Comma-separated segments, trimmed, empties dropped
pub(crate) fn comma_segments(name: &str) -> Vec<String> {
    name.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Whether any comma-separated segment repeats, case-insensitively
pub(crate) fn has_duplicate_segments(name: &str) -> bool {
    let segments = comma_segments(name);
    let distinct = segments
        .iter()
        .map(|segment| segment.to_lowercase())
        .unique()
        .count();
    distinct < segments.len()
}

/// The string with repeated segments removed, first occurrence kept
fn dedup_segments(name: &str) -> String {
    comma_segments(name)
        .into_iter()
        .unique_by(|segment| segment.to_lowercase())
        .join(", ")
}
