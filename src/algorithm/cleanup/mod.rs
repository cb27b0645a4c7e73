//! Location cleanup engine
//!
//! Aggregates every place string across a person set into per-location
//! summaries, detects data-quality issues, and proposes merge clusters for
//! near-duplicate spellings. Everything here is recomputed from scratch on each
//! run; there is no incremental mode.

pub mod cluster;
pub mod issues;
pub mod similarity;

use indexmap::IndexMap;
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::algorithm::places::{get_region, normalize_place};
use crate::models::{CleanupReport, Individual, LocationSummary};

pub use self::cluster::cluster_locations;
pub use self::issues::detect_location_issues;
pub use self::similarity::{are_similar, find_similar_locations};

/// How many issue-bearing locations the report lists by person count
const TOP_LOCATION_LIMIT: usize = 20;

/// Which kind of event registered a person at a location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EventKind {
    Birth,
    Death,
    Other,
}

/// Build per-location summaries for a person set
///
/// Each person registers their birth place, death place, and every event place.
/// A person counts once toward a location's `person_count` no matter how many
/// of their events point there, while the per-kind counters increment on every
/// registration. Year windows widen with the best available year per
/// registration. Summaries come back in first-seen order with hierarchies,
/// regions, and issues filled in.
#[must_use]
pub fn build_location_summaries(individuals: &[Individual]) -> IndexMap<String, LocationSummary> {
    let mut builder = SummaryBuilder::default();

    for person in individuals {
        if let Some(place) = &person.birth_place {
            builder.register(place, &person.id, EventKind::Birth, person.birth_year());
        }
        if let Some(place) = &person.death_place {
            builder.register(place, &person.id, EventKind::Death, person.death_year());
        }
        for event in &person.events {
            if let Some(place) = &event.place {
                builder.register(place, &person.id, EventKind::Other, event.best_year());
            }
        }
    }

    let mut summaries = builder.finish();
    attach_issues(&mut summaries);
    debug!(
        "summarized {} distinct locations from {} people",
        summaries.len(),
        individuals.len()
    );
    summaries
}

/// Run the full cleanup analysis: summaries plus an aggregated report
#[must_use]
pub fn run_cleanup(individuals: &[Individual]) -> (IndexMap<String, LocationSummary>, CleanupReport) {
    let summaries = build_location_summaries(individuals);

    let total_issues = summaries.values().map(|summary| summary.issues.len()).sum();
    let mut issues_by_kind = IndexMap::new();
    for summary in summaries.values() {
        for issue in &summary.issues {
            *issues_by_kind.entry(issue.kind).or_insert(0) += 1;
        }
    }

    let mut with_issues: Vec<&LocationSummary> = summaries
        .values()
        .filter(|summary| !summary.issues.is_empty())
        .collect();
    with_issues.sort_by(|a, b| b.person_count.cmp(&a.person_count));
    let top_issue_locations = with_issues
        .iter()
        .take(TOP_LOCATION_LIMIT)
        .map(|summary| summary.name.clone())
        .collect();

    let report = CleanupReport {
        total_locations: summaries.len(),
        total_issues,
        issues_by_kind,
        clusters: cluster_locations(&summaries),
        top_issue_locations,
    };
    (summaries, report)
}

#[derive(Debug, Default)]
struct SummaryBuilder {
    summaries: IndexMap<String, LocationSummary>,
    /// Person ids already counted per location
    seen: FxHashMap<String, FxHashSet<String>>,
}

impl SummaryBuilder {
    fn register(&mut self, place: &str, person_id: &str, kind: EventKind, year: Option<i32>) {
        let name = place.trim();
        if name.is_empty() {
            return;
        }

        let summary = self
            .summaries
            .entry(name.to_string())
            .or_insert_with(|| LocationSummary {
                name: name.to_string(),
                ..LocationSummary::default()
            });

        if self
            .seen
            .entry(name.to_string())
            .or_default()
            .insert(person_id.to_string())
        {
            summary.person_count += 1;
        }

        match kind {
            EventKind::Birth => summary.birth_count += 1,
            EventKind::Death => summary.death_count += 1,
            EventKind::Other => summary.other_count += 1,
        }

        if let Some(year) = year {
            summary.earliest_year = Some(summary.earliest_year.map_or(year, |y| y.min(year)));
            summary.latest_year = Some(summary.latest_year.map_or(year, |y| y.max(year)));
        }
    }

    fn finish(mut self) -> IndexMap<String, LocationSummary> {
        for summary in self.summaries.values_mut() {
            summary.hierarchy = normalize_place(&summary.name);
            summary.region = get_region(&summary.hierarchy);
        }
        self.summaries
    }
}

/// Fill the issue list of every summary, using all other summaries as the
/// comparison context for duplicate detection
fn attach_issues(summaries: &mut IndexMap<String, LocationSummary>) {
    let detected: Vec<Vec<_>> = summaries
        .values()
        .map(|summary| detect_location_issues(&summary.name, &summary.hierarchy, summaries))
        .collect();
    for (summary, issues) in summaries.values_mut().zip(detected) {
        summary.issues = issues;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LifeEvent;

    #[test]
    fn test_person_counted_once_per_location() {
        let mut person = Individual::new("I1");
        person.birth_place = Some("Boston, Massachusetts, USA".to_string());
        person.death_place = Some("Boston, Massachusetts, USA".to_string());

        let summaries = build_location_summaries(std::slice::from_ref(&person));
        let summary = &summaries["Boston, Massachusetts, USA"];
        assert_eq!(summary.person_count, 1);
        assert_eq!(summary.birth_count, 1);
        assert_eq!(summary.death_count, 1);
        assert_eq!(summary.other_count, 0);
    }

    #[test]
    fn test_year_window_widens() {
        let mut a = Individual::new("I1");
        a.birth_place = Some("Augusta, Maine".to_string());
        a.birth_date = Some("12 MAR 1851".to_string());
        let mut b = Individual::new("I2");
        b.death_place = Some("Augusta, Maine".to_string());
        b.death_date = Some("1923".to_string());

        let summaries = build_location_summaries(&[a, b]);
        let summary = &summaries["Augusta, Maine"];
        assert_eq!(summary.earliest_year, Some(1851));
        assert_eq!(summary.latest_year, Some(1923));
    }

    #[test]
    fn test_explicit_event_year_preferred() {
        let mut person = Individual::new("I1");
        person.events.push(LifeEvent {
            description: Some("Moved".to_string()),
            date: Some("spring 1900".to_string()),
            place: Some("Dover, Delaware".to_string()),
            year: Some(1901),
        });

        let summaries = build_location_summaries(std::slice::from_ref(&person));
        let summary = &summaries["Dover, Delaware"];
        assert_eq!(summary.earliest_year, Some(1901));
        assert_eq!(summary.other_count, 1);
    }

    #[test]
    fn test_empty_input_yields_empty_report() {
        let (summaries, report) = run_cleanup(&[]);
        assert!(summaries.is_empty());
        assert_eq!(report.total_locations, 0);
        assert_eq!(report.total_issues, 0);
        assert!(report.clusters.is_empty());
        assert!(report.top_issue_locations.is_empty());
    }

    #[test]
    fn test_summaries_keep_first_seen_order() {
        let mut a = Individual::new("I1");
        a.birth_place = Some("Zanesville, Ohio".to_string());
        let mut b = Individual::new("I2");
        b.birth_place = Some("Akron, Ohio".to_string());

        let summaries = build_location_summaries(&[a, b]);
        let names: Vec<&String> = summaries.keys().collect();
        assert_eq!(names, ["Zanesville, Ohio", "Akron, Ohio"]);
    }
}
