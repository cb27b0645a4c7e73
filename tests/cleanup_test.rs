//! Integration tests for the location cleanup engine

use ged_reader::{
    Individual, IssueSeverity, LocationIssueKind, build_location_summaries, find_similar_locations,
    normalize_place, run_cleanup,
};

fn born_at(id: &str, place: &str) -> Individual {
    let mut person = Individual::new(id);
    person.birth_place = Some(place.to_string());
    person
}

#[test]
fn test_report_totals_and_kind_counts() {
    let people = vec![
        born_at("I1", "Texas"),
        born_at("I2", "Ulster, Ulster, New York"),
        born_at("I3", "Boston, Massachusetts, USA"),
    ];
    let (summaries, report) = run_cleanup(&people);

    assert_eq!(report.total_locations, 3);
    assert_eq!(summaries.len(), 3);
    assert!(report.total_issues >= 3);
    assert!(report.issues_by_kind[&LocationIssueKind::TooGeneric] >= 1);
    assert_eq!(report.issues_by_kind[&LocationIssueKind::DuplicateParts], 1);
}

#[test]
fn test_generic_location_issue() {
    let (summaries, _) = run_cleanup(&[born_at("I1", "Texas")]);
    let issue = summaries["Texas"]
        .issues
        .iter()
        .find(|issue| issue.kind == LocationIssueKind::TooGeneric)
        .unwrap();
    assert_eq!(issue.severity, IssueSeverity::Info);
}

#[test]
fn test_duplicate_parts_issue() {
    let (summaries, _) = run_cleanup(&[born_at("I1", "Ulster, Ulster, New York")]);
    let issue = summaries["Ulster, Ulster, New York"]
        .issues
        .iter()
        .find(|issue| issue.kind == LocationIssueKind::DuplicateParts)
        .unwrap();
    assert_eq!(issue.severity, IssueSeverity::Warning);
}

#[test]
fn test_possible_duplicate_carries_related_locations() {
    let people = vec![
        born_at("I1", "Boston, MA"),
        born_at("I2", "boston, Massachusetts"),
    ];
    let (summaries, _) = run_cleanup(&people);

    let issue = summaries["Boston, MA"]
        .issues
        .iter()
        .find(|issue| issue.kind == LocationIssueKind::PossibleDuplicate)
        .unwrap();
    assert_eq!(
        issue.related.as_deref(),
        Some(&["boston, Massachusetts".to_string()][..])
    );
}

#[test]
fn test_clustering_determinism() {
    let people = vec![
        born_at("I1", "Boston, MA"),
        born_at("I2", "boston, Massachusetts"),
        born_at("I3", "Cambridge, MA"),
    ];
    let (_, first) = run_cleanup(&people);
    let (_, second) = run_cleanup(&people);

    assert_eq!(first.clusters.len(), 1);
    assert_eq!(first.clusters[0].canonical, "Boston, MA");
    assert_eq!(first.clusters[0].variants, vec!["boston, Massachusetts"]);
    assert_eq!(second.clusters[0].canonical, first.clusters[0].canonical);
    assert_eq!(second.clusters[0].variants, first.clusters[0].variants);
}

#[test]
fn test_top_issue_locations_sorted_by_person_count() {
    let mut people = vec![born_at("I1", "Texas")];
    for n in 0..3 {
        people.push(born_at(&format!("K{n}"), "Kentucky"));
    }
    let (_, report) = run_cleanup(&people);

    assert_eq!(report.top_issue_locations[0], "Kentucky");
    assert!(report.top_issue_locations.contains(&"Texas".to_string()));
}

#[test]
fn test_find_similar_locations_public_api() {
    let summaries = build_location_summaries(&[
        born_at("I1", "Chester County, Pennsylvania"),
        born_at("I2", "West Chester, Chester County, Pennsylvania, USA"),
        born_at("I3", "Paris, France"),
    ]);
    let hierarchy = normalize_place("Chester County, Pennsylvania");
    let similar = find_similar_locations("Chester County, Pennsylvania", &hierarchy, &summaries);
    assert_eq!(
        similar,
        vec!["West Chester, Chester County, Pennsylvania, USA"]
    );
}

#[test]
fn test_person_with_no_places_contributes_nothing() {
    let (summaries, report) = run_cleanup(&[Individual::new("I1")]);
    assert!(summaries.is_empty());
    assert_eq!(report.total_locations, 0);
}
