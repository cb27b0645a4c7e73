//! Greedy clustering of near-duplicate locations
//!
//! Walks all location strings in registration order, groups each unprocessed
//! location with its unprocessed similar neighbours, and picks the most
//! specific, best-established member as the canonical spelling. Pairwise
//! similarity makes this O(L²) in the distinct-location count, which is fine at
//! genealogical scale (hundreds to low thousands of places); bucket candidates
//! by county/state before comparing if that ever stops being true.

use indexmap::IndexMap;
use itertools::Itertools;
use log::debug;
use rustc_hash::FxHashSet;

use super::issues::{comma_segments, has_duplicate_segments};
use super::similarity::are_similar;
use crate::models::{ClusterConfidence, LocationCluster, LocationSummary};

/// Member token-count spread beyond which a cluster is graded low confidence
const LOW_CONFIDENCE_SPREAD: usize = 3;

/// Cap on the person-count contribution to the canonical score
const MAX_COUNT_SCORE: usize = 10;

/// Cluster near-duplicate location strings into merge proposals
///
/// Clusters are emitted sorted by descending summed person count; locations
/// with no similar neighbour produce no cluster at all.
#[must_use]
pub fn cluster_locations(summaries: &IndexMap<String, LocationSummary>) -> Vec<LocationCluster> {
    let mut clusters = Vec::new();
    let mut processed: FxHashSet<&str> = FxHashSet::default();

    for (name, summary) in summaries {
        if processed.contains(name.as_str()) {
            continue;
        }

        let similar: Vec<&LocationSummary> = summaries
            .values()
            .filter(|other| other.name != *name && !processed.contains(other.name.as_str()))
            .filter(|other| {
                are_similar(name, &other.name, &summary.hierarchy, &other.hierarchy)
            })
            .collect();
        if similar.is_empty() {
            continue;
        }

        let mut members = Vec::with_capacity(similar.len() + 1);
        members.push(summary);
        members.extend(similar);
        for member in &members {
            processed.insert(member.name.as_str());
        }

        clusters.push(build_cluster(&members));
    }

    clusters.sort_by(|a, b| b.total_count.cmp(&a.total_count));
    debug!(
        "clustered {} locations into {} groups",
        processed.len(),
        clusters.len()
    );
    clusters
}

fn build_cluster(members: &[&LocationSummary]) -> LocationCluster {
    // Highest score wins; ties fall to the earliest-encountered member
    // (max_by_key alone would keep the last of equal scores).
    let (_, canonical) = members
        .iter()
        .enumerate()
        .max_by_key(|(index, member)| (canonical_score(member), std::cmp::Reverse(*index)))
        .expect("cluster has at least two members");

    let variants = members
        .iter()
        .filter(|member| member.name != canonical.name)
        .map(|member| member.name.clone())
        .collect();

    let total_count = members.iter().map(|member| member.person_count).sum();
    let (confidence, reason) = grade_confidence(members);

    LocationCluster {
        canonical: canonical.name.clone(),
        variants,
        total_count,
        confidence,
        reason,
    }
}

/// Score a member as a canonical candidate: specificity (segments, county,
/// city), establishment (person count, capped), and cleanliness (no repeated
/// segments)
fn canonical_score(summary: &LocationSummary) -> usize {
    let mut score = comma_segments(&summary.name).len() * 10;
    if summary.hierarchy.county.is_some() {
        score += 20;
    }
    if summary.hierarchy.city.is_some() {
        score += 15;
    }
    score += summary.person_count.min(MAX_COUNT_SCORE);
    if !has_duplicate_segments(&summary.name) {
        score += 25;
    }
    score
}

fn grade_confidence(members: &[&LocationSummary]) -> (ClusterConfidence, String) {
    let counties: Vec<&str> = members
        .iter()
        .filter_map(|member| member.hierarchy.county.as_deref())
        .collect();
    if counties.len() == members.len()
        && counties
            .iter()
            .all(|county| county.eq_ignore_ascii_case(counties[0]))
    {
        return (
            ClusterConfidence::High,
            format!("All variants fall in {}", counties[0]),
        );
    }

    let token_counts = members
        .iter()
        .map(|member| word_count(&member.name))
        .minmax();
    let spread = match token_counts.into_option() {
        Some((min, max)) => max - min,
        None => 0,
    };
    if spread > LOW_CONFIDENCE_SPREAD {
        return (
            ClusterConfidence::Low,
            "Names overlap but differ widely in detail".to_string(),
        );
    }

    (
        ClusterConfidence::Medium,
        "Overlapping name tokens".to_string(),
    )
}

fn word_count(name: &str) -> usize {
    name.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .count()
}
