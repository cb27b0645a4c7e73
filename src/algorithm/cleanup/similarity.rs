//! Location similarity heuristic
//!
//! Decides whether two raw location strings plausibly denote the same place.
//! This is advisory: the engine proposes merges and a human confirms, so false
//! positives and negatives are expected and acceptable.

use rustc_hash::FxHashSet;

use crate::models::{LocationSummary, PlaceHierarchy};
use indexmap::IndexMap;

/// Minimum word length considered meaningful for token overlap
const MIN_TOKEN_LEN: usize = 4;

/// Judge two distinct location strings similar if any rule fires:
/// same non-empty county and state; one string contained in the other
/// (case-insensitive); or at least two meaningful words shared, covering at
/// least half of the smaller word set
#[must_use]
pub fn are_similar(a: &str, b: &str, ha: &PlaceHierarchy, hb: &PlaceHierarchy) -> bool {
    same_county_and_state(ha, hb) || substring_match(a, b) || word_overlap(a, b)
}

/// All locations in the summary map judged similar to `name`
///
/// The target's own entry is never reported. Order follows the map's
/// registration order.
#[must_use]
pub fn find_similar_locations(
    name: &str,
    hierarchy: &PlaceHierarchy,
    summaries: &IndexMap<String, LocationSummary>,
) -> Vec<String> {
    summaries
        .values()
        .filter(|other| other.name != name)
        .filter(|other| are_similar(name, &other.name, hierarchy, &other.hierarchy))
        .map(|other| other.name.clone())
        .collect()
}

fn same_county_and_state(a: &PlaceHierarchy, b: &PlaceHierarchy) -> bool {
    let eq = |x: &Option<String>, y: &Option<String>| -> bool {
        match (x, y) {
            (Some(x), Some(y)) => !x.is_empty() && x.eq_ignore_ascii_case(y),
            _ => false,
        }
    };
    eq(&a.county, &b.county) && eq(&a.state, &b.state)
}

fn substring_match(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

fn word_overlap(a: &str, b: &str) -> bool {
    let words_a = meaningful_words(a);
    let words_b = meaningful_words(b);
    let smaller = words_a.len().min(words_b.len());
    if smaller == 0 {
        return false;
    }
    let shared = words_a.intersection(&words_b).count();
    shared >= 2 && shared * 2 >= smaller
}

/// Words longer than three characters, lowercased, split on commas and
/// whitespace
fn meaningful_words(name: &str) -> FxHashSet<String> {
    name.split(|c: char| c == ',' || c.is_whitespace())
        .map(str::to_lowercase)
        .filter(|word| word.chars().count() >= MIN_TOKEN_LEN)
        .collect()
}
