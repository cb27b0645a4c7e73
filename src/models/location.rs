//! Location summary, issue, and cluster types for the cleanup engine
//!
//! These are plain data structures consumed by location detail and map panels;
//! any persistence format is the caller's responsibility.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::place::PlaceHierarchy;

/// Severity of a detected location issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// Must be looked at
    Error,
    /// Probably wrong
    Warning,
    /// Worth knowing
    Info,
}

/// Kind of data-quality issue detected for a location string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationIssueKind {
    /// A comma-separated segment repeats within the string
    DuplicateParts,
    /// The string is too coarse to be useful (single segment, or only a
    /// segment plus "united states")
    TooGeneric,
    /// One or more similar location strings exist elsewhere in the dataset
    PossibleDuplicate,
    /// A state was detected but no county
    MissingCounty,
    /// A county or city was detected without any state context
    MissingState,
}

impl fmt::Display for LocationIssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DuplicateParts => "duplicate_parts",
            Self::TooGeneric => "too_generic",
            Self::PossibleDuplicate => "possible_duplicate",
            Self::MissingCounty => "missing_county",
            Self::MissingState => "missing_state",
        };
        write!(f, "{name}")
    }
}

/// A single detected issue on a location string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationIssue {
    /// Kind of issue
    pub kind: LocationIssueKind,
    /// Severity of the issue
    pub severity: IssueSeverity,
    /// Human-readable description
    pub message: String,
    /// Suggested fix, when one can be derived
    pub suggestion: Option<String>,
    /// Related location strings (for duplicate detection)
    pub related: Option<Vec<String>>,
}

/// Aggregate view of one raw location string across the whole dataset
///
/// Recomputed from scratch on every analysis run; there is no incremental update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocationSummary {
    /// The raw place string as it appears in the source data
    pub name: String,
    /// Structured decomposition of the place string
    pub hierarchy: PlaceHierarchy,
    /// Region derived from the hierarchy
    pub region: Option<String>,
    /// Distinct people recorded at this location
    pub person_count: usize,
    /// Birth events recorded at this location
    pub birth_count: usize,
    /// Death events recorded at this location
    pub death_count: usize,
    /// Other events recorded at this location
    pub other_count: usize,
    /// Earliest year observed at this location
    pub earliest_year: Option<i32>,
    /// Latest year observed at this location
    pub latest_year: Option<i32>,
    /// Issues detected for this location
    pub issues: Vec<LocationIssue>,
}

/// Confidence that a cluster's members denote the same real-world place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterConfidence {
    /// All members share a county
    High,
    /// Members look related but differ in shape
    Medium,
    /// Member token counts diverge widely
    Low,
}

/// A group of location strings judged to denote the same place
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationCluster {
    /// The member chosen as the canonical spelling
    pub canonical: String,
    /// The remaining members, proposed for merging into the canonical one
    pub variants: Vec<String>,
    /// Summed person count across all members
    pub total_count: usize,
    /// Confidence grade for the grouping
    pub confidence: ClusterConfidence,
    /// Why these members were grouped
    pub reason: String,
}

/// Aggregated output of a cleanup run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleanupReport {
    /// Number of distinct location strings seen
    pub total_locations: usize,
    /// Total number of issues across all locations
    pub total_issues: usize,
    /// Issue counts grouped by kind
    pub issues_by_kind: IndexMap<LocationIssueKind, usize>,
    /// Merge-candidate clusters, sorted by descending total person count
    pub clusters: Vec<LocationCluster>,
    /// Names of the top locations by person count among those carrying at
    /// least one issue (at most twenty)
    pub top_issue_locations: Vec<String>,
}
