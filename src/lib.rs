//! A Rust library for parsing GEDCOM genealogy files into an in-memory graph,
//! with generation filtering, free-text place normalization, and location
//! cleanup analysis.

pub mod algorithm;
pub mod error;
pub mod loader;
pub mod models;
pub mod parser;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use error::{GedReaderError, Result};
pub use models::{Family, FamilyTree, Individual, LifeEvent};
pub use models::{PlaceHierarchy, PlaceLevel};
pub use models::{
    CleanupReport, ClusterConfidence, IssueSeverity, LocationCluster, LocationIssue,
    LocationIssueKind, LocationSummary,
};

// Parsing and export
pub use loader::load_gedcom_file;
pub use parser::{parse_gedcom, write_gedcom};

// Generation filtering
pub use algorithm::generations::{GenerationFilterConfig, filter_generations};

// Place normalization
pub use algorithm::places::{format_place, get_region, is_same_location, normalize_place};

// Location cleanup
pub use algorithm::cleanup::{
    build_location_summaries, cluster_locations, detect_location_issues, find_similar_locations,
    run_cleanup,
};

// Date utilities
pub use utils::{calculate_mother_age, extract_year};
