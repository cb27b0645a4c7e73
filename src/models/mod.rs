//! Data models for the genealogical graph and place analysis
//!
//! This module contains the core entity types produced by the parser and consumed
//! by the generation filter and the place cleanup engine.

pub mod family;
pub mod individual;
pub mod location;
pub mod place;
pub mod tree;

pub use self::family::Family;
pub use self::individual::{Individual, LifeEvent};
pub use self::location::{
    CleanupReport, ClusterConfidence, IssueSeverity, LocationCluster, LocationIssue,
    LocationIssueKind, LocationSummary,
};
pub use self::place::{PlaceHierarchy, PlaceLevel};
pub use self::tree::FamilyTree;
