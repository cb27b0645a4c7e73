//! Family unit representation
//!
//! This module contains the Family model, which links a husband, a wife, and an
//! ordered list of children by record id.

use serde::{Deserialize, Serialize};

/// Representation of a family unit
///
/// A family has zero or one husband and zero or one wife. The children list keeps
/// source order and is not deduplicated: a file that repeats a CHIL tag produces a
/// repeated entry here, mirroring what the source actually says.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    /// Record identifier (cross-reference with delimiters stripped, or
    /// caller-generated)
    pub id: String,
    /// Husband record id (HUSB); a repeated tag overwrites
    pub husband: Option<String>,
    /// Wife record id (WIFE); a repeated tag overwrites
    pub wife: Option<String>,
    /// Child record ids in source order (CHIL); repeated tags accumulate
    pub children: Vec<String>,
    /// Marriage date, free text; populated by callers, not by the parser
    pub marriage_date: Option<String>,
    /// Marriage place, free text; populated by callers, not by the parser
    pub marriage_place: Option<String>,
}

impl Family {
    /// Create a new family with the given record id
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Parent record ids in husband-then-wife order
    #[must_use]
    pub fn parents(&self) -> Vec<&str> {
        self.husband
            .iter()
            .chain(self.wife.iter())
            .map(String::as_str)
            .collect()
    }

    /// Number of child entries (duplicates included)
    #[must_use]
    pub fn family_size(&self) -> usize {
        self.children.len()
    }
}
