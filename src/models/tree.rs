//! Genealogical graph produced by the parser
//!
//! A `FamilyTree` is an immutable snapshot: it is constructed once per imported
//! file and replaced wholesale on re-import. Individuals and families keep their
//! source insertion order so derived indices, root detection, and export are
//! deterministic.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::family::Family;
use super::individual::Individual;

/// Parent ids for one child; two entries in the common case
pub type ParentIds = SmallVec<[String; 2]>;

/// A parsed genealogical graph with derived indices
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FamilyTree {
    /// Individuals indexed by record id, in source order
    pub individuals: IndexMap<String, Individual>,
    /// Families indexed by record id, in source order
    pub families: IndexMap<String, Family>,
    /// Child id to parent ids, husband before wife within each family
    pub child_to_parents: FxHashMap<String, ParentIds>,
    /// Ids of individuals never listed as a child in any family, in source order
    pub roots: Vec<String>,
}

impl FamilyTree {
    /// Create an empty tree
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from record maps, deriving the child-to-parents index and
    /// the root set
    #[must_use]
    pub fn from_records(
        individuals: IndexMap<String, Individual>,
        families: IndexMap<String, Family>,
    ) -> Self {
        let mut tree = Self {
            individuals,
            families,
            child_to_parents: FxHashMap::default(),
            roots: Vec::new(),
        };
        tree.rebuild_indices();
        tree
    }

    /// Recompute the child-to-parents index and the root list from the current
    /// family records
    ///
    /// Each family contributes its husband then its wife to every listed child,
    /// in that order. A child listed in several families accumulates parents in
    /// family source order.
    pub fn rebuild_indices(&mut self) {
        self.child_to_parents.clear();
        for family in self.families.values() {
            for child_id in &family.children {
                let parents = self.child_to_parents.entry(child_id.clone()).or_default();
                if let Some(husband) = &family.husband {
                    parents.push(husband.clone());
                }
                if let Some(wife) = &family.wife {
                    parents.push(wife.clone());
                }
            }
        }

        self.roots = self
            .individuals
            .keys()
            .filter(|id| !self.child_to_parents.contains_key(*id))
            .cloned()
            .collect();
    }

    /// Get an individual by record id
    #[must_use]
    pub fn get_individual(&self, id: &str) -> Option<&Individual> {
        self.individuals.get(id)
    }

    /// Get a family by record id
    #[must_use]
    pub fn get_family(&self, id: &str) -> Option<&Family> {
        self.families.get(id)
    }

    /// Parent ids recorded for a child, husband-then-wife order per family
    #[must_use]
    pub fn parents_of(&self, child_id: &str) -> &[String] {
        self.child_to_parents
            .get(child_id)
            .map_or(&[], SmallVec::as_slice)
    }

    /// Number of individuals in the tree
    #[must_use]
    pub fn individual_count(&self) -> usize {
        self.individuals.len()
    }

    /// Number of families in the tree
    #[must_use]
    pub fn family_count(&self) -> usize {
        self.families.len()
    }

    /// Whether the tree holds no records at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty() && self.families.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_with_family(children: &[&str]) -> FamilyTree {
        let mut individuals = IndexMap::new();
        for id in ["I1", "I2"].iter().chain(children) {
            individuals.insert((*id).to_string(), Individual::new(*id));
        }
        let mut family = Family::new("F1");
        family.husband = Some("I1".to_string());
        family.wife = Some("I2".to_string());
        family.children = children.iter().map(|c| (*c).to_string()).collect();
        let mut families = IndexMap::new();
        families.insert("F1".to_string(), family);
        FamilyTree::from_records(individuals, families)
    }

    #[test]
    fn test_parent_index_order() {
        let tree = tree_with_family(&["I3"]);
        assert_eq!(tree.parents_of("I3"), ["I1", "I2"]);
    }

    #[test]
    fn test_roots_exclude_children() {
        let tree = tree_with_family(&["I3"]);
        assert_eq!(tree.roots, vec!["I1", "I2"]);
    }

    #[test]
    fn test_duplicate_child_entries_accumulate_parents() {
        let tree = tree_with_family(&["I3", "I3"]);
        assert_eq!(tree.parents_of("I3"), ["I1", "I2", "I1", "I2"]);
    }

    #[test]
    fn test_empty_tree() {
        let tree = FamilyTree::new();
        assert!(tree.is_empty());
        assert!(tree.roots.is_empty());
    }
}
