//! Ancestor-limited subgraph filtering
//!
//! Given a parsed tree, this module prunes everything outside a bounded ancestor
//! walk from the "recent" generation, producing an independent smaller tree that
//! can be rendered or re-exported. The input tree is never mutated.

use std::fmt;

use chrono::{Datelike, Utc};
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::models::FamilyTree;

/// Seeds are people born within this many years before the reference year
const RECENT_BIRTH_WINDOW_YEARS: i32 = 50;

/// Configuration for the generation filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationFilterConfig {
    /// How many ancestor generations to keep above the seed generation.
    /// A value of 1 keeps the seeds' parents and nothing above them; 0 keeps
    /// the seeds alone.
    pub max_generations: u32,
    /// Year that defines the "recent" seed generation
    pub reference_year: i32,
}

impl Default for GenerationFilterConfig {
    fn default() -> Self {
        Self {
            max_generations: 4,
            reference_year: Utc::now().year(),
        }
    }
}

impl GenerationFilterConfig {
    /// Create a configuration for the given generation depth, using the
    /// current year as reference
    #[must_use]
    pub fn new(max_generations: u32) -> Self {
        Self {
            max_generations,
            ..Self::default()
        }
    }

    /// Override the reference year
    #[must_use]
    pub const fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = year;
        self
    }
}

impl fmt::Display for GenerationFilterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "max {} generations above people born since {}",
            self.max_generations,
            self.reference_year - RECENT_BIRTH_WINDOW_YEARS
        )
    }
}

/// Filter a tree down to the ancestor subgraph reachable from its recent
/// generation
///
/// Seeds are all people whose extracted birth year is within fifty years of the
/// reference year. From every seed, ancestors are walked up to
/// `max_generations` levels through the child-to-parents index. The family a
/// person is a child of is retained while ancestors may still be climbed;
/// families where an included person is a spouse are always retained, together
/// with the partner, to keep marriage context, without consuming generation
/// depth. Visitation is idempotent, so cyclic or repeated references terminate.
#[must_use]
pub fn filter_generations(tree: &FamilyTree, config: &GenerationFilterConfig) -> FamilyTree {
    let mut walk = AncestorWalk::new(tree, config.max_generations);

    let seed_floor = config.reference_year - RECENT_BIRTH_WINDOW_YEARS;
    let seeds: Vec<&str> = tree
        .individuals
        .values()
        .filter(|person| person.birth_year().is_some_and(|year| year >= seed_floor))
        .map(|person| person.id.as_str())
        .collect();
    debug!(
        "generation filter: {} seeds of {} people ({config})",
        seeds.len(),
        tree.individual_count()
    );

    for seed in seeds {
        walk.visit(seed, 0);
    }
    walk.into_tree()
}

/// Depth-first ancestor walk with idempotent visitation
struct AncestorWalk<'a> {
    tree: &'a FamilyTree,
    max_generations: u32,
    /// Families where each person is listed as a child
    child_families: FxHashMap<&'a str, Vec<&'a str>>,
    /// Families where each person is the husband or the wife
    spouse_families: FxHashMap<&'a str, Vec<&'a str>>,
    /// People already fully processed (ancestor-walked)
    visited: FxHashSet<String>,
    included_people: FxHashSet<String>,
    included_families: FxHashSet<String>,
}

impl<'a> AncestorWalk<'a> {
    fn new(tree: &'a FamilyTree, max_generations: u32) -> Self {
        let mut child_families: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
        let mut spouse_families: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
        for family in tree.families.values() {
            for child in &family.children {
                child_families
                    .entry(child.as_str())
                    .or_default()
                    .push(family.id.as_str());
            }
            for spouse in family.husband.iter().chain(family.wife.iter()) {
                spouse_families
                    .entry(spouse.as_str())
                    .or_default()
                    .push(family.id.as_str());
            }
        }
        Self {
            tree,
            max_generations,
            child_families,
            spouse_families,
            visited: FxHashSet::default(),
            included_people: FxHashSet::default(),
            included_families: FxHashSet::default(),
        }
    }

    fn visit(&mut self, id: &str, generation: u32) {
        let tree = self.tree;
        if self.visited.contains(id) || !tree.individuals.contains_key(id) {
            return;
        }
        self.visited.insert(id.to_string());
        self.included_people.insert(id.to_string());

        if generation < self.max_generations {
            let families: Vec<&str> = self.child_families.get(id).cloned().unwrap_or_default();
            for family_id in families {
                self.included_families.insert(family_id.to_string());
            }
            for parent in tree.parents_of(id) {
                self.visit(parent, generation + 1);
            }
        }

        // Marriage context: keep the family record and the partner, but do not
        // climb the partner's own ancestry from here.
        let families: Vec<&str> = self.spouse_families.get(id).cloned().unwrap_or_default();
        for family_id in families {
            self.included_families.insert(family_id.to_string());
            let family = &tree.families[family_id];
            for partner in family.husband.iter().chain(family.wife.iter()) {
                if partner != id && tree.individuals.contains_key(partner) {
                    self.included_people.insert(partner.clone());
                }
            }
        }
    }

    /// Assemble the filtered tree, dropping references to records that did not
    /// survive, and re-derive its indices and roots
    fn into_tree(self) -> FamilyTree {
        let mut out = FamilyTree::new();

        for (id, person) in &self.tree.individuals {
            if !self.included_people.contains(id) {
                continue;
            }
            let mut person = person.clone();
            if let Some(famc) = &person.famc
                && !self.included_families.contains(famc)
            {
                person.famc = None;
            }
            person
                .fams
                .retain(|family_id| self.included_families.contains(family_id));
            out.individuals.insert(id.clone(), person);
        }

        for (id, family) in &self.tree.families {
            if !self.included_families.contains(id) {
                continue;
            }
            let mut family = family.clone();
            if family
                .husband
                .as_ref()
                .is_some_and(|h| !self.included_people.contains(h))
            {
                family.husband = None;
            }
            if family
                .wife
                .as_ref()
                .is_some_and(|w| !self.included_people.contains(w))
            {
                family.wife = None;
            }
            family
                .children
                .retain(|child| self.included_people.contains(child));
            out.families.insert(id.clone(), family);
        }

        out.rebuild_indices();
        debug!(
            "generation filter kept {} of {} people, {} of {} families",
            out.individual_count(),
            self.tree.individual_count(),
            out.family_count(),
            self.tree.family_count()
        );
        out
    }
}
