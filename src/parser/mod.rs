//! GEDCOM parsing into a genealogical graph
//!
//! The parser folds the tagged-line stream into individual and family records,
//! then derives the child-to-parents index and the root set. It never fails:
//! unparseable lines and unrecognized tags are skipped per the lenient-parsing
//! policy, and a file with no valid records yields an empty tree.

pub mod line;
pub mod writer;

use indexmap::IndexMap;
use log::debug;

use self::line::GedcomLine;
use crate::models::{Family, FamilyTree, Individual};

pub use self::writer::write_gedcom;

/// Which record the fold is currently building
#[derive(Debug, Clone, PartialEq, Eq)]
enum RecordState {
    /// No open record; non-zero-level lines are ignored
    None,
    /// Building the individual with this id
    Individual(String),
    /// Building the family with this id
    Family(String),
}

/// Which nested event block a DATE/PLAC line belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EventContext {
    None,
    Birth,
    Death,
}

/// Accumulator threaded through the line fold
///
/// Keeping the parse state local (rather than on a shared object) keeps the
/// parser reentrant.
#[derive(Debug)]
struct ParseState {
    individuals: IndexMap<String, Individual>,
    families: IndexMap<String, Family>,
    record: RecordState,
    event: EventContext,
    skipped_lines: usize,
}

impl ParseState {
    fn new() -> Self {
        Self {
            individuals: IndexMap::new(),
            families: IndexMap::new(),
            record: RecordState::None,
            event: EventContext::None,
            skipped_lines: 0,
        }
    }

    fn current_individual(&mut self) -> Option<&mut Individual> {
        match &self.record {
            RecordState::Individual(id) => self.individuals.get_mut(id),
            _ => None,
        }
    }

    fn current_family(&mut self) -> Option<&mut Family> {
        match &self.record {
            RecordState::Family(id) => self.families.get_mut(id),
            _ => None,
        }
    }
}

/// Parse the full text of a GEDCOM file into a `FamilyTree`
///
/// Accepts CR/LF or LF line endings. Malformed lines are skipped silently; a
/// file containing no valid INDI/FAM headers produces an empty tree rather than
/// an error, and callers treat "no data extracted" as a valid, inspectable
/// outcome.
#[must_use]
pub fn parse_gedcom(text: &str) -> FamilyTree {
    let mut state = ParseState::new();

    for raw in text.lines() {
        if raw.trim().is_empty() {
            continue;
        }
        match GedcomLine::parse(raw) {
            Some(line) => apply_line(&mut state, &line),
            None => state.skipped_lines += 1,
        }
    }

    if state.skipped_lines > 0 {
        debug!("skipped {} unparseable lines", state.skipped_lines);
    }

    let tree = FamilyTree::from_records(state.individuals, state.families);
    debug!(
        "parsed {} individuals, {} families, {} roots",
        tree.individual_count(),
        tree.family_count(),
        tree.roots.len()
    );
    tree
}

fn apply_line(state: &mut ParseState, line: &GedcomLine) {
    // Leaving a level-1 block closes any open birth/death context.
    if line.level <= 1 {
        state.event = EventContext::None;
    }

    if line.level == 0 {
        state.record = open_record(state, line);
        return;
    }

    match state.record {
        RecordState::Individual(_) => apply_individual_tag(state, line),
        RecordState::Family(_) => apply_family_tag(state, line),
        RecordState::None => {}
    }
}

/// Handle a level-0 line: open an INDI or FAM record, or close the current one
fn open_record(state: &mut ParseState, line: &GedcomLine) -> RecordState {
    let (Some(xref), Some(tag)) = (&line.xref, &line.tag) else {
        return RecordState::None;
    };
    match tag.as_str() {
        "INDI" => {
            // Reopening a previously seen id continues the same record.
            state
                .individuals
                .entry(xref.clone())
                .or_insert_with(|| Individual::new(xref.clone()));
            RecordState::Individual(xref.clone())
        }
        "FAM" => {
            state
                .families
                .entry(xref.clone())
                .or_insert_with(|| Family::new(xref.clone()));
            RecordState::Family(xref.clone())
        }
        _ => RecordState::None,
    }
}

fn apply_individual_tag(state: &mut ParseState, line: &GedcomLine) {
    match (line.level, line.tag_str()) {
        (1, "BIRT") => {
            state.event = EventContext::Birth;
            return;
        }
        (1, "DEAT") => {
            state.event = EventContext::Death;
            return;
        }
        _ => {}
    }

    let event = state.event;
    let value = line.value.clone();
    let Some(individual) = state.current_individual() else {
        return;
    };

    match (line.level, line.tag_str()) {
        (1, "NAME") => {
            let (name, given, surname) = split_name(&value);
            individual.name = non_empty(name);
            individual.given_name = given;
            individual.surname = surname;
        }
        (1, "SEX") => individual.sex = non_empty(value),
        (1, "OCCU") => individual.occupation = non_empty(value),
        // Last occurrence wins for FAMC; FAMS entries accumulate.
        (1, "FAMC") => individual.famc = non_empty(strip_xref(&value)),
        (1, "FAMS") => {
            if let Some(id) = non_empty(strip_xref(&value)) {
                individual.fams.push(id);
            }
        }
        (level, "DATE") if level >= 2 => match event {
            EventContext::Birth => individual.birth_date = non_empty(value),
            EventContext::Death => individual.death_date = non_empty(value),
            EventContext::None => {}
        },
        (level, "PLAC") if level >= 2 => match event {
            EventContext::Birth => individual.birth_place = non_empty(value),
            EventContext::Death => individual.death_place = non_empty(value),
            EventContext::None => {}
        },
        _ => {}
    }
}

fn apply_family_tag(state: &mut ParseState, line: &GedcomLine) {
    let value = line.value.clone();
    let Some(family) = state.current_family() else {
        return;
    };

    match (line.level, line.tag_str()) {
        // Last occurrence wins for HUSB/WIFE; CHIL entries accumulate and are
        // deliberately not deduplicated.
        (1, "HUSB") => family.husband = non_empty(strip_xref(&value)),
        (1, "WIFE") => family.wife = non_empty(strip_xref(&value)),
        (1, "CHIL") => {
            if let Some(id) = non_empty(strip_xref(&value)) {
                family.children.push(id);
            }
        }
        _ => {}
    }
}

/// Split a NAME value into display, given, and surname parts
///
/// `John /Smith/` yields display `John Smith`, given `John`, surname `Smith`.
fn split_name(value: &str) -> (String, Option<String>, Option<String>) {
    let display = value.replace('/', " ");
    let display = collapse_spaces(&display);

    let mut given = None;
    let mut surname = None;
    if let Some(start) = value.find('/') {
        given = non_empty(value[..start].trim().to_string());
        if let Some(len) = value[start + 1..].find('/') {
            surname = non_empty(value[start + 1..start + 1 + len].trim().to_string());
        }
    } else {
        given = non_empty(value.trim().to_string());
    }

    (display, given, surname)
}

/// Strip the `@` delimiters from a cross-reference value
fn strip_xref(value: &str) -> String {
    value.trim().trim_matches('@').to_string()
}

fn collapse_spaces(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_name_with_surname() {
        let (display, given, surname) = split_name("John /Smith/");
        assert_eq!(display, "John Smith");
        assert_eq!(given.as_deref(), Some("John"));
        assert_eq!(surname.as_deref(), Some("Smith"));
    }

    #[test]
    fn test_split_name_without_slashes() {
        let (display, given, surname) = split_name("Running Deer");
        assert_eq!(display, "Running Deer");
        assert_eq!(given.as_deref(), Some("Running Deer"));
        assert_eq!(surname, None);
    }

    #[test]
    fn test_split_name_surname_only() {
        let (display, given, surname) = split_name("/Smith/");
        assert_eq!(display, "Smith");
        assert_eq!(given, None);
        assert_eq!(surname.as_deref(), Some("Smith"));
    }

    #[test]
    fn test_unterminated_surname_delimiter() {
        let (display, given, surname) = split_name("John /Smith");
        assert_eq!(display, "John Smith");
        assert_eq!(given.as_deref(), Some("John"));
        assert_eq!(surname, None);
    }
}
