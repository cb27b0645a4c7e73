//! Core Individual entity definition
//!
//! This module contains the Individual struct representing a single person in the
//! parsed tree. Nearly every field is optional: genealogical source data is
//! incomplete by nature, and an imported record may carry nothing but an id.

use serde::{Deserialize, Serialize};

use crate::utils::extract_year;

/// A life event annotation attached to an individual
///
/// Events are recorded by callers (annotation tooling) rather than by the parser;
/// the GEDCOM tag set recognized on import does not include generic events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeEvent {
    /// Free-text description of the event
    pub description: Option<String>,
    /// Free-text date of the event
    pub date: Option<String>,
    /// Free-text place of the event
    pub place: Option<String>,
    /// Explicit year, preferred over extraction from `date` when present
    pub year: Option<i32>,
}

impl LifeEvent {
    /// Best available year for this event
    ///
    /// The explicit year field wins; otherwise a four-digit year is extracted
    /// from the free-text date.
    #[must_use]
    pub fn best_year(&self) -> Option<i32> {
        self.year
            .or_else(|| self.date.as_deref().and_then(extract_year))
    }
}

/// Core Individual entity representing a person in the parsed tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    /// Record identifier (GEDCOM cross-reference with delimiters stripped, or
    /// caller-generated)
    pub id: String,
    /// Full display name with surname slashes removed
    pub name: Option<String>,
    /// Given name (the portion of NAME before the surname slashes)
    pub given_name: Option<String>,
    /// Surname (the portion of NAME between the surname slashes)
    pub surname: Option<String>,
    /// Nickname annotation
    pub nickname: Option<String>,
    /// Maiden name annotation
    pub maiden_name: Option<String>,
    /// Sex as recorded in the source; kept as free text because source data is
    /// inconsistent ("M", "male", "F", "?", ...)
    pub sex: Option<String>,
    /// Birth date, free text
    pub birth_date: Option<String>,
    /// Birth place, free text
    pub birth_place: Option<String>,
    /// Death date, free text
    pub death_date: Option<String>,
    /// Death place, free text
    pub death_place: Option<String>,
    /// Occupation
    pub occupation: Option<String>,
    /// Free-text annotations
    pub notes: Vec<String>,
    /// Family where this person is a child (FAMC); a repeated tag overwrites
    pub famc: Option<String>,
    /// Families where this person is a spouse (FAMS); repeated tags accumulate
    pub fams: Vec<String>,
    /// Life event annotations
    pub events: Vec<LifeEvent>,
}

impl Individual {
    /// Create a new individual with the given record id
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Birth year extracted from the free-text birth date
    #[must_use]
    pub fn birth_year(&self) -> Option<i32> {
        self.birth_date.as_deref().and_then(extract_year)
    }

    /// Death year extracted from the free-text death date
    #[must_use]
    pub fn death_year(&self) -> Option<i32> {
        self.death_date.as_deref().and_then(extract_year)
    }
}
