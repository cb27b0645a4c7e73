//! Date utilities shared across the parsing and analysis pipelines
//!
//! Genealogical source data carries dates as free text ("ABT 1852", "12 MAR 1901",
//! "before 1700"), so year extraction works on the raw string rather than a parsed
//! calendar date.

use lazy_static::lazy_static;
use regex::Regex;

/// Lowest birth age considered plausible for a mother
const MIN_MOTHER_AGE: i32 = 12;
/// Highest birth age considered plausible for a mother
const MAX_MOTHER_AGE: i32 = 60;

/// Extract a four-digit year from a free-text date string
///
/// Accepts years in the range 1000–2029, which covers the material found in
/// real genealogy exports while rejecting day/month digit runs.
///
/// # Arguments
/// * `date` - The free-text date to scan
///
/// # Returns
/// The first year found, or None if the string contains no recognizable year
#[must_use]
pub fn extract_year(date: &str) -> Option<i32> {
    lazy_static! {
        static ref YEAR_PATTERN: Regex = Regex::new(r"\b(1\d{3}|20[0-2]\d)\b").unwrap();
    }

    YEAR_PATTERN
        .captures(date)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i32>().ok())
}

/// Calculate the mother's age at a child's birth, if plausible
///
/// Returns the difference between the birth years only when it falls inside the
/// plausible childbearing range of 12–60 years. Values outside that range almost
/// always indicate a data-entry error in the source file, so None is returned
/// rather than a nonsensical age.
#[must_use]
pub fn calculate_mother_age(child_birth_year: i32, mother_birth_year: i32) -> Option<i32> {
    let age = child_birth_year - mother_birth_year;
    if (MIN_MOTHER_AGE..=MAX_MOTHER_AGE).contains(&age) {
        Some(age)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_year_from_plain_year() {
        assert_eq!(extract_year("1852"), Some(1852));
    }

    #[test]
    fn test_extract_year_from_gedcom_date() {
        assert_eq!(extract_year("12 MAR 1901"), Some(1901));
        assert_eq!(extract_year("ABT 1723"), Some(1723));
    }

    #[test]
    fn test_extract_year_range_bounds() {
        assert_eq!(extract_year("999"), None);
        assert_eq!(extract_year("2029"), Some(2029));
        assert_eq!(extract_year("2030"), None);
    }

    #[test]
    fn test_extract_year_missing() {
        assert_eq!(extract_year("unknown"), None);
        assert_eq!(extract_year(""), None);
    }

    #[test]
    fn test_mother_age_plausible() {
        assert_eq!(calculate_mother_age(1950, 1920), Some(30));
        assert_eq!(calculate_mother_age(1950, 1938), Some(12));
        assert_eq!(calculate_mother_age(1950, 1890), Some(60));
    }

    #[test]
    fn test_mother_age_implausible() {
        assert_eq!(calculate_mother_age(1950, 1945), None);
        assert_eq!(calculate_mother_age(1950, 1880), None);
        assert_eq!(calculate_mother_age(1950, 1960), None);
    }
}
