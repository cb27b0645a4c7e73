//! GEDCOM line tokenization
//!
//! GEDCOM is a line-oriented format: `LEVEL [XREF] TAG [VALUE]`. Real-world
//! exports contain malformed lines, so tokenization is tolerant and returns
//! `None` for anything that does not fit the shape.

use lazy_static::lazy_static;
use regex::Regex;

/// One tokenized GEDCOM line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GedcomLine {
    /// Nesting level
    pub level: u32,
    /// Cross-reference id with the `@` delimiters stripped, when present
    pub xref: Option<String>,
    /// Record tag, when present
    pub tag: Option<String>,
    /// Remainder of the line, trimmed
    pub value: String,
}

impl GedcomLine {
    /// Tokenize a single line
    ///
    /// Returns `None` for blank lines and for lines that do not match the
    /// `LEVEL [XREF] TAG [VALUE]` shape; callers skip those silently per the
    /// lenient-parsing policy.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        lazy_static! {
            static ref LINE_PATTERN: Regex =
                Regex::new(r"^\s*(\d+)\s+(?:@([^@\s]+)@\s*)?(?:([A-Z0-9_]+))?(?:\s+(.*))?$")
                    .unwrap();
        }

        if raw.trim().is_empty() {
            return None;
        }

        let caps = LINE_PATTERN.captures(raw)?;
        let level = caps.get(1)?.as_str().parse::<u32>().ok()?;
        let xref = caps.get(2).map(|m| m.as_str().to_string());
        let tag = caps.get(3).map(|m| m.as_str().to_string());
        let value = caps.get(4).map_or("", |m| m.as_str()).trim().to_string();

        Some(Self {
            level,
            xref,
            tag,
            value,
        })
    }

    /// The tag, or an empty string when the line carried none
    #[must_use]
    pub fn tag_str(&self) -> &str {
        self.tag.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_header_line() {
        let line = GedcomLine::parse("0 @I1@ INDI").unwrap();
        assert_eq!(line.level, 0);
        assert_eq!(line.xref.as_deref(), Some("I1"));
        assert_eq!(line.tag.as_deref(), Some("INDI"));
        assert_eq!(line.value, "");
    }

    #[test]
    fn test_tag_value_line() {
        let line = GedcomLine::parse("1 NAME John /Smith/").unwrap();
        assert_eq!(line.level, 1);
        assert_eq!(line.xref, None);
        assert_eq!(line.tag.as_deref(), Some("NAME"));
        assert_eq!(line.value, "John /Smith/");
    }

    #[test]
    fn test_pointer_value_line() {
        let line = GedcomLine::parse("1 HUSB @I1@").unwrap();
        assert_eq!(line.tag.as_deref(), Some("HUSB"));
        assert_eq!(line.value, "@I1@");
    }

    #[test]
    fn test_blank_and_malformed_lines() {
        assert_eq!(GedcomLine::parse(""), None);
        assert_eq!(GedcomLine::parse("   "), None);
        assert_eq!(GedcomLine::parse("not a gedcom line"), None);
        assert_eq!(GedcomLine::parse("X NAME oops"), None);
    }

    #[test]
    fn test_leading_whitespace_tolerated() {
        let line = GedcomLine::parse("  2 DATE 12 MAR 1901").unwrap();
        assert_eq!(line.level, 2);
        assert_eq!(line.value, "12 MAR 1901");
    }
}
