//! Loading GEDCOM file contents from disk
//!
//! The parser itself consumes plain text; this module is the convenience front
//! door that turns a path into that text. Archive extraction (`.zip` uploads)
//! happens upstream of this crate.

use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::error::{GedReaderError, Result};

/// Read a GEDCOM file into a string
///
/// Strips a UTF-8 byte-order mark when present. An unexpected extension is
/// logged but not rejected, since files arrive from many export tools with
/// inconsistent naming.
pub fn load_gedcom_file(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(GedReaderError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase);
    if !matches!(extension.as_deref(), Some("ged" | "gedcom")) {
        warn!(
            "unexpected extension for GEDCOM file: {}",
            path.display()
        );
    }

    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes).map_err(|e| GedReaderError::EncodingError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text).to_string();

    info!(
        "loaded {} ({} bytes)",
        path.display(),
        text.len()
    );
    Ok(text)
}
