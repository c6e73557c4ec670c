//! Single-record FASTA input.
//!
//! ```text
//! >read_1 optional description
//! ACGTTGCA
//! GGTA
//! ```
//!
//! The header line is dropped and the remaining lines are joined with
//! surrounding whitespace removed, giving `ACGTTGCAGGTA`.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Sequence of a FASTA record, or `None` when `content` lacks a `>` header.
///
/// ```
/// use sufalign::fasta::parse_sequence;
///
/// assert_eq!(parse_sequence(">T\nGATT\nACA\n").as_deref(), Some("GATTACA"));
/// assert_eq!(parse_sequence("GATTACA"), None);
/// ```
pub fn parse_sequence(content: &str) -> Option<String> {
    let mut lines = content.lines();

    match lines.next() {
        Some(header) if header.trim_start().starts_with('>') => {}
        _ => return None,
    }

    Some(lines.map(str::trim).collect())
}

/// Reads the sequence stored in the FASTA file at `path`.
pub fn read_sequence<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

    parse_sequence(&content).ok_or_else(|| Error::MissingHeader {
        path: path.to_path_buf(),
    })
}
