//! Parsing of `key=value` dictionary files.
//!
//! Blank lines, `#` comments, and lines without `=` are skipped. The key is the
//! part of the trimmed line before the first `=`, and the raw line is kept
//! verbatim so it can be written back unchanged.

use std::{fs, path::Path};

use anyhow::{Context, Result};

/// A single `key=value` entry of a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub key: String,
    /// The untouched source line.
    pub line: String,
}

/// A parsed dictionary file.
#[derive(Debug, Clone)]
pub struct Dictionary {
    /// Basename of the dictionary file; used to name output files.
    pub name: String,
    /// Entries in file order. Duplicate keys are kept; the last one wins
    /// when stored in a namespace.
    pub entries: Vec<DictionaryEntry>,
}

/// Split text into lines, keeping blank lines. Accepts `\n` and `\r\n`.
pub fn parse_lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}

/// Extract the key of a dictionary line.
///
/// Returns `None` for blank lines, `#` comments, and lines without `=`.
/// Whitespace between the key and `=` is part of the key.
///
/// # Examples
///
/// ```
/// use dictsplit::core::extract_key;
///
/// assert_eq!(extract_key("  GREETING=Hello "), Some("GREETING"));
/// assert_eq!(extract_key("A B =x"), Some("A B "));
/// assert_eq!(extract_key("# COMMENT=1"), None);
/// assert_eq!(extract_key("no separator"), None);
/// ```
pub fn extract_key(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }
    trimmed.split_once('=').map(|(key, _)| key)
}

/// Collect the valid entries of dictionary text, in order.
pub fn parse_entries(text: &str) -> Vec<DictionaryEntry> {
    parse_lines(text)
        .into_iter()
        .filter_map(|line| {
            extract_key(line).map(|key| DictionaryEntry {
                key: key.to_string(),
                line: line.to_string(),
            })
        })
        .collect()
}

/// Basename used to identify a dictionary in namespaces and output files.
pub fn dictionary_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Read and parse a dictionary file. Bytes that are not valid UTF-8 are
/// replaced, so Latin-1 files still load.
pub fn load_dictionary(path: &Path) -> Result<Dictionary> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read dictionary file: {}", path.display()))?;
    let content = String::from_utf8_lossy(&bytes);

    Ok(Dictionary {
        name: dictionary_name(path),
        entries: parse_entries(&content),
    })
}
