//! Non-fatal conditions collected during a run.
//!
//! Library code never prints; it records an [`Issue`] and carries on. The CLI
//! layer decides which issues to show (see [`Issue::verbose_only`]).

use std::{fmt, path::PathBuf};

/// A recoverable problem encountered while classifying or writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// A dictionary file could not be read; it is skipped for the whole run.
    DictionaryUnreadable { path: PathBuf, error: String },
    /// A key is not a valid regular expression; it lands in neither set.
    InvalidPattern {
        dictionary: String,
        key: String,
        error: String,
    },
    /// Two dictionary paths share a basename and therefore one result set.
    DuplicateDictionaryName { name: String, path: PathBuf },
    /// The output directory could not be created or cleared.
    OutputDirUnprepared { path: PathBuf, error: String },
    /// An output file could not be opened or written.
    OutputUnwritable { path: PathBuf, error: String },
    /// A source file could not be read and was classified as empty text.
    SourceUnreadable { path: PathBuf, error: String },
}

impl Issue {
    /// Issues shown only when verbose output is enabled.
    pub fn verbose_only(&self) -> bool {
        matches!(self, Issue::SourceUnreadable { .. })
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::DictionaryUnreadable { path, error } => {
                write!(
                    f,
                    "cannot read dictionary file {}: {}",
                    path.display(),
                    error
                )
            }
            Issue::InvalidPattern {
                dictionary,
                key,
                error,
            } => {
                // regex errors are multi-line; keep the last line (the reason)
                let reason = error.lines().last().unwrap_or(error).trim();
                write!(
                    f,
                    "skipping key \"{}\" in {}: invalid pattern ({})",
                    key, dictionary, reason
                )
            }
            Issue::DuplicateDictionaryName { name, path } => write!(
                f,
                "{} shares the name \"{}\" with an earlier dictionary; results are merged",
                path.display(),
                name
            ),
            Issue::OutputDirUnprepared { path, error } => write!(
                f,
                "cannot prepare output directory {}: {}",
                path.display(),
                error
            ),
            Issue::OutputUnwritable { path, error } => {
                write!(f, "cannot write file {}: {}", path.display(), error)
            }
            Issue::SourceUnreadable { path, error } => write!(
                f,
                "cannot read source file {} (treated as empty): {}",
                path.display(),
                error
            ),
        }
    }
}
