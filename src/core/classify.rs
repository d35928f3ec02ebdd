//! Usage classification of dictionary keys against source files.
//!
//! Every (source file, dictionary, key) triple is classified independently:
//! a match records the key as used, a miss records it as ignored. A key that
//! is used anywhere is removed from the ignored set and never returns there,
//! so the final sets are disjoint regardless of file order.

use std::{fs, path::Path};

use regex::Regex;

use super::{
    dictionary::{Dictionary, DictionaryEntry},
    matcher::{MatchMode, compile_key},
    namespace::DictionaryNamespace,
};
use crate::issues::Issue;

/// Classify one key against one source file's text.
///
/// Invariant: after this returns, `entry.key` is not in both `used` and
/// `ignored` for `dictionary`.
pub fn classify(
    source_text: &str,
    dictionary: &str,
    entry: &DictionaryEntry,
    pattern: &Regex,
    used: &mut DictionaryNamespace,
    ignored: &mut DictionaryNamespace,
) {
    if pattern.is_match(source_text) {
        used.insert(dictionary, &entry.key, &entry.line);
    } else {
        ignored.insert(dictionary, &entry.key, &entry.line);
    }

    if used.contains(dictionary, &entry.key) && ignored.contains(dictionary, &entry.key) {
        ignored.remove(dictionary, &entry.key);
    }
}

/// A dictionary entry with its compiled pattern.
struct CompiledEntry {
    entry: DictionaryEntry,
    pattern: Regex,
}

struct CompiledDictionary {
    name: String,
    entries: Vec<CompiledEntry>,
}

/// Output of a classification pass.
#[derive(Debug, Default)]
pub struct Classification {
    pub used: DictionaryNamespace,
    pub ignored: DictionaryNamespace,
    pub issues: Vec<Issue>,
    /// Number of source files compared.
    pub files_classified: usize,
}

/// Classifies source files against a fixed set of dictionaries.
///
/// Keys are compiled once up front; keys that fail to compile are reported
/// and excluded from both sets.
pub struct Classifier {
    dictionaries: Vec<CompiledDictionary>,
    issues: Vec<Issue>,
}

impl Classifier {
    pub fn new(dictionaries: &[Dictionary], mode: MatchMode) -> Self {
        let mut issues = Vec::new();
        let dictionaries = dictionaries
            .iter()
            .map(|dictionary| CompiledDictionary {
                name: dictionary.name.clone(),
                entries: dictionary
                    .entries
                    .iter()
                    .filter_map(|entry| match compile_key(&entry.key, mode) {
                        Ok(pattern) => Some(CompiledEntry {
                            entry: entry.clone(),
                            pattern,
                        }),
                        Err(err) => {
                            issues.push(Issue::InvalidPattern {
                                dictionary: dictionary.name.clone(),
                                key: entry.key.clone(),
                                error: err.to_string(),
                            });
                            None
                        }
                    })
                    .collect(),
            })
            .collect();

        Self {
            dictionaries,
            issues,
        }
    }

    /// Classify every key of every dictionary against `source_text`.
    pub fn classify_text(
        &self,
        source_text: &str,
        used: &mut DictionaryNamespace,
        ignored: &mut DictionaryNamespace,
    ) {
        for dictionary in &self.dictionaries {
            for compiled in &dictionary.entries {
                classify(
                    source_text,
                    &dictionary.name,
                    &compiled.entry,
                    &compiled.pattern,
                    used,
                    ignored,
                );
            }
        }
    }

    /// Read each file once and classify it.
    ///
    /// Unreadable files are classified as empty text and reported.
    pub fn run<P: AsRef<Path>>(self, files: &[P]) -> Classification {
        let mut classification = Classification {
            issues: self.issues.clone(),
            ..Default::default()
        };

        for dictionary in &self.dictionaries {
            classification.used.ensure(&dictionary.name);
            classification.ignored.ensure(&dictionary.name);
        }

        for file in files {
            let path = file.as_ref();
            let text = match read_source(path) {
                Ok(text) => text,
                Err(err) => {
                    classification.issues.push(Issue::SourceUnreadable {
                        path: path.to_path_buf(),
                        error: err.to_string(),
                    });
                    String::new()
                }
            };

            self.classify_text(
                &text,
                &mut classification.used,
                &mut classification.ignored,
            );
            classification.files_classified += 1;
        }

        classification
    }
}

fn read_source(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(matchable_text(&String::from_utf8_lossy(&bytes)))
}

/// Text that keys are matched against: every line of the file, line ending
/// stripped, followed by `" \n"`.
///
/// The trailing space lets a key written as `KEY =value` match `KEY` at the
/// end of a source line.
pub fn matchable_text(content: &str) -> String {
    content.lines().map(|line| format!("{} \n", line)).collect()
}
