use regex::Regex;
use serde::{Deserialize, Serialize};

/// How dictionary keys are matched against source text.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchMode {
    /// The key is used as a regular expression.
    #[default]
    Regex,
    /// The key is matched as a plain substring.
    Literal,
}

/// Compile a dictionary key into a pattern searched anywhere in a file's text.
pub fn compile_key(key: &str, mode: MatchMode) -> Result<Regex, regex::Error> {
    match mode {
        MatchMode::Regex => Regex::new(key),
        MatchMode::Literal => Regex::new(&regex::escape(key)),
    }
}
