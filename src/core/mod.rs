//! Core engine: scan the source tree, parse dictionaries, classify keys, write results.
//!
//! ## Module Structure
//!
//! - `scanner`: Recursive file enumeration with ignore and extension filters
//! - `dictionary`: `key=value` dictionary parsing
//! - `matcher`: Compilation of keys into search patterns
//! - `namespace`: Per-dictionary used/ignored key sets
//! - `classify`: The usage-classification engine
//! - `writer`: Output directory preparation and result files
//! - `context`: Merged run settings
//! - `pipeline`: The end-to-end run

pub mod classify;
pub mod context;
pub mod dictionary;
pub mod matcher;
pub mod namespace;
pub mod pipeline;
pub mod scanner;
pub mod writer;

pub use classify::{Classification, Classifier, classify, matchable_text};
pub use context::SplitContext;
pub use dictionary::{
    Dictionary, DictionaryEntry, dictionary_name, extract_key, load_dictionary, parse_entries,
    parse_lines,
};
pub use matcher::{MatchMode, compile_key};
pub use namespace::DictionaryNamespace;
pub use pipeline::{DictionaryReport, SplitOutcome, run_pipeline};
pub use scanner::{ScanResult, scan_tree};
pub use writer::{
    DEFAULT_OUTPUT_DIR, IGNORED_PREFIX, output_path, prepare_output_dir, write_dictionary,
};
