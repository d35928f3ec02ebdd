//! dictsplit - split `key=value` dictionaries into used and unused entries
//!
//! dictsplit scans a source tree, searches every file for each dictionary key
//! (a regular expression by default), and writes two files per dictionary:
//! `<name>` with the entries referenced somewhere in the tree and
//! `ignored_<name>` with the rest.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, console report, exit status)
//! - `config`: Configuration file loading and parsing
//! - `core`: Scanning, dictionary parsing, classification and output
//! - `issues`: Non-fatal problems collected during a run

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
