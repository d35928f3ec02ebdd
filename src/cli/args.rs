//! CLI argument definitions using clap.
//!
//! The command line takes exactly three flags, each in `--flag=value` form:
//!
//! - `--dir`: root directory to scan for source files
//! - `--dicts`: comma-separated dictionary files
//! - `--exts`: comma-separated extension substrings a file path must contain
//!
//! Everything else comes from the `.dictsplitrc.json` configuration file.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Root directory to scan recursively for source files
    #[arg(long, value_name = "PATH", require_equals = true)]
    pub dir: PathBuf,

    /// Comma-separated list of dictionary files
    #[arg(
        long,
        value_name = "PATHS",
        required = true,
        require_equals = true,
        value_delimiter = ',',
        action = ArgAction::Set
    )]
    pub dicts: Vec<PathBuf>,

    /// Comma-separated list of extension substrings (e.g. js,ts)
    #[arg(
        long,
        value_name = "EXTS",
        required = true,
        require_equals = true,
        value_delimiter = ',',
        action = ArgAction::Set
    )]
    pub exts: Vec<String>,
}
