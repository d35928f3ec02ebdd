use std::path::PathBuf;

use anyhow::Result;

use crate::{
    cli::args::Arguments,
    config::{Config, load_config},
    core::matcher::MatchMode,
};

/// Everything a split run needs, merged from CLI arguments and configuration.
///
/// The three CLI inputs (`--dir`, `--dicts`, `--exts`) always come from the
/// command line; the remaining settings come from `.dictsplitrc.json` or
/// built-in defaults.
#[derive(Debug, Clone)]
pub struct SplitContext {
    /// Root of the source tree to scan.
    pub root_dir: PathBuf,
    /// Dictionary files, in command-line order.
    pub dictionary_paths: Vec<PathBuf>,
    /// Extension substrings a file path must contain.
    pub extensions: Vec<String>,
    /// Path substrings that exclude a file or directory subtree.
    pub ignores: Vec<String>,
    pub output_dir: PathBuf,
    pub match_mode: MatchMode,
    pub verbose: bool,
    /// Config file the settings were loaded from, if any.
    pub config_file: Option<PathBuf>,
}

impl SplitContext {
    /// Build the context for a CLI invocation, loading configuration from
    /// the working directory upward.
    pub fn new(args: &Arguments) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let loaded = load_config(&cwd)?;
        let mut ctx = Self::from_parts(
            loaded.config,
            args.dir.clone(),
            args.dicts.clone(),
            args.exts.clone(),
        );
        ctx.config_file = loaded.path;
        Ok(ctx)
    }

    pub fn from_parts(
        config: Config,
        root_dir: PathBuf,
        dictionary_paths: Vec<PathBuf>,
        extensions: Vec<String>,
    ) -> Self {
        Self {
            root_dir,
            dictionary_paths: dictionary_paths
                .into_iter()
                .filter(|p| !p.as_os_str().is_empty())
                .collect(),
            // An empty entry would match every path.
            extensions: extensions.into_iter().filter(|e| !e.is_empty()).collect(),
            ignores: config.ignores,
            output_dir: PathBuf::from(config.output_dir),
            match_mode: config.match_mode,
            verbose: config.verbose,
            config_file: None,
        }
    }
}
