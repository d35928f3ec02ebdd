use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::{matcher::MatchMode, writer::DEFAULT_OUTPUT_DIR};

pub const CONFIG_FILE_NAME: &str = ".dictsplitrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Path substrings excluded from the scan, subtree included.
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default)]
    pub match_mode: MatchMode,
    #[serde(default)]
    pub verbose: bool,
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            output_dir: default_output_dir(),
            match_mode: MatchMode::default(),
            verbose: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// An empty ignore entry would exclude the whole tree, and an empty
    /// output directory has no sensible meaning.
    pub fn validate(&self) -> Result<()> {
        if self.ignores.iter().any(|ignore| ignore.is_empty()) {
            bail!("Empty string in 'ignores' would exclude every file");
        }
        if self.output_dir.trim().is_empty() {
            bail!("'outputDir' must not be empty");
        }
        Ok(())
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// The file the config came from; `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
