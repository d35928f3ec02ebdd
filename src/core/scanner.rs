//! Recursive enumeration of the source files to classify.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Result of walking the source tree.
///
/// Both lists are in depth-first pre-order, siblings sorted by file name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub folders: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// Walk `root` and collect directories and eligible files.
///
/// A path containing any of `ignores` is skipped together with its subtree.
/// A regular file is kept when its path contains any of `extensions`
/// (substring containment, so `app.tsx` passes for `ts`).
///
/// A directory whose contents cannot be listed is recorded but not descended
/// into. Any path that cannot be stat'ed aborts the walk.
pub fn scan_tree(root: &Path, ignores: &[String], extensions: &[String]) -> Result<ScanResult> {
    let mut result = ScanResult::default();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_ignored(&entry.path().to_string_lossy(), ignores));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                // Listing failed but the directory itself was already yielded.
                if err.path().is_some_and(|path| fs::metadata(path).is_ok()) {
                    continue;
                }
                return Err(err)
                    .with_context(|| format!("Cannot access path under {}", root.display()));
            }
        };
        let path = entry.path();

        // Symlinks are classified by their target.
        let metadata = fs::metadata(path)
            .with_context(|| format!("Cannot stat path: {}", path.display()))?;

        if metadata.is_dir() {
            result.folders.push(path.to_path_buf());
        } else if metadata.is_file() && has_allowed_extension(&path.to_string_lossy(), extensions)
        {
            result.files.push(path.to_path_buf());
        }
    }

    Ok(result)
}

fn is_ignored(path: &str, ignores: &[String]) -> bool {
    ignores.iter().any(|ignore| path.contains(ignore.as_str()))
}

fn has_allowed_extension(path: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| path.contains(ext.as_str()))
}
