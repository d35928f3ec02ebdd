//! Output directory handling and result serialization.

use std::{
    env,
    ffi::OsString,
    fs::{self, OpenOptions},
    io::{BufWriter, Write},
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use super::namespace::DictionaryNamespace;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "./build";

/// Filename prefix of the ignored-entries file.
pub const IGNORED_PREFIX: &str = "ignored_";

/// Refuse an output directory whose clearing would delete inputs.
///
/// Rejected: the working directory or any of its ancestors, the scan root or
/// any of its ancestors, and any directory containing a dictionary file.
pub fn check_output_dir(output_dir: &Path, root: &Path, dictionaries: &[PathBuf]) -> Result<()> {
    let output = resolve_path(output_dir)?;
    let cwd = resolve_path(Path::new("."))?;

    if cwd.starts_with(&output) {
        bail!(
            "Output directory {} contains the working directory; refusing to clear it",
            output_dir.display()
        );
    }
    if resolve_path(root)?.starts_with(&output) {
        bail!(
            "Output directory {} contains the scan root {}; refusing to clear it",
            output_dir.display(),
            root.display()
        );
    }
    for dictionary in dictionaries {
        if resolve_path(dictionary)?.starts_with(&output) {
            bail!(
                "Output directory {} contains dictionary file {}; refusing to clear it",
                output_dir.display(),
                dictionary.display()
            );
        }
    }

    Ok(())
}

/// Absolute, normalized form of `path`, with symlinks resolved on the part
/// that exists.
fn resolve_path(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .context("Failed to read the working directory")?
            .join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    let mut existing = normalized;
    let mut missing: Vec<OsString> = Vec::new();
    while !existing.exists() {
        match existing.file_name() {
            Some(name) => {
                missing.push(name.to_os_string());
                existing.pop();
            }
            None => break,
        }
    }

    let mut resolved = existing.canonicalize().unwrap_or(existing);
    resolved.extend(missing.iter().rev());
    Ok(resolved)
}

/// Create `dir` if needed, then delete everything inside it.
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to list {}", dir.display()))?;
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to list {}", dir.display()))?
            .path();
        let removed = if path.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        removed.with_context(|| format!("Failed to remove {}", path.display()))?;
    }

    Ok(())
}

/// Path of the output file for `dictionary` with the given prefix.
pub fn output_path(output_dir: &Path, dictionary: &str, prefix: &str) -> PathBuf {
    output_dir.join(format!("{}{}", prefix, dictionary))
}

/// Append every stored line of `dictionary` to `<output_dir>/<prefix><dictionary>`.
///
/// The file is created when missing. Lines are written one per line, in key order.
pub fn write_dictionary(
    namespace: &DictionaryNamespace,
    output_dir: &Path,
    dictionary: &str,
    prefix: &str,
) -> Result<PathBuf> {
    let path = output_path(output_dir, dictionary, prefix);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open {}", path.display()))?;

    let mut writer = BufWriter::new(file);
    for line in namespace.lines(dictionary) {
        writeln!(writer, "{}", line)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}
