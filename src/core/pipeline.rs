//! End-to-end split run: prepare output, scan, classify, write.

use std::{collections::HashSet, path::PathBuf};

use anyhow::Result;

use super::{
    classify::Classifier,
    context::SplitContext,
    dictionary::{Dictionary, dictionary_name, load_dictionary},
    namespace::DictionaryNamespace,
    scanner::scan_tree,
    writer::{
        IGNORED_PREFIX, check_output_dir, output_path, prepare_output_dir, write_dictionary,
    },
};
use crate::issues::Issue;

/// Per-dictionary outcome of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryReport {
    pub name: String,
    pub used_count: usize,
    pub ignored_count: usize,
    /// `None` when the file could not be written.
    pub used_file: Option<PathBuf>,
    pub ignored_file: Option<PathBuf>,
}

/// Outcome of a complete run.
#[derive(Debug, Default)]
pub struct SplitOutcome {
    pub folders_scanned: usize,
    pub files_scanned: usize,
    /// One report per distinct dictionary name, in command-line order.
    pub dictionaries: Vec<DictionaryReport>,
    pub issues: Vec<Issue>,
    pub used: DictionaryNamespace,
    pub ignored: DictionaryNamespace,
}

/// Run the whole split.
///
/// An unsafe output directory or a failed walk of the source tree is an
/// error; every other problem is recorded as an issue and the run continues.
pub fn run_pipeline(ctx: &SplitContext) -> Result<SplitOutcome> {
    let mut issues = Vec::new();

    check_output_dir(&ctx.output_dir, &ctx.root_dir, &ctx.dictionary_paths)?;

    if let Err(err) = prepare_output_dir(&ctx.output_dir) {
        issues.push(Issue::OutputDirUnprepared {
            path: ctx.output_dir.clone(),
            error: format!("{:#}", err),
        });
    }

    let scan = scan_tree(&ctx.root_dir, &ctx.ignores, &ctx.extensions)?;

    // Distinct dictionary names, in command-line order.
    let mut targets: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut dictionaries: Vec<Dictionary> = Vec::new();

    for path in &ctx.dictionary_paths {
        let name = dictionary_name(path);
        if seen.insert(name.clone()) {
            targets.push(name.clone());
        } else {
            issues.push(Issue::DuplicateDictionaryName {
                name: name.clone(),
                path: path.clone(),
            });
        }

        match load_dictionary(path) {
            Ok(dictionary) => dictionaries.push(dictionary),
            Err(err) => issues.push(Issue::DictionaryUnreadable {
                path: path.clone(),
                error: err.root_cause().to_string(),
            }),
        }
    }

    let classification = Classifier::new(&dictionaries, ctx.match_mode).run(&scan.files);
    issues.extend(classification.issues);

    let mut used = classification.used;
    let mut ignored = classification.ignored;

    let mut reports = Vec::with_capacity(targets.len());
    for name in targets {
        // Unreadable dictionaries still get (empty) output files.
        used.ensure(&name);
        ignored.ensure(&name);

        let used_file = write_or_report(&used, ctx, &name, "", &mut issues);
        let ignored_file = write_or_report(&ignored, ctx, &name, IGNORED_PREFIX, &mut issues);

        reports.push(DictionaryReport {
            used_count: used.len(&name),
            ignored_count: ignored.len(&name),
            name,
            used_file,
            ignored_file,
        });
    }

    Ok(SplitOutcome {
        folders_scanned: scan.folders.len(),
        files_scanned: classification.files_classified,
        dictionaries: reports,
        issues,
        used,
        ignored,
    })
}

fn write_or_report(
    namespace: &DictionaryNamespace,
    ctx: &SplitContext,
    name: &str,
    prefix: &str,
    issues: &mut Vec<Issue>,
) -> Option<PathBuf> {
    match write_dictionary(namespace, &ctx.output_dir, name, prefix) {
        Ok(path) => Some(path),
        Err(err) => {
            issues.push(Issue::OutputUnwritable {
                path: output_path(&ctx.output_dir, name, prefix),
                error: err.root_cause().to_string(),
            });
            None
        }
    }
}
