//! Console output for a split run.
//!
//! Kept out of the core so the engine can be used as a library without
//! printing side effects. Progress goes to stdout, warnings to stderr.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::{DictionaryReport, SplitContext, SplitOutcome};
use crate::issues::Issue;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the run header: root, dictionaries, extensions and any config file.
pub fn print_header(ctx: &SplitContext) {
    print_header_to(ctx, &mut io::stdout().lock());
}

pub fn print_header_to<W: Write>(ctx: &SplitContext, writer: &mut W) {
    let dictionaries: Vec<String> = ctx
        .dictionary_paths
        .iter()
        .map(|p| p.display().to_string())
        .collect();

    let _ = writeln!(
        writer,
        "{} {}",
        "Root folder:".bold(),
        ctx.root_dir.display()
    );
    let _ = writeln!(
        writer,
        "{} {}",
        "Dictionary files:".bold(),
        dictionaries.join(", ")
    );
    let _ = writeln!(
        writer,
        "{} {}",
        "Used extensions:".bold(),
        ctx.extensions.join(", ")
    );
    if !ctx.ignores.is_empty() {
        let _ = writeln!(
            writer,
            "{} {}",
            "Ignored paths:".bold(),
            ctx.ignores.join(", ")
        );
    }
    if let Some(config_file) = &ctx.config_file {
        let _ = writeln!(
            writer,
            "{} {}",
            "Config file:".bold(),
            config_file.display()
        );
    }
    let _ = writeln!(writer);
}

/// Print warnings, the per-dictionary summary, and the final status line.
pub fn print_outcome(outcome: &SplitOutcome, verbose: bool) {
    print_issues_to(&outcome.issues, verbose, &mut io::stderr().lock());
    print_summary_to(outcome, &mut io::stdout().lock());
}

/// Print warnings. Verbose-only issues are counted instead of listed unless
/// `verbose` is set.
pub fn print_issues_to<W: Write>(issues: &[Issue], verbose: bool, writer: &mut W) {
    let mut hidden = 0;
    for issue in issues {
        if issue.verbose_only() && !verbose {
            hidden += 1;
            continue;
        }
        let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), issue);
    }

    if hidden > 0 {
        let _ = writeln!(
            writer,
            "{} {} source file(s) could not be read and were treated as empty (set {} in {} for details)",
            "warning:".bold().yellow(),
            hidden,
            "\"verbose\": true".cyan(),
            crate::config::CONFIG_FILE_NAME
        );
    }
}

pub fn print_summary_to<W: Write>(outcome: &SplitOutcome, writer: &mut W) {
    let name_width = outcome
        .dictionaries
        .iter()
        .map(|d| UnicodeWidthStr::width(d.name.as_str()))
        .max()
        .unwrap_or(0);

    for report in &outcome.dictionaries {
        print_dictionary(report, name_width, writer);
    }

    let files = outcome.files_scanned;
    let dictionaries = outcome.dictionaries.len();
    let msg = format!(
        "Scanned {} source {} against {} {}",
        files,
        if files == 1 { "file" } else { "files" },
        dictionaries,
        if dictionaries == 1 {
            "dictionary"
        } else {
            "dictionaries"
        }
    );
    let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
}

fn print_dictionary<W: Write>(report: &DictionaryReport, name_width: usize, writer: &mut W) {
    let padding = name_width.saturating_sub(UnicodeWidthStr::width(report.name.as_str()));
    let _ = writeln!(
        writer,
        "  {}{:padding$}  {} used, {} ignored",
        report.name.bold(),
        "",
        report.used_count.to_string().green(),
        report.ignored_count.to_string().yellow(),
        padding = padding
    );
    print_output_file(report.used_file.as_deref(), writer);
    print_output_file(report.ignored_file.as_deref(), writer);
}

fn print_output_file<W: Write>(path: Option<&Path>, writer: &mut W) {
    match path {
        Some(path) => {
            let _ = writeln!(writer, "    {} {}", "-->".blue(), path.display());
        }
        None => {
            let _ = writeln!(writer, "    {} {}", FAILURE_MARK.red(), "not written".red());
        }
    }
}
