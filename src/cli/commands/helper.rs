use std::path::PathBuf;

use anyhow::Result;

use super::super::args::CommonArgs;
use super::{CommandResult, CommandSummary};
use crate::core::{TransformContext, TransformRun};
use crate::issues::{Issue, Severity};

/// Build the context for a command: explicit files, or a project scan.
pub fn context_for(common: &CommonArgs, files: &[PathBuf]) -> Result<TransformContext> {
    if files.is_empty() {
        TransformContext::new(common)
    } else {
        TransformContext::with_files(common, files)
    }
}

pub fn finish(
    summary: CommandSummary,
    mut issues: Vec<Issue>,
    source_files_checked: usize,
    exit_on_errors: bool,
) -> CommandResult {
    issues.sort();

    let parse_error_count = issues
        .iter()
        .filter(|i| matches!(i, Issue::ParseError(_)))
        .count();

    let error_count = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    CommandResult {
        summary,
        error_count,
        warning_count,
        exit_on_errors,
        issues,
        parse_error_count,
        source_files_checked,
    }
}

/// Finish a command that ran the transform over a project.
pub fn finish_run(summary: CommandSummary, run: &TransformRun) -> CommandResult {
    finish(summary, run.issues(), run.outcomes.len(), true)
}
