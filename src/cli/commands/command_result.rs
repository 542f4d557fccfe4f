use crate::core::Rewrite;
use crate::issues::Issue;

#[derive(Debug)]
pub enum CommandSummary {
    Check,
    Transform(TransformSummary),
    Init(InitSummary),
}

/// A file the transform rewrote (or would rewrite).
#[derive(Debug)]
pub struct ChangedFile {
    pub file_path: String,
    pub rewrites: Vec<Rewrite>,
}

#[derive(Debug)]
pub struct TransformSummary {
    pub is_apply: bool,
    pub changed_files: Vec<ChangedFile>,
    /// Files actually written (0 unless `is_apply`).
    pub written_count: usize,
    /// Transformed code when running with `--stdout`.
    pub stdout: Option<String>,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    pub warning_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
    /// All issues found, sorted.
    pub issues: Vec<Issue>,
    /// Number of files that failed to read or parse.
    pub parse_error_count: usize,
    /// Number of source files that were processed.
    pub source_files_checked: usize,
}
