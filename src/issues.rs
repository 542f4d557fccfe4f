//! Issue types for transform results.
//!
//! Each issue carries everything the reporters (CLI, MCP) need to display it.

use enum_dispatch::enum_dispatch;
use serde::Serialize;

use crate::core::transform::{MultipleUsageError, SkippedRewrite};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rule {
    MultipleUsage,
    MissingTranslations,
    ParseError,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MultipleUsage => write!(f, "multiple-usage"),
            Rule::MissingTranslations => write!(f, "missing-translations"),
            Rule::ParseError => write!(f, "parse-error"),
        }
    }
}

// ============================================================
// Source location
// ============================================================

/// A 1-based position in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

/// A location plus the text of its line, for caret display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceContext {
    pub location: SourceLocation,
    pub source_line: String,
}

impl SourceContext {
    pub fn new(location: SourceLocation, source_line: impl Into<String>) -> Self {
        Self {
            location,
            source_line: source_line.into(),
        }
    }

    /// Build a context from the full source of the file.
    pub fn from_source(location: SourceLocation, source: &str) -> Self {
        let source_line = source
            .lines()
            .nth(location.line.saturating_sub(1))
            .unwrap_or_default()
            .trim_start_matches('\u{feff}')
            .to_string();
        Self {
            location,
            source_line,
        }
    }

    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A hook or decorator called without arguments more than once in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipleUsageIssue {
    /// Location of the second call.
    pub context: SourceContext,
    pub binding_name: String,
    pub count: usize,
}

impl MultipleUsageIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::MultipleUsage
    }

    pub fn from_error(error: &MultipleUsageError, file_path: &str, source: &str) -> Self {
        let location = SourceLocation::new(file_path, error.line, error.col);
        Self {
            context: SourceContext::from_source(location, source),
            binding_name: error.binding_name.clone(),
            count: error.count,
        }
    }
}

/// A call that would be rewritten if its translations existed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingTranslationsIssue {
    pub context: SourceContext,
    pub binding_name: String,
    /// What was looked for, relative to the file's directory.
    pub expected: String,
}

impl MissingTranslationsIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::MissingTranslations
    }

    pub fn from_skipped(skipped: &SkippedRewrite, file_path: &str, source: &str) -> Self {
        let location = SourceLocation::new(file_path, skipped.line, skipped.col);
        Self {
            context: SourceContext::from_source(location, source),
            binding_name: skipped.binding_name.clone(),
            expected: skipped.expected.clone(),
        }
    }
}

/// File could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrorIssue {
    pub file_path: String,
    pub error: String,
}

impl ParseErrorIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::ParseError
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// An issue found while transforming a project.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    MultipleUsage(MultipleUsageIssue),
    MissingTranslations(MissingTranslationsIssue),
    ParseError(ParseErrorIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::MultipleUsage(_) => MultipleUsageIssue::severity(),
            Issue::MissingTranslations(_) => MissingTranslationsIssue::severity(),
            Issue::ParseError(_) => ParseErrorIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::MultipleUsage(_) => MultipleUsageIssue::rule(),
            Issue::MissingTranslations(_) => MissingTranslationsIssue::rule(),
            Issue::ParseError(_) => ParseErrorIssue::rule(),
        }
    }

    pub fn file_path(&self) -> &str {
        match self.location() {
            ReportLocation::Source(ctx) => ctx.file_path(),
            ReportLocation::File { path } => path,
        }
    }

    /// 1-based (line, col), or `None` for whole-file issues.
    pub fn position(&self) -> Option<(usize, usize)> {
        match self.location() {
            ReportLocation::Source(ctx) => Some((ctx.line(), ctx.col())),
            ReportLocation::File { .. } => None,
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// Source code location (has source_line for context display).
    Source(&'a SourceContext),
    /// Whole-file location.
    File { path: &'a str },
}

/// Common interface for displaying issues.
#[enum_dispatch]
pub trait Report {
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display.
    fn message(&self) -> String;

    fn report_severity(&self) -> Severity;

    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<String> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

impl Report for MultipleUsageIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.binding_name.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!(
            "called without arguments {} times; only one call per file can receive translations",
            self.count
        ))
    }

    fn hint(&self) -> Option<String> {
        Some(format!(
            "share a single `{}()` call, or pass arguments explicitly to the others",
            self.binding_name
        ))
    }
}

impl Report for MissingTranslationsIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Source(&self.context)
    }

    fn message(&self) -> String {
        self.binding_name.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("no {} next to this file", self.expected))
    }
}

impl Report for ParseErrorIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.error.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}

// ============================================================
// Ordering for Issue (for sorting in reports)
// ============================================================

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Sort by: file_path, line, col, rule, message
        self.file_path()
            .cmp(other.file_path())
            .then_with(|| self.position().cmp(&other.position()))
            .then_with(|| self.rule().cmp(&other.rule()))
            .then_with(|| self.message().cmp(&other.message()))
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
