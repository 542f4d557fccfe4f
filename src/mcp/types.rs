use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::{Rewrite, TransformMode};
use crate::issues::{Issue, Report, ReportLocation, Rule};

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub ignores: Vec<String>,
    pub includes: Vec<String>,
    pub source_root: String,
    pub ignore_test_files: bool,
    pub mode: String,
    pub package: String,
    pub call_names: Vec<String>,
    pub translation_dir: String,
    pub fallback_locale: String,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            ignores: c.ignores,
            includes: c.includes,
            source_root: c.source_root,
            ignore_test_files: c.ignore_test_files,
            mode: c.mode.to_string(),
            package: c.package,
            call_names: c.call_names,
            translation_dir: c.translation_dir,
            fallback_locale: c.fallback_locale,
        }
    }
}

// ============================================================
// Transform Types (transform_source)
// ============================================================

/// Result of transform_source operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransformSourceResult {
    pub file_path: String,
    pub changed: bool,
    pub code: String,
    pub rewrites: Vec<RewriteItem>,
    pub issues: Vec<IssueItem>,
}

/// A rewritten hook or decorator call
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RewriteItem {
    pub binding_name: String,
    pub imported_name: String,
    pub id: String,
    pub line: usize,
    pub col: usize,
}

impl From<&Rewrite> for RewriteItem {
    fn from(r: &Rewrite) -> Self {
        Self {
            binding_name: r.binding_name.clone(),
            imported_name: r.imported_name.clone(),
            id: r.id.clone(),
            line: r.line,
            col: r.col,
        }
    }
}

/// An issue reported by the transform
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueItem {
    pub file_path: String,
    pub line: Option<usize>,
    pub col: Option<usize>,
    /// "error" or "warning"
    pub severity: String,
    pub rule: String,
    pub message: String,
    pub details: Option<String>,
    pub source_line: Option<String>,
}

impl From<&Issue> for IssueItem {
    fn from(issue: &Issue) -> Self {
        let source_line = match issue.location() {
            ReportLocation::Source(ctx) => Some(ctx.source_line.clone()),
            ReportLocation::File { .. } => None,
        };
        let position = issue.position();
        Self {
            file_path: issue.file_path().to_string(),
            line: position.map(|(line, _)| line),
            col: position.map(|(_, col)| col),
            severity: issue.report_severity().to_string(),
            rule: issue.report_rule().to_string(),
            message: issue.message(),
            details: issue.details(),
            source_line,
        }
    }
}

// ============================================================
// Scan Types (scan_project)
// ============================================================

/// Result of scan_project operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanProjectResult {
    pub files_checked: usize,
    /// Number of files that would be rewritten.
    pub total_count: usize,
    pub stats: ScanStats,
    pub items: Vec<ChangedFileItem>,
    /// Issues for every file, not paginated.
    pub issues: Vec<IssueItem>,
    pub pagination: Pagination,
}

#[derive(Debug, Default, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanStats {
    pub rewrite_count: usize,
    pub multiple_usage_count: usize,
    pub missing_translations_count: usize,
    pub parse_error_count: usize,
}

impl ScanStats {
    pub fn record(&mut self, issue: &Issue) {
        match issue.rule() {
            Rule::MultipleUsage => self.multiple_usage_count += 1,
            Rule::MissingTranslations => self.missing_translations_count += 1,
            Rule::ParseError => self.parse_error_count += 1,
        }
    }
}

/// A file that would be rewritten
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChangedFileItem {
    pub file_path: String,
    pub rewrites: Vec<RewriteItem>,
}

/// Pagination info
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

// ============================================================
// Request Parameter Types
// ============================================================

/// Parameters for get_config
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Project root directory path
    pub project_root_path: String,
}

/// Parameters for transform_source
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransformSourceParams {
    /// Project root directory path
    pub project_root_path: String,
    /// Source file path, relative to the project root or absolute. Locates
    /// the translations directory and seeds the generated id.
    pub file_path: String,
    /// Source text to transform instead of reading the file
    pub source: Option<String>,
    /// Overrides the configured mode
    pub mode: Option<TransformMode>,
}

/// Parameters for scan_project
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanProjectParams {
    /// Project root directory path
    pub project_root_path: String,
    /// Maximum number of files to return (default: 50, max: 100)
    pub limit: Option<u32>,
    /// Number of files to skip (default: 0)
    pub offset: Option<u32>,
}
