use std::path::{Path, PathBuf};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{
    cli::CommonArgs,
    config::load_config,
    core::{TransformContext, TransformMode},
};

use super::types::{
    ChangedFileItem, ConfigDto, ConfigValues, GetConfigParams, IssueItem, Pagination, RewriteItem,
    ScanProjectParams, ScanProjectResult, ScanStats, TransformSourceParams, TransformSourceResult,
};

#[derive(Clone)]
pub struct I18nInjectMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for I18nInjectMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl I18nInjectMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Get the current i18n-inject configuration
    #[tool(description = "Get the current i18n-inject configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        let config_dto = ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        };

        to_json_result(&config_dto)
    }

    /// Transform a single file and return the rewritten code
    #[tool(
        description = "Inject translation arguments into the i18n hook and decorator calls of one file. Transforms the file on disk, or the given source text as if it lived at filePath. Nothing is written."
    )]
    pub async fn transform_source(
        &self,
        params: Parameters<TransformSourceParams>,
    ) -> Result<CallToolResult, McpError> {
        let TransformSourceParams {
            project_root_path,
            file_path,
            source,
            mode,
        } = params.0;

        let ctx = context_for(&project_root_path, mode)?;

        let file_path = resolve_file_path(&project_root_path, &file_path);
        let outcome = match source {
            Some(source) => ctx.transform_text(&file_path, source),
            None => ctx.transform_file(&file_path),
        };

        let (code, rewrites) = match &outcome.output {
            Some(output) => (
                output.code.clone(),
                output.rewrites.iter().map(RewriteItem::from).collect(),
            ),
            None => (String::new(), Vec::new()),
        };

        let result = TransformSourceResult {
            changed: outcome.is_changed(),
            code,
            rewrites,
            issues: outcome.issues.iter().map(IssueItem::from).collect(),
            file_path: outcome.file_path,
        };

        to_json_result(&result)
    }

    /// Scan the project for calls the transform would rewrite
    #[tool(
        description = "Scan the project for i18n hook and decorator calls the transform would rewrite. Returns a paginated list of files with their rewrites, plus every issue found."
    )]
    pub async fn scan_project(
        &self,
        params: Parameters<ScanProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = &params.0.project_root_path;
        let limit = params.0.limit.map(|v| v as usize).unwrap_or(50).min(100);
        let offset = params.0.offset.map(|v| v as usize).unwrap_or(0);

        let common = CommonArgs {
            source_root: Some(PathBuf::from(path)),
            mode: None,
            verbose: false,
        };
        let ctx = TransformContext::new(&common)
            .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))?;

        let run = ctx.run();
        let issues = run.issues();

        let mut stats = ScanStats::default();
        for issue in &issues {
            stats.record(issue);
        }

        let all_items: Vec<ChangedFileItem> = run
            .changed()
            .filter_map(|outcome| {
                outcome.output.as_ref().map(|output| ChangedFileItem {
                    file_path: outcome.file_path.clone(),
                    rewrites: output.rewrites.iter().map(RewriteItem::from).collect(),
                })
            })
            .collect();
        stats.rewrite_count = all_items.iter().map(|item| item.rewrites.len()).sum();

        let total_count = all_items.len();

        // Apply pagination
        let items: Vec<ChangedFileItem> = all_items.into_iter().skip(offset).take(limit).collect();
        let has_more = offset + items.len() < total_count;

        let result = ScanProjectResult {
            files_checked: run.outcomes.len(),
            total_count,
            stats,
            items,
            issues: issues.iter().map(IssueItem::from).collect(),
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        };

        to_json_result(&result)
    }
}

#[tool_handler]
impl ServerHandler for I18nInjectMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "i18n-inject MCP lets AI agents preview how i18n hook and decorator calls \
                 (useI18n, withI18n) get their translations injected.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. scan_project - List files whose calls would be rewritten, plus issues (paginated)\n\
                 3. transform_source - Show the rewritten code of one file\n\n\
                 Recommended Workflow:\n\
                 1. Use scan_project to find affected files and issues\n\
                 2. Fix multiple-usage errors first: only one argument-less call per file can receive translations\n\
                 3. Add the missing translation files reported as missing-translations\n\
                 4. Use transform_source to inspect the result for a single file"
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = I18nInjectMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}

// ============================================================
// Helpers
// ============================================================

fn context_for(
    project_root_path: &str,
    mode: Option<TransformMode>,
) -> Result<TransformContext, McpError> {
    let common = CommonArgs {
        source_root: Some(PathBuf::from(project_root_path)),
        mode,
        verbose: false,
    };
    TransformContext::with_files(&common, &[])
        .map_err(|e| McpError::internal_error(format!("Failed to initialize: {}", e), None))
}

fn resolve_file_path(project_root_path: &str, file_path: &str) -> String {
    let path = Path::new(file_path);
    if path.is_absolute() {
        file_path.to_string()
    } else {
        Path::new(project_root_path)
            .join(path)
            .to_string_lossy()
            .to_string()
    }
}

fn to_json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}
