use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result, anyhow};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{
        file_scanner::scan_files,
        transform::{MultipleUsageError, TransformOptions, TransformOutput, transform_source},
    },
    issues::{Issue, MissingTranslationsIssue, MultipleUsageIssue, ParseErrorIssue},
};

/// Result of transforming one file.
#[derive(Debug)]
pub struct FileOutcome {
    pub file_path: String,
    /// Transformed output; `None` when the file failed to read, parse or
    /// transform (see `issues`).
    pub output: Option<TransformOutput>,
    pub issues: Vec<Issue>,
}

impl FileOutcome {
    pub fn is_changed(&self) -> bool {
        self.output.as_ref().is_some_and(|o| o.is_changed())
    }
}

/// Outcome of a project-wide run, sorted by file path.
#[derive(Debug, Default)]
pub struct TransformRun {
    pub outcomes: Vec<FileOutcome>,
}

impl TransformRun {
    pub fn changed(&self) -> impl Iterator<Item = &FileOutcome> {
        self.outcomes.iter().filter(|o| o.is_changed())
    }

    pub fn issues(&self) -> Vec<Issue> {
        let mut issues: Vec<Issue> = self
            .outcomes
            .iter()
            .flat_map(|o| o.issues.iter().cloned())
            .collect();
        issues.sort();
        issues
    }

    /// Write every changed file back to disk. Returns how many were written.
    pub fn write_changes(&self) -> Result<usize> {
        let mut written = 0;
        for outcome in self.changed() {
            if let Some(output) = &outcome.output {
                fs::write(&outcome.file_path, &output.code)
                    .with_context(|| format!("Failed to write {}", outcome.file_path))?;
                written += 1;
            }
        }
        Ok(written)
    }
}

/// Everything needed to transform a project: merged configuration and the
/// files to process.
pub struct TransformContext {
    /// Merged configuration (CLI args > config file > defaults).
    pub config: Config,

    /// Project root directory (where the config file search starts).
    pub root_dir: PathBuf,

    /// Source files to transform.
    pub files: BTreeSet<String>,

    pub verbose: bool,

    options: TransformOptions,
}

impl TransformContext {
    /// Load configuration, apply CLI overrides and scan the source root.
    pub fn new(common_args: &CommonArgs) -> Result<Self> {
        let mut ctx = Self::without_files(common_args)?;

        let scan_root = ctx.scan_root();
        let path = scan_root
            .to_str()
            .ok_or_else(|| anyhow!("Invalid path: {:?}", scan_root))?;
        let scan_result = scan_files(
            path,
            &ctx.config.includes,
            &ctx.config.ignores,
            ctx.config.ignore_test_files,
            ctx.verbose,
        );

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if ctx.verbose { "" } else { " (use -v for details)" }
            );
        }

        ctx.files = scan_result.files;
        Ok(ctx)
    }

    /// Load configuration and use an explicit file list instead of scanning.
    pub fn with_files(common_args: &CommonArgs, files: &[PathBuf]) -> Result<Self> {
        let mut ctx = Self::without_files(common_args)?;
        ctx.files = files
            .iter()
            .map(|f| f.to_string_lossy().to_string())
            .collect();
        Ok(ctx)
    }

    fn without_files(common_args: &CommonArgs) -> Result<Self> {
        let verbose = common_args.verbose;

        // Priority: CLI --source-root arg > current directory
        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));

        let config_result = load_config(&root_dir)?;

        if verbose && !config_result.from_file {
            eprintln!(
                "{} No {} found, using default configuration",
                "note:".bold(),
                crate::config::CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        if let Some(mode) = common_args.mode {
            config.mode = mode;
        }

        let options = config.transform_options();
        Ok(Self {
            config,
            root_dir,
            files: BTreeSet::new(),
            verbose,
            options,
        })
    }

    /// Directory scanned for source files: the config's `sourceRoot`
    /// resolved against the project root.
    pub fn scan_root(&self) -> PathBuf {
        let source_root = self.config.source_root.trim_start_matches("./");
        if source_root.is_empty() || source_root == "." {
            self.root_dir.clone()
        } else if Path::new(source_root).is_absolute() {
            PathBuf::from(source_root)
        } else {
            self.root_dir.join(source_root)
        }
    }

    pub fn options(&self) -> &TransformOptions {
        &self.options
    }

    /// Transform every file in parallel.
    pub fn run(&self) -> TransformRun {
        let mut outcomes: Vec<FileOutcome> = self
            .files
            .par_iter()
            .map(|file_path| self.transform_file(file_path))
            .collect();
        outcomes.sort_by(|a, b| a.file_path.cmp(&b.file_path));

        if self.verbose {
            for outcome in &outcomes {
                if let Some(output) = &outcome.output {
                    for rewrite in &output.rewrites {
                        eprintln!(
                            "{} {}:{}:{} {} -> {}",
                            "rewrite:".bold().green(),
                            outcome.file_path,
                            rewrite.line,
                            rewrite.col,
                            rewrite.binding_name,
                            rewrite.id
                        );
                    }
                }
            }
        }

        TransformRun { outcomes }
    }

    /// Read and transform a single file, turning failures into issues.
    pub fn transform_file(&self, file_path: &str) -> FileOutcome {
        let source = match fs::read_to_string(file_path) {
            Ok(source) => source,
            Err(e) => {
                return FileOutcome {
                    file_path: file_path.to_string(),
                    output: None,
                    issues: vec![Issue::ParseError(ParseErrorIssue {
                        file_path: file_path.to_string(),
                        error: format!("Failed to read {}: {}", file_path, e),
                    })],
                };
            }
        };

        self.transform_text(file_path, source)
    }

    /// Transform source text as if it were the contents of `file_path`.
    pub fn transform_text(&self, file_path: &str, source: String) -> FileOutcome {
        match transform_source(source.clone(), Path::new(file_path), &self.options) {
            Ok(output) => {
                let issues = output
                    .skipped
                    .iter()
                    .map(|skipped| {
                        Issue::MissingTranslations(MissingTranslationsIssue::from_skipped(
                            skipped, file_path, &source,
                        ))
                    })
                    .collect();
                FileOutcome {
                    file_path: file_path.to_string(),
                    output: Some(output),
                    issues,
                }
            }
            Err(err) => {
                let issue = match err.downcast_ref::<MultipleUsageError>() {
                    Some(usage) => Issue::MultipleUsage(MultipleUsageIssue::from_error(
                        usage, file_path, &source,
                    )),
                    None => Issue::ParseError(ParseErrorIssue {
                        file_path: file_path.to_string(),
                        error: err.to_string(),
                    }),
                };
                if self.verbose {
                    eprintln!("{} {}", "warning:".bold().yellow(), err);
                }
                FileOutcome {
                    file_path: file_path.to_string(),
                    output: None,
                    issues: vec![issue],
                }
            }
        }
    }
}
