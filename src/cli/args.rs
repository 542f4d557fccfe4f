//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Report calls the transform would fail on or skip
//! - `transform`: Rewrite i18n calls (dry-run unless `--apply`)
//! - `init`: Initialize the configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::transform::TransformMode;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Check(cmd)) => cmd.common.verbose,
            Some(Command::Transform(cmd)) => cmd.common.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root; the config file is searched from here (default: current directory)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Where generated translation loaders read from (overrides config file)
    #[arg(long, value_enum)]
    pub mode: Option<TransformMode>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Files to check (default: scan the project)
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TransformCommand {
    /// Files to transform (default: scan the project)
    pub files: Vec<PathBuf>,

    /// Actually write the rewritten files (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Print the transformed code of a single file instead of writing it
    #[arg(long, conflicts_with = "apply")]
    pub stdout: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report i18n calls that cannot be rewritten (repeated calls, missing translations)
    Check(CheckCommand),
    /// Inject ids, fallbacks and translation loaders into useI18n/withI18n calls
    Transform(TransformCommand),
    /// Initialize a new .i18ninjectrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
