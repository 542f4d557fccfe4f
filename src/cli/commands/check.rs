use anyhow::Result;

use super::super::args::CheckCommand;
use super::{
    CommandResult, CommandSummary,
    helper::{context_for, finish_run},
};

/// Run the transform in memory and report what it would fail on or skip.
pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = context_for(&cmd.common, &cmd.files)?;
    let run = ctx.run();
    Ok(finish_run(CommandSummary::Check, &run))
}
