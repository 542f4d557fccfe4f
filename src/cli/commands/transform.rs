use anyhow::{Result, bail};

use super::super::args::TransformCommand;
use super::{
    ChangedFile, CommandResult, CommandSummary, TransformSummary,
    helper::{context_for, finish_run},
};

pub fn transform(cmd: TransformCommand) -> Result<CommandResult> {
    if cmd.stdout && cmd.files.len() != 1 {
        bail!("--stdout needs exactly one file, got {}", cmd.files.len());
    }

    let ctx = context_for(&cmd.common, &cmd.files)?;
    let run = ctx.run();

    let changed_files: Vec<ChangedFile> = run
        .changed()
        .map(|outcome| ChangedFile {
            file_path: outcome.file_path.clone(),
            rewrites: outcome
                .output
                .as_ref()
                .map(|o| o.rewrites.clone())
                .unwrap_or_default(),
        })
        .collect();

    // With --stdout, print the file even when nothing changed
    let stdout = if cmd.stdout {
        run.outcomes
            .first()
            .and_then(|outcome| outcome.output.as_ref())
            .map(|output| output.code.clone())
    } else {
        None
    };

    let written_count = if cmd.apply { run.write_changes()? } else { 0 };

    let summary = CommandSummary::Transform(TransformSummary {
        is_apply: cmd.apply,
        changed_files,
        written_count,
        stdout,
    });
    Ok(finish_run(summary, &run))
}
