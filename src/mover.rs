//! Move workspaces to a given output.
//!
//! Either an explicit list of workspaces is moved, or (with `--all`) every
//! workspace that is not already on the target output, minus an optional
//! exception list.
//!
//! Each move is a separate `[workspace=N] move workspace to output O`
//! command.  A failed move is logged and the remaining moves still run; the
//! batch then reports [`MoveError::Incomplete`] with every workspace that
//! could not be moved.  Moves that succeeded are not rolled back.

use crate::error::ValidationError;
use crate::model::WorkspaceNum;
use crate::traits::WindowManager;
use crate::workspaces::WorkspaceSet;
use log::{debug, error, info, warn};
use std::io::Write;

/// Options for a single `move-i3-workspaces` invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveOptions {
    /// Print what would be moved without sending any command.
    pub dry_run: bool,
    /// Select every workspace not already on the target output.
    pub all: bool,
    /// Workspaces to leave alone, only meaningful with `all`.
    pub except: WorkspaceSet,
    /// Explicit workspaces to move.
    pub workspaces: WorkspaceSet,
    /// Target output name.
    pub output: String,
}

/// Errors produced while moving workspaces.
#[derive(Debug, thiserror::Error)]
pub enum MoveError<E: std::error::Error + 'static> {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("output {0} does not exist")]
    OutputNotFound(String),
    #[error("could not move workspace(s) {}", join_nums(.failed))]
    Incomplete { failed: Vec<WorkspaceNum> },
    #[error("window manager error: {0}")]
    Wm(#[source] E),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

fn join_nums(nums: &[WorkspaceNum]) -> String {
    nums.iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

impl MoveOptions {
    /// Check that exactly one selection mode is active and an output is set.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.all && !self.workspaces.is_empty() {
            return Err(ValidationError(
                "can't specify both --all and a list of workspaces",
            ));
        }
        if !self.all && self.workspaces.is_empty() {
            return Err(ValidationError("no workspaces specified"));
        }
        if !self.except.is_empty() && !self.workspaces.is_empty() {
            return Err(ValidationError(
                "can't specify both --except and a list of workspaces",
            ));
        }
        if self.output.is_empty() {
            return Err(ValidationError("no output specified"));
        }
        Ok(())
    }
}

/// The i3 command that moves workspace `num` to `output`.
pub fn move_command(num: WorkspaceNum, output: &str) -> String {
    format!("[workspace={}] move workspace to output {}", num, output)
}

/// Fail unless `output` is one of the currently active outputs.
pub fn check_output<W: WindowManager>(wm: &W, output: &str) -> Result<(), MoveError<W::Error>> {
    let outputs = wm.outputs().map_err(MoveError::Wm)?;
    if outputs.iter().any(|o| o.active && o.name == output) {
        Ok(())
    } else {
        Err(MoveError::OutputNotFound(output.to_string()))
    }
}

/// Compute the set of workspaces to move.
///
/// With `all`, the live workspace list is filtered; otherwise the explicit
/// list is used as given, even for workspaces already on the target.
pub fn resolve<W: WindowManager>(
    wm: &W,
    options: &MoveOptions,
) -> Result<WorkspaceSet, MoveError<W::Error>> {
    if !options.all {
        return Ok(options.workspaces.clone());
    }

    let workspaces = wm.workspaces().map_err(MoveError::Wm)?;
    let mut targets = Vec::new();
    for ws in workspaces {
        if ws.output == options.output {
            continue;
        }
        if options.except.contains(ws.num) {
            debug!("skipping excepted workspace {}", ws.num);
            continue;
        }
        // i3 numbers purely named workspaces -1; they can't be addressed
        // by number.
        if ws.num < 0 {
            warn!("skipping workspace {:?}: it has no number", ws.name);
            continue;
        }
        targets.push(ws.num);
    }
    Ok(targets.into_iter().collect())
}

/// Announce and (unless dry-run) perform each move, in ascending order.
pub fn execute<W: WindowManager, O: Write>(
    wm: &W,
    targets: &WorkspaceSet,
    options: &MoveOptions,
    out: &mut O,
) -> Result<(), MoveError<W::Error>> {
    if options.dry_run {
        writeln!(out, "Dry run:")?;
    }
    if targets.is_empty() {
        writeln!(out, "Nothing to do!")?;
    }

    let mut failed = Vec::new();
    for num in targets.iter() {
        writeln!(out, "Moving workspace {} to output {}", num, options.output)?;
        if options.dry_run {
            continue;
        }
        let command = move_command(num, &options.output);
        debug!("running: {}", command);
        if let Err(e) = wm.run_command(&command) {
            error!("failed to move workspace {}: {}", num, e);
            failed.push(num);
        }
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(MoveError::Incomplete { failed })
    }
}

/// Validate `options`, check the target output, then move the resolved
/// workspaces.
pub fn move_workspaces<W: WindowManager, O: Write>(
    wm: &W,
    options: &MoveOptions,
    out: &mut O,
) -> Result<(), MoveError<W::Error>> {
    options.validate()?;
    check_output(wm, &options.output)?;
    let targets = resolve(wm, options)?;
    info!("{} workspace(s) to move to {}", targets.len(), options.output);
    execute(wm, &targets, options, out)
}
