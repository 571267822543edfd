//! Allocate the next free workspace number.
//!
//! A number is taken when an open workspace's name starts with it
//! (`"3"`, `"3:mail"`) or when it is listed as reserved.  The lowest free
//! number in `1..=max` is switched to with `workspace number "N[:name]"`, so
//! i3 keeps ordering workspaces by number even when a name is given.

use crate::model::{WorkspaceInfo, WorkspaceNum};
use crate::traits::WindowManager;
use crate::workspaces::WorkspaceSet;
use log::{debug, warn};
use std::collections::BTreeSet;
use std::num::ParseIntError;

/// Default upper bound for allocated workspace numbers.
pub const DEFAULT_MAX: WorkspaceNum = 20;

/// Options for a single `new-i3-workspace` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOptions {
    /// Numbers never handed out, even when free.
    pub reserved: WorkspaceSet,
    /// Highest number considered.
    pub max: WorkspaceNum,
    /// Optional label for the new workspace.
    pub name: Option<String>,
}

impl Default for NewOptions {
    fn default() -> Self {
        Self {
            reserved: WorkspaceSet::new(),
            max: DEFAULT_MAX,
            name: None,
        }
    }
}

/// Errors produced while allocating a workspace.
#[derive(Debug, thiserror::Error)]
pub enum AllocError<E: std::error::Error + 'static> {
    #[error("no more workspaces available (max {max})")]
    NoAvailableWorkspace { max: WorkspaceNum },
    #[error("window manager error: {0}")]
    Wm(#[source] E),
}

/// The number prefix of a workspace name: everything before the first
/// colon, or the whole name.
pub fn workspace_number(name: &str) -> Result<WorkspaceNum, ParseIntError> {
    let number = match name.find(':') {
        Some(idx) => &name[..idx],
        None => name,
    };
    number.parse()
}

/// Numbers occupied by open workspaces plus the reserved ones.
///
/// Names without a numeric prefix occupy nothing; they are returned
/// alongside so the caller can report them.
pub fn active_numbers(
    workspaces: &[WorkspaceInfo],
    reserved: &WorkspaceSet,
) -> (BTreeSet<WorkspaceNum>, Vec<String>) {
    let mut active = BTreeSet::new();
    let mut skipped = Vec::new();
    for ws in workspaces {
        match workspace_number(&ws.name) {
            Ok(n) => {
                active.insert(n);
            }
            Err(_) => skipped.push(ws.name.clone()),
        }
    }
    active.extend(reserved.iter());
    (active, skipped)
}

/// Lowest number in `1..=max` not in `active`.
pub fn first_free(active: &BTreeSet<WorkspaceNum>, max: WorkspaceNum) -> Option<WorkspaceNum> {
    (1..=max).find(|n| !active.contains(n))
}

/// Query the open workspaces and return the next available number.
pub fn next_available<W: WindowManager>(
    wm: &W,
    reserved: &WorkspaceSet,
    max: WorkspaceNum,
) -> Result<WorkspaceNum, AllocError<W::Error>> {
    let workspaces = wm.workspaces().map_err(AllocError::Wm)?;
    let (active, skipped) = active_numbers(&workspaces, reserved);
    for name in &skipped {
        warn!("ignoring workspace {:?}: name has no number prefix", name);
    }
    debug!("occupied workspace numbers: {:?}", active);
    first_free(&active, max).ok_or(AllocError::NoAvailableWorkspace { max })
}

/// The `workspace number` target for `number`, with `name` appended as a
/// label when given.
pub fn workspace_label(number: WorkspaceNum, name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => {
            format!("{}:{}", number, name.replace('"', "\\\""))
        }
        _ => number.to_string(),
    }
}

/// Switch to workspace `number`, creating it with the optional label.
pub fn activate<W: WindowManager>(
    wm: &W,
    number: WorkspaceNum,
    name: Option<&str>,
) -> Result<(), AllocError<W::Error>> {
    let command = format!("workspace number \"{}\"", workspace_label(number, name));
    debug!("running: {}", command);
    wm.run_command(&command).map_err(AllocError::Wm)
}

/// Find the next free workspace and switch to it, returning its number.
pub fn new_workspace<W: WindowManager>(
    wm: &W,
    options: &NewOptions,
) -> Result<WorkspaceNum, AllocError<W::Error>> {
    let number = next_available(wm, &options.reserved, options.max)?;
    activate(wm, number, options.name.as_deref())?;
    Ok(number)
}
