//! Rename the focused workspace through an interactive prompt.
//!
//! The focused workspace's *prefix* (its number plus colon, e.g. `"5:"`) is
//! kept in front of whatever the user types so that i3 still orders the
//! workspace by number.
//!
//! The prompt is an external program built from a template.  The default,
//! `i3-input`, performs the rename itself through the `{i3cmd}` argument.
//! Prompt programs that only collect text (rofi, dmenu, …) are combined with
//! `send_to_wm`, in which case the typed text is sent as a
//! `rename workspace to "…"` command.

use crate::error::ValidationError;
use crate::model::{NodeKind, TreeNode};
use crate::traits::WindowManager;
use log::{debug, info};
use std::process::{Command, ExitStatus};

/// Default prompt command template.
pub const DEFAULT_INPUT_CMD: &str = "i3-input -F {i3cmd} -P {prompt}{prefix}";

/// Text shown in front of the input field.
pub const PROMPT: &str = "workspace name> ";

/// Options for a single `rename-i3-workspace` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameOptions {
    /// Template for the prompt command; `{prompt}`, `{prefix}` and `{i3cmd}`
    /// are substituted in every argument.
    pub input_cmd: String,
    /// Send the rename command ourselves after reading the input.
    pub send_to_wm: bool,
}

impl Default for RenameOptions {
    fn default() -> Self {
        Self {
            input_cmd: DEFAULT_INPUT_CMD.to_string(),
            send_to_wm: false,
        }
    }
}

impl RenameOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.input_cmd.trim().is_empty() {
            return Err(ValidationError("--input-cmd must not be empty"));
        }
        Ok(())
    }
}

/// Failure to obtain input from the prompt program.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("input command is empty")]
    NoProgram,
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} failed ({status}): {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Errors produced while renaming a workspace.
#[derive(Debug, thiserror::Error)]
pub enum RenameError<E: std::error::Error + 'static> {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("could not find active workspace")]
    NotFound,
    #[error(transparent)]
    ExternalTool(#[from] PromptError),
    #[error("window manager error: {0}")]
    Wm(#[source] E),
}

/// Walk the focus path from `node` and return the first node matching
/// `predicate`.
pub fn find_focused<'a, P>(node: &'a TreeNode, predicate: P) -> Option<&'a TreeNode>
where
    P: Fn(&TreeNode) -> bool,
{
    let mut node = node;
    loop {
        if predicate(node) {
            return Some(node);
        }
        node = node.focused_child()?;
    }
}

/// Name of the workspace currently holding focus.
pub fn focused_workspace_name<W: WindowManager>(wm: &W) -> Result<String, RenameError<W::Error>> {
    let tree = wm.tree().map_err(RenameError::Wm)?;
    find_focused(&tree, |n| n.kind == NodeKind::Workspace)
        .and_then(|ws| ws.name.clone())
        .ok_or(RenameError::NotFound)
}

/// The part of a workspace name that is kept across a rename.
///
/// ```
/// use i3ws::renamer::prefix_of;
/// assert_eq!(prefix_of("5:mail"), "5:");
/// assert_eq!(prefix_of("10"), "10:");
/// assert_eq!(prefix_of("scratch"), "scratch");
/// ```
pub fn prefix_of(name: &str) -> String {
    if let Some(idx) = name.find(':') {
        return name[..=idx].to_string();
    }
    if name.parse::<i64>().is_ok() {
        return format!("{}:", name);
    }
    name.to_string()
}

/// Escape text for use inside a double-quoted i3 command argument.
pub fn escape_name(input: &str) -> String {
    input.replace('\\', "\\\\").replace('"', "\\\"")
}

/// The rename command handed to `i3-input`, which substitutes the typed
/// text for `%s`.
pub fn rename_command_template(prefix: &str) -> String {
    format!("rename workspace to \"{}%s\"", escape_name(prefix))
}

/// Split `template` into program and arguments, substitute the
/// placeholders, run it and return its trimmed standard output.
pub fn prompt_for_input(
    template: &str,
    prompt: &str,
    prefix: &str,
    i3cmd: &str,
) -> Result<String, PromptError> {
    let mut parts = template.split_whitespace();
    let program = parts.next().ok_or(PromptError::NoProgram)?;
    let args: Vec<String> = parts
        .map(|arg| {
            arg.replace("{prompt}", prompt)
                .replace("{prefix}", prefix)
                .replace("{i3cmd}", i3cmd)
        })
        .collect();

    info!("running: {} {}", program, args.join(" "));
    let output = Command::new(program)
        .args(&args)
        .output()
        .map_err(|source| PromptError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(PromptError::Failed {
            program: program.to_string(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Send the rename command for `input` when `send_to_wm` is set and the
/// input is not blank.  Returns whether a command was sent.
pub fn apply_rename<W: WindowManager>(
    wm: &W,
    input: &str,
    send_to_wm: bool,
) -> Result<bool, RenameError<W::Error>> {
    if !send_to_wm || input.trim().is_empty() {
        return Ok(false);
    }
    let command = format!("rename workspace to \"{}\"", escape_name(input));
    debug!("running: {}", command);
    wm.run_command(&command).map_err(RenameError::Wm)?;
    Ok(true)
}

/// Prompt for a new name for the focused workspace and apply it.
pub fn rename_workspace<W: WindowManager>(
    wm: &W,
    options: &RenameOptions,
) -> Result<bool, RenameError<W::Error>> {
    options.validate()?;

    let name = focused_workspace_name(wm)?;
    let prefix = prefix_of(&name);
    info!("focused workspace {:?}, prefix {:?}", name, prefix);

    let i3cmd = rename_command_template(&prefix);
    let input = prompt_for_input(&options.input_cmd, PROMPT, &prefix, &i3cmd)?;
    debug!("input: {:?}", input);

    apply_rename(wm, &input, options.send_to_wm)
}
