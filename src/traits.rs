//! Core trait that decouples the workspace tools from the i3 IPC client.
//!
//! Every pipeline ([`mover`](crate::mover), [`allocator`](crate::allocator),
//! [`renamer`](crate::renamer)) only depends on [`WindowManager`].  The
//! concrete i3 backend lives in [`i3`](crate::i3); tests use a recording
//! double.

use crate::model::{OutputInfo, TreeNode, WorkspaceInfo};

/// Abstraction over a window manager that can report its outputs,
/// workspaces and layout tree, and execute textual commands.
///
/// Commands use the i3 command language, e.g.
/// `[workspace=3] move workspace to output DP-1`.
pub trait WindowManager {
    /// The error type produced by this window manager.
    type Error: std::error::Error + Send + 'static;

    /// Return every output the window manager knows about, active or not.
    fn outputs(&self) -> Result<Vec<OutputInfo>, Self::Error>;

    /// Return the currently open workspaces.
    fn workspaces(&self) -> Result<Vec<WorkspaceInfo>, Self::Error>;

    /// Return the full layout tree, rooted at the root container.
    fn tree(&self) -> Result<TreeNode, Self::Error>;

    /// Run a command.
    ///
    /// An error is returned both when the request fails and when the window
    /// manager rejects the command.
    fn run_command(&self, command: &str) -> Result<(), Self::Error>;
}
