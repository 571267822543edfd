//! [`WindowManager`] implementation backed by i3 IPC.
//!
//! The socket is located and spoken to by [`i3ipc::I3Connection`]; this
//! module only converts its replies into the crate's [`model`](crate::model)
//! types.

use crate::model::{NodeKind, OutputInfo, TreeNode, WorkspaceInfo};
use crate::traits::WindowManager;
use i3ipc::reply;
use i3ipc::I3Connection;

/// i3-backed window manager.
///
/// Each method call opens a short-lived IPC connection.
pub struct I3Wm;

/// Errors that can occur when talking to i3.
#[derive(Debug, thiserror::Error)]
#[error("i3 IPC error: {0}")]
pub struct I3WmError(String);

impl Default for I3Wm {
    fn default() -> Self {
        Self
    }
}

impl I3Wm {
    /// Create a new handle.
    ///
    /// No connection is opened eagerly.
    pub fn new() -> Self {
        Self
    }
}

fn connect() -> Result<I3Connection, I3WmError> {
    I3Connection::connect().map_err(|e| I3WmError(format!("connect: {}", e)))
}

fn convert_node(node: reply::Node) -> TreeNode {
    let kind = match node.nodetype {
        reply::NodeType::Root => NodeKind::Root,
        reply::NodeType::Output => NodeKind::Output,
        reply::NodeType::Con => NodeKind::Con,
        reply::NodeType::FloatingCon => NodeKind::FloatingCon,
        reply::NodeType::Workspace => NodeKind::Workspace,
        reply::NodeType::DockArea => NodeKind::DockArea,
        _ => NodeKind::Unknown,
    };
    TreeNode {
        id: node.id,
        name: node.name,
        kind,
        focused: node.focused,
        focus: node.focus,
        nodes: node.nodes.into_iter().map(convert_node).collect(),
        floating_nodes: node.floating_nodes.into_iter().map(convert_node).collect(),
    }
}

/// Turn a command reply into an error when any outcome failed.
fn check_outcomes(command: &str, outcomes: &[reply::CommandOutcome]) -> Result<(), I3WmError> {
    for outcome in outcomes {
        if !outcome.success {
            let reason = outcome.error.as_deref().unwrap_or("unknown error");
            return Err(I3WmError(format!("command {:?} failed: {}", command, reason)));
        }
    }
    Ok(())
}

//  WindowManager implementation

impl WindowManager for I3Wm {
    type Error = I3WmError;

    fn outputs(&self) -> Result<Vec<OutputInfo>, Self::Error> {
        let reply = connect()?
            .get_outputs()
            .map_err(|e| I3WmError(format!("get_outputs: {}", e)))?;
        Ok(reply
            .outputs
            .into_iter()
            .map(|o| OutputInfo {
                name: o.name,
                active: o.active,
            })
            .collect())
    }

    fn workspaces(&self) -> Result<Vec<WorkspaceInfo>, Self::Error> {
        let reply = connect()?
            .get_workspaces()
            .map_err(|e| I3WmError(format!("get_workspaces: {}", e)))?;
        Ok(reply
            .workspaces
            .into_iter()
            .map(|w| WorkspaceInfo {
                num: i64::from(w.num),
                name: w.name,
                output: w.output,
            })
            .collect())
    }

    fn tree(&self) -> Result<TreeNode, Self::Error> {
        let root = connect()?
            .get_tree()
            .map_err(|e| I3WmError(format!("get_tree: {}", e)))?;
        Ok(convert_node(root))
    }

    fn run_command(&self, command: &str) -> Result<(), Self::Error> {
        let reply = connect()?
            .run_command(command)
            .map_err(|e| I3WmError(format!("run_command: {}", e)))?;
        check_outcomes(command, &reply.outcomes)
    }
}
