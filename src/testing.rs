//! Recording [`WindowManager`] double shared by the unit tests.

use crate::model::{NodeKind, OutputInfo, TreeNode, WorkspaceInfo};
use crate::traits::WindowManager;
use std::cell::RefCell;

/// A window manager that serves fixed state and records every command.
#[derive(Debug)]
pub struct MockWm {
    pub outputs: Vec<OutputInfo>,
    pub workspaces: Vec<WorkspaceInfo>,
    pub tree: TreeNode,
    /// Commands containing this substring are rejected.
    fail_on: Option<String>,
    /// When set, every query fails.
    offline: bool,
    commands: RefCell<Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
#[error("mock error: {0}")]
pub struct MockError(pub String);

impl Default for MockWm {
    fn default() -> Self {
        Self {
            outputs: vec![output("DP-1", true), output("HDMI-1", true)],
            workspaces: Vec::new(),
            tree: TreeNode::leaf(1, "root", NodeKind::Root),
            fail_on: None,
            offline: false,
            commands: RefCell::new(Vec::new()),
        }
    }
}

impl MockWm {
    pub fn with_workspaces(workspaces: Vec<WorkspaceInfo>) -> Self {
        Self {
            workspaces,
            ..Self::default()
        }
    }

    pub fn with_tree(tree: TreeNode) -> Self {
        Self {
            tree,
            ..Self::default()
        }
    }

    pub fn failing_on(mut self, pattern: &str) -> Self {
        self.fail_on = Some(pattern.to_string());
        self
    }

    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }

    fn check_online(&self) -> Result<(), MockError> {
        if self.offline {
            Err(MockError("not connected".into()))
        } else {
            Ok(())
        }
    }
}

impl WindowManager for MockWm {
    type Error = MockError;

    fn outputs(&self) -> Result<Vec<OutputInfo>, MockError> {
        self.check_online()?;
        Ok(self.outputs.clone())
    }

    fn workspaces(&self) -> Result<Vec<WorkspaceInfo>, MockError> {
        self.check_online()?;
        Ok(self.workspaces.clone())
    }

    fn tree(&self) -> Result<TreeNode, MockError> {
        self.check_online()?;
        Ok(self.tree.clone())
    }

    fn run_command(&self, command: &str) -> Result<(), MockError> {
        self.check_online()?;
        self.commands.borrow_mut().push(command.to_string());
        match &self.fail_on {
            Some(pattern) if command.contains(pattern.as_str()) => {
                Err(MockError(format!("rejected: {}", command)))
            }
            _ => Ok(()),
        }
    }
}

pub fn output(name: &str, active: bool) -> OutputInfo {
    OutputInfo {
        name: name.into(),
        active,
    }
}

pub fn workspace(num: i64, name: &str, output: &str) -> WorkspaceInfo {
    WorkspaceInfo {
        num,
        name: name.into(),
        output: output.into(),
    }
}
