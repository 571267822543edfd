//! Window-manager state as seen by the workspace tools.
//!
//! These are plain snapshots returned by a
//! [`WindowManager`](crate::traits::WindowManager).  They carry only the
//! fields the tools act on, so test doubles can build them by hand.

/// A workspace number.  i3 reports `-1` for workspaces without a numeric
/// prefix.
pub type WorkspaceNum = i64;

/// A display output known to the window manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputInfo {
    pub name: String,
    /// Whether the output is currently driving a display.
    pub active: bool,
}

/// An open workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceInfo {
    pub num: WorkspaceNum,
    /// Full name, e.g. `"3:mail"`.
    pub name: String,
    /// Name of the output the workspace currently lives on.
    pub output: String,
}

/// Type of a container in the layout tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Root,
    Output,
    Con,
    FloatingCon,
    Workspace,
    DockArea,
    Unknown,
}

/// A container in the layout tree.
///
/// `focus` lists child ids in focus order; its first entry is the child on
/// the focus path.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub id: i64,
    pub name: Option<String>,
    pub kind: NodeKind,
    pub focused: bool,
    pub focus: Vec<i64>,
    pub nodes: Vec<TreeNode>,
    pub floating_nodes: Vec<TreeNode>,
}

impl TreeNode {
    /// A childless node.
    pub fn leaf(id: i64, name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id,
            name: Some(name.into()),
            kind,
            focused: false,
            focus: Vec::new(),
            nodes: Vec::new(),
            floating_nodes: Vec::new(),
        }
    }

    /// Iterate over tiling children followed by floating children.
    pub fn children(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter().chain(self.floating_nodes.iter())
    }

    /// The child on the focus path, if any.
    pub fn focused_child(&self) -> Option<&TreeNode> {
        let first = *self.focus.first()?;
        self.children().find(|c| c.id == first)
    }
}
