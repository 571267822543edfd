//! Errors shared by every tool.

/// Contradictory or missing command-line options.
///
/// Raised before any request is sent to the window manager.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(pub &'static str);
