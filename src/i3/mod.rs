//! i3-specific implementation.
//!
//! This module provides the concrete backend for the
//! [`WindowManager`](crate::traits::WindowManager) trait, powered by the
//! `i3ipc` client.
//!
//! Nothing outside this module should reference `i3ipc` directly.

pub mod wm;
