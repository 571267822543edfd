//! **i3ws** — workspace tools for the i3 window manager.
//!
//! Three small command-line tools share this library:
//!
//! * `move-i3-workspaces` moves workspaces to another output
//!   ([`mover`]).
//! * `new-i3-workspace` switches to the lowest unused workspace number
//!   ([`allocator`]).
//! * `rename-i3-workspace` renames the focused workspace through an input
//!   prompt, keeping its number prefix ([`renamer`]).
//!
//! # Architecture
//!
//! Every pipeline talks to i3 through [`traits::WindowManager`] only, so the
//! logic is not coupled to the IPC client.  The concrete implementation lives
//! in [`i3`].  Workspace lists given on the command line are parsed by
//! [`workspaces::WorkspaceSet`].

pub mod allocator;
pub mod cli;
pub mod config;
pub mod error;
pub mod i3;
pub mod model;
pub mod mover;
pub mod renamer;
pub mod traits;
pub mod workspaces;

#[cfg(test)]
mod testing;
