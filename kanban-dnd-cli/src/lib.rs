//! Kanban DnD CLI library
//!
//! Argument parsing, logging setup and command implementations for the
//! `kanban-dnd` binary. Kept as a library so commands can be tested in
//! process.

pub mod cli;
pub mod commands;
pub mod exit_codes;
pub mod logging;
pub mod render;
