//! CLI interface for mondegreen
//!
//! Argument definitions and command implementations for the one-shot query
//! and the interactive search loop.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ConstraintArgs};
