//! Schedule planner CLI library.
//!
//! This crate provides the terminal interface for the planner.

mod cli;
pub mod commands;
mod config;

pub use cli::{AddArgs, Cli, Commands, DeleteArgs, EditArgs, ViewArgs};
pub use config::Config;
