//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use planner_core::ClockTime;

/// Personal weekly schedule planner.
///
/// Keeps time-blocked events per day in a local database and shows
/// per-category time totals.
#[derive(Debug, Parser)]
#[command(name = "planner", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show one day's events and category totals.
    Day(ViewArgs),

    /// Show the Monday-first week containing a day.
    Week(ViewArgs),

    /// Add an event.
    Add(AddArgs),

    /// Change fields of an existing event.
    Edit(EditArgs),

    /// Delete an event after confirmation.
    Delete(DeleteArgs),

    /// List configured categories.
    Categories,
}

#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Day to show: YYYY-MM-DD, today, yesterday, tomorrow, +N/-N, or "N days ago".
    #[arg(default_value = "today")]
    pub date: String,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Day of the event.
    #[arg(long, default_value = "today")]
    pub date: String,

    /// Category name.
    #[arg(long, default_value = "class")]
    pub category: String,

    /// Main title (required, non-empty).
    #[arg(long)]
    pub title: String,

    /// Optional sub-title.
    #[arg(long)]
    pub sub: Option<String>,

    /// Start time (HH:MM).
    #[arg(long, default_value = "09:00")]
    pub start: ClockTime,

    /// End time (HH:MM).
    #[arg(long, default_value = "10:00")]
    pub end: ClockTime,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// ID of the event to change.
    pub id: String,

    /// Move the event to another day.
    #[arg(long)]
    pub date: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub title: Option<String>,

    /// New sub-title; pass an empty string to clear it.
    #[arg(long)]
    pub sub: Option<String>,

    #[arg(long)]
    pub start: Option<ClockTime>,

    #[arg(long)]
    pub end: Option<ClockTime>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the event to delete.
    pub id: String,

    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}
