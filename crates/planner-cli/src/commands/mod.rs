//! CLI subcommand implementations.

pub mod add;
pub mod categories;
pub mod day;
pub mod delete;
pub mod edit;
pub mod util;
pub mod week;
