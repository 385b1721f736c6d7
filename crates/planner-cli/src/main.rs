use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use planner_cli::commands::{add, categories, day, delete, edit, util, week};
use planner_cli::{Cli, Commands, Config};

/// Load config and open database, ensuring the parent directory exists.
fn open_database(config: &Config) -> Result<planner_db::Database> {
    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent).context("failed to create database directory")?;
    }

    planner_db::Database::open(&config.database_path).with_context(|| {
        format!(
            "failed to open database {}",
            config.database_path.display()
        )
    })
}

fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let Some(command) = &cli.command else {
        // No subcommand, show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = load_config(cli.config.as_deref())?;
    let today = Local::now().date_naive();
    let mut stdout = io::stdout().lock();

    match command {
        Commands::Day(args) => {
            let db = open_database(&config)?;
            let date = util::parse_day(&args.date, today)?;
            day::run(&mut stdout, &db, date, args.json, &config.categories)?;
        }
        Commands::Week(args) => {
            let db = open_database(&config)?;
            let date = util::parse_day(&args.date, today)?;
            week::run(&mut stdout, &db, date, args.json, &config.categories)?;
        }
        Commands::Add(args) => {
            let mut db = open_database(&config)?;
            add::run(&mut stdout, &mut db, args, today, &config.categories)?;
        }
        Commands::Edit(args) => {
            let mut db = open_database(&config)?;
            edit::run(&mut stdout, &mut db, args, today, &config.categories)?;
        }
        Commands::Delete(args) => {
            let mut db = open_database(&config)?;
            let mut stdin = io::stdin().lock();
            delete::run(&mut stdin, &mut stdout, &mut db, args)?;
        }
        Commands::Categories => {
            categories::run(&mut stdout, &config.categories)?;
        }
    }

    Ok(())
}
