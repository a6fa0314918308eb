use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use fp_core::EmissionModel;
use tracing_subscriber::EnvFilter;

use fp_cli::commands::{audit, delete, list, log, preview, summary, types};
use fp_cli::{Cli, Commands, Config};

/// Load config and open database, ensuring the parent directory exists.
fn open_database(config_path: Option<&Path>) -> Result<(fp_db::Database, Config)> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent).context("failed to create database directory")?;
    }

    let db = fp_db::Database::open(&config.database_path).context("failed to open database")?;
    Ok((db, config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

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

    let model = EmissionModel::standard();
    let today = Local::now().date_naive();
    let mut stdout = io::stdout().lock();

    match &cli.command {
        Some(Commands::Log {
            activity_type,
            value,
            date,
        }) => {
            let (mut db, config) = open_database(cli.config.as_deref())?;
            log::run(
                &mut stdout,
                &mut db,
                &model,
                &config.user_id,
                *activity_type,
                *value,
                date.unwrap_or(today),
                today,
            )?;
        }
        Some(Commands::Preview {
            activity_type,
            value,
        }) => {
            // Preview needs no storage
            preview::run(&mut stdout, &model, *activity_type, value)?;
        }
        Some(Commands::Delete { id }) => {
            let (mut db, config) = open_database(cli.config.as_deref())?;
            delete::run(&mut stdout, &mut db, &config.user_id, id)?;
        }
        Some(Commands::List { limit, json }) => {
            let (db, config) = open_database(cli.config.as_deref())?;
            let activities = db.list_activities(&config.user_id)?;
            list::run(&mut stdout, &activities, *limit, *json)?;
        }
        Some(Commands::Summary { date, json }) => {
            let (db, config) = open_database(cli.config.as_deref())?;
            let activities = db.list_activities(&config.user_id)?;
            summary::run(&mut stdout, &activities, date.unwrap_or(today), *json)?;
        }
        Some(Commands::Types { json }) => {
            types::run(&mut stdout, &model, *json)?;
        }
        Some(Commands::Audit) => {
            let (db, config) = open_database(cli.config.as_deref())?;
            let activities = db.list_activities(&config.user_id)?;
            let mismatched = audit::run(&mut stdout, &model, &activities)?;
            if mismatched > 0 {
                anyhow::bail!("audit found {mismatched} mismatched activities");
            }
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
