//! `kin` command entry point.
//!
//! # Responsibility
//! - Resolve configuration, start logging and open the database.
//! - Render seeding outcomes as status lines on stdout.

mod config;
mod render;

use clap::Parser;
use config::{CliConfig, Command};
use kin_core::db::open_db;
use kin_core::{SeedConfig, SeedService, SqliteRepository};
use log::error;
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = CliConfig::parse();
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=cli_run module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &CliConfig) -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = config.log_dir.as_deref() {
        let level = config
            .log_level
            .as_deref()
            .unwrap_or_else(|| kin_core::default_log_level());
        kin_core::init_logging(level, log_dir)?;
    }

    let conn = open_db(&config.db_path)?;
    let mut service = SeedService::new(SqliteRepository::new(&conn), rand::thread_rng());

    match config.command {
        Command::CreateInitialData => {
            let report = service.run(&SeedConfig::default())?;
            for line in render::seed_report_lines(&report) {
                println!("{line}");
            }
        }
        Command::ClearData => {
            let summary = service.clear_data()?;
            println!("{}", render::clear_summary_line(&summary));
        }
    }

    Ok(())
}
