//! # bookstore-cli: Bookstore Inventory Command Line
//!
//! ## Modules
//!
//! - [`cli`] - clap argument definitions
//! - [`config`] - Environment configuration
//! - [`commands`] - The inventory command processor
//! - [`error`] - Command errors and their messages
//!
//! ## Output Discipline
//! Command results and error messages go to stdout, logs go to stderr.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;

use std::process::ExitCode;

use bookstore_db::Database;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::config::AppConfig;
use crate::error::{CommandError, CommandResult};

/// Log filter when RUST_LOG is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Log filter for `--verbose` when RUST_LOG is unset.
const VERBOSE_LOG_FILTER: &str = "info,bookstore_cli=debug,bookstore_db=debug,sqlx=warn";

/// Runs one invocation of the CLI.
///
/// ## Exit Codes
/// - `0` - Command succeeded
/// - `1` - Command refused or failed (message printed on stdout)
/// - `2` - Bad configuration or runtime start failure
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match AppConfig::load() {
        Ok(config) => config.with_database_path(cli.db.clone()),
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::from(2);
        }
    };

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start runtime: {}", e);
            return ExitCode::from(2);
        }
    };

    match runtime.block_on(execute(&config, &cli.command)) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            warn!(kind = ?err.kind(), error = %err, "Command failed");
            println!("{}", err);
            ExitCode::FAILURE
        }
    }
}

/// Opens the database, runs `command`, closes the database.
///
/// The pool is closed on every path once it was opened.
pub async fn execute(config: &AppConfig, command: &Command) -> CommandResult<String> {
    let db = Database::new(config.db_config())
        .await
        .map_err(CommandError::Storage)?;

    info!(path = %config.database_path.display(), "Inventory opened");

    let mut rng = rand::thread_rng();
    let result = commands::dispatch(&db, command, &mut rng)
        .await
        .and_then(|report| report.render());

    db.close().await;
    result
}

/// Initializes the tracing subscriber for structured logging on stderr.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `--verbose` - Debug for bookstore crates
/// - Default: warnings only
fn init_tracing(verbose: bool) {
    let default = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
