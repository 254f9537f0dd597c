//! Binary entry point for catfacts.
//!
//! This binary provides the CLI interface for fetching and saving cat facts.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

use catfacts::cli::{
    self, ConfigCommand, DeleteCommand, FetchCommand, FetchDecision, ListCommand,
};
use catfacts::config::CatfactsConfig;
use catfacts::models::FactId;
use catfacts::observability::{self, MetricsConfig};
use catfacts::services::CatFactClient;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Catfacts - fetch random cat facts and keep the good ones.
#[derive(Parser)]
#[command(name = "catfacts")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true, env = "CATFACTS_CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Record counters and print them to stderr after the command.
    #[arg(long, global = true)]
    metrics: bool,

    /// Override the data directory.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Fetch a random fact, then save or discard it.
    Fetch {
        /// Save without asking.
        #[arg(long, conflicts_with = "discard")]
        save: bool,

        /// Discard without asking.
        #[arg(long)]
        discard: bool,
    },

    /// List saved facts, newest first.
    List,

    /// Delete a saved fact.
    Delete {
        /// ID of the fact to delete.
        id: String,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },

    /// Show the effective configuration.
    Config,
}

/// Main entry point.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };
    let config = match cli.data_dir.clone() {
        Some(dir) => config.with_data_dir(dir),
        None => config,
    };
    let config = if cli.metrics {
        config.with_metrics_enabled(true)
    } else {
        config
    };

    if let Err(e) = observability::init_from_settings(&config.logging, cli.verbose) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    let metrics_config = MetricsConfig::from_settings(Some(&config.metrics));
    let metrics = match observability::install_prometheus(&metrics_config) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("Failed to initialize metrics: {e}");
            return ExitCode::FAILURE;
        },
    };

    let result = run_command(cli.command, &config);

    if let Some(handle) = metrics {
        eprint!("{}", handle.render());
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the selected command.
fn run_command(command: Commands, config: &CatfactsConfig) -> catfacts::Result<()> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match command {
        Commands::Fetch { save, discard } => {
            let mut collection = cli::open_collection(config);
            let client = CatFactClient::from_config(&config.api);
            FetchCommand::execute(
                &mut collection,
                &client,
                FetchDecision::from_flags(save, discard),
                &mut input,
                &mut out,
            )
        },
        Commands::List => ListCommand::execute(&cli::open_collection(config), &mut out),
        Commands::Delete { id, yes } => {
            let mut collection = cli::open_collection(config);
            DeleteCommand::execute(&mut collection, &FactId::new(id), yes, &mut input, &mut out)
                .map(|_| ())
        },
        Commands::Config => ConfigCommand::execute(config, &mut out),
    }
}

/// Loads configuration.
///
/// An explicit path must load; otherwise the default locations are tried.
/// Environment overrides apply in both cases.
fn load_config(path: Option<&Path>) -> catfacts::Result<CatfactsConfig> {
    let config = match path {
        Some(path) => CatfactsConfig::load_from_file(path)?,
        None => CatfactsConfig::load_default(),
    };
    Ok(config.with_env_overrides())
}
