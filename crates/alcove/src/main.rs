// SPDX-FileCopyrightText: 2026 Alcove Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Alcove - engine plugin host.
//!
//! This is the binary entry point for the Alcove host CLI.

mod bootstrap;
mod doctor;
mod engines;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Alcove - engine plugin host.
#[derive(Parser, Debug)]
#[command(name = "alcove", version, about, long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the XDG hierarchy.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List discovered engines and their resource bindings.
    Engines {
        /// Emit the binding list as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Run diagnostic checks against the host environment.
    Doctor {
        /// Disable colored output.
        #[arg(long)]
        plain: bool,
    },
    /// Manage Alcove configuration.
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Print the effective configuration as TOML.
    Show,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(errors) => {
            alcove_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.host.log_level);

    let exit_code = match cli.command {
        Some(Commands::Engines { json }) => {
            match bootstrap::bootstrap(config).and_then(|host| engines::run_engines(&host, json)) {
                Ok(()) => 0,
                Err(e) => {
                    eprintln!("error: {e}");
                    1
                }
            }
        }
        Some(Commands::Doctor { plain }) => match doctor::run_doctor(&config, plain).await {
            Ok(0) => 0,
            Ok(_failures) => 1,
            Err(e) => {
                eprintln!("error: {e}");
                1
            }
        },
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => match toml::to_string_pretty(&config) {
                Ok(rendered) => {
                    print!("{rendered}");
                    0
                }
                Err(e) => {
                    eprintln!("error: cannot render configuration: {e}");
                    1
                }
            },
        },
        None => {
            println!("alcove: use --help for available commands");
            0
        }
    };

    std::process::exit(exit_code);
}

fn load_config(
    cli: &Cli,
) -> Result<alcove_config::AlcoveConfig, Vec<alcove_config::ConfigError>> {
    match &cli.config {
        Some(path) => alcove_config::load_and_validate_path(path),
        None => alcove_config::load_and_validate(),
    }
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("alcove={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
