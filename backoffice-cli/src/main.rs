//! Main entry point for the back-office CLI.

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{Context, format::FormatKind, token::TokenAction};

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "BACKOFFICE_LOG";

/// Back-office CLI
#[derive(Parser)]
#[command(name = "backoffice")]
#[command(about = "Command-line client for the back-office dashboard", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(
        long,
        short,
        global = true,
        help = "Path to a TOML configuration file (e.g., backoffice.toml). If not provided, defaults and BACKOFFICE_* variables are used."
    )]
    config: Option<PathBuf>,

    /// Path to the session storage document
    #[arg(
        long,
        short,
        global = true,
        help = "Path to the session storage document. Defaults to the platform data directory."
    )]
    storage: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Subcommands for the back-office CLI
#[derive(Subcommand)]
enum Commands {
    /// Manage the stored session token
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Ask the API whether the stored token is still valid
    Check,

    /// Fetch and cache the profile of the signed-in user
    Whoami,

    /// Forget the stored token and cached profile
    Logout,

    /// List the registered dashboard routes
    Routes,

    /// Run the navigation guard for a route and print the outcome
    Navigate {
        /// Name of the route to navigate to (e.g., dashboard)
        route: String,

        /// Name of the route being left
        #[arg(long, help = "Name of the route being left (e.g., login)")]
        from: Option<String>,
    },

    /// Format values the way the dashboard displays them
    Format {
        #[command(subcommand)]
        kind: FormatKind,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();
    let Cli {
        config,
        storage,
        command,
    } = Cli::parse();
    let context = || Context::load(config.as_deref(), storage.clone());

    match command {
        Commands::Format { kind } => commands::format::run(&kind),
        Commands::Routes => commands::navigate::list_routes(),
        Commands::Token { action } => commands::token::run(&context()?, action),
        Commands::Check => commands::session::check(&context()?).await,
        Commands::Whoami => commands::session::whoami(&context()?).await,
        Commands::Logout => commands::session::logout(&context()?),
        Commands::Navigate { route, from } => {
            commands::navigate::navigate(&context()?, &route, from.as_deref()).await
        }
    }
}
