//! Paylist CLI - contacts, cards and transfers in your terminal

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{cache, demo, list, premium, status};
use paylist_core::ListKind;

/// Filter directives for diagnostics, e.g. `PAYLIST_LOG=paylist_core=debug`
const LOG_ENV: &str = "PAYLIST_LOG";

/// Paylist - contacts, cards and transfers in your terminal
#[derive(Parser)]
#[command(name = "pl", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load and show one list
    List {
        /// Which list (contacts, cards, sent, received)
        kind: ListKind,
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Pick a row and open it
        #[arg(long, conflicts_with = "json")]
        pick: bool,
        /// Fail the first N live fetches (demo mode)
        #[arg(long, value_name = "N", default_value_t = 0)]
        fail_live: u32,
    },

    /// Show mode, entitlements and the loader policy per list
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage the premium entitlement (offline contacts cache)
    Premium {
        #[command(subcommand)]
        command: Option<premium::PremiumCommands>,
    },

    /// Manage demo mode
    Demo {
        #[command(subcommand)]
        command: Option<demo::DemoCommands>,
    },

    /// Inspect or clear the contacts cache
    Cache {
        #[command(subcommand)]
        command: cache::CacheCommands,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init (e.g. under a test harness) is harmless
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::List {
            kind,
            json,
            pick,
            fail_live,
        } => list::run(kind, json, pick, fail_live),
        Commands::Status { json } => status::run(json),
        Commands::Premium { command } => premium::run(command),
        Commands::Demo { command } => demo::run(command),
        Commands::Cache { command } => cache::run(command),
    }
}
