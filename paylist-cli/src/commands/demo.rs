//! Demo command - manage demo mode

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;

use paylist_core::adapters::demo::seed_demo_cache;
use paylist_core::adapters::JsonFileContactsCache;
use paylist_core::config::Config;

use super::{ensure_paylist_dir, runtime};

#[derive(Subcommand)]
pub enum DemoCommands {
    /// Enable demo mode
    #[command(name = "on")]
    On,
    /// Disable demo mode
    #[command(name = "off")]
    Off,
    /// Show demo mode status
    Status,
}

pub fn run(command: Option<DemoCommands>) -> Result<()> {
    let paylist_dir = ensure_paylist_dir()?;
    let mut config = Config::load(&paylist_dir)?;

    match command {
        Some(DemoCommands::On) => {
            config.enable_demo_mode();
            config.save(&paylist_dir)?;

            // Something for the cached fallback to serve while trying failures
            let cache = JsonFileContactsCache::in_dir(&paylist_dir);
            if cache.read_blocking().is_err() {
                runtime()?
                    .block_on(seed_demo_cache(&cache))
                    .context("Failed to seed demo contacts cache")?;
            }

            println!("{}", "Demo mode enabled".green());
            println!("Run 'pl list contacts --fail-live 3' to watch retries fall back to the cache.");
        }
        Some(DemoCommands::Off) => {
            config.disable_demo_mode();
            config.save(&paylist_dir)?;
            println!("{}", "Demo mode disabled".yellow());
        }
        Some(DemoCommands::Status) | None => {
            if config.demo_mode {
                println!("Demo mode is {}", "ON".green());
            } else {
                println!("Demo mode is {}", "OFF".yellow());
            }
        }
    }
    Ok(())
}
