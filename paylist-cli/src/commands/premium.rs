//! Premium command - toggle the contacts caching entitlement

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;

use paylist_core::config::Config;

use super::ensure_paylist_dir;

#[derive(Subcommand)]
pub enum PremiumCommands {
    /// Enable premium (offline contacts cache)
    #[command(name = "on")]
    On,
    /// Disable premium
    #[command(name = "off")]
    Off,
    /// Show premium status
    Status,
}

pub fn run(command: Option<PremiumCommands>) -> Result<()> {
    let paylist_dir = ensure_paylist_dir()?;
    let mut config = Config::load(&paylist_dir)?;

    match command {
        Some(PremiumCommands::On) => {
            config.set_premium(true);
            config.save(&paylist_dir)?;
            println!("{}", "Premium enabled".green());
            println!("Contacts are now cached after each successful load.");
        }
        Some(PremiumCommands::Off) => {
            config.set_premium(false);
            config.save(&paylist_dir)?;
            println!("{}", "Premium disabled".yellow());
        }
        Some(PremiumCommands::Status) | None => {
            if config.premium {
                println!("Premium is {}", "ON".green());
            } else {
                println!("Premium is {}", "OFF".yellow());
            }
        }
    }
    Ok(())
}
