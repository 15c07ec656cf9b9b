//! Cache command - inspect or clear the contacts cache file

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use dialoguer::Confirm;

use paylist_core::adapters::JsonFileContactsCache;

use super::get_paylist_dir;
use crate::output;

#[derive(Subcommand)]
pub enum CacheCommands {
    /// Show the cached contacts
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Delete the cache file
    Clear {
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },
}

pub fn run(command: CacheCommands) -> Result<()> {
    let cache = JsonFileContactsCache::in_dir(&get_paylist_dir());

    match command {
        CacheCommands::Show { json } => {
            let file = match cache.read_blocking() {
                Ok(file) => file,
                Err(e) if e.is_unavailable() => {
                    output::info("No cached contacts yet");
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&file)?);
                return Ok(());
            }

            println!(
                "{} ({} contacts, saved {})",
                "Contacts cache".bold(),
                file.contacts.len(),
                file.saved_at.format("%Y-%m-%d %H:%M UTC")
            );
            let mut table = output::create_table();
            table.set_header(vec!["Name", "Phone"]);
            for contact in &file.contacts {
                table.add_row(vec![contact.name.as_str(), contact.phone.as_str()]);
            }
            println!("{}", table);
            println!("{}", cache.path().display().to_string().dimmed());
        }
        CacheCommands::Clear { force } => {
            if !force
                && !Confirm::new()
                    .with_prompt("Delete the cached contacts?")
                    .default(false)
                    .interact()?
            {
                println!("{}", "Cancelled".dimmed());
                return Ok(());
            }

            if cache.clear()? {
                output::success("Contacts cache cleared");
            } else {
                output::info("No cached contacts to clear");
            }
        }
    }
    Ok(())
}
