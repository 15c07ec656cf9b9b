//! List command - load one list through its composed loader

use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use comfy_table::Table;
use dialoguer::Select;
use tracing::debug;

use paylist_core::adapters::format::format_currency;
use paylist_core::adapters::DateStyle;
use paylist_core::services::RefreshOutcome;
use paylist_core::{
    Card, Contact, ContextOptions, ListFeed, ListKind, Navigator, Transfer, TransferDirection,
};

use super::{get_context, runtime};
use crate::output;

/// Prints the detail of whichever record a row was bound to
pub struct CliNavigator;

impl CliNavigator {
    fn print_detail(rows: Vec<(&str, String)>) {
        let mut table = Table::new();
        for (label, value) in rows {
            table.add_row(vec![label.to_string(), value]);
        }
        println!("{}", table);
    }
}

impl Navigator for CliNavigator {
    fn show_contact(&self, contact: &Contact) {
        println!("{}", contact.name.bold());
        Self::print_detail(vec![
            ("Phone", contact.phone.clone()),
            ("ID", contact.id.to_string()),
        ]);
    }

    fn show_card(&self, card: &Card) {
        println!("{}", card.number.bold());
        Self::print_detail(vec![
            ("Holder", card.holder.clone()),
            ("ID", card.id.to_string()),
        ]);
    }

    fn show_transfer(&self, transfer: &Transfer) {
        println!("{}", transfer.description.bold());
        let direction = match transfer.direction() {
            TransferDirection::Sent => "Sent",
            TransferDirection::Received => "Received",
        };
        Self::print_detail(vec![
            (
                "Amount",
                format_currency(transfer.amount, &transfer.currency_code),
            ),
            ("Direction", direction.to_string()),
            ("From", transfer.sender.clone()),
            ("To", transfer.recipient.clone()),
            ("Date", DateStyle::Long.format(&transfer.date)),
            ("ID", transfer.id.to_string()),
        ]);
    }
}

pub fn run(kind: ListKind, json: bool, pick: bool, fail_live: u32) -> Result<()> {
    let ctx = get_context(ContextOptions {
        simulated_failures: fail_live,
    })?;
    if fail_live > 0 && !ctx.config.demo_mode {
        output::warning("--fail-live only applies in demo mode (run 'pl demo on')");
    }

    let loader = ctx.loader(kind, Arc::new(CliNavigator));
    let feed = ListFeed::new(loader);

    let rt = runtime()?;
    let spinner = output::spinner(&format!("Loading {}...", kind))?;
    let outcome = rt.block_on(feed.refresh());
    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }

    match outcome {
        RefreshOutcome::Loaded { count } => debug!(%kind, count, "list loaded"),
        RefreshOutcome::Failed { message } => anyhow::bail!(message),
        RefreshOutcome::Stale => return Ok(()),
    }

    let items = feed.items();
    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    println!("{}", kind.title().bold());
    if items.is_empty() {
        println!("{}", "Nothing here yet".dimmed());
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["#", "Title", "Details"]);
    for (index, item) in items.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            item.title().to_string(),
            item.subtitle().to_string(),
        ]);
    }
    println!("{}", table);

    if pick {
        let labels: Vec<&str> = items.iter().map(|item| item.title()).collect();
        let choice = Select::new()
            .with_prompt("Open which row?")
            .items(&labels)
            .default(0)
            .interact_opt()?;
        match choice {
            Some(index) => {
                println!();
                feed.select(index);
            }
            None => println!("{}", "Cancelled".dimmed()),
        }
    }

    Ok(())
}
