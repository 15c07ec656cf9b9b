//! Status command - show mode, entitlements and loader policies

use std::sync::Arc;

use anyhow::Result;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;

use paylist_core::{ContextOptions, ItemsLoader, ListKind};

use super::get_context;
use super::list::CliNavigator;
use crate::output;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListStatus {
    kind: ListKind,
    retries: u32,
    cache_fallback: bool,
    chain: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Status {
    demo_mode: bool,
    premium: bool,
    api_base_url: String,
    cache_path: String,
    cached_contacts: Option<usize>,
    lists: Vec<ListStatus>,
}

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context(ContextOptions::default())?;
    let navigator = Arc::new(CliNavigator);

    let lists = ListKind::ALL
        .into_iter()
        .map(|kind| {
            let policy = kind.policy();
            ListStatus {
                kind,
                retries: policy.retries,
                cache_fallback: policy.cache_fallback,
                chain: ctx.loader(kind, navigator.clone()).name().to_string(),
            }
        })
        .collect();

    let status = Status {
        demo_mode: ctx.config.demo_mode,
        premium: ctx.config.premium,
        api_base_url: ctx.config.api_base_url.clone(),
        cache_path: ctx.contacts_cache.path().display().to_string(),
        cached_contacts: ctx
            .contacts_cache
            .read_blocking()
            .ok()
            .map(|file| file.contacts.len()),
        lists,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("{}", "Paylist Status".bold());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.add_row(vec!["Demo mode", output::yes_no(status.demo_mode)]);
    table.add_row(vec!["Premium", output::yes_no(status.premium)]);
    if !status.demo_mode {
        table.add_row(vec!["API", status.api_base_url.as_str()]);
    }
    let cached = match status.cached_contacts {
        Some(count) => format!("{} contacts ({})", count, status.cache_path),
        None => format!("empty ({})", status.cache_path),
    };
    table.add_row(vec!["Contacts cache", cached.as_str()]);
    println!("{}", table);
    println!();

    println!("{}", "Lists".bold());
    let mut policies = output::create_table();
    policies.set_header(vec!["List", "Retries", "Cache fallback", "Attempts"]);
    for list in &status.lists {
        policies.add_row(vec![
            list.kind.title().to_string(),
            list.retries.to_string(),
            output::yes_no(list.cache_fallback).to_string(),
            list.chain.clone(),
        ]);
    }
    println!("{}", policies);

    if !status.premium {
        println!();
        println!(
            "{}",
            "Cache fallback needs premium. Run 'pl premium on' to enable it.".dimmed()
        );
    }

    Ok(())
}
