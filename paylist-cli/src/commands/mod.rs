//! CLI command implementations

pub mod cache;
pub mod demo;
pub mod list;
pub mod premium;
pub mod status;

use std::path::PathBuf;

use anyhow::{Context, Result};
use paylist_core::{ContextOptions, PaylistContext};

/// Overrides the paylist directory
pub const PAYLIST_DIR_ENV: &str = "PAYLIST_DIR";

/// Get the paylist directory from environment or default
pub fn get_paylist_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(PAYLIST_DIR_ENV) {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".paylist")
    }
}

/// Get or create the paylist directory
pub fn ensure_paylist_dir() -> Result<PathBuf> {
    let paylist_dir = get_paylist_dir();
    std::fs::create_dir_all(&paylist_dir)
        .with_context(|| format!("Failed to create paylist directory: {:?}", paylist_dir))?;
    Ok(paylist_dir)
}

/// Get paylist context
pub fn get_context(options: ContextOptions) -> Result<PaylistContext> {
    let paylist_dir = ensure_paylist_dir()?;
    PaylistContext::with_options(&paylist_dir, options)
        .context("Failed to initialize paylist context")
}

/// Build a current-thread runtime for commands that drive async loads
pub fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")
}
