//! Paylist Core - one loader abstraction over contacts, cards and transfers
//!
//! This crate follows hexagonal architecture:
//!
//! - **domain**: Native records and the uniform [`ListItem`]
//! - **ports**: The [`ItemsLoader`] capability and the source/cache traits
//! - **adapters**: Per-source loaders, caches, HTTP and demo sources
//! - **services**: Fallback/retry decorators and the per-list policy table

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use adapters::{DemoPaymentsProvider, Flaky, JsonFileContactsCache, PaymentsApiClient};
use config::Config;
use ports::{CardsSource, ContactsSource, TransfersSource};

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result as CoreResult};
pub use domain::{Card, Contact, ListItem, Transfer, TransferDirection};
pub use ports::{ItemsLoader, SharedLoader};
pub use services::{Composer, Entitlements, ListFeed, ListKind, LoaderExt, Navigator};

/// Options for building a context
#[derive(Debug, Clone, Default)]
pub struct ContextOptions {
    /// Fail the first N live fetches (demo mode only)
    pub simulated_failures: u32,
}

/// Main context for Paylist operations
///
/// Holds the configuration, the contacts cache and the composer that
/// builds a loader per list.
pub struct PaylistContext {
    pub config: Config,
    pub paylist_dir: PathBuf,
    pub contacts_cache: Arc<JsonFileContactsCache>,
    pub composer: Composer,
}

impl PaylistContext {
    /// Create a new Paylist context
    pub fn new(paylist_dir: &Path) -> Result<Self> {
        Self::with_options(paylist_dir, ContextOptions::default())
    }

    pub fn with_options(paylist_dir: &Path, options: ContextOptions) -> Result<Self> {
        let config = Config::load(paylist_dir)?;
        let contacts_cache = Arc::new(JsonFileContactsCache::in_dir(paylist_dir));

        let (contacts, cards, transfers): (
            Arc<dyn ContactsSource>,
            Arc<dyn CardsSource>,
            Arc<dyn TransfersSource>,
        ) = if config.demo_mode {
            let demo = Arc::new(Flaky::new(
                DemoPaymentsProvider::new(),
                options.simulated_failures,
            ));
            (demo.clone(), demo.clone(), demo)
        } else {
            let client = Arc::new(
                PaymentsApiClient::new(&config.api_base_url, config.request_timeout)
                    .context("Failed to configure payments API client")?,
            );
            (client.clone(), client.clone(), client)
        };

        let entitlements = Entitlements {
            caching: config.premium,
        };
        let composer = Composer::new(
            services::Sources {
                contacts,
                cards,
                transfers,
                contacts_cache: contacts_cache.clone(),
            },
            entitlements,
        );

        info!(
            demo_mode = config.demo_mode,
            premium = config.premium,
            "paylist context ready"
        );

        Ok(Self {
            config,
            paylist_dir: paylist_dir.to_path_buf(),
            contacts_cache,
            composer,
        })
    }

    /// Compose the loader for `kind`
    pub fn loader(&self, kind: ListKind, navigator: Arc<dyn Navigator>) -> SharedLoader {
        self.composer.loader(kind, navigator)
    }
}
