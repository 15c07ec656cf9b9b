//! Composition of list loaders
//!
//! [`ListKind::policy`] is the only place that says how resilient each
//! source is. [`Composer`] turns a kind into a loader tree once, when the
//! list is created; the tree is never re-evaluated per load.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use super::combinators::LoaderExt;
use super::fallback::Fallback;
use super::retry::retry;
use crate::adapters::{CardsAdapter, ContactsAdapter, NullContactsCache, TransfersAdapter};
use crate::domain::{Card, Contact, Select, Transfer};
use crate::ports::{CardsSource, ContactsCache, ContactsSource, SharedLoader, TransfersSource};

/// The lists the app can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListKind {
    Contacts,
    Cards,
    SentTransfers,
    ReceivedTransfers,
}

impl ListKind {
    pub const ALL: [ListKind; 4] = [
        ListKind::Contacts,
        ListKind::Cards,
        ListKind::SentTransfers,
        ListKind::ReceivedTransfers,
    ];

    /// Resilience policy per list
    pub fn policy(self) -> ResiliencePolicy {
        match self {
            ListKind::Contacts => ResiliencePolicy::new(2, true),
            ListKind::Cards => ResiliencePolicy::new(0, false),
            ListKind::SentTransfers => ResiliencePolicy::new(1, false),
            ListKind::ReceivedTransfers => ResiliencePolicy::new(1, false),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ListKind::Contacts => "Contacts",
            ListKind::Cards => "Cards",
            ListKind::SentTransfers => "Sent",
            ListKind::ReceivedTransfers => "Received",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ListKind::Contacts => "contacts",
            ListKind::Cards => "cards",
            ListKind::SentTransfers => "sent",
            ListKind::ReceivedTransfers => "received",
        };
        f.write_str(s)
    }
}

impl FromStr for ListKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "contacts" | "friends" => Ok(ListKind::Contacts),
            "cards" => Ok(ListKind::Cards),
            "sent" | "sent-transfers" => Ok(ListKind::SentTransfers),
            "received" | "received-transfers" => Ok(ListKind::ReceivedTransfers),
            other => Err(format!(
                "unknown list '{}' (expected contacts, cards, sent or received)",
                other
            )),
        }
    }
}

/// How hard to try one source before giving up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResiliencePolicy {
    /// Extra attempts after the first failure
    pub retries: u32,
    /// Fall back to cached data once retries are exhausted (entitled viewers only)
    pub cache_fallback: bool,
}

impl ResiliencePolicy {
    pub const fn new(retries: u32, cache_fallback: bool) -> Self {
        Self {
            retries,
            cache_fallback,
        }
    }

    /// Wrap `leaf` per this policy; `secondary` is used only with `cache_fallback`
    pub fn apply(&self, leaf: SharedLoader, secondary: Option<SharedLoader>) -> SharedLoader {
        let attempts = retry(leaf, self.retries);
        match secondary {
            Some(secondary) if self.cache_fallback => Arc::new(Fallback::new(attempts, secondary)),
            _ => attempts,
        }
    }
}

/// What the current viewer is entitled to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Entitlements {
    /// Premium viewers get an offline contacts cache
    pub caching: bool,
}

/// Caller-side navigation, one action per record type
///
/// The composer binds these into each row's select action; it never knows
/// what a screen is.
pub trait Navigator: Send + Sync {
    fn show_contact(&self, contact: &Contact);
    fn show_card(&self, card: &Card);
    fn show_transfer(&self, transfer: &Transfer);
}

/// Sources and collaborators the loaders are built from
#[derive(Clone)]
pub struct Sources {
    pub contacts: Arc<dyn ContactsSource>,
    pub cards: Arc<dyn CardsSource>,
    pub transfers: Arc<dyn TransfersSource>,
    pub contacts_cache: Arc<dyn ContactsCache>,
}

/// Builds the loader for each list kind
#[derive(Clone)]
pub struct Composer {
    sources: Sources,
    entitlements: Entitlements,
}

impl Composer {
    pub fn new(sources: Sources, entitlements: Entitlements) -> Self {
        Self {
            sources,
            entitlements,
        }
    }

    /// Cache the live contacts adapter mirrors into
    fn cache_for_viewer(&self) -> Arc<dyn ContactsCache> {
        if self.entitlements.caching {
            Arc::clone(&self.sources.contacts_cache)
        } else {
            Arc::new(NullContactsCache)
        }
    }

    /// Compose the loader for `kind`, binding row selection to `navigator`
    pub fn loader(&self, kind: ListKind, navigator: Arc<dyn Navigator>) -> SharedLoader {
        let policy = kind.policy();
        let (leaf, secondary): (SharedLoader, Option<SharedLoader>) = match kind {
            ListKind::Contacts => {
                let select = select_contact(&navigator);
                let live = ContactsAdapter::new(
                    Arc::clone(&self.sources.contacts),
                    self.cache_for_viewer(),
                    Arc::clone(&select),
                );
                let cached = self.entitlements.caching.then(|| {
                    ContactsAdapter::from_cache(Arc::clone(&self.sources.contacts_cache), select)
                        .shared()
                });
                (live.shared(), cached)
            }
            ListKind::Cards => (
                CardsAdapter::new(Arc::clone(&self.sources.cards), select_card(&navigator))
                    .shared(),
                None,
            ),
            ListKind::SentTransfers => (
                TransfersAdapter::sent(
                    Arc::clone(&self.sources.transfers),
                    select_transfer(&navigator),
                )
                .shared(),
                None,
            ),
            ListKind::ReceivedTransfers => (
                TransfersAdapter::received(
                    Arc::clone(&self.sources.transfers),
                    select_transfer(&navigator),
                )
                .shared(),
                None,
            ),
        };

        let loader = policy.apply(leaf, secondary);
        debug!(%kind, chain = loader.name(), "composed loader");
        loader
    }
}

fn select_contact(navigator: &Arc<dyn Navigator>) -> Select<Contact> {
    let navigator = Arc::clone(navigator);
    Arc::new(move |contact: &Contact| navigator.show_contact(contact))
}

fn select_card(navigator: &Arc<dyn Navigator>) -> Select<Card> {
    let navigator = Arc::clone(navigator);
    Arc::new(move |card: &Card| navigator.show_card(card))
}

fn select_transfer(navigator: &Arc<dyn Navigator>) -> Select<Transfer> {
    let navigator = Arc::clone(navigator);
    Arc::new(move |transfer: &Transfer| navigator.show_transfer(transfer))
}
