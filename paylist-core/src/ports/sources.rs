//! Outbound ports for the remote collections
//!
//! Each adapter depends on exactly one of these. Implementations own their
//! own transport and concurrency; the core only awaits them.

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::domain::{Card, Contact, Transfer};

/// Remote contact list
#[async_trait]
pub trait ContactsSource: Send + Sync {
    async fn fetch_contacts(&self) -> Result<Vec<Contact>>;
}

/// Remote card list
#[async_trait]
pub trait CardsSource: Send + Sync {
    async fn fetch_cards(&self) -> Result<Vec<Card>>;
}

/// Remote transfer history, both directions mixed
#[async_trait]
pub trait TransfersSource: Send + Sync {
    async fn fetch_transfers(&self) -> Result<Vec<Transfer>>;
}

/// Local mirror of the last successful contacts fetch
///
/// May be written by several in-flight loads at once; implementations
/// decide their own locking (last writer wins is fine).
#[async_trait]
pub trait ContactsCache: Send + Sync {
    /// Replace the cached contacts
    async fn save(&self, contacts: &[Contact]) -> Result<()>;

    /// Read the cached contacts
    async fn load(&self) -> Result<Vec<Contact>>;
}
