//! Contacts adapters - live contacts with a cache mirror, and cached contacts

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::cache::NullContactsCache;
use crate::domain::result::Result;
use crate::domain::{Contact, ListItem, Select};
use crate::ports::{ContactsCache, ContactsSource, ItemsLoader};

fn to_item(contact: Contact, select: &Select<Contact>) -> ListItem {
    let title = contact.name.clone();
    let subtitle = contact.phone.clone();
    ListItem::bound(title, subtitle, contact, select)
}

/// Loads contacts from a live source and mirrors them into a cache
///
/// The cache is written once per successful fetch, before mapping, and
/// never on failure. Callers without caching pass [`NullContactsCache`].
pub struct ContactsAdapter {
    source: Arc<dyn ContactsSource>,
    cache: Arc<dyn ContactsCache>,
    select: Select<Contact>,
}

impl ContactsAdapter {
    pub fn new(
        source: Arc<dyn ContactsSource>,
        cache: Arc<dyn ContactsCache>,
        select: Select<Contact>,
    ) -> Self {
        Self {
            source,
            cache,
            select,
        }
    }

    /// Live contacts with nothing mirrored
    pub fn without_cache(source: Arc<dyn ContactsSource>, select: Select<Contact>) -> Self {
        Self::new(source, Arc::new(NullContactsCache), select)
    }

    /// Contacts read back from the cache (a fallback leaf)
    pub fn from_cache(cache: Arc<dyn ContactsCache>, select: Select<Contact>) -> CachedContactsAdapter {
        CachedContactsAdapter { cache, select }
    }
}

#[async_trait]
impl ItemsLoader for ContactsAdapter {
    fn name(&self) -> &str {
        "contacts"
    }

    async fn load(&self) -> Result<Vec<ListItem>> {
        let contacts = self.source.fetch_contacts().await?;
        debug!(count = contacts.len(), "fetched live contacts");

        if let Err(e) = self.cache.save(&contacts).await {
            warn!(error = %e, "failed to mirror contacts into cache");
        }

        Ok(contacts
            .into_iter()
            .map(|contact| to_item(contact, &self.select))
            .collect())
    }
}

/// Loads contacts from the cache without writing back
pub struct CachedContactsAdapter {
    cache: Arc<dyn ContactsCache>,
    select: Select<Contact>,
}

#[async_trait]
impl ItemsLoader for CachedContactsAdapter {
    fn name(&self) -> &str {
        "cached-contacts"
    }

    async fn load(&self) -> Result<Vec<ListItem>> {
        let contacts = self.cache.load().await?;
        debug!(count = contacts.len(), "read cached contacts");

        Ok(contacts
            .into_iter()
            .map(|contact| to_item(contact, &self.select))
            .collect())
    }
}
