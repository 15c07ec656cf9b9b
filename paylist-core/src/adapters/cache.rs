//! In-process contacts caches

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::result::{Error, Result};
use crate::domain::Contact;
use crate::ports::ContactsCache;

/// Cache for viewers without caching: writes vanish, reads fail fast
#[derive(Debug, Default, Clone, Copy)]
pub struct NullContactsCache;

#[async_trait]
impl ContactsCache for NullContactsCache {
    async fn save(&self, _contacts: &[Contact]) -> Result<()> {
        Ok(())
    }

    async fn load(&self) -> Result<Vec<Contact>> {
        Err(Error::unavailable("contacts cache is not enabled"))
    }
}

/// Last-writer-wins cache held in memory
#[derive(Debug, Default)]
pub struct InMemoryContactsCache {
    snapshot: RwLock<Option<Vec<Contact>>>,
}

impl InMemoryContactsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache pre-populated with `contacts`
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            snapshot: RwLock::new(Some(contacts)),
        }
    }
}

#[async_trait]
impl ContactsCache for InMemoryContactsCache {
    async fn save(&self, contacts: &[Contact]) -> Result<()> {
        let mut guard = self
            .snapshot
            .write()
            .map_err(|_| Error::cache("contacts cache lock poisoned"))?;
        *guard = Some(contacts.to_vec());
        Ok(())
    }

    async fn load(&self) -> Result<Vec<Contact>> {
        let guard = self
            .snapshot
            .read()
            .map_err(|_| Error::cache("contacts cache lock poisoned"))?;
        guard
            .clone()
            .ok_or_else(|| Error::unavailable("no cached contacts yet"))
    }
}
