//! Null loader - a stand-in where no real source applies

use async_trait::async_trait;

use crate::domain::result::{Error, Result};
use crate::domain::ListItem;
use crate::ports::ItemsLoader;

/// Loader that never produces items
///
/// Fails fast with [`Error::Unavailable`] so a fallback chain ending in it
/// still resolves instead of hanging.
#[derive(Debug, Clone)]
pub struct NullLoader {
    name: String,
}

impl NullLoader {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for NullLoader {
    fn default() -> Self {
        Self::new("null")
    }
}

#[async_trait]
impl ItemsLoader for NullLoader {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self) -> Result<Vec<ListItem>> {
        Err(Error::unavailable(format!("{} has no source", self.name)))
    }
}
