//! Fallback decorator

use async_trait::async_trait;
use tracing::debug;

use crate::domain::result::Result;
use crate::domain::ListItem;
use crate::ports::{ItemsLoader, SharedLoader};

/// Loads from `primary`, and from `secondary` only if `primary` fails
///
/// A primary success is forwarded untouched. After a primary failure the
/// secondary's outcome, success or failure, is the final one and the
/// primary's error is dropped.
pub struct Fallback {
    primary: SharedLoader,
    secondary: SharedLoader,
    name: String,
}

impl Fallback {
    pub fn new(primary: SharedLoader, secondary: SharedLoader) -> Self {
        let name = format!("{} -> {}", primary.name(), secondary.name());
        Self {
            primary,
            secondary,
            name,
        }
    }
}

#[async_trait]
impl ItemsLoader for Fallback {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self) -> Result<Vec<ListItem>> {
        match self.primary.load().await {
            Ok(items) => Ok(items),
            Err(_) => {
                debug!(
                    primary = self.primary.name(),
                    secondary = self.secondary.name(),
                    "primary loader failed, delegating"
                );
                self.secondary.load().await
            }
        }
    }
}
