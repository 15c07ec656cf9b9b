//! Items loader port - the one capability every list is built on

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::domain::ListItem;

/// Loads one collection of [`ListItem`]s
///
/// A loader is already scoped to a single source, so `load` takes no
/// arguments. Each call is an independent attempt: awaiting the returned
/// future yields exactly one outcome, however many underlying fetches a
/// composed loader performs to produce it.
#[async_trait]
pub trait ItemsLoader: Send + Sync {
    /// Diagnostic label (e.g., "contacts", "contacts -> cached-contacts")
    fn name(&self) -> &str;

    /// Load the full collection, in the source's natural order
    async fn load(&self) -> Result<Vec<ListItem>>;
}

/// Shared, type-erased loader used to build composition trees
pub type SharedLoader = Arc<dyn ItemsLoader>;

#[async_trait]
impl<L> ItemsLoader for Arc<L>
where
    L: ItemsLoader + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    async fn load(&self) -> Result<Vec<ListItem>> {
        (**self).load().await
    }
}
