//! Fluent composition on any loader
//!
//! `adapter.retry(2).fallback(cache_adapter)` reads the way the policy is
//! described.

use std::sync::Arc;

use super::fallback::Fallback;
use super::retry::retry;
use crate::ports::{ItemsLoader, SharedLoader};

pub trait LoaderExt: ItemsLoader + Sized + 'static {
    /// Erase the concrete type
    fn shared(self) -> SharedLoader {
        Arc::new(self)
    }

    /// Attempt up to `times + 1` times
    fn retry(self, times: u32) -> SharedLoader {
        retry(self.shared(), times)
    }

    /// Fall back to `secondary` when this loader fails
    fn fallback<S>(self, secondary: S) -> SharedLoader
    where
        S: ItemsLoader + 'static,
    {
        Arc::new(Fallback::new(self.shared(), Arc::new(secondary)))
    }
}

impl<L: ItemsLoader + 'static> LoaderExt for L {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::NullLoader;

    #[test]
    fn test_chain_names() {
        let loader = NullLoader::new("contacts")
            .retry(1)
            .fallback(NullLoader::new("cached-contacts"));
        assert_eq!(loader.name(), "contacts -> contacts -> cached-contacts");
    }
}
