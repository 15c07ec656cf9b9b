//! Retry as repeated self-fallback

use std::sync::Arc;

use super::fallback::Fallback;
use crate::ports::SharedLoader;

/// Wrap `loader` so it is attempted up to `times + 1` times
///
/// Built as `times` nested [`Fallback`]s onto the same shared loader, so
/// there is no retry counter and the tree stays immutable. Every failure
/// is retried immediately; the last attempt's error is what the caller
/// sees. `times == 0` returns `loader` itself.
pub fn retry(loader: SharedLoader, times: u32) -> SharedLoader {
    (0..times).fold(Arc::clone(&loader), |acc, _| {
        Arc::new(Fallback::new(acc, Arc::clone(&loader))) as SharedLoader
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::NullLoader;

    #[test]
    fn test_zero_retries_is_identity() {
        let loader: SharedLoader = Arc::new(NullLoader::new("cards"));
        let wrapped = retry(Arc::clone(&loader), 0);
        assert!(Arc::ptr_eq(&loader, &wrapped));
    }

    #[test]
    fn test_name_lists_every_attempt() {
        let loader: SharedLoader = Arc::new(NullLoader::new("contacts"));
        assert_eq!(retry(loader, 2).name(), "contacts -> contacts -> contacts");
    }

    #[tokio::test]
    async fn test_exhausted_retries_report_source_error() {
        let loader: SharedLoader = Arc::new(NullLoader::new("cards"));
        let err = retry(loader, 3).load().await.unwrap_err();
        assert!(err.is_unavailable());
    }
}
