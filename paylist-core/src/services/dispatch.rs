//! Callback-style loading for callers that are not async themselves
//!
//! The completion is an `FnOnce`, so it runs exactly once per dispatched
//! load. It runs on a runtime worker; callers that need another thread
//! (e.g., a UI thread) forward the result themselves.

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::domain::result::Result;
use crate::domain::ListItem;
use crate::ports::SharedLoader;

/// Run `loader` on the current runtime and hand the outcome to `completion`
///
/// Must be called from within a tokio runtime.
pub fn spawn_load<F>(loader: SharedLoader, completion: F) -> JoinHandle<()>
where
    F: FnOnce(Result<Vec<ListItem>>) + Send + 'static,
{
    load_on(&Handle::current(), loader, completion)
}

/// Like [`spawn_load`], on an explicit runtime handle
pub fn load_on<F>(handle: &Handle, loader: SharedLoader, completion: F) -> JoinHandle<()>
where
    F: FnOnce(Result<Vec<ListItem>>) + Send + 'static,
{
    handle.spawn(async move {
        let outcome = loader.load().await;
        completion(outcome);
    })
}
