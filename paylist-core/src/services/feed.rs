//! List feed - caller-side state for one list
//!
//! Holds the items and last error of a list and drives refreshes through
//! its loader. Loads have no cancellation, so each refresh takes a
//! generation number and a completion that arrives after a newer refresh
//! started is discarded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::domain::ListItem;
use crate::ports::SharedLoader;

/// What a refresh did to the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Items replaced with `count` new ones
    Loaded { count: usize },
    /// Load failed; items kept, error recorded
    Failed { message: String },
    /// A newer refresh started first; result dropped
    Stale,
}

#[derive(Default)]
struct FeedState {
    items: Vec<ListItem>,
    error: Option<String>,
    in_flight: usize,
}

pub struct ListFeed {
    loader: SharedLoader,
    generation: AtomicU64,
    state: Mutex<FeedState>,
}

impl ListFeed {
    pub fn new(loader: SharedLoader) -> Self {
        Self {
            loader,
            generation: AtomicU64::new(0),
            state: Mutex::new(FeedState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, FeedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reload the list
    pub async fn refresh(&self) -> RefreshOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state().in_flight += 1;

        let outcome = self.loader.load().await;

        let mut state = self.state();
        state.in_flight -= 1;

        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(loader = self.loader.name(), generation, "discarding stale load");
            return RefreshOutcome::Stale;
        }

        match outcome {
            Ok(items) => {
                let count = items.len();
                state.items = items;
                state.error = None;
                RefreshOutcome::Loaded { count }
            }
            Err(e) => {
                let message = e.to_string();
                state.error = Some(message.clone());
                RefreshOutcome::Failed { message }
            }
        }
    }

    /// True until the first successful load has produced rows
    pub fn needs_initial_load(&self) -> bool {
        self.state().items.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.state().in_flight > 0
    }

    pub fn items(&self) -> Vec<ListItem> {
        self.state().items.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.state().error.clone()
    }

    /// Take the pending error, e.g. once it has been shown
    pub fn take_error(&self) -> Option<String> {
        self.state().error.take()
    }

    /// Run the select action of row `index`; false when out of range
    pub fn select(&self, index: usize) -> bool {
        // Clone first so the action never runs under the state lock
        let item = self.state().items.get(index).cloned();
        match item {
            Some(item) => {
                item.select();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::result::{Error, Result};
    use crate::ports::ItemsLoader;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::atomic::AtomicUsize;
    use std::sync::Arc;
    use tokio::sync::Notify;

    /// Replays scripted outcomes; optionally waits for a signal first
    struct Scripted {
        outcomes: Mutex<VecDeque<Result<Vec<&'static str>>>>,
        gate: Option<Arc<Notify>>,
    }

    impl Scripted {
        fn new(outcomes: Vec<Result<Vec<&'static str>>>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes.into()),
                gate: None,
            }
        }
    }

    #[async_trait]
    impl ItemsLoader for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn load(&self) -> Result<Vec<ListItem>> {
            let next = self.outcomes.lock().unwrap().pop_front();
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            next.unwrap_or_else(|| Err(Error::Other("script exhausted".to_string())))
                .map(|titles| {
                    titles
                        .into_iter()
                        .map(|t| ListItem::new(t, "", || {}))
                        .collect()
                })
        }
    }

    #[tokio::test]
    async fn test_success_replaces_items_and_clears_error() {
        let feed = ListFeed::new(Arc::new(Scripted::new(vec![
            Err(Error::network("offline")),
            Ok(vec!["Alice", "Bob"]),
        ])));
        assert!(feed.needs_initial_load());

        assert_eq!(
            feed.refresh().await,
            RefreshOutcome::Failed {
                message: "Network error: offline".to_string()
            }
        );
        assert_eq!(feed.error().as_deref(), Some("Network error: offline"));

        assert_eq!(feed.refresh().await, RefreshOutcome::Loaded { count: 2 });
        assert!(feed.error().is_none());
        assert!(!feed.needs_initial_load());
        assert_eq!(feed.items()[1].title(), "Bob");
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_items() {
        let feed = ListFeed::new(Arc::new(Scripted::new(vec![
            Ok(vec!["Alice"]),
            Err(Error::network("offline")),
        ])));
        feed.refresh().await;
        feed.refresh().await;

        assert_eq!(feed.items().len(), 1);
        assert_eq!(feed.take_error().as_deref(), Some("Network error: offline"));
        assert!(feed.error().is_none());
    }

    #[tokio::test]
    async fn test_select_runs_row_action() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        struct One(Arc<AtomicUsize>);

        #[async_trait]
        impl ItemsLoader for One {
            fn name(&self) -> &str {
                "one"
            }

            async fn load(&self) -> Result<Vec<ListItem>> {
                let hits = Arc::clone(&self.0);
                Ok(vec![ListItem::new("row", "", move || {
                    hits.fetch_add(1, Ordering::SeqCst);
                })])
            }
        }

        let feed = ListFeed::new(Arc::new(One(counter)));
        feed.refresh().await;

        assert!(feed.select(0));
        assert!(!feed.select(1));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_stale_completion_is_discarded() {
        let gate = Arc::new(Notify::new());
        let loader = Scripted {
            outcomes: Mutex::new(vec![Ok(vec!["old"]), Ok(vec!["new", "newer"])].into()),
            gate: Some(Arc::clone(&gate)),
        };
        let feed = Arc::new(ListFeed::new(Arc::new(loader)));

        let first = tokio::spawn({
            let feed = Arc::clone(&feed);
            async move { feed.refresh().await }
        });
        // Let the first refresh take its script entry and park on the gate
        while !feed.is_loading() {
            tokio::task::yield_now().await;
        }

        let second = tokio::spawn({
            let feed = Arc::clone(&feed);
            async move { feed.refresh().await }
        });
        while feed.generation.load(Ordering::SeqCst) < 2 {
            tokio::task::yield_now().await;
        }

        gate.notify_waiters();
        // notify_waiters only wakes tasks already parked; keep nudging until both finish
        let mut results = Vec::new();
        for handle in [first, second] {
            loop {
                if handle.is_finished() {
                    results.push(handle.await.unwrap());
                    break;
                }
                gate.notify_waiters();
                tokio::task::yield_now().await;
            }
        }

        assert_eq!(results[0], RefreshOutcome::Stale);
        assert_eq!(results[1], RefreshOutcome::Loaded { count: 2 });
        assert_eq!(feed.items()[0].title(), "new");
    }
}
