//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - One [`ItemsLoader`](crate::ports::ItemsLoader) per source, mapping
//!   native records to list items
//! - Contacts caches (null, in-memory, JSON file)
//! - Payments API HTTP client for the source ports
//! - Demo data provider for trying things out

pub mod cache;
pub mod cards;
pub mod contacts;
pub mod demo;
pub mod file_cache;
pub mod format;
pub mod http;
pub mod null;
pub mod transfers;

#[cfg(test)]
pub mod http_mock;

pub use cache::{InMemoryContactsCache, NullContactsCache};
pub use cards::CardsAdapter;
pub use contacts::{CachedContactsAdapter, ContactsAdapter};
pub use demo::{DemoPaymentsProvider, Flaky};
pub use file_cache::JsonFileContactsCache;
pub use format::DateStyle;
pub use http::PaymentsApiClient;
pub use null::NullLoader;
pub use transfers::TransfersAdapter;
