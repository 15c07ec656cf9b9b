//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The composition
//! layer depends only on these traits, not on concrete implementations.

mod loader;
mod sources;

pub use loader::{ItemsLoader, SharedLoader};
pub use sources::{CardsSource, ContactsCache, ContactsSource, TransfersSource};
