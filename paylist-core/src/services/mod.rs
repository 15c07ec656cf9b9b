//! Service layer - loader composition and orchestration
//!
//! Decorators that add resilience to any loader, the per-list policy table
//! that assembles them, and caller-side helpers for driving loads.

pub mod combinators;
pub mod composition;
pub mod dispatch;
pub mod fallback;
pub mod feed;
pub mod retry;

pub use combinators::LoaderExt;
pub use composition::{Composer, Entitlements, ListKind, Navigator, ResiliencePolicy, Sources};
pub use dispatch::{load_on, spawn_load};
pub use fallback::Fallback;
pub use feed::{ListFeed, RefreshOutcome};
pub use retry::retry;
