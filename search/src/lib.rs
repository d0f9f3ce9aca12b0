//! Instant product search controller.
//!
//! Debounced, cancellable lookups against a remote product-search backend,
//! with a latest-wins ordering guarantee.
//!
//! # Design
//!
//! - `on_input()` restarts the debounce window and invalidates anything
//!   already scheduled or in flight: the pending task is aborted and a
//!   generation bump turns a late completion into a no-op.
//! - Below the minimum query length no lookup is issued; results clear
//!   immediately.
//! - Lookup failures collapse to an empty result set. The dropdown shows
//!   "no products found", never a distinct error state.
//! - Dropdown visibility is a focus flag independent of query state; an
//!   outside pointer-down closes it via a scoped [`Subscription`].
//!
//! # Non-blocking API
//!
//! State is observed through accessors (`dropdown()`, `results()`); the
//! `notify` callback fires whenever observable state changes, typically to
//! trigger a repaint.

mod backend;
mod config;
mod controller;
mod error;
mod subscription;
mod task;

pub use backend::SearchBackend;
pub use config::SearchConfig;
pub use controller::{DropdownContent, SearchController};
pub use error::SearchError;
pub use subscription::{EventHub, PointerDown, Subscription};
pub use task::LookupTask;
