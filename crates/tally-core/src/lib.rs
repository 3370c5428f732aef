//! tally core: the in-memory counter store, its JSON representation, and the
//! error surface shared with the HTTP server.
//!
//! This crate carries no transport or runtime dependencies so the store can be
//! exercised directly from tests or embedded behind another front-end.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every fallible path surfaces as `TallyError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod counter;
pub mod error;
pub mod store;

pub use counter::Counter;
/// Shared result type.
pub use error::{Result, TallyError};
pub use store::CounterStore;
