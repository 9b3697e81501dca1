//! tally core: transport-agnostic counter store and error types.
//!
//! This crate defines the store contract and the error surface shared by the
//! HTTP server and its tests. It intentionally carries no HTTP or async
//! runtime dependencies so the store can be reused or swapped in isolation.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here.
//! All fallible paths surface as `TallyError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod store;

pub use error::{ClientCode, Result, TallyError};
pub use store::{CounterStore, InMemoryCounterStore};
