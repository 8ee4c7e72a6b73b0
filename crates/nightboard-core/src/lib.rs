//! nightboard core: stats contracts and error types.
//!
//! This crate defines the snapshot record, health classification, and the
//! provider seam shared by the server and by test doubles. It intentionally
//! carries no transport or runtime dependencies so it can be reused in
//! multiple contexts.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `NightboardError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod stats;

/// Shared result type.
pub use error::{NightboardError, Result};
pub use stats::{HealthState, StatsProvider, StatsSnapshot};
