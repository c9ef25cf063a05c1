//! circlestat core: the circle data model, the tree metrics engine, and the
//! error surface shared with the gateway.
//!
//! This crate is pure computation. It carries no transport or runtime
//! dependencies so the engine can be driven from HTTP handlers, tests, or
//! batch tooling alike.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Untrusted trees (cycles, duplicate ids, very deep chains) surface as
//! `CircleStatError`/`Result` instead of crashing the process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;
pub mod node;

/// Shared result type.
pub use error::{CircleStatError, Result};
pub use metrics::{compute_metrics, TreeMetrics};
pub use node::{Node, NodeId};
