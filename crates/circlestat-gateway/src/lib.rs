//! circlestat gateway library entry.
//!
//! Wires config, circle sources, the tree metrics engine, and the HTTP
//! surface into one router. Consumed by the binary (`main.rs`) and by
//! integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod ops;
pub mod router;
pub mod source;
pub mod transport;
