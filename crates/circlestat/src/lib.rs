//! Top-level facade crate for circlestat.
//!
//! Re-exports the metrics engine and the gateway library so users can depend on a single crate.

pub mod core {
    pub use circlestat_core::*;
}

pub mod gateway {
    pub use circlestat_gateway::*;
}
