//! Application endpoints: tree metrics and echo.

pub mod echo;
pub mod metrics;
