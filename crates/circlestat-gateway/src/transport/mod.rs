//! HTTP plumbing shared by every route: CORS and access logging.

pub mod access_log;
pub mod cors;
