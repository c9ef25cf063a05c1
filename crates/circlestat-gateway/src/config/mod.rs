//! Gateway config loader (strict parsing).
//!
//! Sources, lowest to highest precedence:
//! - built-in defaults
//! - YAML file (`CIRCLESTAT_CONFIG`, default `circlestat.yaml`)
//! - `API_PORT` environment variable

pub mod schema;

use std::fs;
use std::io::ErrorKind;

use circlestat_core::error::{CircleStatError, Result};

pub use schema::{CirclesSection, GatewayConfig, ServerSection};

pub const CONFIG_PATH_ENV: &str = "CIRCLESTAT_CONFIG";
pub const PORT_ENV: &str = "API_PORT";
pub const DEFAULT_CONFIG_PATH: &str = "circlestat.yaml";

/// Load config the way the binary does: file named by `CIRCLESTAT_CONFIG`
/// (or the default path, which may be absent), then `API_PORT`.
pub fn load_from_env() -> Result<GatewayConfig> {
    let explicit = std::env::var(CONFIG_PATH_ENV).ok();
    let port = std::env::var(PORT_ENV).ok();
    load(explicit.as_deref(), port.as_deref())
}

/// `path = None` falls back to `circlestat.yaml` and tolerates it missing.
/// A path given explicitly must exist.
pub fn load(path: Option<&str>, port_override: Option<&str>) -> Result<GatewayConfig> {
    let mut cfg = match path {
        Some(p) => load_from_file(p)?,
        None => match fs::read_to_string(DEFAULT_CONFIG_PATH) {
            Ok(s) => load_from_str(&s)?,
            Err(e) if e.kind() == ErrorKind::NotFound => GatewayConfig::default(),
            Err(e) => {
                return Err(CircleStatError::BadConfig(format!(
                    "read {DEFAULT_CONFIG_PATH} failed: {e}"
                )))
            }
        },
    };

    if let Some(raw) = port_override {
        cfg.server.port = parse_port(raw)?;
    }
    cfg.validate()?;
    Ok(cfg)
}

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| CircleStatError::BadConfig(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| CircleStatError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

fn parse_port(raw: &str) -> Result<u16> {
    match raw.trim().parse::<u16>() {
        Ok(p) if p > 0 => Ok(p),
        _ => Err(CircleStatError::BadConfig(format!(
            "{PORT_ENV} must be a port number between 1 and 65535, got {raw:?}"
        ))),
    }
}
