use serde::Deserialize;

use circlestat_core::error::{CircleStatError, Result};
use circlestat_core::Node;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub circles: CirclesSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            server: ServerSection::default(),
            circles: CirclesSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(CircleStatError::BadConfig(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.server.validate()?;
        self.circles.validate()?;

        Ok(())
    }

    /// `host:port` string for the listener.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(CircleStatError::BadConfig(
                "server.port must be between 1 and 65535".into(),
            ));
        }
        if self.host.trim().is_empty() {
            return Err(CircleStatError::BadConfig("server.host must not be empty".into()));
        }
        Ok(())
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    5050
}

/// Where the circle collection comes from. Nothing configured means an
/// empty collection.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CirclesSection {
    /// JSON array of circle records, re-read on every request.
    #[serde(default)]
    pub file: Option<String>,

    /// Fixed snapshot embedded in the config.
    #[serde(default)]
    pub inline: Option<Vec<Node>>,
}

impl CirclesSection {
    pub fn validate(&self) -> Result<()> {
        if self.file.is_some() && self.inline.is_some() {
            return Err(CircleStatError::BadConfig(
                "circles.file and circles.inline are mutually exclusive".into(),
            ));
        }
        if matches!(&self.file, Some(f) if f.trim().is_empty()) {
            return Err(CircleStatError::BadConfig("circles.file must not be empty".into()));
        }
        Ok(())
    }
}
