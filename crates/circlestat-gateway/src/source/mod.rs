//! Circle sources: where `/metrics` gets its node collection from.
//!
//! Handlers only see `Arc<dyn CircleSource>`; each call to `fetch` returns an
//! independent snapshot owned by the request.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use circlestat_core::error::{CircleStatError, Result};
use circlestat_core::Node;

use crate::config::CirclesSection;

#[async_trait]
pub trait CircleSource: Send + Sync {
    /// Short label for logs.
    fn kind(&self) -> &'static str;
    async fn fetch(&self) -> Result<Vec<Node>>;
}

/// Build the source described by the `circles` config section.
pub fn from_config(section: &CirclesSection) -> Arc<dyn CircleSource> {
    match (&section.file, &section.inline) {
        (Some(path), _) => Arc::new(JsonFileCircleSource::new(path)),
        (None, Some(nodes)) => Arc::new(StaticCircleSource::new(nodes.clone())),
        (None, None) => Arc::new(StaticCircleSource::default()),
    }
}

/// Fixed in-memory collection.
#[derive(Debug)]
pub struct StaticCircleSource {
    nodes: Arc<[Node]>,
}

impl Default for StaticCircleSource {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl StaticCircleSource {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes: nodes.into() }
    }
}

#[async_trait]
impl CircleSource for StaticCircleSource {
    fn kind(&self) -> &'static str {
        "static"
    }

    async fn fetch(&self) -> Result<Vec<Node>> {
        Ok(self.nodes.to_vec())
    }
}

/// JSON array of circle records on disk, read fresh on every fetch so
/// external edits show up without a restart.
#[derive(Debug)]
pub struct JsonFileCircleSource {
    path: PathBuf,
}

impl JsonFileCircleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CircleSource for JsonFileCircleSource {
    fn kind(&self) -> &'static str {
        "json_file"
    }

    async fn fetch(&self) -> Result<Vec<Node>> {
        let raw = tokio::fs::read(&self.path).await.map_err(|e| {
            CircleStatError::Source(format!("read {} failed: {e}", self.path.display()))
        })?;
        serde_json::from_slice(&raw).map_err(|e| {
            CircleStatError::Source(format!("decode {} failed: {e}", self.path.display()))
        })
    }
}
