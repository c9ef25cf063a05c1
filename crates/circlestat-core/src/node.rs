//! Circle records as delivered by a data source.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Circle identifier. Sources may use integers or strings; the two never
/// compare equal (`1` and `"1"` are different circles).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Int(i64),
    Str(String),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Int(n) => write!(f, "{n}"),
            NodeId::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for NodeId {
    fn from(v: i64) -> Self {
        NodeId::Int(v)
    }
}

impl From<&str> for NodeId {
    fn from(v: &str) -> Self {
        NodeId::Str(v.to_string())
    }
}

/// One circle. Unknown fields on the source record are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    #[serde(default)]
    pub parent_id: Option<NodeId>,
    #[serde(default)]
    pub title: String,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, parent_id: Option<NodeId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent_id,
            title: title.into(),
        }
    }

    pub fn root(id: impl Into<NodeId>) -> Self {
        Self::new(id, None, "")
    }

    pub fn child(id: impl Into<NodeId>, parent_id: impl Into<NodeId>) -> Self {
        Self::new(id, Some(parent_id.into()), "")
    }
}
