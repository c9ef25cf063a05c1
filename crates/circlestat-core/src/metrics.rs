//! Tree metrics engine.
//!
//! Reconstructs the implicit forest described by a flat list of circles and
//! derives structural statistics from it.
//!
//! Traversal never recurses: depth, leaf and height bookkeeping run over an
//! explicit work list, so adversarially deep chains cost heap, not stack.
//! Every node is entered at most once; a second entry, or a node that no root
//! reaches (only possible when its ancestors loop), is reported as
//! `CyclicInput`.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::error::{CircleStatError, Result};
use crate::node::{Node, NodeId};

/// Statistics over one circle collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeMetrics {
    pub total_nodes: usize,
    pub roots_count: usize,
    pub max_depth: usize,
    pub leaf_count: usize,
    pub average_branching: f64,
    /// Root id (rendered as a string) -> subtree height, leaf = 1.
    pub height_per_root: BTreeMap<String, usize>,
}

impl TreeMetrics {
    fn empty() -> Self {
        Self {
            total_nodes: 0,
            roots_count: 0,
            max_depth: 0,
            leaf_count: 0,
            average_branching: 0.0,
            height_per_root: BTreeMap::new(),
        }
    }
}

/// Forest view over a node slice: children by index, in input order.
struct Forest {
    children: Vec<Vec<usize>>,
    roots: Vec<usize>,
}

impl Forest {
    fn build(nodes: &[Node]) -> Result<Self> {
        let mut index: HashMap<&NodeId, usize> = HashMap::with_capacity(nodes.len());
        for (i, n) in nodes.iter().enumerate() {
            if index.insert(&n.id, i).is_some() {
                return Err(CircleStatError::DuplicateId(n.id.to_string()));
            }
        }

        let mut children = vec![Vec::new(); nodes.len()];
        let mut roots = Vec::new();
        for (i, n) in nodes.iter().enumerate() {
            match n.parent_id.as_ref().and_then(|p| index.get(p)) {
                Some(&parent) => children[parent].push(i),
                // absent parent or dangling reference
                None => roots.push(i),
            }
        }

        Ok(Self { children, roots })
    }
}

/// Work list entry. `Enter` visits a node on the way down, `Exit` folds the
/// children's heights once all of them are done.
enum Step {
    Enter { node: usize, depth: usize },
    Exit { node: usize },
}

/// Compute structural statistics over `nodes`.
///
/// Empty input is not an error: every counter is zero and `height_per_root`
/// is empty.
pub fn compute_metrics(nodes: &[Node]) -> Result<TreeMetrics> {
    if nodes.is_empty() {
        return Ok(TreeMetrics::empty());
    }

    let forest = Forest::build(nodes)?;

    let mut visited = vec![false; nodes.len()];
    let mut height = vec![0usize; nodes.len()];
    let mut visited_count = 0usize;
    let mut max_depth = 0usize;
    let mut leaf_count = 0usize;
    let mut height_per_root = BTreeMap::new();

    let mut work = Vec::new();
    for &root in &forest.roots {
        work.push(Step::Enter { node: root, depth: 1 });

        while let Some(step) = work.pop() {
            match step {
                Step::Enter { node, depth } => {
                    if visited[node] {
                        return Err(CircleStatError::CyclicInput(nodes[node].id.to_string()));
                    }
                    visited[node] = true;
                    visited_count += 1;
                    max_depth = max_depth.max(depth);

                    let kids = &forest.children[node];
                    if kids.is_empty() {
                        leaf_count += 1;
                        height[node] = 1;
                        continue;
                    }
                    work.push(Step::Exit { node });
                    for &k in kids {
                        work.push(Step::Enter { node: k, depth: depth + 1 });
                    }
                }
                Step::Exit { node } => {
                    let tallest = forest.children[node]
                        .iter()
                        .map(|&k| height[k])
                        .max()
                        .unwrap_or(0);
                    height[node] = tallest + 1;
                }
            }
        }

        height_per_root.insert(nodes[root].id.to_string(), height[root]);
    }

    if visited_count != nodes.len() {
        // Every node either reaches a root by walking parents or loops forever.
        let stray = visited
            .iter()
            .position(|v| !v)
            .map(|i| nodes[i].id.to_string())
            .unwrap_or_default();
        return Err(CircleStatError::CyclicInput(stray));
    }

    let branching: Vec<usize> = forest
        .children
        .iter()
        .map(Vec::len)
        .filter(|&n| n > 0)
        .collect();

    tracing::debug!(
        total = nodes.len(),
        roots = forest.roots.len(),
        max_depth,
        "tree metrics computed"
    );

    Ok(TreeMetrics {
        total_nodes: nodes.len(),
        roots_count: forest.roots.len(),
        max_depth,
        leaf_count,
        average_branching: average_rounded(&branching),
        height_per_root,
    })
}

/// Mean of `counts` rounded to 3 decimals (exact halves go to the even
/// neighbour), `0.0` when empty.
fn average_rounded(counts: &[usize]) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }
    let sum: usize = counts.iter().sum();
    let mean = sum as f64 / counts.len() as f64;
    (mean * 1000.0).round_ties_even() / 1000.0
}
