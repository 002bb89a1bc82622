//! Solutions and the included/excluded partition of a graph.
//!
//! A solution is a plain list of node ids. How it selects edges depends on the
//! configured `SolutionType`:
//!
//! - `Path`: consecutive nodes are joined, and a solution longer than two nodes
//!   closes back to its first node.
//! - `Set`: an edge is selected when both of its endpoints are in the list.

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, VisualizerError};
use crate::graph::{Graph, NodeId};

// ─── SolutionType ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionType {
    Path,
    Set,
}

impl SolutionType {
    /// Accepts exactly `"path"` or `"set"`.
    pub fn parse(value: &str) -> Result<Self> {
        match value {
            "path" => Ok(SolutionType::Path),
            "set" => Ok(SolutionType::Set),
            other => Err(VisualizerError::invalid_solution_type(other)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SolutionType::Path => "path",
            SolutionType::Set => "set",
        }
    }
}

impl FromStr for SolutionType {
    type Err = VisualizerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// ─── Solution ─────────────────────────────────────────────────────────────────

/// Node ids produced by an earlier pipeline stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Solution(pub Vec<NodeId>);

impl Solution {
    pub fn new(nodes: Vec<NodeId>) -> Self {
        Self(nodes)
    }

    /// Parse a JSON array of node ids.
    pub fn from_json(src: &str) -> Result<Self> {
        Ok(serde_json::from_str(src)?)
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Edges implied by reading the solution as a path: each consecutive pair,
    /// plus last → first when there are more than two nodes.
    pub fn implied_edges(&self) -> Vec<(NodeId, NodeId)> {
        let mut edges: Vec<(NodeId, NodeId)> = self
            .0
            .windows(2)
            .map(|w| (w[0].clone(), w[1].clone()))
            .collect();
        if self.0.len() > 2 {
            edges.push((self.0[self.0.len() - 1].clone(), self.0[0].clone()));
        }
        edges
    }
}

impl From<Vec<NodeId>> for Solution {
    fn from(nodes: Vec<NodeId>) -> Self {
        Self(nodes)
    }
}

impl<T: Into<NodeId>> FromIterator<T> for Solution {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

// ─── Partition ────────────────────────────────────────────────────────────────

/// Split of a graph's nodes and edges by solution membership.
///
/// `included_*` and `excluded_*` together cover every node and edge of the
/// graph exactly once, in graph order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub included_nodes: Vec<NodeId>,
    pub excluded_nodes: Vec<NodeId>,
    pub included_edges: Vec<(NodeId, NodeId)>,
    pub excluded_edges: Vec<(NodeId, NodeId)>,
    /// Solution nodes that are not in the graph, first occurrence order.
    pub unknown: Vec<NodeId>,
}

impl Partition {
    pub fn compute(graph: &Graph, solution: &Solution, mode: SolutionType) -> Self {
        let members: HashSet<&NodeId> = solution.nodes().iter().collect();
        let mut part = Partition::default();

        for id in graph.nodes() {
            if members.contains(id) {
                part.included_nodes.push(id.clone());
            } else {
                part.excluded_nodes.push(id.clone());
            }
        }

        let implied: HashSet<(NodeId, NodeId)> = match mode {
            SolutionType::Path => solution.implied_edges().into_iter().collect(),
            SolutionType::Set => HashSet::new(),
        };

        for (a, b) in graph.edges() {
            let included = match mode {
                SolutionType::Path => {
                    implied.contains(&(a.clone(), b.clone()))
                        || implied.contains(&(b.clone(), a.clone()))
                }
                SolutionType::Set => members.contains(a) && members.contains(b),
            };
            let edge = (a.clone(), b.clone());
            if included {
                part.included_edges.push(edge);
            } else {
                part.excluded_edges.push(edge);
            }
        }

        let mut seen = HashSet::new();
        for id in solution.nodes() {
            if !graph.contains_node(id) && seen.insert(id) {
                part.unknown.push(id.clone());
            }
        }
        if !part.unknown.is_empty() {
            let listed: Vec<String> = part.unknown.iter().map(ToString::to_string).collect();
            warn!(
                count = part.unknown.len(),
                nodes = %listed.join(", "),
                "solution references nodes missing from the graph; they are not drawn"
            );
        }

        part
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_solution.rs"]
mod tests;
