//! Graph interchange and storage.
//!
//! `GraphData` is the JSON shape handed over by the pipeline. `Graph` wraps a
//! petgraph `UnGraph` and adds an id → index map so the partition and drawing
//! phases can look nodes up by identifier.

use std::collections::HashMap;
use std::fmt;

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

use crate::error::Result;

// ── NodeId ────────────────────────────────────────────────────────────────────

/// Opaque node identifier, compared only for equality.
///
/// Integers and strings are distinct identifiers: `1` never matches `"1"`.
/// Any other JSON value (a float, an array such as a grid coordinate) is kept
/// as `Other` and compared by its compact JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Int(i64),
    Name(String),
    Other(RawId),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Int(n) => write!(f, "{n}"),
            NodeId::Name(s) => f.write_str(s),
            NodeId::Other(raw) => f.write_str(raw.as_str()),
        }
    }
}

/// A JSON node id that is neither an integer nor a string, held as compact
/// JSON text (`1.5`, `[0,1]`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RawId(String);

impl RawId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<serde_json::Value> for RawId {
    fn from(value: serde_json::Value) -> Self {
        RawId(value.to_string())
    }
}

impl Serialize for RawId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let value: serde_json::Value =
            serde_json::from_str(&self.0).map_err(serde::ser::Error::custom)?;
        value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RawId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(RawId::from)
    }
}

impl From<i64> for NodeId {
    fn from(n: i64) -> Self {
        NodeId::Int(n)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId::Name(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId::Name(s)
    }
}

// ── GraphData ─────────────────────────────────────────────────────────────────

/// Graph as exchanged with the pipeline: a node list and undirected edge pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    #[serde(default)]
    pub nodes: Vec<NodeId>,
    #[serde(default)]
    pub edges: Vec<(NodeId, NodeId)>,
}

impl GraphData {
    pub fn new(nodes: Vec<NodeId>, edges: Vec<(NodeId, NodeId)>) -> Self {
        Self { nodes, edges }
    }

    /// Parse `{"nodes": [...], "edges": [[a, b], ...]}`.
    pub fn from_json(src: &str) -> Result<Self> {
        Ok(serde_json::from_str(src)?)
    }
}

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Undirected graph used by the layout and render phases.
///
/// Node and edge iteration follow insertion order. Parallel edges are
/// collapsed; self loops are kept.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub ungraph: UnGraph<NodeId, ()>,
    /// Maps node id → petgraph NodeIndex.
    pub node_index: HashMap<NodeId, NodeIndex>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from interchange data. Edge endpoints missing from the
    /// node list are added as nodes.
    pub fn from_data(data: &GraphData) -> Self {
        let mut g = Self::new();
        for id in &data.nodes {
            g.add_node(id.clone());
        }
        for (a, b) in &data.edges {
            g.add_edge(a, b);
        }
        g
    }

    /// Add a node. No-op if a node with the same id already exists.
    pub fn add_node(&mut self, id: NodeId) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(&id) {
            return idx;
        }
        let idx = self.ungraph.add_node(id.clone());
        self.node_index.insert(id, idx);
        idx
    }

    /// Add an undirected edge, creating missing endpoints.
    pub fn add_edge(&mut self, a: &NodeId, b: &NodeId) {
        let ia = self.add_node(a.clone());
        let ib = self.add_node(b.clone());
        if self.ungraph.find_edge(ia, ib).is_none() {
            self.ungraph.add_edge(ia, ib, ());
        }
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.node_index.contains_key(id)
    }

    /// Node ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.ungraph.node_indices().map(move |idx| &self.ungraph[idx])
    }

    /// Edges as `(a, b)` in insertion order, endpoints as first added.
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> + '_ {
        self.ungraph
            .edge_references()
            .map(move |e| (&self.ungraph[e.source()], &self.ungraph[e.target()]))
    }

    pub fn node_count(&self) -> usize {
        self.ungraph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.ungraph.edge_count()
    }
}

impl From<&GraphData> for Graph {
    fn from(data: &GraphData) -> Self {
        Graph::from_data(data)
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_graph.rs"]
mod tests;
