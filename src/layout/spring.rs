//! Force-directed ("spring") layout backed by the `force_graph` simulation.
//!
//! Nodes start at random positions and the simulation runs a fixed number of
//! steps. Without a seed, every call starts from fresh randomness, so the same
//! graph may land in different positions on each render.

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use petgraph::visit::EdgeRef;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::types::{Layout, Point};
use crate::graph::Graph;

/// Side of the square the initial positions are drawn from.
const SPREAD: f32 = 200.0;
const NODE_MASS: f32 = 10.0;
const TIME_STEP: f32 = 0.035;
const DEFAULT_ITERATIONS: usize = 500;

#[derive(Debug, Clone)]
pub struct SpringLayout {
    pub iterations: usize,
    pub seed: Option<u64>,
}

impl Default for SpringLayout {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            seed: None,
        }
    }
}

impl SpringLayout {
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    fn parameters() -> SimulationParameters {
        SimulationParameters {
            force_charge: 150.0,
            force_spring: 0.05,
            force_max: 100.0,
            node_speed: 3000.0,
            damping_factor: 0.9,
        }
    }

    /// Position every node of `graph`, rescaled into the [-1, 1] box.
    pub fn compute(&self, graph: &Graph) -> Layout {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let ids: Vec<_> = graph.nodes().cloned().collect();
        let mut sim: ForceGraph<usize, ()> = ForceGraph::new(Self::parameters());
        let mut initial = Vec::with_capacity(ids.len());
        let mut sim_index: Vec<DefaultNodeIdx> = Vec::with_capacity(ids.len());

        for i in 0..ids.len() {
            let (x, y) = (rng.gen_range(0.0..SPREAD), rng.gen_range(0.0..SPREAD));
            initial.push(Point::new(x as f64, y as f64));
            sim_index.push(sim.add_node(NodeData {
                x,
                y,
                mass: NODE_MASS,
                is_anchor: false,
                user_data: i,
            }));
        }

        // Petgraph indices are dense and match insertion order, so they index
        // `sim_index` directly. Self loops exert no force and are skipped.
        for e in graph.ungraph.edge_references() {
            let (a, b) = (e.source().index(), e.target().index());
            if a != b {
                sim.add_edge(sim_index[a], sim_index[b], EdgeData::default());
            }
        }

        for _ in 0..self.iterations {
            sim.update(TIME_STEP);
        }

        let mut layout = Layout::new();
        sim.visit_nodes(|node| {
            let i = node.data.user_data;
            let p = Point::new(node.x() as f64, node.y() as f64);
            let p = if p.is_finite() { p } else { initial[i] };
            layout.insert(ids[i].clone(), p);
        });
        layout.rescale();

        debug!(
            nodes = ids.len(),
            edges = graph.edge_count(),
            iterations = self.iterations,
            seeded = self.seed.is_some(),
            "computed spring layout"
        );
        layout
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_spring.rs"]
mod tests;
