//! Layout types: Point, Layout.

use std::collections::BTreeMap;

use crate::graph::NodeId;

// ─── Point ───────────────────────────────────────────────────────────────────

/// A position in layout space (y grows upwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// ─── Layout ───────────────────────────────────────────────────────────────────

/// Position of every node for one render call. Ordered by id so rescaling
/// is reproducible for a given set of positions.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    positions: BTreeMap<NodeId, Point>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: NodeId, p: Point) {
        self.positions.insert(id, p);
    }

    pub fn get(&self, id: &NodeId) -> Option<Point> {
        self.positions.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &Point)> + '_ {
        self.positions.iter()
    }

    /// Centre positions on their mean and scale so the largest absolute
    /// coordinate is 1. A single node ends up at the origin.
    pub fn rescale(&mut self) {
        let n = self.positions.len();
        if n == 0 {
            return;
        }
        let (sx, sy) = self
            .positions
            .values()
            .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
        let (mx, my) = (sx / n as f64, sy / n as f64);
        let mut lim: f64 = 0.0;
        for p in self.positions.values_mut() {
            p.x -= mx;
            p.y -= my;
            lim = lim.max(p.x.abs()).max(p.y.abs());
        }
        if lim > 0.0 {
            for p in self.positions.values_mut() {
                p.x /= lim;
                p.y /= lim;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_types.rs"]
mod tests;
