//! Figure — owned drawing surface for one render call.
//!
//! Draw calls record marks in pixel space; nothing is shared between figures,
//! so two renders never touch each other's output. Serialization happens in
//! `renderers::svg`.

use std::path::Path;

use crate::error::{Result, VisualizerError};
use crate::graph::NodeId;
use crate::layout::{Layout, Point};

use super::style::{Color, EdgeStyle, LabelStyle, LineStyle, NodeShape, NodeStyle};
use super::{Renderer, SvgRenderer};

/// Fraction of each dimension kept free around the plot area.
const MARGIN_FRACTION: f64 = 0.1;

pub const LEGEND_FONT_SIZE: f64 = 13.0;
pub const LEGEND_PADDING: f64 = 8.0;
/// Width of the line sample drawn in front of each legend label.
pub const LEGEND_SAMPLE_WIDTH: f64 = 30.0;
pub const LEGEND_MARKER_RADIUS: f64 = 6.0;
/// Approximate advance of one character, as a fraction of the font size.
const CHAR_WIDTH: f64 = 0.6;

// ─── Marks ────────────────────────────────────────────────────────────────────

/// One drawn element. Coordinates are pixels, y grows downwards.
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    Edge {
        from: NodeId,
        to: NodeId,
        start: (f64, f64),
        end: (f64, f64),
        style: EdgeStyle,
    },
    Node {
        id: NodeId,
        center: (f64, f64),
        style: NodeStyle,
    },
    Label {
        id: NodeId,
        anchor: (f64, f64),
        text: String,
        style: LabelStyle,
    },
}

impl Mark {
    /// Paint order: edges below nodes, labels on top.
    pub fn layer(&self) -> u8 {
        match self {
            Mark::Edge { .. } => 0,
            Mark::Node { .. } => 1,
            Mark::Label { .. } => 2,
        }
    }
}

// ─── Legend ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub shape: NodeShape,
    pub marker_fill: Color,
    pub line_color: Color,
    pub line: LineStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

impl Corner {
    /// Candidate order when several corners are equally empty.
    pub const ALL: [Corner; 4] = [
        Corner::UpperRight,
        Corner::UpperLeft,
        Corner::LowerLeft,
        Corner::LowerRight,
    ];
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub entries: Vec<LegendEntry>,
    pub corner: Corner,
    /// Top-left corner of the legend box.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Legend {
    pub fn row_height() -> f64 {
        LEGEND_FONT_SIZE * 1.6
    }

    fn contains(&self, (px, py): (f64, f64)) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}

// ─── Figure ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Figure {
    pub width: f64,
    pub height: f64,
    marks: Vec<Mark>,
    legend: Option<Legend>,
}

impl Figure {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            marks: Vec::new(),
            legend: None,
        }
    }

    /// Map a layout point from the [-1, 1] box into the plot area.
    pub fn to_pixel(&self, p: Point) -> (f64, f64) {
        let (mx, my) = (self.width * MARGIN_FRACTION, self.height * MARGIN_FRACTION);
        let (pw, ph) = (self.width - 2.0 * mx, self.height - 2.0 * my);
        (mx + (p.x + 1.0) / 2.0 * pw, my + (1.0 - p.y) / 2.0 * ph)
    }

    /// Draw a marker for each node that has a position. Returns how many were drawn.
    pub fn draw_nodes(&mut self, layout: &Layout, nodes: &[NodeId], style: NodeStyle) -> usize {
        let mut drawn = 0;
        for id in nodes {
            if let Some(p) = layout.get(id) {
                self.marks.push(Mark::Node {
                    id: id.clone(),
                    center: self.to_pixel(p),
                    style,
                });
                drawn += 1;
            }
        }
        drawn
    }

    /// Draw each node's id centred on its position.
    pub fn draw_labels(&mut self, layout: &Layout, nodes: &[NodeId], style: LabelStyle) -> usize {
        let mut drawn = 0;
        for id in nodes {
            if let Some(p) = layout.get(id) {
                self.marks.push(Mark::Label {
                    id: id.clone(),
                    anchor: self.to_pixel(p),
                    text: id.to_string(),
                    style,
                });
                drawn += 1;
            }
        }
        drawn
    }

    /// Draw a straight segment per edge whose endpoints both have positions.
    pub fn draw_edges(
        &mut self,
        layout: &Layout,
        edges: &[(NodeId, NodeId)],
        style: EdgeStyle,
    ) -> usize {
        let mut drawn = 0;
        for (a, b) in edges {
            if let (Some(pa), Some(pb)) = (layout.get(a), layout.get(b)) {
                self.marks.push(Mark::Edge {
                    from: a.clone(),
                    to: b.clone(),
                    start: self.to_pixel(pa),
                    end: self.to_pixel(pb),
                    style,
                });
                drawn += 1;
            }
        }
        drawn
    }

    /// Place a legend in the corner that covers the fewest node markers.
    pub fn draw_legend(&mut self, entries: Vec<LegendEntry>) {
        let longest = entries.iter().map(|e| e.label.chars().count()).max().unwrap_or(0);
        let width = LEGEND_PADDING * 3.0
            + LEGEND_SAMPLE_WIDTH
            + longest as f64 * LEGEND_FONT_SIZE * CHAR_WIDTH;
        let height = LEGEND_PADDING * 2.0 + entries.len() as f64 * Legend::row_height();

        let mut best: Option<(usize, Legend)> = None;
        for corner in Corner::ALL {
            let (x, y) = self.corner_origin(corner, width, height);
            let candidate = Legend {
                entries: Vec::new(),
                corner,
                x,
                y,
                width,
                height,
            };
            let covered = self.node_centers().filter(|c| candidate.contains(*c)).count();
            if best.as_ref().is_none_or(|(n, _)| covered < *n) {
                best = Some((covered, candidate));
            }
        }
        if let Some((_, mut legend)) = best {
            legend.entries = entries;
            self.legend = Some(legend);
        }
    }

    fn corner_origin(&self, corner: Corner, w: f64, h: f64) -> (f64, f64) {
        let inset = LEGEND_PADDING;
        let right = self.width - w - inset;
        let bottom = self.height - h - inset;
        match corner {
            Corner::UpperRight => (right, inset),
            Corner::UpperLeft => (inset, inset),
            Corner::LowerLeft => (inset, bottom),
            Corner::LowerRight => (right, bottom),
        }
    }

    fn node_centers(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.marks.iter().filter_map(|m| match m {
            Mark::Node { center, .. } => Some(*center),
            _ => None,
        })
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn legend(&self) -> Option<&Legend> {
        self.legend.as_ref()
    }

    pub fn node_marks(&self) -> impl Iterator<Item = &Mark> + '_ {
        self.marks.iter().filter(|m| matches!(m, Mark::Node { .. }))
    }

    pub fn edge_marks(&self) -> impl Iterator<Item = &Mark> + '_ {
        self.marks.iter().filter(|m| matches!(m, Mark::Edge { .. }))
    }

    pub fn label_marks(&self) -> impl Iterator<Item = &Mark> + '_ {
        self.marks.iter().filter(|m| matches!(m, Mark::Label { .. }))
    }

    pub fn to_svg(&self) -> String {
        SvgRenderer.render(self)
    }

    /// Write the figure as SVG markup to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_svg()).map_err(|source| VisualizerError::Save {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_figure.rs"]
mod tests;
