//! Configuration for the rendering pipeline.
//!
//! Read once when a `SolutionRenderer` is built and never changed afterwards.
//! Every field has a default so a JSON config may name only what it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VisualizerError};
use crate::renderers::style::{LineStyle, NodeShape};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Fill solution nodes red instead of black.
    pub highlight_nodes: bool,
    /// Stroke solution edges red instead of black.
    pub highlight_edges: bool,
    /// Marker area in points squared.
    pub node_size: u32,
    pub node_shape: NodeShape,
    /// Line width of included edges in points. Excluded edges use 80% of it.
    pub edge_width: f64,
    pub edge_style: LineStyle,
    /// Label font size in points.
    pub font_size: u32,
    /// `"path"` or `"set"`. Validated when rendering, not here.
    pub solution_type: String,
    /// Where to write the SVG. Empty = no file.
    pub save_path: String,
    /// Open the figure in a viewer after rendering.
    pub show_plot: bool,
    /// Seed for the layout's initial positions. None = fresh randomness per render.
    pub layout_seed: Option<u64>,
    /// Figure size in inches.
    pub figure_width: f64,
    pub figure_height: f64,
    pub dpi: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            highlight_nodes: false,
            highlight_edges: false,
            node_size: 300,
            node_shape: NodeShape::Circle,
            edge_width: 1.0,
            edge_style: LineStyle::Solid,
            font_size: 12,
            solution_type: "path".to_string(),
            save_path: String::new(),
            show_plot: true,
            layout_seed: None,
            figure_width: 6.4,
            figure_height: 4.8,
            dpi: 100.0,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config. Unknown markers or line styles and out-of-range
    /// geometry are rejected here.
    pub fn from_json(src: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path)?;
        Self::from_json(&src)
    }

    /// Require a positive dpi and figure size and a non-negative edge width.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("dpi", self.dpi),
            ("figure_width", self.figure_width),
            ("figure_height", self.figure_height),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(VisualizerError::InvalidConfiguration(format!(
                    "{name} must be a positive number, and not {value}"
                )));
            }
        }
        if !(self.edge_width.is_finite() && self.edge_width >= 0.0) {
            return Err(VisualizerError::InvalidConfiguration(format!(
                "edge_width must be zero or more, and not {}",
                self.edge_width
            )));
        }
        Ok(())
    }

    /// True when either highlight flag is set; controls the legend.
    pub fn highlights_any(&self) -> bool {
        self.highlight_nodes || self.highlight_edges
    }

    /// Figure size in pixels.
    pub fn pixel_size(&self) -> (f64, f64) {
        (self.figure_width * self.dpi, self.figure_height * self.dpi)
    }

    /// Convert a length in points to pixels at the configured dpi.
    pub fn points_to_pixels(&self, pt: f64) -> f64 {
        pt * self.dpi / 72.0
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_config.rs"]
mod tests;
