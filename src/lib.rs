//! graph-visualizer — draws a graph with a path or node-set solution highlighted.
//!
//! Public API: `SolutionRenderer` (the two-phase pipeline component) and
//! `render_svg()` for one-shot use.

pub mod config;
pub mod display;
pub mod error;
pub mod graph;
pub mod layout;
pub mod renderers;
pub mod solution;
pub mod visualizer;

pub use config::RenderConfig;
pub use display::{SystemViewer, Viewer};
pub use error::{Result, VisualizerError};
pub use graph::{Graph, GraphData, NodeId};
pub use renderers::Figure;
pub use solution::{Partition, Solution, SolutionType};
pub use visualizer::{SolutionRenderer, Stage};

/// Lay out `graph`, draw `solution` on it, and return the SVG markup.
///
/// Ignores `save_path` and `show_plot`; nothing is written or opened.
pub fn render_svg(graph: &GraphData, solution: &Solution, config: &RenderConfig) -> Result<String> {
    let mut renderer = SolutionRenderer::with_viewer(config.clone(), SystemViewer::new());
    renderer.load(graph.clone());
    Ok(renderer.render_figure(solution)?.to_svg())
}
