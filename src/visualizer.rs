//! SolutionRenderer — draws a loaded graph with a solution highlighted.
//!
//! Two phases: `load` stores the graph, `render` draws a solution on it. Both
//! hand their input back unchanged so the component can sit in the middle of a
//! pipeline without altering what flows through it.

use std::path::Path;

use tracing::{debug, info, info_span, warn};

use crate::config::RenderConfig;
use crate::display::{SystemViewer, Viewer};
use crate::error::{Result, VisualizerError};
use crate::graph::{Graph, GraphData};
use crate::layout::SpringLayout;
use crate::renderers::style::{Color, EdgeStyle, LabelStyle, LineStyle, NodeStyle};
use crate::renderers::{Figure, LegendEntry};
use crate::solution::{Partition, Solution, SolutionType};

/// Excluded edges are drawn at this fraction of the configured width.
pub const EXCLUDED_EDGE_WIDTH_FACTOR: f64 = 0.8;

/// A pipeline stage: sees the graph on the way down and the solution on the
/// way back up.
pub trait Stage {
    fn preprocess(&mut self, graph: GraphData) -> Result<GraphData>;
    fn postprocess(&mut self, solution: Solution) -> Result<Solution>;
}

pub struct SolutionRenderer {
    config: RenderConfig,
    graph: Option<Graph>,
    viewer: Box<dyn Viewer>,
}

impl SolutionRenderer {
    /// Build a renderer that opens figures with the system viewer.
    pub fn new(config: RenderConfig) -> Self {
        Self::with_viewer(config, SystemViewer::from_env())
    }

    pub fn with_viewer(config: RenderConfig, viewer: impl Viewer + 'static) -> Self {
        Self {
            config,
            graph: None,
            viewer: Box::new(viewer),
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The graph stored by the last `load`, if any.
    pub fn graph(&self) -> Option<&Graph> {
        self.graph.as_ref()
    }

    /// Store `data` for later renders, replacing any previous graph.
    pub fn load(&mut self, data: GraphData) -> GraphData {
        let graph = Graph::from_data(&data);
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "loaded graph"
        );
        self.graph = Some(graph);
        data
    }

    /// Draw `solution` on the loaded graph, then save and/or show the figure.
    pub fn render(&self, solution: Solution) -> Result<Solution> {
        let figure = self.render_figure(&solution)?;

        if !self.config.save_path.is_empty() {
            let path = Path::new(&self.config.save_path);
            let is_svg = path
                .extension()
                .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
            if !is_svg {
                warn!(path = %path.display(), "save_path does not end in .svg; writing SVG markup anyway");
            }
            figure.save(path)?;
            info!(path = %path.display(), "saved figure");
        }

        if self.config.show_plot {
            self.viewer.show(&figure)?;
        }

        Ok(solution)
    }

    /// Lay out the graph and draw `solution` onto a fresh figure, without
    /// saving or showing it.
    pub fn render_figure(&self, solution: &Solution) -> Result<Figure> {
        let mode = SolutionType::parse(&self.config.solution_type)?;
        self.config.validate()?;
        let graph = self.graph.as_ref().ok_or(VisualizerError::GraphNotLoaded)?;
        let _span = info_span!("render", mode = mode.as_str(), solution_len = solution.len())
            .entered();

        let layout = SpringLayout::new(self.config.layout_seed).compute(graph);
        let part = Partition::compute(graph, solution, mode);

        let cfg = &self.config;
        let node_color = Color::highlight(cfg.highlight_nodes);
        let edge_color = Color::highlight(cfg.highlight_edges);
        let radius = cfg.points_to_pixels((cfg.node_size as f64).sqrt() / 2.0);
        let font_size = cfg.points_to_pixels(cfg.font_size as f64);
        let edge_width = cfg.points_to_pixels(cfg.edge_width);

        let (w, h) = cfg.pixel_size();
        let mut figure = Figure::new(w, h);

        let node_style = |color: Color| NodeStyle {
            color,
            shape: cfg.node_shape,
            radius,
        };
        figure.draw_nodes(&layout, &part.included_nodes, node_style(node_color));
        figure.draw_nodes(&layout, &part.excluded_nodes, node_style(Color::BLACK));

        let label_style = |bold: bool| LabelStyle {
            color: Color::WHITE,
            font_size,
            bold,
        };
        figure.draw_labels(&layout, &part.included_nodes, label_style(true));
        figure.draw_labels(&layout, &part.excluded_nodes, label_style(false));

        figure.draw_edges(
            &layout,
            &part.excluded_edges,
            EdgeStyle {
                color: Color::BLACK,
                width: edge_width * EXCLUDED_EDGE_WIDTH_FACTOR,
                line: cfg.edge_style,
            },
        );
        figure.draw_edges(
            &layout,
            &part.included_edges,
            EdgeStyle {
                color: edge_color,
                width: edge_width,
                line: cfg.edge_style,
            },
        );

        if cfg.highlights_any() {
            figure.draw_legend(legend_entries(cfg, node_color, edge_color));
        }

        info!(
            included_nodes = part.included_nodes.len(),
            excluded_nodes = part.excluded_nodes.len(),
            included_edges = part.included_edges.len(),
            excluded_edges = part.excluded_edges.len(),
            "rendered solution"
        );
        Ok(figure)
    }
}

fn legend_entries(cfg: &RenderConfig, node_color: Color, edge_color: Color) -> Vec<LegendEntry> {
    let entry = |label: &str, marker_fill: Color, line_color: Color, line: LineStyle| LegendEntry {
        label: label.to_string(),
        shape: cfg.node_shape,
        marker_fill,
        line_color,
        line,
    };
    vec![
        entry("Included", node_color, edge_color, cfg.edge_style),
        entry("Excluded", Color::BLACK, Color::BLACK, cfg.edge_style),
    ]
}

impl Stage for SolutionRenderer {
    fn preprocess(&mut self, graph: GraphData) -> Result<GraphData> {
        Ok(self.load(graph))
    }

    fn postprocess(&mut self, solution: Solution) -> Result<Solution> {
        self.render(solution)
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_visualizer.rs"]
mod tests;
