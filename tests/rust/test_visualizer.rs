use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::graph::NodeId;
use crate::renderers::Mark;
use crate::renderers::style::NodeShape;

/// Counts how many figures it was asked to show.
#[derive(Clone, Default)]
struct CountingViewer {
    shown: Rc<Cell<usize>>,
}

impl Viewer for CountingViewer {
    fn show(&self, _figure: &Figure) -> Result<()> {
        self.shown.set(self.shown.get() + 1);
        Ok(())
    }
}

fn id(s: &str) -> NodeId {
    NodeId::from(s)
}

/// Nodes {A,B,C,D}, edges {(A,B),(B,C),(C,D),(D,A)}.
fn square() -> GraphData {
    GraphData::new(
        vec![id("A"), id("B"), id("C"), id("D")],
        vec![
            (id("A"), id("B")),
            (id("B"), id("C")),
            (id("C"), id("D")),
            (id("D"), id("A")),
        ],
    )
}

fn config() -> RenderConfig {
    RenderConfig {
        show_plot: false,
        layout_seed: Some(7),
        ..RenderConfig::default()
    }
}

fn renderer(config: RenderConfig) -> (SolutionRenderer, Rc<Cell<usize>>) {
    let viewer = CountingViewer::default();
    let shown = viewer.shown.clone();
    let mut r = SolutionRenderer::with_viewer(config, viewer);
    r.load(square());
    (r, shown)
}

fn edge_colors(figure: &Figure) -> Vec<(String, String, Color, f64)> {
    figure
        .edge_marks()
        .filter_map(|m| match m {
            Mark::Edge {
                from, to, style, ..
            } => Some((from.to_string(), to.to_string(), style.color, style.width)),
            _ => None,
        })
        .collect()
}

// ── Lifecycle ─────────────────────────────────────────────────────────────────

#[test]
fn test_render_before_load_fails() {
    let r = SolutionRenderer::with_viewer(config(), CountingViewer::default());
    let err = r.render(Solution::from_iter(["A"])).unwrap_err();
    assert!(matches!(err, VisualizerError::GraphNotLoaded));
}

#[test]
fn test_load_returns_input_unchanged() {
    let mut r = SolutionRenderer::with_viewer(config(), CountingViewer::default());
    assert!(r.graph().is_none());
    let out = r.load(square());
    assert_eq!(out, square());
    assert_eq!(r.graph().map(|g| g.node_count()), Some(4));
}

#[test]
fn test_load_replaces_previous_graph() {
    let (mut r, _) = renderer(config());
    r.load(GraphData::new(vec![id("X")], vec![]));
    let g = r.graph().unwrap();
    assert_eq!(g.node_count(), 1);
    assert!(g.contains_node(&id("X")));
}

#[test]
fn test_render_returns_solution_unchanged() {
    let (r, _) = renderer(config());
    let solution = Solution::from_iter(["D", "C", "B"]);
    assert_eq!(r.render(solution.clone()).unwrap(), solution);
}

#[test]
fn test_render_repeatable_on_same_graph() {
    let (r, _) = renderer(config());
    r.render(Solution::from_iter(["A", "B"])).unwrap();
    r.render(Solution::from_iter(["C", "D"])).unwrap();
}

#[test]
fn test_stage_passthrough() {
    let mut r = SolutionRenderer::with_viewer(config(), CountingViewer::default());
    assert_eq!(r.preprocess(square()).unwrap(), square());
    let s = Solution::from_iter(["A", "C"]);
    assert_eq!(r.postprocess(s.clone()).unwrap(), s);
}

// ── Validation ────────────────────────────────────────────────────────────────

#[test]
fn test_invalid_solution_type_fails_without_side_effects() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("never.svg");
    let (r, shown) = renderer(RenderConfig {
        solution_type: "tour".to_string(),
        save_path: out.to_string_lossy().into_owned(),
        show_plot: true,
        ..config()
    });
    let err = r.render(Solution::from_iter(["A", "B"])).unwrap_err();
    match err {
        VisualizerError::InvalidConfiguration(msg) => assert!(msg.contains("tour")),
        other => panic!("expected InvalidConfiguration, got {other:?}"),
    }
    assert!(!out.exists());
    assert_eq!(shown.get(), 0);
}

#[test]
fn test_invalid_solution_type_accepted_at_construction() {
    let r = SolutionRenderer::new(RenderConfig {
        solution_type: "tour".to_string(),
        ..config()
    });
    assert_eq!(r.config().solution_type, "tour");
}

// ── Drawing ───────────────────────────────────────────────────────────────────

#[test]
fn test_path_cycle_highlighted_edges() {
    let (r, _) = renderer(RenderConfig {
        highlight_edges: true,
        ..config()
    });
    let f = r.render_figure(&Solution::from_iter(["A", "B", "C", "D"])).unwrap();
    let edges = edge_colors(&f);
    assert_eq!(edges.len(), 4);
    assert!(edges.iter().all(|(_, _, c, _)| *c == Color::RED));
    let closing = edges.iter().find(|(a, b, _, _)| a == "D" && b == "A");
    assert!(closing.is_some());
}

#[test]
fn test_set_mode_excluded_edges_at_reduced_width() {
    let (r, _) = renderer(RenderConfig {
        solution_type: "set".to_string(),
        highlight_edges: true,
        edge_width: 2.0,
        ..config()
    });
    let f = r.render_figure(&Solution::from_iter(["A", "C"])).unwrap();
    let full = r.config().points_to_pixels(2.0);
    let edges = edge_colors(&f);
    assert_eq!(edges.len(), 4);
    for (_, _, color, width) in edges {
        assert_eq!(color, Color::BLACK);
        assert!((width - full * EXCLUDED_EDGE_WIDTH_FACTOR).abs() < 1e-9);
    }
}

#[test]
fn test_node_colors_follow_highlight_flag() {
    let (r, _) = renderer(RenderConfig {
        highlight_nodes: true,
        node_shape: NodeShape::Hexagon,
        ..config()
    });
    let f = r.render_figure(&Solution::from_iter(["A", "B"])).unwrap();
    for m in f.node_marks() {
        if let Mark::Node { id, style, .. } = m {
            let expected = if id.to_string() == "A" || id.to_string() == "B" {
                Color::RED
            } else {
                Color::BLACK
            };
            assert_eq!(style.color, expected);
            assert_eq!(style.shape, NodeShape::Hexagon);
        }
    }
}

#[test]
fn test_no_highlight_draws_partition_identically() {
    let (r, _) = renderer(config());
    let f = r.render_figure(&Solution::from_iter(["A", "B"])).unwrap();
    assert_eq!(f.node_marks().count(), 4);
    assert!(f.node_marks().all(|m| matches!(m, Mark::Node { style, .. } if style.color == Color::BLACK)));
    assert!(edge_colors(&f).iter().all(|(_, _, c, _)| *c == Color::BLACK));
    assert!(f.legend().is_none());
}

#[test]
fn test_labels_white_bold_for_included() {
    let (r, _) = renderer(config());
    let f = r.render_figure(&Solution::from_iter(["A"])).unwrap();
    assert_eq!(f.label_marks().count(), 4);
    for m in f.label_marks() {
        if let Mark::Label { text, style, .. } = m {
            assert_eq!(style.color, Color::WHITE);
            assert_eq!(style.bold, text == "A");
        }
    }
}

#[test]
fn test_legend_entries_when_highlighting() {
    let (r, _) = renderer(RenderConfig {
        highlight_nodes: true,
        ..config()
    });
    let f = r.render_figure(&Solution::from_iter(["A"])).unwrap();
    let legend = f.legend().unwrap();
    let labels: Vec<&str> = legend.entries.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["Included", "Excluded"]);
    assert_eq!(legend.entries[0].marker_fill, Color::RED);
    assert_eq!(legend.entries[0].line_color, Color::BLACK);
    assert_eq!(legend.entries[1].marker_fill, Color::BLACK);
}

#[test]
fn test_unknown_solution_nodes_not_drawn() {
    let (r, _) = renderer(config());
    let f = r.render_figure(&Solution::from_iter(["A", "Q"])).unwrap();
    assert_eq!(f.node_marks().count(), 4);
}

// ── Output ────────────────────────────────────────────────────────────────────

#[test]
fn test_render_saves_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("solution.svg");
    let (r, shown) = renderer(RenderConfig {
        save_path: out.to_string_lossy().into_owned(),
        highlight_edges: true,
        ..config()
    });
    r.render(Solution::from_iter(["A", "B", "C", "D"])).unwrap();
    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.contains(">Included</text>"));
    assert_eq!(shown.get(), 0);
}

#[test]
fn test_render_shows_when_enabled() {
    let (r, shown) = renderer(RenderConfig {
        show_plot: true,
        ..config()
    });
    r.render(Solution::from_iter(["A"])).unwrap();
    assert_eq!(shown.get(), 1);
}

#[test]
fn test_save_failure_propagates() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("missing").join("x.svg");
    let (r, _) = renderer(RenderConfig {
        save_path: out.to_string_lossy().into_owned(),
        ..config()
    });
    let err = r.render(Solution::from_iter(["A"])).unwrap_err();
    assert!(matches!(err, VisualizerError::Save { .. }));
}

#[test]
fn test_render_svg_one_shot_ignores_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("unused.svg");
    let cfg = RenderConfig {
        save_path: out.to_string_lossy().into_owned(),
        show_plot: true,
        highlight_nodes: true,
        ..config()
    };
    let svg = crate::render_svg(&square(), &Solution::from_iter(["A", "B"]), &cfg).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(">Included</text>"));
    assert!(!out.exists());
}

#[test]
fn test_bad_geometry_fails_render_without_side_effects() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("blank.svg");
    let (r, shown) = renderer(RenderConfig {
        dpi: 0.0,
        edge_width: -2.0,
        save_path: out.to_string_lossy().into_owned(),
        show_plot: true,
        ..config()
    });
    let err = r.render(Solution::from_iter(["A"])).unwrap_err();
    assert!(matches!(err, VisualizerError::InvalidConfiguration(_)));
    assert!(!out.exists());
    assert_eq!(shown.get(), 0);
}

#[test]
fn test_render_svg_rejects_negative_edge_width() {
    let cfg = RenderConfig {
        edge_width: -2.0,
        ..config()
    };
    let err = crate::render_svg(&square(), &Solution::from_iter(["A"]), &cfg).unwrap_err();
    assert!(err.to_string().contains("edge_width"));
}
