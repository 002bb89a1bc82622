//! SVG renderer — converts a `Figure` to an SVG string.
//!
//! Marks are emitted by layer (edges, nodes, labels) and in draw order within
//! a layer, followed by the legend.

use super::Renderer;
use super::figure::{
    Figure, LEGEND_FONT_SIZE, LEGEND_MARKER_RADIUS, LEGEND_PADDING, LEGEND_SAMPLE_WIDTH, Legend,
    Mark,
};
use super::style::{Color, EdgeStyle, LabelStyle, MarkerOutline, NodeShape};

// ── Constants ────────────────────────────────────────────────────────────────

const FONT_FAMILY: &str = "DejaVu Sans, Verdana, sans-serif";
const LEGEND_FRAME: &str = r##"fill="white" fill-opacity="0.8" stroke="#cccccc" stroke-width="1""##;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn font(size: f64) -> String {
    format!(r#"font-family="{FONT_FAMILY}" font-size="{size:.1}""#)
}

fn dash_attr(style: &EdgeStyle) -> String {
    match style.line.dash_pattern(style.width) {
        Some(pattern) => {
            let parts: Vec<String> = pattern.iter().map(|d| format!("{d:.2}")).collect();
            format!(r#" stroke-dasharray="{}""#, parts.join(" "))
        }
        None => String::new(),
    }
}

// ── Marks ────────────────────────────────────────────────────────────────────

fn render_marker(shape: NodeShape, (cx, cy): (f64, f64), r: f64, fill: Color) -> String {
    let fill = fill.hex();
    match shape.outline(cx, cy, r) {
        MarkerOutline::Circle { cx, cy, r } => {
            format!(r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{r:.2}" fill="{fill}"/>"#)
        }
        MarkerOutline::Polygon(points) => {
            let pts: Vec<String> = points
                .iter()
                .map(|(x, y)| format!("{x:.2},{y:.2}"))
                .collect();
            format!(r#"<polygon points="{}" fill="{fill}"/>"#, pts.join(" "))
        }
    }
}

fn render_edge((x1, y1): (f64, f64), (x2, y2): (f64, f64), style: &EdgeStyle) -> String {
    format!(
        r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="{}" stroke-width="{:.2}"{}/>"#,
        style.color.hex(),
        style.width,
        dash_attr(style)
    )
}

fn render_label((x, y): (f64, f64), text: &str, style: &LabelStyle) -> String {
    let weight = if style.bold { "bold" } else { "normal" };
    format!(
        r#"<text x="{x:.2}" y="{y:.2}" dominant-baseline="central" text-anchor="middle" {} font-weight="{weight}" fill="{}">{}</text>"#,
        font(style.font_size),
        style.color.hex(),
        escape(text)
    )
}

fn render_legend(legend: &Legend) -> String {
    let mut parts = vec![format!(
        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="3" {LEGEND_FRAME}/>"#,
        legend.x, legend.y, legend.width, legend.height
    )];
    let row = Legend::row_height();
    for (i, entry) in legend.entries.iter().enumerate() {
        let cy = legend.y + LEGEND_PADDING + row * (i as f64 + 0.5);
        let x0 = legend.x + LEGEND_PADDING;
        let x1 = x0 + LEGEND_SAMPLE_WIDTH;
        let sample = EdgeStyle {
            color: entry.line_color,
            width: 1.5,
            line: entry.line,
        };
        parts.push(render_edge((x0, cy), (x1, cy), &sample));
        parts.push(render_marker(
            entry.shape,
            ((x0 + x1) / 2.0, cy),
            LEGEND_MARKER_RADIUS,
            entry.marker_fill,
        ));
        parts.push(format!(
            r#"<text x="{:.2}" y="{cy:.2}" dominant-baseline="central" {} fill="black">{}</text>"#,
            x1 + LEGEND_PADDING,
            font(LEGEND_FONT_SIZE),
            escape(&entry.label)
        ));
    }
    parts.join("\n")
}

// ── Renderer ─────────────────────────────────────────────────────────────────

/// Serializes figures as standalone SVG documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgRenderer;

impl Renderer for SvgRenderer {
    fn render(&self, figure: &Figure) -> String {
        let (w, h) = (figure.width, figure.height);
        let mut parts = vec![
            format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.0} {h:.0}">"#
            ),
            format!(r#"<rect width="{w:.0}" height="{h:.0}" fill="white"/>"#),
        ];

        let mut marks: Vec<&Mark> = figure.marks().iter().collect();
        marks.sort_by_key(|m| m.layer());
        for mark in marks {
            parts.push(match mark {
                Mark::Edge {
                    start, end, style, ..
                } => render_edge(*start, *end, style),
                Mark::Node { center, style, .. } => {
                    render_marker(style.shape, *center, style.radius, style.color)
                }
                Mark::Label {
                    anchor,
                    text,
                    style,
                    ..
                } => render_label(*anchor, text, style),
            });
        }

        if let Some(legend) = figure.legend() {
            parts.push(render_legend(legend));
        }

        parts.push("</svg>".to_string());
        parts.join("\n")
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_svg.rs"]
mod tests;
