//! Colors, marker shapes, and line styles.
//!
//! Marker and line-style names follow the matplotlib vocabulary that pipeline
//! configs already use (`"o"`, `"s"`, `"--"`, `"dotted"`, ...).

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VisualizerError;

// ─── Color ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Red when `highlight` is set, otherwise black.
    pub fn highlight(highlight: bool) -> Self {
        if highlight { Color::RED } else { Color::BLACK }
    }

    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// ─── NodeShape ────────────────────────────────────────────────────────────────

/// Node marker symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NodeShape {
    Circle,
    Square,
    TriangleUp,
    TriangleDown,
    TriangleLeft,
    TriangleRight,
    Diamond,
    ThinDiamond,
    Pentagon,
    Hexagon,
    Octagon,
    Star,
}

/// Marker geometry in pixel space.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerOutline {
    Circle { cx: f64, cy: f64, r: f64 },
    Polygon(Vec<(f64, f64)>),
}

impl NodeShape {
    pub fn symbol(self) -> &'static str {
        match self {
            NodeShape::Circle => "o",
            NodeShape::Square => "s",
            NodeShape::TriangleUp => "^",
            NodeShape::TriangleDown => "v",
            NodeShape::TriangleLeft => "<",
            NodeShape::TriangleRight => ">",
            NodeShape::Diamond => "D",
            NodeShape::ThinDiamond => "d",
            NodeShape::Pentagon => "p",
            NodeShape::Hexagon => "h",
            NodeShape::Octagon => "8",
            NodeShape::Star => "*",
        }
    }

    /// Outline of a marker centred on (cx, cy) with circumradius `r`.
    /// Angles are measured counter-clockwise from +x with y growing downwards.
    pub fn outline(self, cx: f64, cy: f64, r: f64) -> MarkerOutline {
        let poly = |sides: usize, start_deg: f64, sx: f64| {
            MarkerOutline::Polygon(
                (0..sides)
                    .map(|i| {
                        let a = (start_deg + 360.0 * i as f64 / sides as f64) * PI / 180.0;
                        (cx + sx * r * a.cos(), cy - r * a.sin())
                    })
                    .collect(),
            )
        };
        match self {
            NodeShape::Circle => MarkerOutline::Circle { cx, cy, r },
            NodeShape::Square => poly(4, 45.0, 1.0),
            NodeShape::TriangleUp => poly(3, 90.0, 1.0),
            NodeShape::TriangleDown => poly(3, -90.0, 1.0),
            NodeShape::TriangleLeft => poly(3, 180.0, 1.0),
            NodeShape::TriangleRight => poly(3, 0.0, 1.0),
            NodeShape::Diamond => poly(4, 90.0, 1.0),
            NodeShape::ThinDiamond => poly(4, 90.0, 0.6),
            NodeShape::Pentagon => poly(5, 90.0, 1.0),
            NodeShape::Hexagon => poly(6, 90.0, 1.0),
            NodeShape::Octagon => poly(8, 22.5, 1.0),
            NodeShape::Star => {
                let inner = r * 0.381_966;
                MarkerOutline::Polygon(
                    (0..10)
                        .map(|i| {
                            let a = (90.0 + 36.0 * i as f64) * PI / 180.0;
                            let rr = if i % 2 == 0 { r } else { inner };
                            (cx + rr * a.cos(), cy - rr * a.sin())
                        })
                        .collect(),
                )
            }
        }
    }
}

impl FromStr for NodeShape {
    type Err = VisualizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let shape = match s {
            "o" => NodeShape::Circle,
            "s" => NodeShape::Square,
            "^" => NodeShape::TriangleUp,
            "v" => NodeShape::TriangleDown,
            "<" => NodeShape::TriangleLeft,
            ">" => NodeShape::TriangleRight,
            "D" => NodeShape::Diamond,
            "d" => NodeShape::ThinDiamond,
            "p" => NodeShape::Pentagon,
            "h" => NodeShape::Hexagon,
            "8" => NodeShape::Octagon,
            "*" => NodeShape::Star,
            other => {
                return Err(VisualizerError::InvalidConfiguration(format!(
                    "unknown node_shape '{other}'; use one of o s ^ v < > D d p h 8 *"
                )));
            }
        };
        Ok(shape)
    }
}

impl TryFrom<String> for NodeShape {
    type Error = VisualizerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<NodeShape> for String {
    fn from(shape: NodeShape) -> Self {
        shape.symbol().to_string()
    }
}

impl fmt::Display for NodeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ─── LineStyle ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
    DashDot,
}

impl LineStyle {
    pub fn name(self) -> &'static str {
        match self {
            LineStyle::Solid => "solid",
            LineStyle::Dashed => "dashed",
            LineStyle::Dotted => "dotted",
            LineStyle::DashDot => "dashdot",
        }
    }

    /// On/off dash lengths for a stroke of `width` pixels. None for solid lines.
    pub fn dash_pattern(self, width: f64) -> Option<Vec<f64>> {
        let unit: &[f64] = match self {
            LineStyle::Solid => return None,
            LineStyle::Dashed => &[3.7, 1.6],
            LineStyle::Dotted => &[1.0, 1.65],
            LineStyle::DashDot => &[6.4, 1.6, 1.0, 1.6],
        };
        Some(unit.iter().map(|d| d * width).collect())
    }
}

impl FromStr for LineStyle {
    type Err = VisualizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" | "-" => Ok(LineStyle::Solid),
            "dashed" | "--" => Ok(LineStyle::Dashed),
            "dotted" | ":" => Ok(LineStyle::Dotted),
            "dashdot" | "-." => Ok(LineStyle::DashDot),
            other => Err(VisualizerError::InvalidConfiguration(format!(
                "unknown edge_style '{other}'; use solid, dashed, dotted, or dashdot"
            ))),
        }
    }
}

impl TryFrom<String> for LineStyle {
    type Error = VisualizerError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LineStyle> for String {
    fn from(style: LineStyle) -> Self {
        style.name().to_string()
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─── Draw styles ──────────────────────────────────────────────────────────────

/// Styling for one `draw_nodes` call. `radius` is in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeStyle {
    pub color: Color,
    pub shape: NodeShape,
    pub radius: f64,
}

/// Styling for one `draw_labels` call. `font_size` is in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub color: Color,
    pub font_size: f64,
    pub bold: bool,
}

/// Styling for one `draw_edges` call. `width` is in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeStyle {
    pub color: Color,
    pub width: f64,
    pub line: LineStyle,
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_style.rs"]
mod tests;
