//! Drawing surface, styles, and the Renderer trait.

pub mod figure;
pub mod style;
pub mod svg;

pub use figure::{Corner, Figure, Legend, LegendEntry, Mark};
pub use svg::SvgRenderer;

/// Trait for figure serializers.
pub trait Renderer {
    /// Render a finished figure to a string.
    fn render(&self, figure: &Figure) -> String;
}
