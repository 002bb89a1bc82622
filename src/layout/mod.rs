//! Layout engine — node positions for the drawing phase.

pub mod spring;
pub mod types;

pub use spring::SpringLayout;
pub use types::{Layout, Point};
