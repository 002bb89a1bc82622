//! Error types for loading, rendering, saving, and displaying figures.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while visualizing a solution.
#[derive(Error, Debug)]
pub enum VisualizerError {
    /// A configuration value was rejected (solution type, marker, line style).
    #[error("{0}")]
    InvalidConfiguration(String),

    /// `render` was called before any graph was loaded.
    #[error("no graph loaded; call load() before render()")]
    GraphNotLoaded,

    /// The figure could not be written to `path`.
    #[error("cannot save figure to '{}': {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The interactive viewer could not present the figure.
    #[error("cannot display figure: {0}")]
    Display(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl VisualizerError {
    /// Error for a `solution_type` other than `path` or `set`.
    pub fn invalid_solution_type(value: &str) -> Self {
        Self::InvalidConfiguration(format!(
            "solution_type must be 'path' or 'set', and not {value}"
        ))
    }
}

pub type Result<T> = std::result::Result<T, VisualizerError>;
