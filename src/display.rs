//! Interactive presentation of finished figures.

use std::cell::RefCell;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::info;

use crate::error::{Result, VisualizerError};
use crate::renderers::Figure;

/// Environment variable naming the program used to open figures.
pub const VIEWER_ENV: &str = "GRAPH_VISUALIZER_VIEWER";

/// Something that can present a figure to the user.
pub trait Viewer {
    /// Present `figure`, blocking until the viewer has been handed the figure.
    fn show(&self, figure: &Figure) -> Result<()>;
}

/// Opens figures with the platform's default SVG handler.
///
/// The SVG is written to a temporary file that is kept after the call, since
/// most handlers return before the file has been read. A viewer creates that
/// file on its first `show` and overwrites it on later calls, so one renderer
/// leaves at most one `graph-visualizer-*.svg` behind in the temp directory.
#[derive(Debug, Clone, Default)]
pub struct SystemViewer {
    /// Program to launch instead of the platform default.
    pub program: Option<String>,
    figure_path: RefCell<Option<PathBuf>>,
}

impl SystemViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Honour `GRAPH_VISUALIZER_VIEWER` when it is set and non-empty.
    pub fn from_env() -> Self {
        Self {
            program: std::env::var(VIEWER_ENV).ok().filter(|s| !s.is_empty()),
            ..Self::default()
        }
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: Some(program.into()),
            ..Self::default()
        }
    }

    /// The temporary file shown last, once `show` has been called.
    pub fn figure_path(&self) -> Option<PathBuf> {
        self.figure_path.borrow().clone()
    }

    fn command(&self, path: &Path) -> Command {
        let mut cmd = match (&self.program, cfg!(target_os = "macos"), cfg!(windows)) {
            (Some(program), _, _) => Command::new(program),
            (None, true, _) => Command::new("open"),
            (None, _, true) => {
                let mut c = Command::new("cmd");
                c.args(["/C", "start", ""]);
                c
            }
            (None, _, _) => Command::new("xdg-open"),
        };
        cmd.arg(path);
        cmd
    }

    fn write_temp(&self, figure: &Figure) -> Result<PathBuf> {
        let svg = figure.to_svg();
        if let Some(path) = self.figure_path() {
            std::fs::write(&path, svg)?;
            return Ok(path);
        }
        let mut file = tempfile::Builder::new()
            .prefix("graph-visualizer-")
            .suffix(".svg")
            .tempfile()?;
        file.write_all(svg.as_bytes())?;
        let (_, path) = file.keep().map_err(|e| VisualizerError::Io(e.error))?;
        *self.figure_path.borrow_mut() = Some(path.clone());
        Ok(path)
    }
}

impl Viewer for SystemViewer {
    fn show(&self, figure: &Figure) -> Result<()> {
        let path = self.write_temp(figure)?;
        let mut cmd = self.command(&path);
        let program = cmd.get_program().to_string_lossy().into_owned();
        let status = cmd
            .status()
            .map_err(|e| VisualizerError::Display(format!("cannot launch '{program}': {e}")))?;
        if !status.success() {
            return Err(VisualizerError::Display(format!(
                "'{program}' exited with {status}"
            )));
        }
        info!(path = %path.display(), viewer = %program, "opened figure");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_display.rs"]
mod tests;
