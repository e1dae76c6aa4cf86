//! Template configuration loading and per-candidate rendering.

use crate::error::{GauntletError, Result};
use std::path::Path;

/// Placeholder token substituted with each candidate's file name.
pub const NET_PATH_MARKER: &str = "NET_PATH";

/// Raw text of the tournament template configuration.
///
/// The template carries a `.json` extension by convention, but its content is
/// treated as opaque text: the only structure assumed is the presence of the
/// `NET_PATH` placeholder. Loaded once, immutable for the rest of the run.
#[derive(Debug, Clone)]
pub struct ConfigTemplate {
    text: String,
}

impl ConfigTemplate {
    /// Load the template from disk.
    ///
    /// Fails fast if the file is unreadable or the placeholder is absent —
    /// a template without the marker would produce one identical
    /// configuration per candidate.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| GauntletError::io(path, e))?;
        Self::from_text(text, path)
    }

    fn from_text(text: String, path: &Path) -> Result<Self> {
        if !text.contains(NET_PATH_MARKER) {
            return Err(GauntletError::MissingPlaceholder {
                path: path.to_path_buf(),
                marker: NET_PATH_MARKER,
            });
        }
        Ok(Self { text })
    }

    /// Render a run configuration: every occurrence of the placeholder is
    /// replaced verbatim with the candidate's file name.
    pub fn render(&self, candidate_file_name: &str) -> String {
        self.text.replace(NET_PATH_MARKER, candidate_file_name)
    }
}
