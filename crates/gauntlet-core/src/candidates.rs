//! Candidate discovery and filename filtering.

use crate::error::{GauntletError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// One network weight file to benchmark.
///
/// Enumerated once per run and discarded after processing.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Bare file name, substituted into the template.
    pub file_name: String,

    /// Full path of the directory entry.
    pub path: PathBuf,
}

/// Required-substring filter applied to candidate file names.
///
/// A file name passes only when it contains every required substring
/// (logical AND). The default requires both "boot" and "ataxx".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateFilter {
    pub required_substrings: Vec<String>,
}

impl Default for CandidateFilter {
    fn default() -> Self {
        Self {
            required_substrings: vec!["boot".to_string(), "ataxx".to_string()],
        }
    }
}

impl CandidateFilter {
    /// Create a filter from an explicit substring list.
    ///
    /// An empty list accepts every file name.
    pub fn new(required_substrings: Vec<String>) -> Self {
        Self {
            required_substrings,
        }
    }

    /// Whether a file name satisfies every required substring.
    pub fn matches(&self, file_name: &str) -> bool {
        self.required_substrings
            .iter()
            .all(|s| file_name.contains(s.as_str()))
    }
}

/// Enumerate candidate files in `dir`.
///
/// Non-regular entries (directories, special files) and names failing the
/// filter are skipped. Candidates come back in directory-enumeration order,
/// which is platform-dependent and not part of the contract.
pub fn discover(dir: &Path, filter: &CandidateFilter) -> Result<Vec<Candidate>> {
    let entries = std::fs::read_dir(dir).map_err(|e| GauntletError::io(dir, e))?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| GauntletError::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !filter.matches(&file_name) {
            debug!(file = %file_name, "Skipping candidate failing filter");
            continue;
        }

        candidates.push(Candidate { file_name, path });
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_filter_requires_every_substring() {
        let filter = CandidateFilter::default();
        assert!(filter.matches("bootataxx-001.nnue"));
        assert!(filter.matches("ataxx-boot-v2.nnue"));
        assert!(!filter.matches("bootstrap-001.nnue"));
        assert!(!filter.matches("ataxx-main.nnue"));
        assert!(!filter.matches("readme.txt"));
    }

    #[test]
    fn test_empty_filter_accepts_everything() {
        let filter = CandidateFilter::new(vec![]);
        assert!(filter.matches("anything.bin"));
    }

    #[test]
    fn test_discover_skips_directories_and_filtered_names() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bootataxx-001.nnue"), b"w").unwrap();
        fs::write(dir.path().join("bootataxx-002.nnue"), b"w").unwrap();
        fs::write(dir.path().join("notes.txt"), b"n").unwrap();
        fs::create_dir(dir.path().join("bootataxx-subdir")).unwrap();

        let found = discover(dir.path(), &CandidateFilter::default()).expect("discover failed");

        let mut names: Vec<&str> = found.iter().map(|c| c.file_name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["bootataxx-001.nnue", "bootataxx-002.nnue"]);
        for candidate in &found {
            assert!(candidate.path.is_file());
        }
    }

    #[test]
    fn test_discover_missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover(&dir.path().join("nets"), &CandidateFilter::default()).unwrap_err();
        assert!(matches!(err, GauntletError::Io { .. }));
    }
}
