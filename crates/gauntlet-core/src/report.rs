//! Aggregate and per-candidate result logging.

use crate::error::{GauntletError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// The aggregate result log for one batch run.
///
/// Owned for the duration of the run: created with truncation at batch
/// start, buffered, flushed via [`AggregateLog::finish`] at batch end.
/// Dropping without `finish` still flushes on a best-effort basis.
#[derive(Debug)]
pub struct AggregateLog {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl AggregateLog {
    /// Create the aggregate log, truncating any prior content.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| GauntletError::io(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    /// Append one result line: `filename,rating,uncertainty`.
    ///
    /// No header, no escaping: a comma inside a candidate file name ends up
    /// in the output verbatim.
    pub fn append(&mut self, file_name: &str, elo: &str, error: &str) -> Result<()> {
        writeln!(self.writer, "{},{},{}", file_name, elo, error)
            .map_err(|e| GauntletError::io(self.path.clone(), e))
    }

    /// Flush buffered lines and close the log.
    pub fn finish(mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|e| GauntletError::io(self.path.clone(), e))
    }
}

/// Write the per-candidate log file `{logs_dir}/{file_name}.log`.
///
/// Contains exactly the summary line on success or the captured error
/// content on failure. Truncates any previous content; creates the logs
/// directory if absent. Returns the path written.
pub fn write_candidate_log(logs_dir: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(logs_dir).map_err(|e| GauntletError::io(logs_dir, e))?;

    let path = logs_dir.join(format!("{}.log", file_name));
    std::fs::write(&path, content).map_err(|e| GauntletError::io(path.clone(), e))?;
    Ok(path)
}
