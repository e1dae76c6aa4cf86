//! Sequential batch orchestration.
//!
//! One candidate is fully processed (config write → engine invocation →
//! output parse → log write) before the next begins. Per-candidate failures
//! are recorded and the batch continues; failures outside the loop abort
//! the run.

use crate::candidates::{discover, CandidateFilter};
use crate::engine::EngineRunner;
use crate::report::{write_candidate_log, AggregateLog};
use crate::summary::{extract_summary, RatingSummary};
use crate::template::ConfigTemplate;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

/// Configuration for one batch run.
///
/// Defaults reproduce the paths the runner has always used, relative to the
/// working directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Template configuration containing the `NET_PATH` placeholder.
    pub template_path: PathBuf,

    /// Directory of candidate network files.
    pub nets_dir: PathBuf,

    /// Scratch configuration written per candidate, one shared path for the
    /// whole run. Not safe for concurrent invocation.
    pub scratch_config_path: PathBuf,

    /// External tournament executable.
    pub engine_path: PathBuf,

    /// Aggregate result log, truncated at batch start.
    pub aggregate_log_path: PathBuf,

    /// Directory of per-candidate log files.
    pub logs_dir: PathBuf,

    /// Candidate filename filter.
    pub filter: CandidateFilter,

    /// Engine timeout in seconds (0 = wait indefinitely).
    pub timeout_secs: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from("most.json"),
            nets_dir: PathBuf::from("nets"),
            scratch_config_path: PathBuf::from("test.json"),
            engine_path: PathBuf::from("../external/cuteataxx/cuteataxx-cli"),
            aggregate_log_path: PathBuf::from("full_log.txt"),
            logs_dir: PathBuf::from("logs"),
            filter: CandidateFilter::default(),
            timeout_secs: 0,
        }
    }
}

/// How one candidate fared.
#[derive(Debug, Clone)]
pub enum CandidateStatus {
    /// Engine ran cleanly and a rating pair was extracted.
    Rated(RatingSummary),

    /// Engine exited non-zero, could not be spawned, or timed out.
    EngineFailed { detail: String },

    /// Engine exited zero but no ` +/- ` line was found in its output.
    BadOutput,
}

/// Result of one candidate within the batch.
#[derive(Debug, Clone)]
pub struct CandidateOutcome {
    /// Candidate file name.
    pub file_name: String,

    /// What happened to it.
    pub status: CandidateStatus,
}

impl CandidateOutcome {
    /// Whether a rating was recorded for this candidate.
    pub fn rated(&self) -> bool {
        matches!(self.status, CandidateStatus::Rated(_))
    }
}

/// Result of a complete batch run.
#[derive(Debug, Clone)]
pub struct BatchReport {
    /// Per-candidate outcomes, in processing order.
    pub outcomes: Vec<CandidateOutcome>,

    /// Total duration in milliseconds.
    pub duration_ms: u64,
}

impl BatchReport {
    /// Number of candidates with a recorded rating.
    pub fn rated_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.rated()).count()
    }

    /// Number of candidates that failed (engine or output).
    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.rated_count()
    }
}

/// Run the full benchmark batch, one candidate at a time.
///
/// For each candidate that passes the filename filter:
/// 1. Render the template with the candidate's file name and write it to
///    the scratch configuration path, truncating prior content.
/// 2. Invoke the engine on the scratch configuration and wait for exit.
/// 3. On clean exit, extract the final rating pair, append
///    `filename,rating,uncertainty` to the aggregate log, and write the
///    summary line to `logs/{filename}.log`.
/// 4. On engine failure or unusable output, write the error content to the
///    per-candidate log, append nothing to the aggregate log, and continue
///    with the next candidate.
///
/// The aggregate log is truncated at batch start and flushed at batch end.
pub async fn run_batch(config: &BatchConfig) -> anyhow::Result<BatchReport> {
    let start = Instant::now();

    let template = ConfigTemplate::load(&config.template_path)
        .context("Failed to load template configuration")?;

    let candidates =
        discover(&config.nets_dir, &config.filter).context("Failed to enumerate candidates")?;

    let mut aggregate =
        AggregateLog::create(&config.aggregate_log_path).context("Failed to open aggregate log")?;

    let runner = EngineRunner::new(&config.engine_path, config.timeout_secs);

    info!(
        candidates = candidates.len(),
        engine = %config.engine_path.display(),
        "Starting benchmark batch"
    );

    let mut outcomes = Vec::new();

    for candidate in candidates {
        info!(net = %candidate.file_name, "Running benchmark");

        let run_config = template.render(&candidate.file_name);
        std::fs::write(&config.scratch_config_path, run_config).with_context(|| {
            format!(
                "Failed to write scratch configuration {:?}",
                config.scratch_config_path
            )
        })?;

        // Spawn failures and timeouts are per-candidate failures, not batch
        // failures.
        let status = match runner.run(&config.scratch_config_path).await {
            Ok(output) if output.passed() => match extract_summary(&output.stdout) {
                Ok(summary) => {
                    info!(
                        net = %candidate.file_name,
                        summary = %summary.line,
                        duration_ms = output.duration_ms,
                        "Rating extracted"
                    );
                    aggregate
                        .append(&candidate.file_name, &summary.elo, &summary.error)
                        .context("Failed to append to aggregate log")?;
                    CandidateStatus::Rated(summary)
                }
                Err(e) => {
                    warn!(net = %candidate.file_name, error = %e, "No rating pair in engine output");
                    CandidateStatus::BadOutput
                }
            },
            Ok(output) => {
                warn!(
                    net = %candidate.file_name,
                    exit_code = output.exit_code,
                    stderr = %output.stderr,
                    "Engine exited with failure"
                );
                CandidateStatus::EngineFailed {
                    detail: format!(
                        "Error executing engine (exit code {}): {}",
                        output.exit_code, output.stderr
                    ),
                }
            }
            Err(e) => {
                warn!(net = %candidate.file_name, error = %e, "Engine invocation failed");
                CandidateStatus::EngineFailed {
                    detail: format!("Error executing engine: {e}"),
                }
            }
        };

        let log_content = match &status {
            CandidateStatus::Rated(summary) => summary.line.clone(),
            CandidateStatus::EngineFailed { detail } => detail.clone(),
            CandidateStatus::BadOutput => {
                "No rating summary found in engine output".to_string()
            }
        };
        let log_path = write_candidate_log(&config.logs_dir, &candidate.file_name, &log_content)
            .context("Failed to write candidate log")?;
        info!(log = %log_path.display(), "Wrote candidate log");

        outcomes.push(CandidateOutcome {
            file_name: candidate.file_name,
            status,
        });
    }

    aggregate.finish().context("Failed to flush aggregate log")?;

    let report = BatchReport {
        outcomes,
        duration_ms: start.elapsed().as_millis() as u64,
    };

    info!(
        rated = report.rated_count(),
        failed = report.failed_count(),
        duration_ms = report.duration_ms,
        "Benchmark batch finished"
    );

    Ok(report)
}
