//! netgauntlet - batch Elo benchmarking of network weight files
//!
//! For every candidate net in the candidate directory whose name passes the
//! filename filter, the runner substitutes the net into a tournament
//! template configuration, runs the external cuteataxx CLI on it, and
//! records the resulting `rating +/- uncertainty` pair to an aggregate log
//! and a per-candidate log file.

use anyhow::{Context, Result};
use clap::Parser;
use gauntlet_core::{
    run_batch, telemetry, BatchConfig, BatchReport, CandidateFilter, CandidateStatus,
};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(name = "netgauntlet")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Batch Elo benchmarking of network files via cuteataxx", long_about = None)]
struct Cli {
    /// Template configuration containing the NET_PATH placeholder
    #[arg(long, default_value = "most.json")]
    template: PathBuf,

    /// Directory of candidate network files
    #[arg(long, default_value = "nets")]
    nets: PathBuf,

    /// Scratch configuration path handed to the engine
    #[arg(long, default_value = "test.json")]
    scratch_config: PathBuf,

    /// External tournament executable
    #[arg(long, default_value = "../external/cuteataxx/cuteataxx-cli")]
    engine: PathBuf,

    /// Aggregate result log (truncated at start of the run)
    #[arg(long, default_value = "full_log.txt")]
    log: PathBuf,

    /// Directory of per-candidate log files
    #[arg(long, default_value = "logs")]
    logs_dir: PathBuf,

    /// Substrings a candidate file name must all contain (comma-separated)
    #[arg(long, default_value = "boot,ataxx")]
    filter: String,

    /// Engine timeout in seconds (0 = wait indefinitely)
    #[arg(long, default_value = "0")]
    timeout: u64,

    /// Load the batch configuration from a JSON file instead of flags
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Build the effective batch configuration.
    ///
    /// `--config <file>` takes the whole configuration from a JSON file
    /// (absent fields fall back to defaults); otherwise the individual
    /// flags are used.
    fn batch_config(&self) -> Result<BatchConfig> {
        if let Some(path) = &self.config {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            return serde_json::from_str(&content)
                .with_context(|| format!("Invalid JSON in {:?}", path));
        }

        let required = self
            .filter
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(BatchConfig {
            template_path: self.template.clone(),
            nets_dir: self.nets.clone(),
            scratch_config_path: self.scratch_config.clone(),
            engine_path: self.engine.clone(),
            aggregate_log_path: self.log.clone(),
            logs_dir: self.logs_dir.clone(),
            filter: CandidateFilter::new(required),
            timeout_secs: self.timeout,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    telemetry::init_tracing(cli.json, level);

    let config = cli.batch_config()?;
    let report = run_batch(&config).await.context("Benchmark batch failed")?;

    print_report(&report);

    // Individual candidate failures do not fail the process; only a batch
    // that could not run at all exits non-zero.
    Ok(())
}

fn print_report(report: &BatchReport) {
    println!();
    for outcome in &report.outcomes {
        match &outcome.status {
            CandidateStatus::Rated(summary) => {
                println!("  ✓ {}  {}", outcome.file_name, summary.line);
            }
            CandidateStatus::EngineFailed { .. } => {
                println!("  ✗ {}  (engine failed)", outcome.file_name);
            }
            CandidateStatus::BadOutput => {
                println!("  ✗ {}  (no rating in output)", outcome.file_name);
            }
        }
    }
    println!();
    println!(
        "Summary: {}/{} nets rated in {}ms",
        report.rated_count(),
        report.outcomes.len(),
        report.duration_ms
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flags_reproduce_historical_paths() {
        let cli = Cli::try_parse_from(["netgauntlet"]).unwrap();
        let config = cli.batch_config().unwrap();

        assert_eq!(config.template_path, PathBuf::from("most.json"));
        assert_eq!(config.nets_dir, PathBuf::from("nets"));
        assert_eq!(config.scratch_config_path, PathBuf::from("test.json"));
        assert_eq!(
            config.engine_path,
            PathBuf::from("../external/cuteataxx/cuteataxx-cli")
        );
        assert_eq!(config.aggregate_log_path, PathBuf::from("full_log.txt"));
        assert_eq!(config.logs_dir, PathBuf::from("logs"));
        assert_eq!(config.timeout_secs, 0);
        assert!(config.filter.matches("bootataxx-001.nnue"));
        assert!(!config.filter.matches("boot-001.nnue"));
    }

    #[test]
    fn test_filter_flag_splits_on_commas() {
        let cli = Cli::try_parse_from(["netgauntlet", "--filter", "v2, nnue"]).unwrap();
        let config = cli.batch_config().unwrap();

        assert!(config.filter.matches("net-v2.nnue"));
        assert!(!config.filter.matches("net-v2.bin"));
    }

    #[test]
    fn test_empty_filter_flag_accepts_everything() {
        let cli = Cli::try_parse_from(["netgauntlet", "--filter", ""]).unwrap();
        let config = cli.batch_config().unwrap();
        assert!(config.filter.matches("anything.bin"));
    }

    #[test]
    fn test_config_file_overrides_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batch.json");
        std::fs::write(
            &path,
            r#"{"engine_path": "/opt/cuteataxx-cli", "timeout_secs": 120}"#,
        )
        .unwrap();

        let cli = Cli::try_parse_from([
            "netgauntlet",
            "--config",
            path.to_str().unwrap(),
            "--timeout",
            "5",
        ])
        .unwrap();
        let config = cli.batch_config().unwrap();

        assert_eq!(config.engine_path, PathBuf::from("/opt/cuteataxx-cli"));
        assert_eq!(config.timeout_secs, 120);
        // Unset fields fall back to defaults, not flags.
        assert_eq!(config.template_path, PathBuf::from("most.json"));
    }

    #[test]
    fn test_invalid_config_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batch.json");
        std::fs::write(&path, "not json").unwrap();

        let cli =
            Cli::try_parse_from(["netgauntlet", "--config", path.to_str().unwrap()]).unwrap();
        assert!(cli.batch_config().is_err());
    }
}
