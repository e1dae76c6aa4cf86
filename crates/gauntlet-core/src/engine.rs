//! External engine invocation.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;

/// Captured output of one engine invocation.
#[derive(Debug, Clone)]
pub struct EngineOutput {
    /// Exit code (0 = success).
    pub exit_code: i32,

    /// Captured stdout.
    pub stdout: String,

    /// Captured stderr.
    pub stderr: String,

    /// Duration in milliseconds.
    pub duration_ms: u64,

    /// Whether execution succeeded.
    pub success: bool,
}

impl EngineOutput {
    /// Whether the engine exited cleanly (exit code 0).
    pub fn passed(&self) -> bool {
        self.success && self.exit_code == 0
    }
}

/// Runner for the external tournament executable.
///
/// The executable is invoked with a single positional argument: the path of
/// the scratch configuration file. The call blocks until the engine exits.
/// With `timeout_secs == 0` no timeout is applied and a hung engine hangs
/// the batch; when a timeout fires the child is killed so it cannot keep
/// reading the shared scratch config or contend with later tournaments.
#[derive(Debug, Clone)]
pub struct EngineRunner {
    executable: PathBuf,
    timeout_secs: u64,
}

impl EngineRunner {
    pub fn new(executable: impl Into<PathBuf>, timeout_secs: u64) -> Self {
        Self {
            executable: executable.into(),
            timeout_secs,
        }
    }

    /// Invoke the engine on one scratch configuration and wait for exit.
    pub async fn run(&self, config_path: &Path) -> anyhow::Result<EngineOutput> {
        let start = Instant::now();

        // kill_on_drop reaps the child when the timeout drops the wait
        // future; without it a timed-out engine would keep running.
        let child = Command::new(&self.executable)
            .arg(config_path)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let output = if self.timeout_secs > 0 {
            tokio::time::timeout(
                std::time::Duration::from_secs(self.timeout_secs),
                child.wait_with_output(),
            )
            .await
            .map_err(|_| {
                anyhow::anyhow!(
                    "Engine {:?} timed out after {} seconds",
                    self.executable,
                    self.timeout_secs
                )
            })??
        } else {
            child.wait_with_output().await?
        };

        let duration_ms = start.elapsed().as_millis() as u64;
        let exit_code = output.status.code().unwrap_or(-1);
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        let success = output.status.success();

        Ok(EngineOutput {
            exit_code,
            stdout,
            stderr,
            duration_ms,
            success,
        })
    }
}
