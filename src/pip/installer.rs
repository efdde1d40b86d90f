use crate::core::PipNodesError;
use crate::pip::outcome::InstallOutcome;
use crate::pip::request::InstallRequest;
use crate::pip::runner::CommandRunner;
use std::time::Duration;
use tracing::{info, warn};

/// Runs `<interpreter> -m pip install ...` for one request at a time.
pub struct Installer<R> {
    runner: R,
    interpreter: String,
    timeout: Duration,
}

impl<R: CommandRunner> Installer<R> {
    pub fn new(runner: R, interpreter: impl Into<String>, timeout: Duration) -> Self {
        Self {
            runner,
            interpreter: interpreter.into(),
            timeout,
        }
    }

    pub fn interpreter(&self) -> &str {
        &self.interpreter
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Full command line for display, or `None` for a placeholder selection.
    pub fn command_line(&self, request: &InstallRequest) -> Option<String> {
        let args = request.pip_args()?;
        Some(format!("{} {}", self.interpreter, args.join(" ")))
    }

    /// Makes a single install attempt. Never retries.
    pub async fn install(&self, request: &InstallRequest) -> InstallOutcome {
        let Some(args) = request.pip_args() else {
            return InstallOutcome::Rejected(request.selection.as_str().to_string());
        };

        info!(
            "Installing {}: {}",
            request.kind.noun(),
            request.selection.as_str()
        );
        info!("Command: {} {}", self.interpreter, args.join(" "));

        let run = self.runner.run(&self.interpreter, &args);
        match tokio::time::timeout(self.timeout, run).await {
            Err(_) => InstallOutcome::Timeout(self.timeout),
            Ok(Err(PipNodesError::Timeout(limit))) => InstallOutcome::Timeout(limit),
            Ok(Err(e)) => InstallOutcome::LaunchFailure(e.to_string()),
            Ok(Ok(output)) if output.success() => {
                if !output.stdout.is_empty() {
                    info!("{}", output.stdout.trim_end());
                }
                InstallOutcome::Success {
                    stdout: output.stdout,
                }
            }
            Ok(Ok(output)) => {
                warn!("pip exited with code {}", output.exit_code);
                InstallOutcome::NonZeroExit {
                    code: output.exit_code,
                    stderr: output.stderr,
                }
            }
        }
    }
}
