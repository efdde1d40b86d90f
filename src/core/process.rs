use crate::core::error::{PipNodesError, Result};
use std::ffi::OsStr;
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;

/// Exit status and text output of a finished child process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CapturedOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

impl From<Output> for CapturedOutput {
    fn from(output: Output) -> Self {
        Self {
            exit_code: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

pub struct ProcessExecutor;

impl ProcessExecutor {
    fn command<S: AsRef<OsStr>>(cmd: &OsStr, args: &[S]) -> Command {
        let mut command = Command::new(cmd);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        command
    }

    /// Runs `cmd` to completion and captures its output.
    ///
    /// The child is killed if the returned future is dropped before it resolves.
    pub async fn execute<C, S>(cmd: C, args: &[S]) -> Result<CapturedOutput>
    where
        C: AsRef<OsStr>,
        S: AsRef<OsStr>,
    {
        let cmd = cmd.as_ref();
        let output = Self::command(cmd, args).output().await.map_err(|e| {
            PipNodesError::CommandFailed(format!("{}: {}", cmd.to_string_lossy(), e))
        })?;

        Ok(output.into())
    }

    pub async fn execute_with_timeout<C, S>(
        cmd: C,
        args: &[S],
        limit: Duration,
    ) -> Result<CapturedOutput>
    where
        C: AsRef<OsStr>,
        S: AsRef<OsStr>,
    {
        match tokio::time::timeout(limit, Self::execute(cmd, args)).await {
            Ok(result) => result,
            Err(_) => Err(PipNodesError::Timeout(limit)),
        }
    }

    pub async fn execute_with_output<C, S>(cmd: C, args: &[S]) -> Result<String>
    where
        C: AsRef<OsStr>,
        S: AsRef<OsStr>,
    {
        let cmd = cmd.as_ref();
        let output = Self::execute(cmd, args).await?;

        if !output.success() {
            return Err(PipNodesError::CommandFailed(format!(
                "{} failed: {}",
                cmd.to_string_lossy(),
                output.stderr
            )));
        }

        Ok(output.stdout.trim().to_string())
    }

    pub fn check_command_exists(cmd: &str) -> bool {
        let locator = if cfg!(windows) { "where" } else { "which" };
        std::process::Command::new(locator)
            .arg(cmd)
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false)
    }
}
