use crate::core::{CapturedOutput, ProcessExecutor, Result};
use std::future::Future;

/// Runs one program to completion and hands back its captured output.
///
/// Dropping the returned future must stop the program.
pub trait CommandRunner: Send + Sync {
    fn run(
        &self,
        program: &str,
        args: &[String],
    ) -> impl Future<Output = Result<CapturedOutput>> + Send;
}

/// Spawns real operating-system processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[String]) -> Result<CapturedOutput> {
        ProcessExecutor::execute(program, args).await
    }
}
