use crate::ports::outbound::{CommandOutput, CommandRunner, CommandSpec};
use crate::shared::Result;
use std::process::{Command, Stdio};
use std::time::Instant;
use tracing::{debug, trace};

/// SystemCommandRunner adapter for running build tools as subprocesses
///
/// This adapter implements the CommandRunner port with `std::process`.
/// Stdin is closed so a tool waiting for input fails instead of hanging,
/// and stdout/stderr are captured for diagnostics.
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &CommandSpec) -> Result<CommandOutput> {
        debug!(
            command = %command,
            working_dir = %command.working_dir().display(),
            "running build tool"
        );
        let started = Instant::now();

        let output = Command::new(command.program())
            .args(command.arguments())
            .current_dir(command.working_dir())
            .stdin(Stdio::null())
            .output()
            .map_err(|e| anyhow::anyhow!("Failed to start '{}': {}", command.program(), e))?;

        let result = CommandOutput::new(
            output.status.code(),
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        );

        for line in result.stdout.lines().chain(result.stderr.lines()) {
            trace!(target: "build_output", "{}", line);
        }
        debug!(
            program = command.program(),
            status = %result.status_description(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "build tool finished"
        );

        Ok(result)
    }
}
