use crate::shared::Result;
use std::fmt;
use std::path::{Path, PathBuf};

/// A subprocess to run: program, arguments and working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
    working_dir: PathBuf,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: working_dir.into(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Captured result of a finished subprocess
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn new(exit_code: Option<i32>, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Human-readable exit status, e.g. `exit code 1` or `terminated by signal`
    pub fn status_description(&self) -> String {
        match self.exit_code {
            Some(code) => format!("exit code {}", code),
            None => "terminated by signal".to_string(),
        }
    }

    /// Last `max_lines` non-empty lines of combined output, stderr last
    pub fn tail(&self, max_lines: usize) -> String {
        let lines: Vec<&str> = self
            .stdout
            .lines()
            .chain(self.stderr.lines())
            .filter(|line| !line.trim().is_empty())
            .collect();
        let start = lines.len().saturating_sub(max_lines);
        lines[start..].join("\n")
    }
}

/// CommandRunner port for running build tools
///
/// Calls block until the subprocess exits. Implementations capture the
/// output instead of streaming it to the terminal.
pub trait CommandRunner {
    /// Runs the command to completion
    ///
    /// # Returns
    /// The captured output, including non-zero exits
    ///
    /// # Errors
    /// Returns an error only if the process could not be started
    /// (e.g., the program is not installed)
    fn run(&self, command: &CommandSpec) -> Result<CommandOutput>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, command: &CommandSpec) -> Result<CommandOutput> {
        (**self).run(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_spec_display() {
        let command = CommandSpec::new("mvn", "/work")
            .arg("-B")
            .args(["verify", "-DskipTests"]);
        assert_eq!(command.to_string(), "mvn -B verify -DskipTests");
        assert_eq!(command.program(), "mvn");
        assert_eq!(command.arguments().len(), 3);
        assert_eq!(command.working_dir(), Path::new("/work"));
    }

    #[test]
    fn test_command_output_success() {
        assert!(CommandOutput::new(Some(0), String::new(), String::new()).success());
        assert!(!CommandOutput::new(Some(1), String::new(), String::new()).success());
        assert!(!CommandOutput::new(None, String::new(), String::new()).success());
    }

    #[test]
    fn test_status_description() {
        let output = CommandOutput::new(Some(137), String::new(), String::new());
        assert_eq!(output.status_description(), "exit code 137");
        let output = CommandOutput::new(None, String::new(), String::new());
        assert_eq!(output.status_description(), "terminated by signal");
    }

    #[test]
    fn test_tail_keeps_last_lines() {
        let output = CommandOutput::new(
            Some(1),
            "line 1\nline 2\n\nline 3\n".to_string(),
            "BUILD FAILURE\n".to_string(),
        );
        assert_eq!(output.tail(2), "line 3\nBUILD FAILURE");
        assert_eq!(output.tail(10), "line 1\nline 2\nline 3\nBUILD FAILURE");
    }
}
