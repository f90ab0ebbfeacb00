use java_sbom_uploader::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock CommandRunner that simulates a build tool
///
/// On every run it writes `content` to `output` (relative to the command's
/// working directory) and returns `exit_code`.
#[derive(Clone)]
pub struct MockCommandRunner {
    output: Option<PathBuf>,
    content: String,
    exit_code: i32,
    pub commands: Arc<Mutex<Vec<CommandSpec>>>,
}

impl MockCommandRunner {
    /// Build tool that succeeds and writes a small CycloneDX document
    pub fn producing(output: &str) -> Self {
        Self {
            output: Some(PathBuf::from(output)),
            content: r#"{"bomFormat":"CycloneDX","specVersion":"1.5","components":[]}"#.to_string(),
            exit_code: 0,
            commands: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Build tool that fails without writing anything
    pub fn failing(exit_code: i32) -> Self {
        Self {
            output: None,
            content: String::new(),
            exit_code,
            commands: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    pub fn call_count(&self) -> usize {
        self.commands.lock().unwrap().len()
    }

    pub fn programs(&self) -> Vec<String> {
        self.commands
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.program().to_string())
            .collect()
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, command: &CommandSpec) -> Result<CommandOutput> {
        self.commands.lock().unwrap().push(command.clone());

        if let Some(output) = &self.output {
            let path = command.working_dir().join(output);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, &self.content)?;
        }

        let stderr = if self.exit_code == 0 {
            String::new()
        } else {
            "[ERROR] BUILD FAILURE".to_string()
        };
        Ok(CommandOutput::new(
            Some(self.exit_code),
            "[INFO] Scanning for projects...".to_string(),
            stderr,
        ))
    }
}
