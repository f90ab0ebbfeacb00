/// Process adapters for running build tools
mod system_command_runner;

pub use system_command_runner::SystemCommandRunner;
