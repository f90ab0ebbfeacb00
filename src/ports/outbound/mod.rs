/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (build tools, tracker API, console, etc.).
pub mod command_runner;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;
pub mod tracker_client;

pub use command_runner::{CommandOutput, CommandRunner, CommandSpec};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use tracker_client::{BomUploadReceipt, RegistrationOutcome, TrackerClient, TrackerError};
