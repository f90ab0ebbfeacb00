/// Console adapters for user feedback
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
