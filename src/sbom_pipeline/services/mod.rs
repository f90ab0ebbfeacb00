/// Domain services containing pure business logic
mod build_system_detector;
mod result_reporter;

pub use build_system_detector::BuildSystemDetector;
pub use result_reporter::ResultReporter;
