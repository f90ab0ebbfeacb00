/// Formatter adapters for the different run report formats
mod json_report_formatter;
mod link_formatter;
mod markdown_report_formatter;

pub use json_report_formatter::JsonReportFormatter;
pub use link_formatter::LinkFormatter;
pub use markdown_report_formatter::MarkdownReportFormatter;
