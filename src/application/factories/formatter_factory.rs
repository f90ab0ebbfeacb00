use crate::adapters::outbound::formatters::{
    JsonReportFormatter, LinkFormatter, MarkdownReportFormatter,
};
use crate::application::dto::ReportFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating run report formatters
///
/// This factory encapsulates the creation logic for different formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified report format
    ///
    /// # Examples
    /// ```
    /// use java_sbom_uploader::application::dto::ReportFormat;
    /// use java_sbom_uploader::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(ReportFormat::Markdown);
    /// ```
    pub fn create(format: ReportFormat) -> Box<dyn ReportFormatter> {
        match format {
            ReportFormat::Text => Box::new(LinkFormatter::new()),
            ReportFormat::Markdown => Box::new(MarkdownReportFormatter::new()),
            ReportFormat::Json => Box::new(JsonReportFormatter::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::fixtures::response;

    #[test]
    fn test_text_formatter_prints_link_line() {
        let output = FormatterFactory::create(ReportFormat::Text)
            .format(&response())
            .unwrap();
        assert!(output.starts_with("View your SBOM and vulnerabilities at: "));
    }

    #[test]
    fn test_markdown_formatter() {
        let output = FormatterFactory::create(ReportFormat::Markdown)
            .format(&response())
            .unwrap();
        assert!(output.starts_with("# SBOM Upload Report"));
    }

    #[test]
    fn test_json_formatter() {
        let output = FormatterFactory::create(ReportFormat::Json)
            .format(&response())
            .unwrap();
        assert!(serde_json::from_str::<serde_json::Value>(&output).is_ok());
    }
}
