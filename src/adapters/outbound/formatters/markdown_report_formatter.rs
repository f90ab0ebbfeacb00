use crate::application::dto::PublishResponse;
use crate::ports::outbound::{RegistrationOutcome, ReportFormatter};
use crate::shared::Result;
use std::fmt::Write;

/// Markdown table header for the run summary
const TABLE_HEADER: &str = "| Item | Value |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|------|-------|\n";

/// MarkdownReportFormatter adapter for a human-readable run report
///
/// Meant to be attached to a CI job summary or build artifact.
pub struct MarkdownReportFormatter;

impl MarkdownReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn row(output: &mut String, item: &str, value: &str) {
        let _ = writeln!(output, "| {} | {} |", item, Self::escape_cell(value));
    }
}

impl Default for MarkdownReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownReportFormatter {
    fn format(&self, response: &PublishResponse) -> Result<String> {
        let mut output = String::new();

        output.push_str("# SBOM Upload Report\n\n");
        let _ = writeln!(
            output,
            "Generated at {}\n",
            response.completed_at.format("%Y-%m-%d %H:%M:%S UTC")
        );

        output.push_str("## Project\n\n");
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        Self::row(&mut output, "Name", response.identity.name());
        Self::row(&mut output, "Version", response.identity.version());
        Self::row(&mut output, "UUID", &response.project_uuid.to_string());
        let registration = match response.registration {
            RegistrationOutcome::Created => "created",
            RegistrationOutcome::AlreadyExists => "already existed",
        };
        Self::row(&mut output, "Registration", registration);
        if let Some(repository) = &response.repository {
            Self::row(&mut output, "Repository", &repository.url);
            if let Some(reference) = &repository.reference {
                Self::row(&mut output, "Reference", reference);
            }
        }

        output.push_str("\n## SBOM\n\n");
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        Self::row(&mut output, "Build system", &response.build_system.to_string());
        Self::row(&mut output, "Format", &response.artifact.format().to_string());
        Self::row(
            &mut output,
            "File",
            &response.artifact.path().display().to_string(),
        );
        Self::row(
            &mut output,
            "Size",
            &format!("{} bytes", response.artifact.size_bytes()),
        );
        if let Some(token) = &response.upload_token {
            Self::row(&mut output, "Processing token", token);
        }

        let _ = writeln!(
            output,
            "\n[View your SBOM and vulnerabilities]({})",
            response.project_link
        );

        Ok(output)
    }
}
