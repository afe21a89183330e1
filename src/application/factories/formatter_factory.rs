use crate::adapters::outbound::formatters::{
    JsonReportFormatter, MarkdownReportFormatter, TreeJsonFormatter,
};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// Selects the infrastructure formatter matching the requested output format.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use pnpm_licenses::application::dto::OutputFormat;
    /// use pnpm_licenses::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Tree);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Json => Box::new(JsonReportFormatter::new()),
            OutputFormat::Tree => Box::new(TreeJsonFormatter::new()),
            OutputFormat::Markdown => Box::new(MarkdownReportFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use pnpm_licenses::application::dto::OutputFormat;
    /// use pnpm_licenses::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating license report JSON...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Json => "📝 Generating license report JSON...",
            OutputFormat::Tree => "📝 Generating compliance tree JSON...",
            OutputFormat::Markdown => "📝 Generating Markdown license table...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license_compliance::domain::{ComplianceReport, ComplianceTree};

    #[test]
    fn test_every_format_renders_empty_input() {
        let tree = ComplianceTree::default();
        let report = ComplianceReport::default();
        for format in [OutputFormat::Json, OutputFormat::Tree, OutputFormat::Markdown] {
            let output = FormatterFactory::create(format).format(&tree, &report);
            assert!(output.is_ok(), "{} formatter failed", format);
        }
    }

    #[test]
    fn test_tree_formatter_emits_root_keys() {
        let output = FormatterFactory::create(OutputFormat::Tree)
            .format(&ComplianceTree::default(), &ComplianceReport::default())
            .unwrap();
        assert!(output.contains("\"install\""));
    }

    #[test]
    fn test_progress_message_markdown() {
        let message = FormatterFactory::progress_message(OutputFormat::Markdown);
        assert_eq!(message, "📝 Generating Markdown license table...");
    }
}
