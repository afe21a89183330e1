/// Formatter adapters for the supported output formats
mod json_report_formatter;
mod markdown_report_formatter;
mod tree_json_formatter;

pub use json_report_formatter::JsonReportFormatter;
pub use markdown_report_formatter::MarkdownReportFormatter;
pub use tree_json_formatter::TreeJsonFormatter;
