use crate::license_compliance::domain::{ComplianceReport, ComplianceTree, DependencyMap};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use indexmap::IndexSet;

/// Markdown table header for the license inventory
const TABLE_HEADER: &str = "| License | Example Package | Version |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|---------|-----------------|---------|\n";

/// MarkdownReportFormatter adapter for a human-readable license summary
pub struct MarkdownReportFormatter;

impl MarkdownReportFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn render_header(&self, output: &mut String) {
        output.push_str("# License Compliance Report\n\n");
    }

    fn render_summary(&self, output: &mut String, report: &ComplianceReport) {
        let metadata = &report.metadata;
        output.push_str("## Summary\n\n");
        output.push_str(&format!(
            "- Total packages: {}\n",
            metadata.total_dependencies
        ));
        output.push_str(&format!("- Dependencies: {}\n", metadata.dependencies));
        output.push_str(&format!(
            "- Dev dependencies: {}\n",
            metadata.dev_dependencies
        ));
        output.push_str(&format!(
            "- Optional dependencies: {}\n",
            metadata.optional_dependencies
        ));
        output.push_str(&format!("- Distinct licenses: {}\n\n", report.licenses.len()));
    }

    fn render_licenses(&self, output: &mut String, report: &ComplianceReport) {
        output.push_str("## Licenses\n\n");
        if report.licenses.is_empty() {
            output.push_str("No license information was found.\n\n");
            return;
        }

        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for (license, package) in &report.licenses {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_markdown_table_cell(license),
                Self::escape_markdown_table_cell(&package.name),
                Self::escape_markdown_table_cell(&package.version)
            ));
        }
        output.push('\n');
    }

    /// Lists packages whose license could not be determined, once per name@version
    fn render_unknown(&self, output: &mut String, tree: &ComplianceTree) {
        let mut unknown = IndexSet::new();
        for importer in tree.importers().values() {
            Self::collect_unknown(importer.dependencies(), &mut unknown);
        }
        if unknown.is_empty() {
            return;
        }

        output.push_str("## Packages Without License Information\n\n");
        for package in unknown {
            output.push_str(&format!("- {}\n", package));
        }
        output.push('\n');
    }

    fn collect_unknown(dependencies: &DependencyMap, unknown: &mut IndexSet<String>) {
        for (name, node) in dependencies {
            if node.license_info.is_unknown() {
                unknown.insert(format!("{}@{}", name, node.version));
            }
            Self::collect_unknown(node.dependencies(), unknown);
        }
    }
}

impl Default for MarkdownReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownReportFormatter {
    fn format(&self, tree: &ComplianceTree, report: &ComplianceReport) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output);
        self.render_summary(&mut output, report);
        self.render_licenses(&mut output, report);
        self.render_unknown(&mut output, tree);

        Ok(output)
    }
}
