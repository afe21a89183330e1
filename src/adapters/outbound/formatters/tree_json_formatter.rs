use crate::license_compliance::domain::{ComplianceReport, ComplianceTree};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// TreeJsonFormatter adapter rendering the full compliance tree
pub struct TreeJsonFormatter;

impl TreeJsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TreeJsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TreeJsonFormatter {
    fn format(&self, tree: &ComplianceTree, _report: &ComplianceReport) -> Result<String> {
        serde_json::to_string_pretty(tree).map_err(Into::into)
    }
}
