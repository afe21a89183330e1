use crate::license_compliance::domain::{ComplianceReport, ComplianceTree};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;

/// JsonReportFormatter adapter rendering the aggregated license report
///
/// Keys keep insertion order: licenses appear in first-seen order.
pub struct JsonReportFormatter;

impl JsonReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonReportFormatter {
    fn format(&self, _tree: &ComplianceTree, report: &ComplianceReport) -> Result<String> {
        serde_json::to_string_pretty(report).map_err(Into::into)
    }
}
