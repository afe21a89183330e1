use crate::license_compliance::domain::{ComplianceReport, ComplianceTree};
use crate::shared::Result;

/// ReportFormatter port for rendering the license check result
///
/// Formatters receive both the full tree and the aggregated report and choose
/// which one to render.
pub trait ReportFormatter {
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, tree: &ComplianceTree, report: &ComplianceReport) -> Result<String>;
}
