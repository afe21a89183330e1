use crate::license_compliance::domain::{ComplianceReport, ComplianceTree};

/// LicenseCheckResponse - result of the license check use case
#[derive(Debug, Clone)]
pub struct LicenseCheckResponse {
    /// Hierarchical compliance tree, one entry per importer
    pub tree: ComplianceTree,
    /// Aggregated license report derived from the tree
    pub report: ComplianceReport,
    /// Per-package degradations (missing manifests, failed annotations)
    pub warnings: Vec<String>,
}

impl LicenseCheckResponse {
    pub fn new(tree: ComplianceTree, report: ComplianceReport, warnings: Vec<String>) -> Self {
        Self {
            tree,
            report,
            warnings,
        }
    }
}
