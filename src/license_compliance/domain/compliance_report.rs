use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Representative package for one license
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicensedPackage {
    pub name: String,
    pub version: String,
}

/// Aggregate dependency counts, broken out by dependency kind
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceMetadata {
    pub dependencies: usize,
    pub dev_dependencies: usize,
    pub optional_dependencies: usize,
    pub total_dependencies: usize,
}

/// The externally consumed license report
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub licenses: IndexMap<String, LicensedPackage>,
    pub metadata: ComplianceMetadata,
}
