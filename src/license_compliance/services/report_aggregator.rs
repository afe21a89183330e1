use crate::license_compliance::domain::{
    ComplianceNode, ComplianceReport, ComplianceTree, DependencyMap, LicenseInfo, LicensedPackage,
};
use std::path::Path;

/// ReportAggregator flattens a compliance tree into the license report
///
/// Every package node below the importer entries is visited exactly once per
/// occurrence; the tree is already acyclic, so no cycle handling is needed here.
pub struct ReportAggregator;

impl ReportAggregator {
    pub fn aggregate(tree: &ComplianceTree) -> ComplianceReport {
        let mut report = ComplianceReport::default();
        for importer in tree.importers().values() {
            Self::visit(importer.dependencies(), &mut report);
        }
        report
    }

    fn visit(dependencies: &DependencyMap, report: &mut ComplianceReport) {
        for (name, node) in dependencies {
            Self::record(name, node, report);
            Self::visit(node.dependencies(), report);
        }
    }

    fn record(name: &str, node: &ComplianceNode, report: &mut ComplianceReport) {
        let metadata = &mut report.metadata;
        metadata.total_dependencies += 1;
        if node.dev {
            metadata.dev_dependencies += 1;
        } else if node.optional {
            metadata.optional_dependencies += 1;
        } else {
            metadata.dependencies += 1;
        }

        if let Some(key) = Self::license_key(&node.license_info) {
            // first occurrence is the representative
            report.licenses.entry(key).or_insert_with(|| LicensedPackage {
                name: name.to_string(),
                version: node.version.clone(),
            });
        }
    }

    /// Declared license, or npm's `SEE LICENSE IN <file>` when only a file is known
    pub fn license_key(info: &LicenseInfo) -> Option<String> {
        if let Some(license) = info.license.as_ref() {
            return Some(license.clone());
        }
        info.license_file.as_ref().map(|file| {
            let file_name = Path::new(file)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.clone());
            format!("SEE LICENSE IN {}", file_name)
        })
    }
}
