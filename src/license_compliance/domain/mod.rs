pub mod compliance_node;
pub mod compliance_report;
pub mod compliance_tree;
pub mod dependency_path;
pub mod license_info;
pub mod manifest;
pub mod options;
pub mod package_details;
pub mod package_snapshot;
pub mod walker_step;

pub use compliance_node::{
    ComplianceNode, DependencyMap, ImporterNode, RequiresMap, IMPORTER_VERSION,
};
pub use compliance_report::{ComplianceMetadata, ComplianceReport, LicensedPackage};
pub use compliance_tree::{ComplianceTree, ImporterMap};
pub use dependency_path::{
    dep_path_to_filename, name_ver_from_pkg_snapshot, parse_dependency_path, NameVersion,
};
pub use license_info::LicenseInfo;
pub use manifest::{LicenseField, PackageManifest};
pub use options::{IncludedDependencies, LicenseCheckOptions, DEFAULT_VIRTUAL_STORE_DIR};
pub use package_details::PackageDetails;
pub use package_snapshot::{PackageSnapshot, Resolution};
pub use walker_step::{ImporterStep, ResolvedDependencyRef, WalkerStep};
