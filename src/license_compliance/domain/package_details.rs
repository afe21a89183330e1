use super::PackageManifest;
use std::path::PathBuf;

/// Resolved facts about one package, looked up once per dependency edge
#[derive(Debug, Clone, PartialEq)]
pub struct PackageDetails {
    pub name: String,
    pub version: String,
    pub install_path: PathBuf,
    /// `None` when `package.json` is absent, unreadable or corrupt
    pub manifest: Option<PackageManifest>,
}
