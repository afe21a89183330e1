use crate::license_compliance::domain::PackageManifest;
use async_trait::async_trait;
use std::path::Path;

/// ManifestReader port for loading an installed package's manifest
///
/// A missing, unreadable or corrupt manifest is reported as `None`, never as
/// an error, so one broken package cannot abort the whole report.
#[async_trait]
pub trait ManifestReader: Send + Sync {
    async fn read_manifest(&self, package_dir: &Path) -> Option<PackageManifest>;
}
