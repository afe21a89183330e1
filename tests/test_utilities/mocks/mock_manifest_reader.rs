use async_trait::async_trait;
use pnpm_licenses::license_compliance::domain::{LicenseField, PackageManifest};
use pnpm_licenses::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Mock ManifestReader keyed by package name
///
/// A package directory matches when it ends with the package name, so scoped
/// names (`@scope/utils`) match their two trailing components. Unknown
/// packages have no manifest.
#[derive(Default, Clone)]
pub struct MockManifestReader {
    manifests: HashMap<String, PackageManifest>,
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl MockManifestReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_license(mut self, name: &str, version: &str, license: &str) -> Self {
        self.manifests.insert(
            name.to_string(),
            PackageManifest {
                name: Some(name.to_string()),
                version: Some(version.to_string()),
                license: Some(LicenseField::Expression(license.to_string())),
                licenses: None,
            },
        );
        self
    }

    pub fn request_count(&self) -> usize {
        self.requested.lock().unwrap().len()
    }
}

#[async_trait]
impl ManifestReader for MockManifestReader {
    async fn read_manifest(&self, package_dir: &Path) -> Option<PackageManifest> {
        self.requested
            .lock()
            .unwrap()
            .push(package_dir.display().to_string());
        self.manifests
            .iter()
            .find(|(name, _)| package_dir.ends_with(name.as_str()))
            .map(|(_, manifest)| manifest.clone())
    }
}
