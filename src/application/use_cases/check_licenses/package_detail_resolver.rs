use crate::license_compliance::domain::{
    dep_path_to_filename, name_ver_from_pkg_snapshot, LicenseCheckOptions, NameVersion,
    PackageDetails, ResolvedDependencyRef,
};
use crate::ports::outbound::ManifestReader;
use std::path::{Path, PathBuf};

/// PackageDetailResolver locates one resolved package on disk and loads its manifest
///
/// Every call resolves independently; there is no caching here.
pub struct PackageDetailResolver<'a, MR> {
    manifest_reader: &'a MR,
    options: &'a LicenseCheckOptions,
}

impl<'a, MR: ManifestReader> PackageDetailResolver<'a, MR> {
    pub fn new(manifest_reader: &'a MR, options: &'a LicenseCheckOptions) -> Self {
        Self {
            manifest_reader,
            options,
        }
    }

    /// Resolves name, version, install location and manifest of one edge.
    ///
    /// A missing manifest is recorded as `None` rather than an error.
    pub async fn resolve(&self, dependency: &ResolvedDependencyRef) -> PackageDetails {
        let NameVersion { name, version } =
            name_ver_from_pkg_snapshot(&dependency.dep_path, &dependency.snapshot);
        let install_path =
            Self::install_path(&self.options.virtual_store_root(), &dependency.dep_path, &name);

        let manifest = self.manifest_reader.read_manifest(&install_path).await;

        PackageDetails {
            name,
            version,
            install_path,
            manifest,
        }
    }

    /// `<virtual store>/<encoded dep path>/node_modules/<name>`
    pub fn install_path(virtual_store_root: &Path, dep_path: &str, name: &str) -> PathBuf {
        virtual_store_root
            .join(dep_path_to_filename(dep_path))
            .join("node_modules")
            .join(name)
    }
}
