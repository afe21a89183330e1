/// License annotation adapters
mod caching_license_annotator;
mod manifest_license_annotator;

pub use caching_license_annotator::CachingLicenseAnnotator;
pub use manifest_license_annotator::ManifestLicenseAnnotator;
