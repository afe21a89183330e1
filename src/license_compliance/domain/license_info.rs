use serde::{Deserialize, Serialize};

/// LicenseInfo value object describing what is known about one package's license
///
/// At most one of the two fields is set by the annotator. Both absent means
/// the license is unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_file: Option<String>,
}

impl LicenseInfo {
    pub fn declared(license: impl Into<String>) -> Self {
        Self {
            license: Some(license.into()),
            license_file: None,
        }
    }

    pub fn from_file(license_file: impl Into<String>) -> Self {
        Self {
            license: None,
            license_file: Some(license_file.into()),
        }
    }

    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn is_unknown(&self) -> bool {
        self.license.is_none() && self.license_file.is_none()
    }
}
