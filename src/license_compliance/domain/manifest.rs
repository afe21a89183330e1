use serde::Deserialize;

/// The subset of a package's `package.json` the license checker reads
///
/// Every field is optional; an empty manifest stands in for a missing one.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PackageManifest {
    pub name: Option<String>,
    pub version: Option<String>,
    pub license: Option<LicenseField>,
    /// Deprecated npm form: `"licenses": [{ "type": "MIT", "url": "..." }]`
    pub licenses: Option<Vec<LicenseField>>,
}

/// `license` as found in the wild: a plain SPDX expression or a `{ "type": ... }` object
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LicenseField {
    Expression(String),
    Object {
        #[serde(rename = "type")]
        license_type: Option<String>,
        #[allow(dead_code)]
        url: Option<String>,
    },
}

impl LicenseField {
    pub fn as_expression(&self) -> Option<&str> {
        match self {
            LicenseField::Expression(expr) => Some(expr.as_str()),
            LicenseField::Object { license_type, .. } => license_type.as_deref(),
        }
        .map(str::trim)
        .filter(|s| !s.is_empty())
    }
}
