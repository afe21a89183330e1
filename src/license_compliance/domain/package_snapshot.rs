use indexmap::IndexMap;
use serde::Deserialize;

/// Resolution record of one dependency path in `pnpm-lock.yaml`
///
/// Only the fields the license checker needs are modelled; unknown keys
/// (`engines`, `cpu`, `hasBin`, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PackageSnapshot {
    /// Present for packages whose dependency path does not encode the name
    /// (tarball and git dependencies)
    pub name: Option<String>,
    pub version: Option<String>,
    pub resolution: Resolution,
    pub dependencies: IndexMap<String, String>,
    pub optional_dependencies: IndexMap<String, String>,
    pub dev: Option<bool>,
    pub optional: Option<bool>,
}

impl PackageSnapshot {
    pub fn is_dev(&self) -> bool {
        self.dev == Some(true)
    }

    pub fn is_optional(&self) -> bool {
        self.optional == Some(true)
    }

    pub fn integrity(&self) -> Option<&str> {
        self.resolution.integrity.as_deref()
    }
}

/// `resolution` entry of a snapshot: registry integrity, tarball, directory or git
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Resolution {
    pub integrity: Option<String>,
    pub tarball: Option<String>,
    pub directory: Option<String>,
    pub repo: Option<String>,
    pub commit: Option<String>,
}
