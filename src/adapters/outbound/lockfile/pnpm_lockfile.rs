use crate::license_compliance::domain::PackageSnapshot;
use crate::shared::Result;
use indexmap::IndexMap;
use serde::Deserialize;

/// Importer id used for single-project lockfiles, which have no `importers` section
pub const ROOT_IMPORTER_ID: &str = ".";

/// Deserialized `pnpm-lock.yaml`
///
/// Only lockfile versions 5.x and 6.x are modelled. Single-project lockfiles
/// keep their dependency fields at the top level; those are exposed as the
/// importer `.`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PnpmLockfile {
    pub lockfile_version: LockfileVersion,
    pub importers: Option<IndexMap<String, ProjectSnapshot>>,
    pub dependencies: IndexMap<String, ImporterReference>,
    pub dev_dependencies: IndexMap<String, ImporterReference>,
    pub optional_dependencies: IndexMap<String, ImporterReference>,
    pub packages: IndexMap<String, PackageSnapshot>,
}

impl PnpmLockfile {
    /// # Errors
    /// Returns an error if the content is not a valid pnpm lockfile
    pub fn from_yaml(content: &str) -> Result<Self> {
        let lockfile: PnpmLockfile = serde_yaml_ng::from_str(content)?;
        Ok(lockfile)
    }

    /// v6+ dependency paths use `name@version`, v5 paths use `name/version`
    pub fn uses_v6_paths(&self) -> bool {
        self.lockfile_version.major() >= 6
    }

    pub fn importer_ids(&self) -> Vec<String> {
        match &self.importers {
            Some(importers) => importers.keys().cloned().collect(),
            None => vec![ROOT_IMPORTER_ID.to_string()],
        }
    }

    /// Dependency fields of one importer; `None` when it is not declared
    pub fn importer(&self, importer_id: &str) -> Option<ProjectSnapshot> {
        match &self.importers {
            Some(importers) => importers.get(importer_id).cloned(),
            None if importer_id == ROOT_IMPORTER_ID => Some(ProjectSnapshot {
                dependencies: self.dependencies.clone(),
                dev_dependencies: self.dev_dependencies.clone(),
                optional_dependencies: self.optional_dependencies.clone(),
            }),
            None => None,
        }
    }
}

/// `lockfileVersion`, written as a YAML number (`5.4`) or string (`'6.0'`)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LockfileVersion {
    Number(f64),
    Text(String),
}

impl LockfileVersion {
    pub fn major(&self) -> u32 {
        match self {
            LockfileVersion::Number(n) => n.trunc() as u32,
            LockfileVersion::Text(s) => s
                .split('.')
                .next()
                .and_then(|major| major.trim().parse().ok())
                .unwrap_or(0),
        }
    }
}

impl Default for LockfileVersion {
    fn default() -> Self {
        LockfileVersion::Text("5.4".to_string())
    }
}

/// Direct dependency fields of one workspace member
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectSnapshot {
    pub dependencies: IndexMap<String, ImporterReference>,
    pub dev_dependencies: IndexMap<String, ImporterReference>,
    pub optional_dependencies: IndexMap<String, ImporterReference>,
}

/// Reference to a resolved package from an importer
///
/// v5 lockfiles store the bare reference, v6 a `{specifier, version}` pair.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ImporterReference {
    Reference(String),
    Resolved {
        #[allow(dead_code)]
        specifier: Option<String>,
        version: String,
    },
}

impl ImporterReference {
    pub fn reference(&self) -> &str {
        match self {
            ImporterReference::Reference(reference) => reference,
            ImporterReference::Resolved { version, .. } => version,
        }
    }
}

/// Turns a dependency reference into the dependency path it points to.
///
/// `link:` references point at other workspace members and have no
/// dependency path. Bare versions (`1.0.0`, `1.0.0(react@18.2.0)`) are
/// prefixed with the package name; everything else already is a path.
pub fn ref_to_relative(reference: &str, pkg_name: &str, v6: bool) -> Option<String> {
    if reference.starts_with("link:") {
        return None;
    }
    if reference.starts_with("file:") {
        return Some(reference.to_string());
    }

    let version_part = match reference.find('(') {
        Some(idx) => &reference[..idx],
        None => reference,
    };
    if !version_part.contains('/') {
        let separator = if v6 { '@' } else { '/' };
        return Some(format!("/{}{}{}", pkg_name, separator, reference));
    }
    Some(reference.to_string())
}
