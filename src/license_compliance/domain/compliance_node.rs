use super::LicenseInfo;
use crate::license_compliance::services::{RequiresProjector, Versioned};
use indexmap::IndexMap;
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

/// Child package name to node, in traversal order
pub type DependencyMap = IndexMap<String, ComplianceNode>;

/// Child package name to the child's resolved version
pub type RequiresMap = IndexMap<String, String>;

/// Placeholder version of importer entries; workspace members have no resolved version
pub const IMPORTER_VERSION: &str = "0.0.0";

/// One resolved dependency in the compliance tree
///
/// `requires` is not stored: it is projected from `dependencies` whenever it is
/// read or serialized, so the two can never disagree. Nodes without children
/// serialize with neither key present.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ComplianceNode {
    pub dev: bool,
    /// Optional-only package; serialized only when set
    pub optional: bool,
    pub integrity: Option<String>,
    pub license_info: LicenseInfo,
    pub version: String,
    dependencies: DependencyMap,
}

impl ComplianceNode {
    pub fn new(
        version: impl Into<String>,
        integrity: Option<String>,
        license_info: LicenseInfo,
        dev: bool,
        optional: bool,
    ) -> Self {
        Self {
            dev,
            optional,
            integrity,
            license_info,
            version: version.into(),
            dependencies: DependencyMap::new(),
        }
    }

    /// Attaches sub-dependencies; an empty map leaves the node a leaf
    pub fn with_dependencies(mut self, dependencies: DependencyMap) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn dependencies(&self) -> &DependencyMap {
        &self.dependencies
    }

    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }

    pub fn requires(&self) -> RequiresMap {
        RequiresProjector::project(&self.dependencies)
    }
}

impl Versioned for ComplianceNode {
    fn version(&self) -> &str {
        &self.version
    }
}

impl Serialize for ComplianceNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let has_children = self.has_dependencies();
        let len = 3
            + usize::from(self.optional)
            + usize::from(self.integrity.is_some())
            + if has_children { 2 } else { 0 };

        let mut state = serializer.serialize_struct("ComplianceNode", len)?;
        state.serialize_field("dev", &self.dev)?;
        if self.optional {
            state.serialize_field("optional", &self.optional)?;
        } else {
            state.skip_field("optional")?;
        }
        match &self.integrity {
            Some(integrity) => state.serialize_field("integrity", integrity)?,
            None => state.skip_field("integrity")?,
        }
        state.serialize_field("licenseInfo", &self.license_info)?;
        state.serialize_field("version", &self.version)?;
        if has_children {
            state.serialize_field("dependencies", &self.dependencies)?;
            state.serialize_field("requires", &self.requires())?;
        } else {
            state.skip_field("dependencies")?;
            state.skip_field("requires")?;
        }
        state.end()
    }
}

/// Top-level entry of one workspace member (importer)
///
/// Unlike package nodes, importer entries always carry `dependencies` and
/// `requires`, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ImporterNode {
    dependencies: DependencyMap,
    version: String,
}

impl ImporterNode {
    pub fn new(dependencies: DependencyMap) -> Self {
        Self {
            dependencies,
            version: IMPORTER_VERSION.to_string(),
        }
    }

    pub fn dependencies(&self) -> &DependencyMap {
        &self.dependencies
    }

    pub fn requires(&self) -> RequiresMap {
        RequiresProjector::project(&self.dependencies)
    }
}

impl Versioned for ImporterNode {
    fn version(&self) -> &str {
        &self.version
    }
}

impl Serialize for ImporterNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ImporterNode", 3)?;
        state.serialize_field("dependencies", &self.dependencies)?;
        state.serialize_field("requires", &self.requires())?;
        state.serialize_field("version", &self.version)?;
        state.end()
    }
}
