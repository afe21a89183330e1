use super::{ImporterNode, RequiresMap};
use crate::license_compliance::services::RequiresProjector;
use indexmap::IndexMap;
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

/// Importer identifier (`.`, `packages/web`, ...) to its entry
pub type ImporterMap = IndexMap<String, ImporterNode>;

/// Synthetic root of the compliance tree, one entry per workspace member
///
/// `install`, `remove` and `metadata` are structural placeholders kept for
/// report consumers that expect the audit-tree layout.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ComplianceTree {
    pub name: Option<String>,
    pub version: Option<String>,
    dependencies: ImporterMap,
    pub dev: bool,
    pub install: Vec<String>,
    pub integrity: Option<String>,
    pub metadata: serde_json::Map<String, serde_json::Value>,
    pub remove: Vec<String>,
}

impl ComplianceTree {
    pub fn new(dependencies: ImporterMap) -> Self {
        Self {
            dependencies,
            ..Default::default()
        }
    }

    pub fn importers(&self) -> &ImporterMap {
        &self.dependencies
    }

    pub fn requires(&self) -> RequiresMap {
        RequiresProjector::project(&self.dependencies)
    }
}

impl Serialize for ComplianceTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ComplianceTree", 9)?;
        match &self.name {
            Some(name) => state.serialize_field("name", name)?,
            None => state.skip_field("name")?,
        }
        match &self.version {
            Some(version) => state.serialize_field("version", version)?,
            None => state.skip_field("version")?,
        }
        state.serialize_field("dependencies", &self.dependencies)?;
        state.serialize_field("dev", &self.dev)?;
        state.serialize_field("install", &self.install)?;
        match &self.integrity {
            Some(integrity) => state.serialize_field("integrity", integrity)?,
            None => state.skip_field("integrity")?,
        }
        state.serialize_field("metadata", &self.metadata)?;
        state.serialize_field("remove", &self.remove)?;
        state.serialize_field("requires", &self.requires())?;
        state.end()
    }
}
