use crate::license_compliance::domain::RequiresMap;
use indexmap::IndexMap;

/// Anything that sits in a dependency map and has a resolved version
pub trait Versioned {
    fn version(&self) -> &str;
}

/// RequiresProjector derives the flat `requires` map of a tree level
///
/// Pure function of its input; applied at every level of the tree.
pub struct RequiresProjector;

impl RequiresProjector {
    /// Maps each child name to that child's version, keeping child order
    pub fn project<N: Versioned>(children: &IndexMap<String, N>) -> RequiresMap {
        children
            .iter()
            .map(|(name, node)| (name.clone(), node.version().to_string()))
            .collect()
    }
}
