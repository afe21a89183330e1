use crate::ports::outbound::DependencyWalker;
use crate::shared::Result;
use std::path::Path;

/// LockfileReader port for loading a project's lockfile as a walkable graph
///
/// This port abstracts the file system access and the lockfile format; the
/// application only ever sees the resulting [`DependencyWalker`].
pub trait LockfileReader {
    type Walker: DependencyWalker;

    /// Reads and parses the lockfile of the specified project directory
    ///
    /// # Errors
    /// Returns an error if:
    /// - The lockfile does not exist
    /// - The file cannot be read due to permissions or I/O errors
    /// - The lockfile is structurally invalid
    fn read_lockfile(&self, project_path: &Path) -> Result<Self::Walker>;
}
