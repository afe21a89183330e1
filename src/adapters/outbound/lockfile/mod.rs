/// pnpm lockfile adapters: YAML model and graph walker
mod lockfile_walker;
mod pnpm_lockfile;

pub use lockfile_walker::PnpmLockfileWalker;
pub use pnpm_lockfile::{
    ref_to_relative, ImporterReference, LockfileVersion, PnpmLockfile, ProjectSnapshot,
};
