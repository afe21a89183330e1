/// Adapters layer - concrete implementations of the outbound ports
///
/// Everything that touches the file system, pnpm's lockfile format or the
/// terminal lives here.
pub mod outbound;
