/// Domain layer - compliance tree model and pure services
///
/// Nothing in this module performs I/O; lockfile access, manifest reads and
/// license discovery come in through the ports.
pub mod domain;
pub mod services;
