/// Application layer - the license check use case, its DTOs and factories
///
/// Orchestrates the domain services and reaches the lockfile, the installed
/// packages and the console only through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
