/// Shared application layer patterns
///
/// This module contains application-level abstractions used across
/// modules.
pub mod use_case;

pub use use_case::UseCase;
