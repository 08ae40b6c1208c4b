//! Domain-level error types.

use thiserror::Error;

/// Aggregated validation failure.
///
/// Carries every offending field with a reason; validation never partially
/// applies, so a draft either produces all of these or a valid post.
#[derive(Debug, Clone, Error)]
#[error("validation failed: {}", errors.join("; "))]
pub struct ValidationError {
    pub errors: Vec<String>,
}

impl ValidationError {
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    pub fn single(field: &str, reason: &str) -> Self {
        Self {
            errors: vec![format!("{field}: {reason}")],
        }
    }
}

/// Repository-level errors.
///
/// A missing row is a not-found signal (`Option`/`bool` in the repository
/// contract), never a `RepoError`.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
