// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("concurrent modification: {0}")]
    Concurrency(String),
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("remote source error: {0}")]
    Remote(String),
}
