// src/domain/value.rs
use crate::domain::errors::{DomainError, DomainResult};

/// Ids coming from a payload: negative is rejected, zero asks the store to
/// assign one.
pub fn requested_id(raw: i64, field: &str) -> DomainResult<Option<i64>> {
    match raw {
        id if id < 0 => Err(DomainError::Validation(format!(
            "{field} must not be negative"
        ))),
        0 => Ok(None),
        id => Ok(Some(id)),
    }
}

pub fn positive_id(raw: i64, field: &str) -> DomainResult<i64> {
    if raw <= 0 {
        Err(DomainError::Validation(format!("{field} must be positive")))
    } else {
        Ok(raw)
    }
}

pub fn non_blank(value: String, field: &str) -> DomainResult<String> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} cannot be empty")));
    }
    Ok(value)
}
