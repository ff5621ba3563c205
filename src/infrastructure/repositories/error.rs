use crate::domain::errors::DomainError;
use sqlx::error::ErrorKind;

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::UniqueViolation => {
                DomainError::Conflict("a row with this id already exists".into())
            }
            ErrorKind::ForeignKeyViolation => {
                DomainError::Validation("referenced record does not exist".into())
            }
            ErrorKind::NotNullViolation => {
                DomainError::Validation("required column is missing".into())
            }
            ErrorKind::CheckViolation => DomainError::Validation("check constraint violated".into()),
            _ => DomainError::Persistence(db_err.message().to_string()),
        },
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
