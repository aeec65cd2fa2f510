use crate::validate::FieldErrors;
use serde_json::json;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("validation failed: {}", .0.field_names().join(", "))]
    Validation(FieldErrors),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("constraint violation: {0}")]
    Constraint(String),
    #[error(transparent)]
    Db(rusqlite::Error),
}

impl ServiceError {
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "validation_failed",
            ServiceError::NotFound(_) => "not_found",
            ServiceError::Constraint(_) => "constraint_failed",
            ServiceError::Db(_) => "db_query_failed",
        }
    }

    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            ServiceError::Validation(fields) => Some(json!({ "fields": fields })),
            ServiceError::NotFound(entity) => Some(json!({ "entity": entity })),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for ServiceError {
    fn from(e: rusqlite::Error) -> Self {
        match e {
            rusqlite::Error::SqliteFailure(code, msg)
                if code.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                ServiceError::Constraint(msg.unwrap_or_else(|| code.to_string()))
            }
            other => ServiceError::Db(other),
        }
    }
}
