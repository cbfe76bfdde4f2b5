//! # Service Error Types
//!
//! The single error surface of the contract layer.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Unification                                │
//! │                                                                     │
//! │  ValidationError (hose-core)  ──┐                                   │
//! │                                 │                                   │
//! │  DbError (hose-db)  ────────────┼──► ServiceError (this module)     │
//! │                                 │         │                         │
//! │  Role gates  ───────────────────┘         ▼                         │
//! │                                 Transport adapter maps the          │
//! │                                 variant to a status code and        │
//! │                                 renders Display as the message      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Success data always travels in `Ok`; every failure is a typed variant.
//! `NotFound` stays domain-distinguished so callers can render 404s
//! without string matching.

use thiserror::Error;

use hose_core::ValidationError;
use hose_db::DbError;

/// Contract-layer errors.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The addressed entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A uniqueness rule was violated (duplicate email).
    #[error("{0}")]
    Conflict(String),

    /// The acting role may not perform this operation.
    #[error("{0}")]
    PermissionDenied(String),

    /// Input failed validation before any database work.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The persistence collaborator failed in a way the caller
    /// cannot act on.
    #[error("{0}")]
    Database(DbError),
}

impl ServiceError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        ServiceError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

/// Maps database errors into contract-layer variants.
///
/// NotFound and UniqueViolation are domain conditions and keep their
/// identity; everything else is opaque `Database`.
impl From<DbError> for ServiceError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ServiceError::NotFound { entity, id },
            DbError::UniqueViolation { field, value } => {
                ServiceError::Conflict(format!("Duplicate {field}: '{value}' already exists"))
            }
            other => ServiceError::Database(other),
        }
    }
}

/// Result type for entity access functions.
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_not_found_keeps_identity() {
        let err: ServiceError = DbError::not_found("User", "u1").into();
        assert!(matches!(err, ServiceError::NotFound { .. }));
        assert_eq!(err.to_string(), "User not found: u1");
    }

    #[test]
    fn test_unique_violation_becomes_conflict() {
        let err: ServiceError = DbError::duplicate("users.email", "a@b.c").into();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[test]
    fn test_opaque_db_error_stays_database() {
        let err: ServiceError = DbError::PoolExhausted.into();
        assert!(matches!(err, ServiceError::Database(_)));
    }
}
