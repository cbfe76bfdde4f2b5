//! # Error Types
//!
//! Domain-level error types for hose-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  hose-core errors (this file)                                       │
//! │  └── ValidationError  - Input validation failures                   │
//! │                                                                     │
//! │  hose-db errors (separate crate)                                    │
//! │  └── DbError          - Database operation failures                 │
//! │                                                                     │
//! │  hose-service errors (separate crate)                               │
//! │  └── ServiceError     - What the transport adapter sees             │
//! │                                                                     │
//! │  Flow: ValidationError → ServiceError → transport error body        │
//! │        DbError         → ServiceError → transport error body        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, allowed values)
//! 3. Errors are enum variants, never bare strings

use thiserror::Error;

/// Input validation errors.
///
/// These occur when caller-supplied data doesn't meet requirements.
/// Used for early validation before the persistence layer is touched.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be a positive, finite number.
    #[error("{field} must be a positive number")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in the allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "email is required");

        let err = ValidationError::MustBePositive {
            field: "diameter".to_string(),
        };
        assert_eq!(err.to_string(), "diameter must be a positive number");
    }
}
