//! # Validation Module
//!
//! Input validation for the entity access functions.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Transport adapter (out of scope)                          │
//! │  ├── Request parsing, authentication                                │
//! │  └── Type validation (deserialization)                              │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - minimal preconditions                       │
//! │  ├── Identifiers non-empty                                          │
//! │  ├── Email shape                                                    │
//! │  └── Dimensions positive and finite                                 │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Database (SQLite)                                         │
//! │  ├── NOT NULL constraints                                           │
//! │  ├── UNIQUE constraints (email)                                     │
//! │  └── Foreign key constraints                                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::MAX_EMAIL_LEN;

// =============================================================================
// Identifier Validators
// =============================================================================

/// Validates an entity identifier.
///
/// ## Rules
/// - Must not be empty or whitespace
///
/// Identifiers are supplied by callers or generated by the persistence
/// layer; their existence in the database is checked separately.
///
/// ## Example
/// ```rust
/// use hose_core::validation::validate_id;
///
/// assert!(validate_id("hoseId", "550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(validate_id("hoseId", "").is_err());
/// ```
pub fn validate_id(field: &str, id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - Must contain exactly one `@` with text on both sides
/// - Must not exceed `MAX_EMAIL_LEN` characters
///
/// This is deliberately shallow; deliverability is not this layer's job.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    if email.len() > MAX_EMAIL_LEN {
        return Err(ValidationError::TooLong {
            field: "email".to_string(),
            max: MAX_EMAIL_LEN,
        });
    }

    let mut parts = email.split('@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || parts.next().is_some() {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like local@domain".to_string(),
        });
    }

    Ok(())
}

/// Validates a non-empty text field (attachment names, tip descriptions,
/// inquiry details).
pub fn validate_text(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a hose dimension (length or diameter).
///
/// ## Rules
/// - Must be finite (no NaN/infinity from upstream float parsing)
/// - Must be strictly positive
///
/// ## Example
/// ```rust
/// use hose_core::validation::validate_dimension;
///
/// assert!(validate_dimension("length", 15.0).is_ok());
/// assert!(validate_dimension("length", 0.0).is_err());
/// assert!(validate_dimension("diameter", -2.5).is_err());
/// assert!(validate_dimension("diameter", f64::NAN).is_err());
/// ```
pub fn validate_dimension(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_id() {
        assert!(validate_id("userId", "abc-123").is_ok());
        assert!(validate_id("userId", "").is_err());
        assert!(validate_id("userId", "   ").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("gardener@example.org").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@nodomain").is_err());
        assert!(validate_email("nolocal@").is_err());
        assert!(validate_email("two@@ats.com").is_err());
        assert!(validate_email(&format!("{}@x.com", "a".repeat(300))).is_err());
    }

    #[test]
    fn test_validate_text() {
        assert!(validate_text("attachment", "spray nozzle").is_ok());
        assert!(validate_text("attachment", "  ").is_err());
    }

    #[test]
    fn test_validate_dimension() {
        assert!(validate_dimension("length", 15.0).is_ok());
        assert!(validate_dimension("length", 0.01).is_ok());

        assert!(validate_dimension("length", 0.0).is_err());
        assert!(validate_dimension("length", -1.0).is_err());
        assert!(validate_dimension("length", f64::NAN).is_err());
        assert!(validate_dimension("length", f64::INFINITY).is_err());
    }
}
