//! # Domain Types
//!
//! Core domain types for the hose catalog.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌──────────────────┐  │
//! │  │      User       │   │      Hose       │   │ HoseMeasurement  │  │
//! │  │  ─────────────  │   │  ─────────────  │   │  ──────────────  │  │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  id (UUID)       │  │
//! │  │  email (unique) │   │  length         │   │  hose_id (FK)    │  │
//! │  │  role           │   │  diameter       │   │  user_id (FK)    │  │
//! │  └─────────────────┘   └─────────────────┘   └──────────────────┘  │
//! │                                                                     │
//! │  ┌───────────────────┐   ┌────────────────┐   ┌────────────────┐   │
//! │  │ HoseCompatibility │   │ PurchaseOption │   │    UserRole    │   │
//! │  │  ───────────────  │   │  ────────────  │   │  ────────────  │   │
//! │  │  hose_id (FK)     │   │  hose_id (FK)  │   │  Administrator │   │
//! │  │  user_id (FK)     │   │  platform      │   │  StandardUser  │   │
//! │  │  compatible       │   │  price         │   │  Guest         │   │
//! │  │  attachment       │   │  link          │   └────────────────┘   │
//! │  └───────────────────┘   └────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every entity carries a UUID v4 `id` generated by the persistence layer;
//! business identity (email for users) is separate from the primary key.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// =============================================================================
// User Role
// =============================================================================

/// Access-control role of a user.
///
/// ## Why a closed enum?
/// The original system compared raw role strings inline at each call site.
/// A closed enumeration plus a single capability check keeps every gate in
/// one place and makes an unknown role a parse error instead of a silent
/// permission denial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Full catalog management rights.
    Administrator,
    /// Regular authenticated user.
    StandardUser,
    /// Unauthenticated or read-only visitor.
    Guest,
}

impl UserRole {
    /// Returns the wire/storage name of the role.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            UserRole::Administrator => "ADMINISTRATOR",
            UserRole::StandardUser => "STANDARD_USER",
            UserRole::Guest => "GUEST",
        }
    }

    /// Capability check: may this role manage other users' data
    /// (delete catalog rows, change roles)?
    #[inline]
    pub const fn can_administer(&self) -> bool {
        matches!(self, UserRole::Administrator)
    }
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::StandardUser
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMINISTRATOR" => Ok(UserRole::Administrator),
            "STANDARD_USER" => Ok(UserRole::StandardUser),
            "GUEST" => Ok(UserRole::Guest),
            _ => Err(ValidationError::NotAllowed {
                field: "role".to_string(),
                allowed: vec![
                    "ADMINISTRATOR".to_string(),
                    "STANDARD_USER".to_string(),
                    "GUEST".to_string(),
                ],
            }),
        }
    }
}

// =============================================================================
// User
// =============================================================================

/// A registered user of the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Email address - business identifier, unique across the system.
    pub email: String,

    /// Password hash as supplied by the caller.
    /// Hashing happens upstream; this layer never sees plaintext handling.
    pub password: String,

    /// Access-control role.
    pub role: UserRole,

    /// When the user was created.
    pub created_at: DateTime<Utc>,

    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,

    /// Last successful login, if any.
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Display name derived from the email local part.
    /// There is no stored username; this mirrors how the catalog
    /// presents users everywhere.
    pub fn username(&self) -> &str {
        self.email.split('@').next().unwrap_or(&self.email)
    }
}

// =============================================================================
// Hose (Product)
// =============================================================================

/// A hose product. Length is in meters, diameter in centimeters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Hose {
    pub id: String,
    pub length: f64,
    pub diameter: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Hose Measurement
// =============================================================================

/// A recorded length/diameter observation tied to a hose and the user
/// who recorded it. Both foreign keys must reference existing rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct HoseMeasurement {
    pub id: String,
    pub hose_id: String,
    pub user_id: String,
    pub length: f64,
    pub diameter: f64,
    pub measured_at: DateTime<Utc>,
}

// =============================================================================
// Hose Compatibility
// =============================================================================

/// A record asserting whether a hose works with a given attachment,
/// authored by a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct HoseCompatibility {
    pub id: String,
    pub hose_id: String,
    pub user_id: String,
    pub compatible: bool,
    pub attachment: String,
    pub checked_at: DateTime<Utc>,
}

// =============================================================================
// Purchase Option
// =============================================================================

/// A purchasing channel for a hose on an external platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct PurchaseOption {
    pub id: String,
    pub hose_id: String,
    pub platform: String,
    pub price: f64,
    pub currency: String,
    pub available: bool,
    pub link: String,
}

// =============================================================================
// Usage Log
// =============================================================================

/// A free-form usage record. `information` is a JSON document; the tip
/// read path parses it as `{title, description, practices}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct UsageLog {
    pub id: String,
    pub hose_id: Option<String>,
    pub user_id: Option<String>,
    pub information: String,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Question & Answer
// =============================================================================

/// A logged user inquiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Question {
    pub id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An answer attached to a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Answer {
    pub id: String,
    pub question_id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Care Tip
// =============================================================================

/// A care-tip detail record, nested under a hose.
///
/// `additional_tips` and `applicable_products` are stored as JSON arrays;
/// the repository handles the (de)serialization, so this type stays plain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareTip {
    pub id: String,
    pub hose_id: String,
    pub title: Option<String>,
    pub description: String,
    pub additional_tips: Vec<String>,
    pub applicable_products: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        for role in [UserRole::Administrator, UserRole::StandardUser, UserRole::Guest] {
            let parsed: UserRole = role.as_str().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_role_rejects_unknown() {
        assert!("SUPERUSER".parse::<UserRole>().is_err());
        assert!("administrator".parse::<UserRole>().is_err());
        assert!("".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_role_capability() {
        assert!(UserRole::Administrator.can_administer());
        assert!(!UserRole::StandardUser.can_administer());
        assert!(!UserRole::Guest.can_administer());
    }

    #[test]
    fn test_role_serde_wire_names() {
        let json = serde_json::to_string(&UserRole::StandardUser).unwrap();
        assert_eq!(json, "\"STANDARD_USER\"");
        let role: UserRole = serde_json::from_str("\"GUEST\"").unwrap();
        assert_eq!(role, UserRole::Guest);
    }

    #[test]
    fn test_username_from_email() {
        let user = User {
            id: "u1".to_string(),
            email: "gardener@example.com".to_string(),
            password: "hash".to_string(),
            role: UserRole::StandardUser,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            last_login: None,
        };
        assert_eq!(user.username(), "gardener");
    }
}
