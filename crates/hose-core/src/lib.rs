//! # hose-core: Pure Domain Layer for the Hose Catalog
//!
//! This crate contains the domain types and validation rules for a hose
//! product catalog, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Hose Catalog Data Flow                          │
//! │                                                                     │
//! │  Transport adapter (HTTP router - out of scope)                     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌─────────────────────────────────────────────────────────────┐    │
//! │  │                 hose-service (contract layer)               │    │
//! │  │    create_user, list_products, delete_compatibility, …      │    │
//! │  └─────────────────────────────┬───────────────────────────────┘    │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐    │
//! │  │               ★ hose-core (THIS CRATE) ★                    │    │
//! │  │                                                             │    │
//! │  │   ┌───────────┐      ┌────────────┐      ┌─────────────┐    │    │
//! │  │   │   types   │      │ validation │      │    error    │    │    │
//! │  │   │ User/Hose │      │   rules    │      │ Validation  │    │    │
//! │  │   │ UserRole  │      │   checks   │      │   Error     │    │    │
//! │  │   └───────────┘      └────────────┘      └─────────────┘    │    │
//! │  │                                                             │    │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS        │    │
//! │  └─────────────────────────────┬───────────────────────────────┘    │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼───────────────────────────────┐    │
//! │  │                  hose-db (Database Layer)                   │    │
//! │  │           SQLite queries, migrations, repositories          │    │
//! │  └─────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (User, Hose, HoseMeasurement, etc.)
//! - [`error`] - Validation error types
//! - [`validation`] - Minimal precondition checks

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use hose_core::UserRole` instead of
// `use hose_core::types::UserRole`

pub use error::{ValidationError, ValidationResult};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum accepted email length, per RFC 5321's practical limit.
pub const MAX_EMAIL_LEN: usize = 254;
