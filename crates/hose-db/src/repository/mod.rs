//! # Repository Module
//!
//! Database repository implementations for the hose catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  Entity access function                                                │
//! │       │                                                                 │
//! │       │  db.hoses().find_by_id("uuid")                                 │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  HoseRepository                                                        │
//! │  ├── find_by_id(&self, id)                                             │
//! │  ├── list_filtered(&self, filter)                                      │
//! │  ├── insert(&self, hose)                                               │
//! │  └── delete(&self, id)                                                 │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Clean separation of concerns                                        │
//! │  • Easy to test (in-memory pool per test)                              │
//! │  • SQL is isolated in one place                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Repositories are stateless: every method performs one logical read or
//! write against the pool and returns. Point lookups return `Option`;
//! updates and deletes check `rows_affected` and report `DbError::NotFound`.
//!
//! ## Available Repositories
//!
//! - [`user::UserRepository`] - User CRUD, email lookup
//! - [`hose::HoseRepository`] - Hose (product) CRUD, filtered listing
//! - [`measurement::MeasurementRepository`] - Measurement rows
//! - [`compatibility::CompatibilityRepository`] - Compatibility entries
//! - [`purchase_option::PurchaseOptionRepository`] - Purchase channels
//! - [`usage_log::UsageLogRepository`] - Free-form usage records
//! - [`question::QuestionRepository`] - Questions and answers
//! - [`care_tip::CareTipRepository`] - Care-tip detail records

pub mod care_tip;
pub mod compatibility;
pub mod hose;
pub mod measurement;
pub mod purchase_option;
pub mod question;
pub mod usage_log;
pub mod user;

use uuid::Uuid;

/// Generates a new entity ID (UUID v4, stored as TEXT).
///
/// ## Usage
/// ```rust,ignore
/// let id = generate_id();
/// let hose = Hose { id, ... };
/// ```
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
