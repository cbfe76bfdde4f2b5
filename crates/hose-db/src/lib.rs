//! # hose-db: Database Layer for the Hose Catalog
//!
//! This crate provides database access for the hose catalog.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Hose Catalog Data Flow                            │
//! │                                                                         │
//! │  Entity access function (list_products)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      hose-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │  (hose.rs,    │    │  (embedded)  │  │   │
//! │  │   │               │    │   user.rs, …) │    │              │  │   │
//! │  │   │ SqlitePool    │    │ HoseRepo      │    │ 001_initial_ │  │   │
//! │  │   │ Connection    │◄───│ UserRepo      │    │ schema.sql   │  │   │
//! │  │   │ Management    │    │ CareTipRepo   │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   ./catalog.db (or :memory: in tests)                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (user, hose, etc.)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hose_db::{Database, DbConfig};
//!
//! // Create database with default config
//! let config = DbConfig::new("path/to/catalog.db");
//! let db = Database::new(config).await?;
//!
//! // Use repositories
//! let hoses = db.hoses().list_filtered(&Default::default()).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::care_tip::CareTipRepository;
pub use repository::compatibility::CompatibilityRepository;
pub use repository::generate_id;
pub use repository::hose::{HoseFilter, HoseRepository};
pub use repository::measurement::MeasurementRepository;
pub use repository::purchase_option::PurchaseOptionRepository;
pub use repository::question::QuestionRepository;
pub use repository::usage_log::UsageLogRepository;
pub use repository::user::UserRepository;
