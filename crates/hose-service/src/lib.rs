//! # hose-service: Contract Layer for the Hose Catalog
//!
//! The entity access functions a transport adapter calls into, together
//! with their request/response schemas and the unified error type.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Hose Catalog Call Flow                             │
//! │                                                                         │
//! │  Transport adapter (HTTP router, RPC shim)                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   hose-service (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   users::create_user(&db, …)    products::list_products(…)     │   │
//! │  │   measurements::…               compatibilities::…             │   │
//! │  │   tips::…                       inquiries::…                   │   │
//! │  │                                                                 │   │
//! │  │   Ok(Response DTO)  |  Err(ServiceError)                       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  hose-db (Database handle, repositories)                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function takes `&Database` as its first parameter; there is no
//! process-global client. DTOs serialize with camelCase field names.
//!
//! ## Module Organization
//!
//! - [`users`] - Account management
//! - [`products`] - Hose catalog plus the purchase-platform lookup
//! - [`measurements`] - Measurement records
//! - [`compatibilities`] - Hose/attachment compatibility entries
//! - [`tips`] - Care tips
//! - [`inquiries`] - Inquiry logging
//! - [`error`] - The unified `ServiceError`

// =============================================================================
// Module Declarations
// =============================================================================

pub mod compatibilities;
pub mod error;
pub mod inquiries;
pub mod measurements;
pub mod products;
pub mod tips;
pub mod users;

#[cfg(test)]
mod test_support;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ServiceError, ServiceResult};
