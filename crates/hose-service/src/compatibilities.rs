//! # Compatibility Access Functions
//!
//! Recording and reviewing hose/attachment compatibility entries.
//!
//! ## Delete Gate
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    delete_compatibility Flow                            │
//! │                                                                         │
//! │  delete_compatibility(&db, compatibility_id)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  load entry ──► missing ──► Err(NotFound)                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  load the entry's AUTHOR (the user who recorded it)                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  author missing or not ADMINISTRATOR ──► Err(PermissionDenied),        │
//! │                                          row stays                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DELETE row                                                             │
//! │                                                                         │
//! │  The gate looks at the entry's author, not the caller.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ServiceError, ServiceResult};
use hose_core::validation::validate_id;
use hose_core::HoseCompatibility;
use hose_db::{generate_id, Database};

// =============================================================================
// Schemas
// =============================================================================

/// A compatibility entry as presented in listings and eager-loaded views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityDto {
    pub id: String,
    pub hose_id: String,
    pub user_id: String,
    pub compatible: bool,
    pub checked_at: DateTime<Utc>,
    pub attachment: String,
}

impl From<HoseCompatibility> for CompatibilityDto {
    fn from(c: HoseCompatibility) -> Self {
        CompatibilityDto {
            id: c.id,
            hose_id: c.hose_id,
            user_id: c.user_id,
            compatible: c.compatible,
            checked_at: c.checked_at,
            attachment: c.attachment,
        }
    }
}

/// Response for a newly created compatibility entry.
/// The author's id is not echoed back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityCreationResponse {
    pub id: String,
    pub hose_id: String,
    pub compatible: bool,
    pub attachment: String,
    pub checked_at: DateTime<Utc>,
}

/// Point-read projection of a compatibility entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResponse {
    pub compatibility_id: String,
    pub hose_id: String,
    pub user_id: String,
    pub compatible: bool,
    pub checked_at: DateTime<Utc>,
    pub attachment: String,
}

/// Response for the compatibility listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetCompatibilitiesResponse {
    pub compatibilities: Vec<CompatibilityDto>,
}

/// Response confirming a compatibility update, echoing the modified entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompatibilityResponse {
    pub compatibility_id: String,
    pub hose_id: String,
    pub user_id: String,
    pub compatible: bool,
    pub attachment: String,
    pub checked_at: DateTime<Utc>,
}

/// Response confirming a compatibility deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteCompatibilityResponse {
    pub message: String,
}

// =============================================================================
// Operations
// =============================================================================

/// Creates a new compatibility entry.
///
/// A single insert; an unknown hose or user surfaces as the schema's
/// foreign key violation.
pub async fn create_compatibility(
    db: &Database,
    hose_id: &str,
    user_id: &str,
    compatible: bool,
    attachment: &str,
) -> ServiceResult<CompatibilityCreationResponse> {
    debug!(hose_id = %hose_id, attachment = %attachment, "create_compatibility");

    validate_id("hoseId", hose_id)?;
    validate_id("userId", user_id)?;

    let entry = HoseCompatibility {
        id: generate_id(),
        hose_id: hose_id.to_string(),
        user_id: user_id.to_string(),
        compatible,
        attachment: attachment.to_string(),
        checked_at: Utc::now(),
    };
    db.compatibilities().insert(&entry).await?;

    info!(compatibility_id = %entry.id, "Compatibility entry created");
    Ok(CompatibilityCreationResponse {
        id: entry.id,
        hose_id: entry.hose_id,
        compatible: entry.compatible,
        attachment: entry.attachment,
        checked_at: entry.checked_at,
    })
}

/// Fetches one compatibility entry.
pub async fn get_compatibility(
    db: &Database,
    compatibility_id: &str,
) -> ServiceResult<CompatibilityResponse> {
    debug!(compatibility_id = %compatibility_id, "get_compatibility");

    let entry = db
        .compatibilities()
        .find_by_id(compatibility_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Compatibility entry", compatibility_id))?;

    Ok(CompatibilityResponse {
        compatibility_id: entry.id,
        hose_id: entry.hose_id,
        user_id: entry.user_id,
        compatible: entry.compatible,
        checked_at: entry.checked_at,
        attachment: entry.attachment,
    })
}

/// Retrieves every compatibility entry.
pub async fn fetch_compatibilities(db: &Database) -> ServiceResult<GetCompatibilitiesResponse> {
    debug!("fetch_compatibilities");

    let compatibilities = db
        .compatibilities()
        .list_all()
        .await?
        .into_iter()
        .map(CompatibilityDto::from)
        .collect();

    Ok(GetCompatibilitiesResponse { compatibilities })
}

/// Updates an entry's verdict and attachment.
///
/// `checked_at` defaults to the current time when not supplied.
pub async fn update_compatibility(
    db: &Database,
    compatibility_id: &str,
    compatible: bool,
    attachment: &str,
    checked_at: Option<DateTime<Utc>>,
) -> ServiceResult<UpdateCompatibilityResponse> {
    debug!(compatibility_id = %compatibility_id, "update_compatibility");

    let mut entry = db
        .compatibilities()
        .find_by_id(compatibility_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Compatibility entry", compatibility_id))?;

    entry.compatible = compatible;
    entry.attachment = attachment.to_string();
    entry.checked_at = checked_at.unwrap_or_else(Utc::now);

    db.compatibilities().update(&entry).await?;

    info!(compatibility_id = %entry.id, "Compatibility entry updated");
    Ok(UpdateCompatibilityResponse {
        compatibility_id: entry.id,
        hose_id: entry.hose_id,
        user_id: entry.user_id,
        compatible: entry.compatible,
        attachment: entry.attachment,
        checked_at: entry.checked_at,
    })
}

/// Deletes a compatibility entry, gated on the entry's author.
///
/// The entry is removed only when the user who recorded it currently
/// holds the ADMINISTRATOR role; otherwise the row stays and the caller
/// gets `PermissionDenied`.
pub async fn delete_compatibility(
    db: &Database,
    compatibility_id: &str,
) -> ServiceResult<DeleteCompatibilityResponse> {
    debug!(compatibility_id = %compatibility_id, "delete_compatibility");

    let entry = db
        .compatibilities()
        .find_by_id(compatibility_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Compatibility entry", compatibility_id))?;

    let author = db.users().find_by_id(&entry.user_id).await?;
    let authorized = author.map(|u| u.role.can_administer()).unwrap_or(false);
    if !authorized {
        return Err(ServiceError::PermissionDenied(
            "Insufficient permissions to delete this entry.".to_string(),
        ));
    }

    db.compatibilities().delete(compatibility_id).await?;

    info!(compatibility_id = %compatibility_id, "Compatibility entry deleted");
    Ok(DeleteCompatibilityResponse {
        message: "Compatibility entry deleted successfully.".to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seed_hose, seed_user, test_db};
    use hose_core::UserRole;

    #[tokio::test]
    async fn test_create_and_get_round_trip() {
        let db = test_db().await;
        let user_id = seed_user(&db, "c@example.com", UserRole::StandardUser).await;
        let hose_id = seed_hose(&db, 15.0, 1.9).await;

        let created = create_compatibility(&db, &hose_id, &user_id, true, "spray nozzle")
            .await
            .unwrap();

        let fetched = get_compatibility(&db, &created.id).await.unwrap();
        assert_eq!(fetched.hose_id, hose_id);
        assert_eq!(fetched.user_id, user_id);
        assert!(fetched.compatible);
        assert_eq!(fetched.attachment, "spray nozzle");
    }

    #[tokio::test]
    async fn test_create_with_unknown_hose_is_database_error() {
        let db = test_db().await;
        let user_id = seed_user(&db, "c2@example.com", UserRole::StandardUser).await;

        let err = create_compatibility(&db, "missing-hose", &user_id, true, "nozzle")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Database(_)));
    }

    #[tokio::test]
    async fn test_update_defaults_checked_at() {
        let db = test_db().await;
        let user_id = seed_user(&db, "c3@example.com", UserRole::StandardUser).await;
        let hose_id = seed_hose(&db, 15.0, 1.9).await;
        let created = create_compatibility(&db, &hose_id, &user_id, true, "nozzle")
            .await
            .unwrap();

        let before = Utc::now();
        let updated = update_compatibility(&db, &created.id, false, "sprinkler head", None)
            .await
            .unwrap();
        assert!(!updated.compatible);
        assert_eq!(updated.attachment, "sprinkler head");
        assert!(updated.checked_at >= before);
    }

    #[tokio::test]
    async fn test_delete_gated_on_author_role() {
        let db = test_db().await;
        let admin = seed_user(&db, "adm@example.com", UserRole::Administrator).await;
        let standard = seed_user(&db, "std@example.com", UserRole::StandardUser).await;
        let hose_id = seed_hose(&db, 15.0, 1.9).await;

        // Entry authored by a standard user cannot be deleted
        let blocked = create_compatibility(&db, &hose_id, &standard, true, "nozzle")
            .await
            .unwrap();
        let err = delete_compatibility(&db, &blocked.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::PermissionDenied(_)));
        assert!(get_compatibility(&db, &blocked.id).await.is_ok());

        // Entry authored by an administrator deletes fine
        let allowed = create_compatibility(&db, &hose_id, &admin, true, "nozzle")
            .await
            .unwrap();
        delete_compatibility(&db, &allowed.id).await.unwrap();
        let err = get_compatibility(&db, &allowed.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_missing_entry_is_not_found() {
        let db = test_db().await;

        let err = delete_compatibility(&db, "missing").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_fetch_all_entries() {
        let db = test_db().await;
        let user_id = seed_user(&db, "c4@example.com", UserRole::StandardUser).await;
        let hose_id = seed_hose(&db, 15.0, 1.9).await;
        create_compatibility(&db, &hose_id, &user_id, true, "a").await.unwrap();
        create_compatibility(&db, &hose_id, &user_id, false, "b").await.unwrap();

        let all = fetch_compatibilities(&db).await.unwrap();
        assert_eq!(all.compatibilities.len(), 2);
    }
}
