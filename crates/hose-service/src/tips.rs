//! # Care Tip Access Functions
//!
//! The tip subsystem spans several storage targets, and each operation
//! keeps its own:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tip Storage Targets                                  │
//! │                                                                         │
//! │  create_tip ──► care_tips (detail row nested under the hose;           │
//! │                 the response id is the HOSE id)                        │
//! │  get_tip    ──► usage_logs (parses the JSON information payload)       │
//! │  list_tips  ──► fixed in-memory list, not wired to storage             │
//! │  update_tip ──► care_tips (title, content, applicable products)        │
//! │  delete_tip ──► questions (removes the question row with that id)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ServiceError, ServiceResult};
use hose_core::validation::validate_text;
use hose_core::CareTip;
use hose_db::{generate_id, Database, DbError};

// =============================================================================
// Schemas
// =============================================================================

/// Response for a newly created care tip; `id` mirrors the hose the tip
/// was attached to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipResponse {
    pub id: String,
    pub description: String,
    pub hose_type_id: String,
    pub additional_tips: Vec<String>,
}

/// The shape of the JSON `information` payload the read path expects.
#[derive(Debug, Deserialize)]
struct TipInfo {
    title: String,
    description: String,
    practices: Vec<String>,
}

/// Point-read projection of a care tip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipDetailsResponse {
    pub tip_title: String,
    pub tip_description: String,
    pub recommended_practices: Vec<String>,
}

/// One entry in the public tip listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TipDto {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Response for the public tip listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetTipsResponse {
    pub tips: Vec<TipDto>,
}

/// The updated tip echoed back by `update_tip`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareTipDto {
    pub id: String,
    pub title: String,
    pub content: String,
    pub applicable_products: Vec<String>,
}

/// Response confirming a tip update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTipResponse {
    pub updated_tip: CareTipDto,
}

/// Empty acknowledgement of a tip deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTipResponse {}

// =============================================================================
// Operations
// =============================================================================

/// Creates a care tip nested under a hose.
///
/// The hose must exist; an unknown id is a domain `NotFound`, not a
/// generic failure. The response id is the hose id.
pub async fn create_tip(
    db: &Database,
    description: &str,
    hose_type_id: &str,
    additional_tips: Vec<String>,
) -> ServiceResult<TipResponse> {
    debug!(hose_type_id = %hose_type_id, "create_tip");

    validate_text("description", description)?;

    if !db.hoses().exists(hose_type_id).await? {
        return Err(ServiceError::not_found("Hose", hose_type_id));
    }

    let now = Utc::now();
    let tip = CareTip {
        id: generate_id(),
        hose_id: hose_type_id.to_string(),
        title: None,
        description: description.to_string(),
        additional_tips: additional_tips.clone(),
        applicable_products: Vec::new(),
        created_at: now,
        updated_at: now,
    };
    db.care_tips().insert(&tip).await?;

    info!(hose_id = %hose_type_id, "Care tip created");
    Ok(TipResponse {
        id: hose_type_id.to_string(),
        description: description.to_string(),
        hose_type_id: hose_type_id.to_string(),
        additional_tips,
    })
}

/// Fetches the detail view of a tip.
///
/// The record is read from the usage log with that id, and its JSON
/// `information` payload supplies the title, description, and practices.
pub async fn get_tip(db: &Database, tip_id: &str) -> ServiceResult<TipDetailsResponse> {
    debug!(tip_id = %tip_id, "get_tip");

    let log = db
        .usage_logs()
        .find_by_id(tip_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Care tip", tip_id))?;

    let info: TipInfo = serde_json::from_str(&log.information).map_err(|e| {
        ServiceError::Database(DbError::DataCorruption(format!(
            "tip information payload: {e}"
        )))
    })?;

    Ok(TipDetailsResponse {
        tip_title: info.title,
        tip_description: info.description,
        recommended_practices: info.practices,
    })
}

/// Retrieves the public tip listing.
///
/// Serves the fixed starter list; it is not wired to storage.
pub async fn list_tips(_db: &Database) -> ServiceResult<GetTipsResponse> {
    debug!("list_tips");

    let now = Utc::now();
    Ok(GetTipsResponse {
        tips: vec![
            TipDto {
                id: "1".to_string(),
                title: "Proper Hose Storage".to_string(),
                description: "Store your hoses in a cool, dry place.".to_string(),
                created_at: now,
            },
            TipDto {
                id: "2".to_string(),
                title: "Avoid Sunlight".to_string(),
                description: "Keep hoses away from direct sunlight to avoid degradation."
                    .to_string(),
                created_at: now,
            },
        ],
    })
}

/// Updates a care tip's title, content, and product applicability.
pub async fn update_tip(
    db: &Database,
    tip_id: &str,
    tip_title: &str,
    tip_content: &str,
    applicable_products: Vec<String>,
) -> ServiceResult<UpdateTipResponse> {
    debug!(tip_id = %tip_id, "update_tip");

    let mut tip = db
        .care_tips()
        .find_by_id(tip_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Care tip", tip_id))?;

    tip.title = Some(tip_title.to_string());
    tip.description = tip_content.to_string();
    tip.applicable_products = applicable_products;
    tip.updated_at = Utc::now();

    db.care_tips().update(&tip).await?;

    info!(tip_id = %tip.id, "Care tip updated");
    Ok(UpdateTipResponse {
        updated_tip: CareTipDto {
            id: tip.id,
            title: tip_title.to_string(),
            content: tip.description,
            applicable_products: tip.applicable_products,
        },
    })
}

/// Deletes a tip by removing the question row carrying that id.
pub async fn delete_tip(db: &Database, tip_id: &str) -> ServiceResult<DeleteTipResponse> {
    debug!(tip_id = %tip_id, "delete_tip");

    db.questions().delete(tip_id).await?;

    info!(tip_id = %tip_id, "Tip deleted");
    Ok(DeleteTipResponse {})
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seed_hose, seed_question, seed_usage_log, seed_user, test_db};
    use hose_core::UserRole;

    #[tokio::test]
    async fn test_create_tip_returns_hose_id() {
        let db = test_db().await;
        let hose_id = seed_hose(&db, 15.0, 1.9).await;

        let created = create_tip(
            &db,
            "Drain before winter.",
            &hose_id,
            vec!["Store coiled".to_string()],
        )
        .await
        .unwrap();

        // The response id mirrors the hose, not the detail row
        assert_eq!(created.id, hose_id);
        assert_eq!(created.hose_type_id, hose_id);

        let stored = db.care_tips().list_for_hose(&hose_id).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].description, "Drain before winter.");
        assert_eq!(stored[0].additional_tips, vec!["Store coiled".to_string()]);
    }

    #[tokio::test]
    async fn test_create_tip_unknown_hose_is_not_found() {
        let db = test_db().await;

        let err = create_tip(&db, "desc", "missing-hose", vec![])
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_tip_parses_usage_log_payload() {
        let db = test_db().await;
        let information = serde_json::json!({
            "title": "Winter storage",
            "description": "Drain the hose fully.",
            "practices": ["Drain after use", "Store coiled"],
        })
        .to_string();
        let log_id = seed_usage_log(&db, &information).await;

        let details = get_tip(&db, &log_id).await.unwrap();
        assert_eq!(details.tip_title, "Winter storage");
        assert_eq!(details.tip_description, "Drain the hose fully.");
        assert_eq!(details.recommended_practices.len(), 2);
    }

    #[tokio::test]
    async fn test_get_tip_missing_is_not_found() {
        let db = test_db().await;

        let err = get_tip(&db, "missing").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_tip_malformed_payload_is_database_error() {
        let db = test_db().await;
        let log_id = seed_usage_log(&db, "not json").await;

        let err = get_tip(&db, &log_id).await.unwrap_err();
        assert!(matches!(err, ServiceError::Database(_)));
    }

    #[tokio::test]
    async fn test_list_tips_is_fixed() {
        let db = test_db().await;

        let listed = list_tips(&db).await.unwrap();
        assert_eq!(listed.tips.len(), 2);
        assert_eq!(listed.tips[0].id, "1");
        assert_eq!(listed.tips[0].title, "Proper Hose Storage");
        assert_eq!(listed.tips[1].id, "2");
    }

    #[tokio::test]
    async fn test_update_tip_round_trip() {
        let db = test_db().await;
        let hose_id = seed_hose(&db, 15.0, 1.9).await;
        create_tip(&db, "Original", &hose_id, vec![]).await.unwrap();
        let tip_id = db.care_tips().list_for_hose(&hose_id).await.unwrap()[0]
            .id
            .clone();

        let updated = update_tip(
            &db,
            &tip_id,
            "Routine care",
            "Rinse fittings monthly.",
            vec![hose_id.clone()],
        )
        .await
        .unwrap();
        assert_eq!(updated.updated_tip.title, "Routine care");
        assert_eq!(updated.updated_tip.content, "Rinse fittings monthly.");

        let stored = db.care_tips().find_by_id(&tip_id).await.unwrap().unwrap();
        assert_eq!(stored.title.as_deref(), Some("Routine care"));
        assert_eq!(stored.applicable_products, vec![hose_id]);
    }

    #[tokio::test]
    async fn test_update_missing_tip_is_not_found() {
        let db = test_db().await;

        let err = update_tip(&db, "missing", "t", "c", vec![]).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_tip_removes_question_row() {
        let db = test_db().await;
        let user_id = seed_user(&db, "t@example.com", UserRole::StandardUser).await;
        let question_id = seed_question(&db, &user_id, "Which nozzle fits?").await;

        delete_tip(&db, &question_id).await.unwrap();
        assert!(db
            .questions()
            .find_by_id(&question_id)
            .await
            .unwrap()
            .is_none());

        let err = delete_tip(&db, &question_id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }
}
