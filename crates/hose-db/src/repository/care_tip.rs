//! # Care Tip Repository
//!
//! Database operations for care-tip detail records.
//!
//! ## JSON Columns
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  additional_tips / applicable_products are TEXT columns holding        │
//! │  JSON arrays of strings:                                               │
//! │                                                                         │
//! │  '["Drain after use", "Store coiled"]'                                 │
//! │       │                                                                 │
//! │       ▼  serde_json on read                                             │
//! │  Vec<String>                                                            │
//! │                                                                         │
//! │  Malformed stored JSON is DataCorruption, not an empty list.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use hose_core::CareTip;

/// Raw row shape; the JSON array columns stay TEXT until parsed.
#[derive(Debug, sqlx::FromRow)]
struct CareTipRow {
    id: String,
    hose_id: String,
    title: Option<String>,
    description: String,
    additional_tips: String,
    applicable_products: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CareTipRow {
    fn into_tip(self) -> DbResult<CareTip> {
        let additional_tips: Vec<String> = serde_json::from_str(&self.additional_tips)
            .map_err(|e| DbError::DataCorruption(format!("additional_tips: {e}")))?;
        let applicable_products: Vec<String> = serde_json::from_str(&self.applicable_products)
            .map_err(|e| DbError::DataCorruption(format!("applicable_products: {e}")))?;
        Ok(CareTip {
            id: self.id,
            hose_id: self.hose_id,
            title: self.title,
            description: self.description,
            additional_tips,
            applicable_products,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Repository for care-tip database operations.
#[derive(Debug, Clone)]
pub struct CareTipRepository {
    pool: SqlitePool,
}

impl CareTipRepository {
    /// Creates a new CareTipRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CareTipRepository { pool }
    }

    /// Inserts a new care tip.
    pub async fn insert(&self, tip: &CareTip) -> DbResult<()> {
        debug!(hose_id = %tip.hose_id, "Inserting care tip");

        let additional_tips = serde_json::to_string(&tip.additional_tips)
            .map_err(|e| DbError::Internal(e.to_string()))?;
        let applicable_products = serde_json::to_string(&tip.applicable_products)
            .map_err(|e| DbError::Internal(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO care_tips
                (id, hose_id, title, description, additional_tips,
                 applicable_products, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(&tip.id)
        .bind(&tip.hose_id)
        .bind(&tip.title)
        .bind(&tip.description)
        .bind(additional_tips)
        .bind(applicable_products)
        .bind(tip.created_at)
        .bind(tip.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Gets a care tip by ID.
    pub async fn find_by_id(&self, id: &str) -> DbResult<Option<CareTip>> {
        let row = sqlx::query_as::<_, CareTipRow>(
            r#"
            SELECT id, hose_id, title, description, additional_tips,
                   applicable_products, created_at, updated_at
            FROM care_tips
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(CareTipRow::into_tip).transpose()
    }

    /// Lists the care tips attached to a hose.
    pub async fn list_for_hose(&self, hose_id: &str) -> DbResult<Vec<CareTip>> {
        let rows = sqlx::query_as::<_, CareTipRow>(
            r#"
            SELECT id, hose_id, title, description, additional_tips,
                   applicable_products, created_at, updated_at
            FROM care_tips
            WHERE hose_id = ?1
            ORDER BY created_at
            "#,
        )
        .bind(hose_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(CareTipRow::into_tip).collect()
    }

    /// Updates an existing care tip.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - Tip doesn't exist
    pub async fn update(&self, tip: &CareTip) -> DbResult<()> {
        debug!(id = %tip.id, "Updating care tip");

        let additional_tips = serde_json::to_string(&tip.additional_tips)
            .map_err(|e| DbError::Internal(e.to_string()))?;
        let applicable_products = serde_json::to_string(&tip.applicable_products)
            .map_err(|e| DbError::Internal(e.to_string()))?;

        let result = sqlx::query(
            r#"
            UPDATE care_tips SET
                title = ?2,
                description = ?3,
                additional_tips = ?4,
                applicable_products = ?5,
                updated_at = ?6
            WHERE id = ?1
            "#,
        )
        .bind(&tip.id)
        .bind(&tip.title)
        .bind(&tip.description)
        .bind(additional_tips)
        .bind(applicable_products)
        .bind(tip.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Care tip", &tip.id));
        }

        Ok(())
    }
}
