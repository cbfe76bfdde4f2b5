//! # Purchase Option Repository
//!
//! Database operations for purchase options (external buying channels).
//!
//! The contract layer only reads these; inserts exist for the seed binary
//! and test fixtures, which populate the table out of band.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use hose_core::PurchaseOption;

/// Repository for purchase option database operations.
#[derive(Debug, Clone)]
pub struct PurchaseOptionRepository {
    pool: SqlitePool,
}

impl PurchaseOptionRepository {
    /// Creates a new PurchaseOptionRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PurchaseOptionRepository { pool }
    }

    /// Inserts a new purchase option.
    pub async fn insert(&self, option: &PurchaseOption) -> DbResult<()> {
        debug!(
            hose_id = %option.hose_id,
            platform = %option.platform,
            "Inserting purchase option"
        );

        sqlx::query(
            r#"
            INSERT INTO purchase_options
                (id, hose_id, platform, price, currency, available, link)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&option.id)
        .bind(&option.hose_id)
        .bind(&option.platform)
        .bind(option.price)
        .bind(&option.currency)
        .bind(option.available)
        .bind(&option.link)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Lists every purchase option recorded against a hose.
    pub async fn list_for_hose(&self, hose_id: &str) -> DbResult<Vec<PurchaseOption>> {
        let options = sqlx::query_as::<_, PurchaseOption>(
            r#"
            SELECT id, hose_id, platform, price, currency, available, link
            FROM purchase_options
            WHERE hose_id = ?1
            ORDER BY platform
            "#,
        )
        .bind(hose_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(options)
    }

    /// Lists only the currently available purchase options for a hose.
    pub async fn list_available_for_hose(&self, hose_id: &str) -> DbResult<Vec<PurchaseOption>> {
        let options = sqlx::query_as::<_, PurchaseOption>(
            r#"
            SELECT id, hose_id, platform, price, currency, available, link
            FROM purchase_options
            WHERE hose_id = ?1 AND available = 1
            ORDER BY platform
            "#,
        )
        .bind(hose_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(options)
    }
}
