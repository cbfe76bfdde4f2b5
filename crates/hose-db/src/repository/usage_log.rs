//! # Usage Log Repository
//!
//! Database operations for free-form usage records.
//!
//! The `information` column holds a JSON document. One read path in the
//! contract layer parses it as `{title, description, practices}`; the
//! repository treats it as opaque text.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use hose_core::UsageLog;

/// Repository for usage log database operations.
#[derive(Debug, Clone)]
pub struct UsageLogRepository {
    pool: SqlitePool,
}

impl UsageLogRepository {
    /// Creates a new UsageLogRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UsageLogRepository { pool }
    }

    /// Inserts a new usage log.
    pub async fn insert(&self, log: &UsageLog) -> DbResult<()> {
        debug!(id = %log.id, "Inserting usage log");

        sqlx::query(
            r#"
            INSERT INTO usage_logs (id, hose_id, user_id, information, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&log.id)
        .bind(&log.hose_id)
        .bind(&log.user_id)
        .bind(&log.information)
        .bind(log.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Gets a usage log by ID.
    pub async fn find_by_id(&self, id: &str) -> DbResult<Option<UsageLog>> {
        let log = sqlx::query_as::<_, UsageLog>(
            r#"
            SELECT id, hose_id, user_id, information, created_at
            FROM usage_logs
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(log)
    }

    /// Lists the usage logs recorded against a hose.
    pub async fn list_for_hose(&self, hose_id: &str) -> DbResult<Vec<UsageLog>> {
        let logs = sqlx::query_as::<_, UsageLog>(
            r#"
            SELECT id, hose_id, user_id, information, created_at
            FROM usage_logs
            WHERE hose_id = ?1
            ORDER BY created_at
            "#,
        )
        .bind(hose_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }

    /// Lists the usage logs recorded by a user.
    pub async fn list_for_user(&self, user_id: &str) -> DbResult<Vec<UsageLog>> {
        let logs = sqlx::query_as::<_, UsageLog>(
            r#"
            SELECT id, hose_id, user_id, information, created_at
            FROM usage_logs
            WHERE user_id = ?1
            ORDER BY created_at
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }
}
