//! # Compatibility Repository
//!
//! Database operations for hose compatibility entries.
//!
//! Each entry asserts whether a hose works with a named attachment and
//! carries the id of the user who authored it; the delete path in the
//! contract layer gates on that author's role.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use hose_core::HoseCompatibility;

/// Repository for compatibility database operations.
#[derive(Debug, Clone)]
pub struct CompatibilityRepository {
    pool: SqlitePool,
}

impl CompatibilityRepository {
    /// Creates a new CompatibilityRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CompatibilityRepository { pool }
    }

    /// Inserts a new compatibility entry.
    ///
    /// ## Returns
    /// * `Ok(())` - Insert successful
    /// * `Err(DbError::ForeignKeyViolation)` - hose_id or user_id unknown
    pub async fn insert(&self, entry: &HoseCompatibility) -> DbResult<()> {
        debug!(
            hose_id = %entry.hose_id,
            attachment = %entry.attachment,
            "Inserting compatibility entry"
        );

        sqlx::query(
            r#"
            INSERT INTO hose_compatibilities
                (id, hose_id, user_id, compatible, attachment, checked_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&entry.id)
        .bind(&entry.hose_id)
        .bind(&entry.user_id)
        .bind(entry.compatible)
        .bind(&entry.attachment)
        .bind(entry.checked_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Gets a compatibility entry by ID.
    pub async fn find_by_id(&self, id: &str) -> DbResult<Option<HoseCompatibility>> {
        let entry = sqlx::query_as::<_, HoseCompatibility>(
            r#"
            SELECT id, hose_id, user_id, compatible, attachment, checked_at
            FROM hose_compatibilities
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(entry)
    }

    /// Lists all compatibility entries, oldest first.
    pub async fn list_all(&self) -> DbResult<Vec<HoseCompatibility>> {
        let entries = sqlx::query_as::<_, HoseCompatibility>(
            r#"
            SELECT id, hose_id, user_id, compatible, attachment, checked_at
            FROM hose_compatibilities
            ORDER BY checked_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Lists the compatibility entries recorded against a hose.
    pub async fn list_for_hose(&self, hose_id: &str) -> DbResult<Vec<HoseCompatibility>> {
        let entries = sqlx::query_as::<_, HoseCompatibility>(
            r#"
            SELECT id, hose_id, user_id, compatible, attachment, checked_at
            FROM hose_compatibilities
            WHERE hose_id = ?1
            ORDER BY checked_at
            "#,
        )
        .bind(hose_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Lists the compatibility entries authored by a user.
    pub async fn list_for_user(&self, user_id: &str) -> DbResult<Vec<HoseCompatibility>> {
        let entries = sqlx::query_as::<_, HoseCompatibility>(
            r#"
            SELECT id, hose_id, user_id, compatible, attachment, checked_at
            FROM hose_compatibilities
            WHERE user_id = ?1
            ORDER BY checked_at
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(entries)
    }

    /// Updates the verdict, attachment, and check time of an entry.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - Entry doesn't exist
    pub async fn update(&self, entry: &HoseCompatibility) -> DbResult<()> {
        debug!(id = %entry.id, "Updating compatibility entry");

        let result = sqlx::query(
            r#"
            UPDATE hose_compatibilities SET
                compatible = ?2,
                attachment = ?3,
                checked_at = ?4
            WHERE id = ?1
            "#,
        )
        .bind(&entry.id)
        .bind(entry.compatible)
        .bind(&entry.attachment)
        .bind(entry.checked_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Compatibility entry", &entry.id));
        }

        Ok(())
    }

    /// Hard-deletes a compatibility entry.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting compatibility entry");

        let result = sqlx::query("DELETE FROM hose_compatibilities WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Compatibility entry", id));
        }

        Ok(())
    }

    /// Counts total compatibility entries (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hose_compatibilities")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
