//! # Hose Repository
//!
//! Database operations for hoses (the catalog's products).
//!
//! ## Key Operations
//! - CRUD with hard deletes
//! - Dimension-filtered listing
//! - Nested feature rows created in the same transaction as the hose
//!
//! ## Filtered Listing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Dimension Filters Combine                        │
//! │                                                                         │
//! │  HoseFilter { min_diameter, max_diameter, min_length, max_length }     │
//! │       │                                                                 │
//! │       ▼  each bound is independent; absent = unconstrained              │
//! │  WHERE diameter >= ?  AND diameter <= ?                                │
//! │    AND length   >= ?  AND length   <= ?                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  min_diameter=2.0 alone matches every hose at least 2.0 cm wide,       │
//! │  whatever its length.                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::generate_id;
use hose_core::Hose;

/// Optional dimension bounds for listing hoses.
///
/// Each bound applies independently; a `None` leaves that side open.
#[derive(Debug, Clone, Default)]
pub struct HoseFilter {
    pub min_diameter: Option<f64>,
    pub max_diameter: Option<f64>,
    pub min_length: Option<f64>,
    pub max_length: Option<f64>,
}

impl HoseFilter {
    /// True when no bound is set (the listing is unfiltered).
    pub fn is_empty(&self) -> bool {
        self.min_diameter.is_none()
            && self.max_diameter.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
    }
}

/// Repository for hose database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = HoseRepository::new(pool);
///
/// let hoses = repo.list_filtered(&HoseFilter {
///     min_diameter: Some(2.0),
///     ..Default::default()
/// }).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HoseRepository {
    pool: SqlitePool,
}

impl HoseRepository {
    /// Creates a new HoseRepository.
    pub fn new(pool: SqlitePool) -> Self {
        HoseRepository { pool }
    }

    /// Inserts a new hose and its feature rows in one transaction.
    ///
    /// ## Arguments
    /// * `hose` - Hose to insert (id generated beforehand)
    /// * `features` - Feature names nested-created alongside the hose
    pub async fn insert(&self, hose: &Hose, features: &[String]) -> DbResult<()> {
        debug!(id = %hose.id, feature_count = features.len(), "Inserting hose");

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO hoses (id, length, diameter, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&hose.id)
        .bind(hose.length)
        .bind(hose.diameter)
        .bind(hose.created_at)
        .bind(hose.updated_at)
        .execute(&mut *tx)
        .await?;

        for feature in features {
            sqlx::query("INSERT INTO hose_features (id, hose_id, name) VALUES (?1, ?2, ?3)")
                .bind(generate_id())
                .bind(&hose.id)
                .bind(feature)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(())
    }

    /// Gets a hose by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Hose))` - Hose found
    /// * `Ok(None)` - Hose not found
    pub async fn find_by_id(&self, id: &str) -> DbResult<Option<Hose>> {
        let hose = sqlx::query_as::<_, Hose>(
            r#"
            SELECT id, length, diameter, created_at, updated_at
            FROM hoses
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(hose)
    }

    /// Checks whether a hose row exists.
    ///
    /// Used by callers that must verify the foreign row before writing
    /// dependent data.
    pub async fn exists(&self, id: &str) -> DbResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hoses WHERE id = ?1")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    /// Lists hoses matching the given dimension bounds.
    ///
    /// Bounds are optional and independent; an empty filter returns every
    /// hose. Results are ordered by creation time.
    pub async fn list_filtered(&self, filter: &HoseFilter) -> DbResult<Vec<Hose>> {
        debug!(?filter, "Listing hoses");

        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new(
            "SELECT id, length, diameter, created_at, updated_at FROM hoses WHERE 1 = 1",
        );

        if let Some(min) = filter.min_diameter {
            builder.push(" AND diameter >= ").push_bind(min);
        }
        if let Some(max) = filter.max_diameter {
            builder.push(" AND diameter <= ").push_bind(max);
        }
        if let Some(min) = filter.min_length {
            builder.push(" AND length >= ").push_bind(min);
        }
        if let Some(max) = filter.max_length {
            builder.push(" AND length <= ").push_bind(max);
        }

        builder.push(" ORDER BY created_at");

        let hoses = builder
            .build_query_as::<Hose>()
            .fetch_all(&self.pool)
            .await?;

        debug!(count = hoses.len(), "Listing returned hoses");
        Ok(hoses)
    }

    /// Overwrites the `length` column alone.
    ///
    /// One caller stores a submitted price here; the column is the only
    /// numeric slot that write path touches. `diameter` is left untouched.
    pub async fn set_length(&self, id: &str, length: f64) -> DbResult<()> {
        debug!(id = %id, length = %length, "Updating hose length");

        let now = Utc::now();

        let result = sqlx::query("UPDATE hoses SET length = ?2, updated_at = ?3 WHERE id = ?1")
            .bind(id)
            .bind(length)
            .bind(now)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Hose", id));
        }

        Ok(())
    }

    /// Overwrites both dimensions of a hose.
    pub async fn set_dimensions(&self, id: &str, length: f64, diameter: f64) -> DbResult<()> {
        debug!(id = %id, length = %length, diameter = %diameter, "Updating hose dimensions");

        let now = Utc::now();

        let result = sqlx::query(
            "UPDATE hoses SET length = ?2, diameter = ?3, updated_at = ?4 WHERE id = ?1",
        )
        .bind(id)
        .bind(length)
        .bind(diameter)
        .bind(now)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Hose", id));
        }

        Ok(())
    }

    /// Hard-deletes a hose. Dependent rows cascade per the schema.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting hose");

        let result = sqlx::query("DELETE FROM hoses WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Hose", id));
        }

        Ok(())
    }

    /// Lists the feature names attached to a hose.
    pub async fn features(&self, hose_id: &str) -> DbResult<Vec<String>> {
        let names: Vec<String> =
            sqlx::query_scalar("SELECT name FROM hose_features WHERE hose_id = ?1 ORDER BY name")
                .bind(hose_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(names)
    }

    /// Counts total hoses (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hoses")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter() {
        assert!(HoseFilter::default().is_empty());
        assert!(!HoseFilter {
            min_length: Some(1.0),
            ..Default::default()
        }
        .is_empty());
    }
}
