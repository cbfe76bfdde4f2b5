//! # Measurement Repository
//!
//! Database operations for hose measurements.
//!
//! Measurement rows are append-and-delete: the update path in the contract
//! layer writes dimensions onto the parent hose, so there is no row-level
//! update here.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use hose_core::HoseMeasurement;

/// Repository for measurement database operations.
#[derive(Debug, Clone)]
pub struct MeasurementRepository {
    pool: SqlitePool,
}

impl MeasurementRepository {
    /// Creates a new MeasurementRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MeasurementRepository { pool }
    }

    /// Inserts a new measurement.
    ///
    /// Both foreign keys must reference existing rows; the schema enforces
    /// this, and callers verify first to report which one is missing.
    pub async fn insert(&self, measurement: &HoseMeasurement) -> DbResult<()> {
        debug!(
            hose_id = %measurement.hose_id,
            user_id = %measurement.user_id,
            "Inserting measurement"
        );

        sqlx::query(
            r#"
            INSERT INTO hose_measurements (id, hose_id, user_id, length, diameter, measured_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&measurement.id)
        .bind(&measurement.hose_id)
        .bind(&measurement.user_id)
        .bind(measurement.length)
        .bind(measurement.diameter)
        .bind(measurement.measured_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Gets a measurement by ID.
    pub async fn find_by_id(&self, id: &str) -> DbResult<Option<HoseMeasurement>> {
        let measurement = sqlx::query_as::<_, HoseMeasurement>(
            r#"
            SELECT id, hose_id, user_id, length, diameter, measured_at
            FROM hose_measurements
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(measurement)
    }

    /// Lists all measurements, oldest first.
    pub async fn list_all(&self) -> DbResult<Vec<HoseMeasurement>> {
        let measurements = sqlx::query_as::<_, HoseMeasurement>(
            r#"
            SELECT id, hose_id, user_id, length, diameter, measured_at
            FROM hose_measurements
            ORDER BY measured_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(measurements)
    }

    /// Lists the measurements recorded against a hose.
    pub async fn list_for_hose(&self, hose_id: &str) -> DbResult<Vec<HoseMeasurement>> {
        let measurements = sqlx::query_as::<_, HoseMeasurement>(
            r#"
            SELECT id, hose_id, user_id, length, diameter, measured_at
            FROM hose_measurements
            WHERE hose_id = ?1
            ORDER BY measured_at
            "#,
        )
        .bind(hose_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(measurements)
    }

    /// Lists the measurements recorded by a user.
    pub async fn list_for_user(&self, user_id: &str) -> DbResult<Vec<HoseMeasurement>> {
        let measurements = sqlx::query_as::<_, HoseMeasurement>(
            r#"
            SELECT id, hose_id, user_id, length, diameter, measured_at
            FROM hose_measurements
            WHERE user_id = ?1
            ORDER BY measured_at
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(measurements)
    }

    /// Hard-deletes a measurement.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting measurement");

        let result = sqlx::query("DELETE FROM hose_measurements WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Measurement", id));
        }

        Ok(())
    }

    /// Counts total measurements (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM hose_measurements")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
