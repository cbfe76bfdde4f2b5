//! # Measurement Access Functions
//!
//! Recording and reviewing hose measurements.
//!
//! ## Creation Guard
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    create_measurement Flow                              │
//! │                                                                         │
//! │  create_measurement(&db, hose_id, length, diameter, user_id)            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  user exists? ──► no ──► Err(NotFound "User"), nothing written          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  hose exists? ──► no ──► Err(NotFound "Hose"), nothing written          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  INSERT hose_measurements                                               │
//! │                                                                         │
//! │  The read and update paths address the PARENT HOSE's dimensions,       │
//! │  not the recorded observation.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ServiceError, ServiceResult};
use hose_core::validation::validate_id;
use hose_core::HoseMeasurement;
use hose_db::{generate_id, Database};

// =============================================================================
// Schemas
// =============================================================================

/// The measurement projection used in listings and eager-loaded views:
/// identity and linkage without the recorded dimensions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementSummaryDto {
    pub id: String,
    pub hose_id: String,
    pub user_id: String,
    pub measured_at: DateTime<Utc>,
}

impl From<HoseMeasurement> for MeasurementSummaryDto {
    fn from(m: HoseMeasurement) -> Self {
        MeasurementSummaryDto {
            id: m.id,
            hose_id: m.hose_id,
            user_id: m.user_id,
            measured_at: m.measured_at,
        }
    }
}

/// Response for a measurement creation attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementCreationResponse {
    pub measurement_id: String,
    pub message: String,
}

/// Point-read projection; length and diameter come from the parent hose.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementDetailsResponse {
    pub measurement_id: String,
    pub hose_id: String,
    pub user_id: String,
    pub length: f64,
    pub diameter: f64,
    pub measured_at: DateTime<Utc>,
}

/// Response for the measurement listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetMeasurementsResponse {
    pub measurements: Vec<MeasurementSummaryDto>,
}

/// Response confirming a measurement update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMeasurementResponse {
    pub message: String,
}

/// Response confirming a measurement deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteMeasurementResponse {
    pub message: String,
}

// =============================================================================
// Operations
// =============================================================================

/// Records a new measurement against a hose.
///
/// Both foreign rows are verified first so the caller learns which one is
/// missing; no row is written in that case.
pub async fn create_measurement(
    db: &Database,
    hose_id: &str,
    length: f64,
    diameter: f64,
    user_id: &str,
) -> ServiceResult<MeasurementCreationResponse> {
    debug!(hose_id = %hose_id, user_id = %user_id, "create_measurement");

    validate_id("hoseId", hose_id)?;
    validate_id("userId", user_id)?;

    if db.users().find_by_id(user_id).await?.is_none() {
        return Err(ServiceError::not_found("User", user_id));
    }
    if !db.hoses().exists(hose_id).await? {
        return Err(ServiceError::not_found("Hose", hose_id));
    }

    let measurement = HoseMeasurement {
        id: generate_id(),
        hose_id: hose_id.to_string(),
        user_id: user_id.to_string(),
        length,
        diameter,
        measured_at: Utc::now(),
    };
    db.measurements().insert(&measurement).await?;

    info!(measurement_id = %measurement.id, "Measurement created");
    Ok(MeasurementCreationResponse {
        measurement_id: measurement.id,
        message: "Measurement created successfully.".to_string(),
    })
}

/// Fetches one measurement.
///
/// The reported length and diameter are the parent hose's current
/// dimensions, not the values recorded at measurement time.
pub async fn get_measurement(
    db: &Database,
    measurement_id: &str,
) -> ServiceResult<MeasurementDetailsResponse> {
    debug!(measurement_id = %measurement_id, "get_measurement");

    let measurement = db
        .measurements()
        .find_by_id(measurement_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Measurement", measurement_id))?;

    let hose = db
        .hoses()
        .find_by_id(&measurement.hose_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Hose", &measurement.hose_id))?;

    Ok(MeasurementDetailsResponse {
        measurement_id: measurement.id,
        hose_id: measurement.hose_id,
        user_id: measurement.user_id,
        length: hose.length,
        diameter: hose.diameter,
        measured_at: measurement.measured_at,
    })
}

/// Retrieves every measurement record.
pub async fn list_measurements(db: &Database) -> ServiceResult<GetMeasurementsResponse> {
    debug!("list_measurements");

    let measurements = db
        .measurements()
        .list_all()
        .await?
        .into_iter()
        .map(MeasurementSummaryDto::from)
        .collect();

    Ok(GetMeasurementsResponse { measurements })
}

/// Applies new dimension values for a measurement.
///
/// The values are written onto the parent hose; the measurement row
/// itself keeps its originally recorded observation.
pub async fn update_measurement(
    db: &Database,
    measurement_id: &str,
    length: f64,
    diameter: f64,
) -> ServiceResult<UpdateMeasurementResponse> {
    debug!(measurement_id = %measurement_id, "update_measurement");

    let measurement = db
        .measurements()
        .find_by_id(measurement_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("Measurement", measurement_id))?;

    db.hoses()
        .set_dimensions(&measurement.hose_id, length, diameter)
        .await?;

    info!(measurement_id = %measurement_id, "Measurement updated");
    Ok(UpdateMeasurementResponse {
        message: "Measurement updated successfully".to_string(),
    })
}

/// Deletes a measurement record.
pub async fn delete_measurement(
    db: &Database,
    measurement_id: &str,
) -> ServiceResult<DeleteMeasurementResponse> {
    debug!(measurement_id = %measurement_id, "delete_measurement");

    db.measurements().delete(measurement_id).await?;

    info!(measurement_id = %measurement_id, "Measurement deleted");
    Ok(DeleteMeasurementResponse {
        message: "Measurement deleted successfully.".to_string(),
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
    async fn test_create_and_get_measurement() {
        let db = test_db().await;
        let user_id = seed_user(&db, "m@example.com", UserRole::StandardUser).await;
        let hose_id = seed_hose(&db, 15.0, 1.9).await;

        let created = create_measurement(&db, &hose_id, 14.8, 1.9, &user_id)
            .await
            .unwrap();

        let details = get_measurement(&db, &created.measurement_id).await.unwrap();
        assert_eq!(details.hose_id, hose_id);
        assert_eq!(details.user_id, user_id);
        // Dimensions come from the parent hose, not the recorded values
        assert_eq!(details.length, 15.0);
        assert_eq!(details.diameter, 1.9);
    }

    #[tokio::test]
    async fn test_create_measurement_missing_user_writes_nothing() {
        let db = test_db().await;
        let hose_id = seed_hose(&db, 15.0, 1.9).await;

        let err = create_measurement(&db, &hose_id, 10.0, 2.0, "missing-user")
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
        assert_eq!(db.measurements().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_measurement_missing_hose_writes_nothing() {
        let db = test_db().await;
        let user_id = seed_user(&db, "m2@example.com", UserRole::StandardUser).await;

        let err = create_measurement(&db, "missing-hose", 10.0, 2.0, &user_id)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
        assert_eq!(db.measurements().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_measurement_writes_parent_hose() {
        let db = test_db().await;
        let user_id = seed_user(&db, "m3@example.com", UserRole::StandardUser).await;
        let hose_id = seed_hose(&db, 15.0, 1.9).await;
        let created = create_measurement(&db, &hose_id, 15.0, 1.9, &user_id)
            .await
            .unwrap();

        update_measurement(&db, &created.measurement_id, 20.0, 2.5)
            .await
            .unwrap();

        let hose = db.hoses().find_by_id(&hose_id).await.unwrap().unwrap();
        assert_eq!(hose.length, 20.0);
        assert_eq!(hose.diameter, 2.5);

        // The measurement row keeps its original observation
        let row = db
            .measurements()
            .find_by_id(&created.measurement_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.length, 15.0);
    }

    #[tokio::test]
    async fn test_update_missing_measurement_is_not_found() {
        let db = test_db().await;

        let err = update_measurement(&db, "missing", 1.0, 1.0).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_list_and_delete_measurement() {
        let db = test_db().await;
        let user_id = seed_user(&db, "m4@example.com", UserRole::StandardUser).await;
        let hose_id = seed_hose(&db, 15.0, 1.9).await;
        let created = create_measurement(&db, &hose_id, 15.0, 1.9, &user_id)
            .await
            .unwrap();

        let listed = list_measurements(&db).await.unwrap();
        assert_eq!(listed.measurements.len(), 1);

        delete_measurement(&db, &created.measurement_id).await.unwrap();
        let err = delete_measurement(&db, &created.measurement_id)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }
}
