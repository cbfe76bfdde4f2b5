//! # User Access Functions
//!
//! Account management: creation, point reads, the eager-loaded listing,
//! updates, and hard deletes.
//!
//! ## Creation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    User Creation Flow                                   │
//! │                                                                         │
//! │  create_user(&db, email, password_hash, role)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate email shape and non-empty password                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  find_by_email ──► already registered? ──► Err(Conflict)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  INSERT users ──► Ok(CreateUserResponse { userId })                    │
//! │                                                                         │
//! │  The email column is UNIQUE, so a concurrent duplicate still           │
//! │  surfaces as Conflict via the constraint mapping.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::compatibilities::CompatibilityDto;
use crate::error::{ServiceError, ServiceResult};
use crate::inquiries::{AnswerDto, QuestionDto};
use crate::measurements::MeasurementSummaryDto;
use crate::products::UsageLogDto;
use hose_core::validation::{validate_email, validate_text};
use hose_core::{User, UserRole};
use hose_db::{generate_id, Database};

// =============================================================================
// Schemas
// =============================================================================

/// Response for a newly created user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserResponse {
    pub user_id: String,
    pub message: String,
}

/// Point-read projection: username is derived from the email local part.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailsResponse {
    pub username: String,
    pub email: String,
    pub role: UserRole,
}

/// A user with every related collection eager-loaded.
///
/// The listing is an administrative oversight view; the password hash is
/// part of the stored record and travels with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecordDto {
    pub id: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub created_at: chrono::DateTime<Utc>,
    pub updated_at: chrono::DateTime<Utc>,
    pub last_login: Option<chrono::DateTime<Utc>>,
    pub measurements: Vec<MeasurementSummaryDto>,
    pub compatibility_logs: Vec<CompatibilityDto>,
    pub usage_logs: Vec<UsageLogDto>,
    pub questions: Vec<QuestionDto>,
    pub answers: Vec<AnswerDto>,
}

/// Response for the eager-loaded user listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListUsersResponse {
    pub users: Vec<UserRecordDto>,
}

/// Response confirming a user update, carrying the updated record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserResponse {
    pub message: String,
    pub user: UserRecordDto,
}

/// Response confirming a user deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteUserResponse {
    pub message: String,
}

// =============================================================================
// Operations
// =============================================================================

/// Creates a new user.
///
/// The password arrives already hashed; hashing call sites live upstream.
/// A duplicate email is rejected with `Conflict` before the insert is
/// attempted.
pub async fn create_user(
    db: &Database,
    email: &str,
    password: &str,
    role: UserRole,
) -> ServiceResult<CreateUserResponse> {
    debug!(email = %email, role = %role, "create_user");

    validate_email(email)?;
    validate_text("password", password)?;

    if db.users().find_by_email(email).await?.is_some() {
        return Err(ServiceError::Conflict(
            "A user with this email already exists.".to_string(),
        ));
    }

    let now = Utc::now();
    let user = User {
        id: generate_id(),
        email: email.to_string(),
        password: password.to_string(),
        role,
        created_at: now,
        updated_at: now,
        last_login: None,
    };
    db.users().insert(&user).await?;

    info!(user_id = %user.id, "User created");
    Ok(CreateUserResponse {
        user_id: user.id,
        message: "User created successfully.".to_string(),
    })
}

/// Fetches the details of a single user.
pub async fn get_user_details(db: &Database, user_id: &str) -> ServiceResult<UserDetailsResponse> {
    debug!(user_id = %user_id, "get_user_details");

    let user = db
        .users()
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("User", user_id))?;

    Ok(UserDetailsResponse {
        username: user.username().to_string(),
        email: user.email.clone(),
        role: user.role,
    })
}

/// Retrieves all users with their related collections eager-loaded.
pub async fn list_users(db: &Database) -> ServiceResult<ListUsersResponse> {
    debug!("list_users");

    let users = db.users().list_all().await?;

    let mut records = Vec::with_capacity(users.len());
    for user in users {
        records.push(load_user_record(db, user).await?);
    }

    Ok(ListUsersResponse { users: records })
}

/// Updates an existing user's email, and optionally their role.
///
/// The role field is applied only when the fetched user's current role is
/// ADMINISTRATOR; for everyone else a submitted role is ignored.
pub async fn update_user(
    db: &Database,
    user_id: &str,
    email: &str,
    role: Option<UserRole>,
) -> ServiceResult<UpdateUserResponse> {
    debug!(user_id = %user_id, "update_user");

    validate_email(email)?;

    let mut user = db
        .users()
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("User", user_id))?;

    user.email = email.to_string();
    if let Some(new_role) = role {
        if user.role == UserRole::Administrator {
            user.role = new_role;
        }
    }
    user.updated_at = Utc::now();

    db.users().update(&user).await?;

    info!(user_id = %user.id, "User updated");
    Ok(UpdateUserResponse {
        message: "User updated successfully".to_string(),
        user: load_user_record(db, user).await?,
    })
}

/// Removes a user's record. Dependent rows cascade.
pub async fn delete_user(db: &Database, user_id: &str) -> ServiceResult<DeleteUserResponse> {
    debug!(user_id = %user_id, "delete_user");

    db.users().delete(user_id).await?;

    info!(user_id = %user_id, "User deleted");
    Ok(DeleteUserResponse {
        message: "User successfully deleted.".to_string(),
    })
}

/// Assembles the eager-loaded record for one user.
async fn load_user_record(db: &Database, user: User) -> ServiceResult<UserRecordDto> {
    let measurements = db
        .measurements()
        .list_for_user(&user.id)
        .await?
        .into_iter()
        .map(MeasurementSummaryDto::from)
        .collect();
    let compatibility_logs = db
        .compatibilities()
        .list_for_user(&user.id)
        .await?
        .into_iter()
        .map(CompatibilityDto::from)
        .collect();
    let usage_logs = db
        .usage_logs()
        .list_for_user(&user.id)
        .await?
        .into_iter()
        .map(UsageLogDto::from)
        .collect();
    let questions = db
        .questions()
        .list_for_user(&user.id)
        .await?
        .into_iter()
        .map(QuestionDto::from)
        .collect();
    let answers = db
        .questions()
        .list_answers_for_user(&user.id)
        .await?
        .into_iter()
        .map(AnswerDto::from)
        .collect();

    Ok(UserRecordDto {
        id: user.id,
        email: user.email,
        password: user.password,
        role: user.role,
        created_at: user.created_at,
        updated_at: user.updated_at,
        last_login: user.last_login,
        measurements,
        compatibility_logs,
        usage_logs,
        questions,
        answers,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seed_user, test_db};

    #[tokio::test]
    async fn test_create_and_fetch_user() {
        let db = test_db().await;

        let created = create_user(&db, "gardener@example.com", "hash", UserRole::StandardUser)
            .await
            .unwrap();
        assert_eq!(created.message, "User created successfully.");

        let details = get_user_details(&db, &created.user_id).await.unwrap();
        assert_eq!(details.username, "gardener");
        assert_eq!(details.email, "gardener@example.com");
        assert_eq!(details.role, UserRole::StandardUser);
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let db = test_db().await;

        create_user(&db, "dup@example.com", "hash", UserRole::Guest)
            .await
            .unwrap();
        let err = create_user(&db, "dup@example.com", "hash2", UserRole::Guest)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_invalid_email_rejected() {
        let db = test_db().await;

        let err = create_user(&db, "not-an-email", "hash", UserRole::Guest)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[tokio::test]
    async fn test_get_missing_user_is_not_found() {
        let db = test_db().await;

        let err = get_user_details(&db, "missing").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let db = test_db().await;

        let err = update_user(&db, "missing", "new@example.com", None)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_role_change_requires_current_admin_role() {
        let db = test_db().await;

        // A standard user's submitted role change is ignored
        let standard = seed_user(&db, "std@example.com", UserRole::StandardUser).await;
        let updated = update_user(&db, &standard, "std@example.com", Some(UserRole::Administrator))
            .await
            .unwrap();
        assert_eq!(updated.user.role, UserRole::StandardUser);

        // An administrator's record accepts a role change
        let admin = seed_user(&db, "adm@example.com", UserRole::Administrator).await;
        let updated = update_user(&db, &admin, "adm@example.com", Some(UserRole::Guest))
            .await
            .unwrap();
        assert_eq!(updated.user.role, UserRole::Guest);
    }

    #[tokio::test]
    async fn test_list_users_eager_loads_collections() {
        let db = test_db().await;
        seed_user(&db, "lister@example.com", UserRole::StandardUser).await;

        let listed = list_users(&db).await.unwrap();
        assert_eq!(listed.users.len(), 1);
        assert!(listed.users[0].measurements.is_empty());
        assert!(listed.users[0].questions.is_empty());
    }

    #[tokio::test]
    async fn test_delete_user_then_missing() {
        let db = test_db().await;
        let user_id = seed_user(&db, "gone@example.com", UserRole::Guest).await;

        delete_user(&db, &user_id).await.unwrap();
        let err = delete_user(&db, &user_id).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }
}
