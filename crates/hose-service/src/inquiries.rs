//! # Inquiry Access Functions
//!
//! Logging user inquiries as question rows for later analytics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ServiceResult;
use hose_core::validation::{validate_id, validate_text};
use hose_core::{Answer, Question};
use hose_db::{generate_id, Database};

// =============================================================================
// Schemas
// =============================================================================

/// A logged inquiry as presented in eager-loaded user views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDto {
    pub id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Question> for QuestionDto {
    fn from(q: Question) -> Self {
        QuestionDto {
            id: q.id,
            user_id: q.user_id,
            content: q.content,
            created_at: q.created_at,
            updated_at: q.updated_at,
        }
    }
}

/// An answer as presented in eager-loaded user views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerDto {
    pub id: String,
    pub question_id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Answer> for AnswerDto {
    fn from(a: Answer) -> Self {
        AnswerDto {
            id: a.id,
            question_id: a.question_id,
            user_id: a.user_id,
            content: a.content,
            created_at: a.created_at,
        }
    }
}

/// Response confirming an inquiry was logged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInquiryResponse {
    pub inquiry_id: String,
    pub message: String,
}

// =============================================================================
// Operations
// =============================================================================

/// Logs a user inquiry as a question row.
///
/// The timestamp defaults to the current time when not supplied and is
/// used for both created and updated marks.
pub async fn log_user_inquiry(
    db: &Database,
    user_id: &str,
    inquiry_details: &str,
    timestamp: Option<DateTime<Utc>>,
) -> ServiceResult<UserInquiryResponse> {
    debug!(user_id = %user_id, "log_user_inquiry");

    validate_id("userId", user_id)?;
    validate_text("inquiryDetails", inquiry_details)?;

    let at = timestamp.unwrap_or_else(Utc::now);
    let question = Question {
        id: generate_id(),
        user_id: user_id.to_string(),
        content: inquiry_details.to_string(),
        created_at: at,
        updated_at: at,
    };
    db.questions().insert(&question).await?;

    info!(inquiry_id = %question.id, "Inquiry logged");
    Ok(UserInquiryResponse {
        inquiry_id: question.id,
        message: "Inquiry logged successfully.".to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::test_support::{seed_user, test_db};
    use chrono::TimeZone;
    use hose_core::UserRole;

    #[tokio::test]
    async fn test_log_inquiry_with_explicit_timestamp() {
        let db = test_db().await;
        let user_id = seed_user(&db, "q@example.com", UserRole::StandardUser).await;

        let at = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        let logged = log_user_inquiry(&db, &user_id, "Which nozzle fits?", Some(at))
            .await
            .unwrap();
        assert_eq!(logged.message, "Inquiry logged successfully.");

        let stored = db
            .questions()
            .find_by_id(&logged.inquiry_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.created_at, at);
        assert_eq!(stored.updated_at, at);
    }

    #[tokio::test]
    async fn test_log_inquiry_defaults_timestamp() {
        let db = test_db().await;
        let user_id = seed_user(&db, "q2@example.com", UserRole::StandardUser).await;

        let before = Utc::now();
        let logged = log_user_inquiry(&db, &user_id, "Any expandable models?", None)
            .await
            .unwrap();

        let stored = db
            .questions()
            .find_by_id(&logged.inquiry_id)
            .await
            .unwrap()
            .unwrap();
        assert!(stored.created_at >= before);
    }

    #[tokio::test]
    async fn test_log_inquiry_unknown_user_is_database_error() {
        let db = test_db().await;

        let err = log_user_inquiry(&db, "missing-user", "hello", None)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Database(_)));
    }

    #[tokio::test]
    async fn test_empty_inquiry_rejected() {
        let db = test_db().await;
        let user_id = seed_user(&db, "q3@example.com", UserRole::StandardUser).await;

        let err = log_user_inquiry(&db, &user_id, "", None).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
