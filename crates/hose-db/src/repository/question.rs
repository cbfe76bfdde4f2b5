//! # Question Repository
//!
//! Database operations for logged user inquiries and their answers.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use hose_core::{Answer, Question};

/// Repository for question and answer database operations.
#[derive(Debug, Clone)]
pub struct QuestionRepository {
    pool: SqlitePool,
}

impl QuestionRepository {
    /// Creates a new QuestionRepository.
    pub fn new(pool: SqlitePool) -> Self {
        QuestionRepository { pool }
    }

    /// Inserts a new question.
    ///
    /// ## Returns
    /// * `Ok(())` - Insert successful
    /// * `Err(DbError::ForeignKeyViolation)` - user_id unknown
    pub async fn insert(&self, question: &Question) -> DbResult<()> {
        debug!(user_id = %question.user_id, "Inserting question");

        sqlx::query(
            r#"
            INSERT INTO questions (id, user_id, content, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&question.id)
        .bind(&question.user_id)
        .bind(&question.content)
        .bind(question.created_at)
        .bind(question.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Gets a question by ID.
    pub async fn find_by_id(&self, id: &str) -> DbResult<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, user_id, content, created_at, updated_at
            FROM questions
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    /// Lists the questions asked by a user.
    pub async fn list_for_user(&self, user_id: &str) -> DbResult<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, user_id, content, created_at, updated_at
            FROM questions
            WHERE user_id = ?1
            ORDER BY created_at
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    /// Hard-deletes a question. Its answers cascade per the schema.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting question");

        let result = sqlx::query("DELETE FROM questions WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Question", id));
        }

        Ok(())
    }

    /// Inserts a new answer to a question.
    pub async fn insert_answer(&self, answer: &Answer) -> DbResult<()> {
        debug!(question_id = %answer.question_id, "Inserting answer");

        sqlx::query(
            r#"
            INSERT INTO answers (id, question_id, user_id, content, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&answer.id)
        .bind(&answer.question_id)
        .bind(&answer.user_id)
        .bind(&answer.content)
        .bind(answer.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Lists the answers written by a user.
    pub async fn list_answers_for_user(&self, user_id: &str) -> DbResult<Vec<Answer>> {
        let answers = sqlx::query_as::<_, Answer>(
            r#"
            SELECT id, question_id, user_id, content, created_at
            FROM answers
            WHERE user_id = ?1
            ORDER BY created_at
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(answers)
    }
}
