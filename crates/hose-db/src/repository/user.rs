//! # User Repository
//!
//! Database operations for users.
//!
//! ## Key Operations
//! - CRUD with hard deletes
//! - Email lookup (email is the business identifier, unique)
//!
//! ## Role Storage
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Roles are stored as their wire names (TEXT):                           │
//! │                                                                         │
//! │  users.role = 'ADMINISTRATOR' | 'STANDARD_USER' | 'GUEST'              │
//! │       │                                                                 │
//! │       ▼  parse on read                                                  │
//! │  UserRole enum (closed)                                                 │
//! │                                                                         │
//! │  An unknown stored role is DataCorruption, never a silent              │
//! │  permission denial.                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use hose_core::{User, UserRole};

/// Raw row shape; `role` stays TEXT until parsed into the closed enum.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: String,
    email: String,
    password: String,
    role: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    last_login: Option<DateTime<Utc>>,
}

impl UserRow {
    fn into_user(self) -> DbResult<User> {
        let role: UserRole = self
            .role
            .parse()
            .map_err(|_| DbError::DataCorruption(format!("unknown role '{}'", self.role)))?;
        Ok(User {
            id: self.id,
            email: self.email,
            password: self.password,
            role,
            created_at: self.created_at,
            updated_at: self.updated_at,
            last_login: self.last_login,
        })
    }
}

/// Repository for user database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = UserRepository::new(pool);
///
/// let user = repo.find_by_email("gardener@example.com").await?;
/// ```
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// Inserts a new user.
    ///
    /// ## Returns
    /// * `Ok(())` - Insert successful
    /// * `Err(DbError::UniqueViolation)` - Email already registered
    pub async fn insert(&self, user: &User) -> DbResult<()> {
        debug!(email = %user.email, "Inserting user");

        sqlx::query(
            r#"
            INSERT INTO users (id, email, password, role, created_at, updated_at, last_login)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.password)
        .bind(user.role.as_str())
        .bind(user.created_at)
        .bind(user.updated_at)
        .bind(user.last_login)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Gets a user by ID.
    ///
    /// ## Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - User not found
    pub async fn find_by_id(&self, id: &str) -> DbResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password, role, created_at, updated_at, last_login
            FROM users
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    /// Gets a user by email (the unique business identifier).
    pub async fn find_by_email(&self, email: &str) -> DbResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password, role, created_at, updated_at, last_login
            FROM users
            WHERE email = ?1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.map(UserRow::into_user).transpose()
    }

    /// Lists all users, oldest first.
    pub async fn list_all(&self) -> DbResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password, role, created_at, updated_at, last_login
            FROM users
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(UserRow::into_user).collect()
    }

    /// Updates an existing user.
    ///
    /// ## Returns
    /// * `Ok(())` - Update successful
    /// * `Err(DbError::NotFound)` - User doesn't exist
    /// * `Err(DbError::UniqueViolation)` - New email already taken
    pub async fn update(&self, user: &User) -> DbResult<()> {
        debug!(id = %user.id, "Updating user");

        let result = sqlx::query(
            r#"
            UPDATE users SET
                email = ?2,
                password = ?3,
                role = ?4,
                updated_at = ?5,
                last_login = ?6
            WHERE id = ?1
            "#,
        )
        .bind(&user.id)
        .bind(&user.email)
        .bind(&user.password)
        .bind(user.role.as_str())
        .bind(user.updated_at)
        .bind(user.last_login)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("User", &user.id));
        }

        Ok(())
    }

    /// Hard-deletes a user. Dependent rows cascade per the schema.
    ///
    /// ## Returns
    /// * `Ok(())` - Deleted
    /// * `Err(DbError::NotFound)` - No such user
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting user");

        let result = sqlx::query("DELETE FROM users WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("User", id));
        }

        Ok(())
    }

    /// Counts total users (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
