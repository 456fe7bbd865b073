//! User repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use hemline_core::Email;

use super::RepositoryError;
use crate::models::User;

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new user with email, display name, and password hash.
    ///
    /// The user row and password row are written in one transaction so a
    /// user can never exist without a credential.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create_with_password(
        &self,
        email: &Email,
        name: &str,
        password_hash: &str,
    ) -> Result<User, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            "INSERT INTO users (email, name, created_at) \
             VALUES (?1, ?2, ?3) \
             RETURNING id, email, name, created_at",
        )
        .bind(email.as_str())
        .bind(name)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("Email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        let user = user_from_row(&row)?;

        sqlx::query("INSERT INTO user_passwords (user_id, password_hash) VALUES (?1, ?2)")
            .bind(user.id)
            .bind(password_hash)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(user)
    }

    /// Get a user and their password hash by email.
    ///
    /// Returns `None` if the user doesn't exist or has no password set.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_password_hash(
        &self,
        email: &Email,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        let row = sqlx::query(
            "SELECT u.id, u.email, u.name, u.created_at, p.password_hash \
             FROM users u \
             LEFT JOIN user_passwords p ON u.id = p.user_id \
             WHERE u.email = ?1",
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let password_hash: Option<String> = row.try_get("password_hash")?;
        let Some(password_hash) = password_hash else {
            return Ok(None);
        };

        Ok(Some((user_from_row(&row)?, password_hash)))
    }
}

/// Map a `users` row (or aliased equivalent) into a domain `User`.
pub(crate) fn user_from_row(row: &SqliteRow) -> Result<User, RepositoryError> {
    let email: String = row.try_get("email")?;
    let email = Email::parse(&email)
        .map_err(|e| RepositoryError::DataCorruption(format!("invalid email in database: {e}")))?;
    let created_at: DateTime<Utc> = row.try_get("created_at")?;

    Ok(User {
        id: row.try_get("id")?,
        email,
        name: row.try_get("name")?,
        created_at,
    })
}
