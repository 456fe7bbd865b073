//! Category repository for database operations.

use chrono::Utc;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use hemline_core::CategoryId;

use super::RepositoryError;
use crate::models::Category;

/// Repository for category database operations.
pub struct CategoryRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CategoryRepository<'a> {
    /// Create a new category repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all categories.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        let rows = sqlx::query("SELECT id, name, created_at FROM categories ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        rows.iter().map(category_from_row).collect()
    }

    /// Create a new category.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, name: &str) -> Result<Category, RepositoryError> {
        let row = sqlx::query(
            "INSERT INTO categories (name, created_at) VALUES (?1, ?2) \
             RETURNING id, name, created_at",
        )
        .bind(name)
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await?;

        category_from_row(&row)
    }

    /// Replace a category's name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no category has this id.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(&self, id: CategoryId, name: &str) -> Result<Category, RepositoryError> {
        let row = sqlx::query(
            "UPDATE categories SET name = ?1 WHERE id = ?2 \
             RETURNING id, name, created_at",
        )
        .bind(name)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        category_from_row(&row)
    }

    /// Delete a category by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no category has this id.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: CategoryId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

/// Map a `categories` row (or aliased equivalent) into a domain `Category`.
pub(crate) fn category_from_row(row: &SqliteRow) -> Result<Category, RepositoryError> {
    Ok(Category {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        created_at: row.try_get("created_at")?,
    })
}
