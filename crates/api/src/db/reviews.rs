//! Review repository for database operations.

use chrono::Utc;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use hemline_core::{Email, ProductId, ReviewId, UserId};

use super::RepositoryError;
use crate::models::{Product, Review, ReviewWithRelations, User};

/// Repository for review database operations.
pub struct ReviewRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ReviewRepository<'a> {
    /// Create a new review repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all reviews with their user and product included.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored email is invalid.
    pub async fn list_with_relations(&self) -> Result<Vec<ReviewWithRelations>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT r.id, r.user_id, r.product_id, r.rating, r.comment, r.created_at, \
                    u.email AS u_email, u.name AS u_name, u.created_at AS u_created_at, \
                    p.name AS p_name, p.description AS p_description, p.price AS p_price, \
                    p.category_id AS p_category_id, p.created_at AS p_created_at \
             FROM reviews r \
             JOIN users u ON u.id = r.user_id \
             JOIN products p ON p.id = r.product_id \
             ORDER BY r.id",
        )
        .fetch_all(self.pool)
        .await?;

        let mut reviews = Vec::with_capacity(rows.len());
        for row in &rows {
            reviews.push(review_with_relations_from_row(row)?);
        }

        Ok(reviews)
    }

    /// Create a new review.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails (e.g., the
    /// referenced user or product does not exist).
    pub async fn create(
        &self,
        user_id: UserId,
        product_id: ProductId,
        rating: i64,
        comment: &str,
    ) -> Result<Review, RepositoryError> {
        let row = sqlx::query(
            "INSERT INTO reviews (user_id, product_id, rating, comment, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5) \
             RETURNING id, user_id, product_id, rating, comment, created_at",
        )
        .bind(user_id)
        .bind(product_id)
        .bind(rating)
        .bind(comment)
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await?;

        review_from_row(&row)
    }

    /// Replace a review's rating and comment.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no review has this id.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: ReviewId,
        rating: i64,
        comment: &str,
    ) -> Result<Review, RepositoryError> {
        let row = sqlx::query(
            "UPDATE reviews SET rating = ?1, comment = ?2 WHERE id = ?3 \
             RETURNING id, user_id, product_id, rating, comment, created_at",
        )
        .bind(rating)
        .bind(comment)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        review_from_row(&row)
    }

    /// Delete a review by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no review has this id.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: ReviewId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

/// Map a `reviews` row into a domain `Review`.
fn review_from_row(row: &SqliteRow) -> Result<Review, RepositoryError> {
    Ok(Review {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        product_id: row.try_get("product_id")?,
        rating: row.try_get("rating")?,
        comment: row.try_get("comment")?,
        created_at: row.try_get("created_at")?,
    })
}

/// Map a joined review/user/product row into `ReviewWithRelations`.
fn review_with_relations_from_row(
    row: &SqliteRow,
) -> Result<ReviewWithRelations, RepositoryError> {
    let review = review_from_row(row)?;

    let email: String = row.try_get("u_email")?;
    let email = Email::parse(&email)
        .map_err(|e| RepositoryError::DataCorruption(format!("invalid email in database: {e}")))?;

    let user = User {
        id: review.user_id,
        email,
        name: row.try_get("u_name")?,
        created_at: row.try_get("u_created_at")?,
    };

    let product = Product {
        id: review.product_id,
        name: row.try_get("p_name")?,
        description: row.try_get("p_description")?,
        price: row.try_get("p_price")?,
        category_id: row.try_get("p_category_id")?,
        created_at: row.try_get("p_created_at")?,
    };

    Ok(ReviewWithRelations {
        review,
        user,
        product,
    })
}
