//! Product repository for database operations.

use std::collections::HashMap;

use chrono::Utc;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use hemline_core::{CategoryId, Price, ProductId};

use super::RepositoryError;
use crate::models::{Category, Product, ProductWithRelations, Review};

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all products with their category and reviews included.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn list_with_relations(
        &self,
    ) -> Result<Vec<ProductWithRelations>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT p.id, p.name, p.description, p.price, p.category_id, p.created_at, \
                    c.id AS c_id, c.name AS c_name, c.created_at AS c_created_at \
             FROM products p \
             LEFT JOIN categories c ON c.id = p.category_id \
             ORDER BY p.id",
        )
        .fetch_all(self.pool)
        .await?;

        let review_rows = sqlx::query(
            "SELECT id, user_id, product_id, rating, comment, created_at \
             FROM reviews ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        let mut reviews_by_product: HashMap<ProductId, Vec<Review>> = HashMap::new();
        for row in &review_rows {
            let review = Review {
                id: row.try_get("id")?,
                user_id: row.try_get("user_id")?,
                product_id: row.try_get("product_id")?,
                rating: row.try_get("rating")?,
                comment: row.try_get("comment")?,
                created_at: row.try_get("created_at")?,
            };
            reviews_by_product
                .entry(review.product_id)
                .or_default()
                .push(review);
        }

        let mut products = Vec::with_capacity(rows.len());
        for row in &rows {
            let product = product_from_row(row)?;

            let category = match row.try_get::<Option<CategoryId>, _>("c_id")? {
                Some(id) => Some(Category {
                    id,
                    name: row.try_get("c_name")?,
                    created_at: row.try_get("c_created_at")?,
                }),
                None => None,
            };

            let reviews = reviews_by_product.remove(&product.id).unwrap_or_default();

            products.push(ProductWithRelations {
                product,
                category,
                reviews,
            });
        }

        Ok(products)
    }

    /// Get a product by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query(
            "SELECT id, name, description, price, category_id, created_at \
             FROM products WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.as_ref().map(product_from_row).transpose()
    }

    /// Create a new product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails (e.g., the
    /// referenced category does not exist).
    pub async fn create(
        &self,
        name: &str,
        description: &str,
        price: Price,
        category_id: Option<CategoryId>,
    ) -> Result<Product, RepositoryError> {
        let row = sqlx::query(
            "INSERT INTO products (name, description, price, category_id, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5) \
             RETURNING id, name, description, price, category_id, created_at",
        )
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(category_id)
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await?;

        product_from_row(&row)
    }

    /// Replace a product's fields (full replace, no partial patch).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has this id.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: ProductId,
        name: &str,
        description: &str,
        price: Price,
        category_id: Option<CategoryId>,
    ) -> Result<Product, RepositoryError> {
        let row = sqlx::query(
            "UPDATE products SET name = ?1, description = ?2, price = ?3, category_id = ?4 \
             WHERE id = ?5 \
             RETURNING id, name, description, price, category_id, created_at",
        )
        .bind(name)
        .bind(description)
        .bind(price)
        .bind(category_id)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        product_from_row(&row)
    }

    /// Delete a product by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no product has this id.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

/// Map a `products` row (or aliased equivalent) into a domain `Product`.
pub(crate) fn product_from_row(row: &SqliteRow) -> Result<Product, RepositoryError> {
    Ok(Product {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        price: row.try_get("price")?,
        category_id: row.try_get("category_id")?,
        created_at: row.try_get("created_at")?,
    })
}
