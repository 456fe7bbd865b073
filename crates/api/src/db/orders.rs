//! Order repository for database operations.

use chrono::Utc;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use hemline_core::{Email, OrderId, Price, ProductId, UserId};

use super::RepositoryError;
use crate::models::{Order, OrderWithRelations, Product, User};

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all orders with their user and product included.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored email is invalid.
    pub async fn list_with_relations(&self) -> Result<Vec<OrderWithRelations>, RepositoryError> {
        let rows = sqlx::query(
            "SELECT o.id, o.user_id, o.product_id, o.quantity, o.total_price, o.created_at, \
                    u.email AS u_email, u.name AS u_name, u.created_at AS u_created_at, \
                    p.name AS p_name, p.description AS p_description, p.price AS p_price, \
                    p.category_id AS p_category_id, p.created_at AS p_created_at \
             FROM orders o \
             JOIN users u ON u.id = o.user_id \
             JOIN products p ON p.id = o.product_id \
             ORDER BY o.id",
        )
        .fetch_all(self.pool)
        .await?;

        let mut orders = Vec::with_capacity(rows.len());
        for row in &rows {
            orders.push(order_with_relations_from_row(row)?);
        }

        Ok(orders)
    }

    /// Create a new order with a precomputed total price.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails (e.g., the
    /// referenced user or product does not exist).
    pub async fn create(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: i64,
        total_price: Price,
    ) -> Result<Order, RepositoryError> {
        let row = sqlx::query(
            "INSERT INTO orders (user_id, product_id, quantity, total_price, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5) \
             RETURNING id, user_id, product_id, quantity, total_price, created_at",
        )
        .bind(user_id)
        .bind(product_id)
        .bind(quantity)
        .bind(total_price)
        .bind(Utc::now())
        .fetch_one(self.pool)
        .await?;

        order_from_row(&row)
    }

    /// Delete an order by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no order has this id.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: OrderId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = ?1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

/// Map an `orders` row into a domain `Order`.
fn order_from_row(row: &SqliteRow) -> Result<Order, RepositoryError> {
    Ok(Order {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        product_id: row.try_get("product_id")?,
        quantity: row.try_get("quantity")?,
        total_price: row.try_get("total_price")?,
        created_at: row.try_get("created_at")?,
    })
}

/// Map a joined order/user/product row into `OrderWithRelations`.
fn order_with_relations_from_row(row: &SqliteRow) -> Result<OrderWithRelations, RepositoryError> {
    let order = order_from_row(row)?;

    let email: String = row.try_get("u_email")?;
    let email = Email::parse(&email)
        .map_err(|e| RepositoryError::DataCorruption(format!("invalid email in database: {e}")))?;

    let user = User {
        id: order.user_id,
        email,
        name: row.try_get("u_name")?,
        created_at: row.try_get("u_created_at")?,
    };

    let product = Product {
        id: order.product_id,
        name: row.try_get("p_name")?,
        description: row.try_get("p_description")?,
        price: row.try_get("p_price")?,
        category_id: row.try_get("p_category_id")?,
        created_at: row.try_get("p_created_at")?,
    };

    Ok(OrderWithRelations {
        order,
        user,
        product,
    })
}
