//! Order domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use hemline_core::{OrderId, Price, ProductId, UserId};

use super::{Product, User};

/// A placed order.
///
/// `total_price` is computed once at creation time from the product's unit
/// price and is never recomputed, even if the product price changes later.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: i64,
    pub total_price: Price,
    pub created_at: DateTime<Utc>,
}

/// An order together with its declared relation includes (user and product),
/// as returned by the list endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithRelations {
    #[serde(flatten)]
    pub order: Order,
    pub user: User,
    pub product: Product,
}
