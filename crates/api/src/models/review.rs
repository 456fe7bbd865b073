//! Review domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use hemline_core::{ProductId, ReviewId, UserId};

use super::{Product, User};

/// A product review left by a user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub user_id: UserId,
    pub product_id: ProductId,
    pub rating: i64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// A review together with its declared relation includes (user and product),
/// as returned by the list endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewWithRelations {
    #[serde(flatten)]
    pub review: Review,
    pub user: User,
    pub product: Product,
}
