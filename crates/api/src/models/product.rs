//! Product domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use hemline_core::{CategoryId, Price, ProductId};

use super::{Category, Review};

/// A product in the catalog.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Owning category, if any.
    pub category_id: Option<CategoryId>,
    pub created_at: DateTime<Utc>,
}

/// A product together with its declared relation includes
/// (category and reviews), as returned by the list endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ProductWithRelations {
    #[serde(flatten)]
    pub product: Product,
    pub category: Option<Category>,
    pub reviews: Vec<Review>,
}
