//! Category domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use hemline_core::CategoryId;

/// A product category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
