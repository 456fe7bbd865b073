//! User domain type.

use chrono::{DateTime, Utc};
use serde::Serialize;

use hemline_core::{Email, UserId};

/// A registered shop user.
///
/// Password hashes are stored separately (`user_passwords` table) and are
/// not part of this type, so serializing a `User` can never leak them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// Display name (may be empty).
    pub name: String,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}
