//! Newtype wrappers for type-safe IDs, emails, and prices.

pub mod email;
pub mod id;
pub mod price;

pub use email::{Email, EmailError};
pub use id::{CategoryId, OrderId, ProductId, ReviewId, UserId};
pub use price::{Price, PriceError};
