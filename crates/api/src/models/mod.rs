//! Domain models serialized onto the JSON API surface.
//!
//! Field names are camelCase on the wire. `User` deliberately carries no
//! credential material; password hashes never leave the database layer
//! except as an opaque string handed to the auth service for verification.

pub mod category;
pub mod order;
pub mod product;
pub mod review;
pub mod user;

pub use category::Category;
pub use order::{Order, OrderWithRelations};
pub use product::{Product, ProductWithRelations};
pub use review::{Review, ReviewWithRelations};
pub use user::User;
