//! Data models
//!
//! Wire types for the marketplace backend. The backend speaks camelCase
//! JSON and emits MongoDB-style `_id` keys; every entity accepts both `_id`
//! and `id`. Money is `Decimal`, timestamps are UTC.

pub mod cart;
pub mod coupon;
pub mod courier;
pub mod order;
pub mod product;
pub mod question;
pub mod reclamation;
pub mod user;
pub mod vendor;
pub mod zone;

// Re-exports
pub use cart::*;
pub use coupon::*;
pub use courier::*;
pub use order::*;
pub use product::*;
pub use question::*;
pub use reclamation::*;
pub use user::*;
pub use vendor::*;
pub use zone::*;

/// Error returned when a string does not name a known enum variant
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}
