//! Shared types for the Souk marketplace client
//!
//! Wire models, response envelopes, the HTTP error taxonomy and the
//! delivery-assignment policy. Nothing in this crate performs I/O.

pub mod delivery;
pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use delivery::{NoCourierReason, Selection, ZoneDirectory, ZoneMatch, select_courier, select_for_order};
pub use error::{ErrorCategory, FieldError};
pub use response::{Envelope, Pagination};
