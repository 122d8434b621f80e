//! Delivery assignment policy
//!
//! Two pieces, both pure:
//! - [`ZoneDirectory`] resolves an order's shipping city to a zone code.
//! - [`select_courier`] picks the least-loaded eligible courier for a zone,
//!   preferring the higher rating on equal load.
//!
//! Persisting the choice (and simulating load across a batch) belongs to
//! the client crate.

mod selector;
mod zones;

pub use selector::{NoCourierReason, Selection, is_eligible, select_courier, select_for_order};
pub use zones::{ZoneDirectory, ZoneMatch};
