//! Courier selection
//!
//! Eligibility: available, below capacity, and serving the order's zone.
//! Among eligible couriers the lowest `current_orders` wins; equal loads are
//! broken by the higher rating; full ties keep input order.

use std::cmp::Ordering;

use super::zones::{ZoneDirectory, ZoneMatch};
use crate::models::{Courier, Order};

/// Why no courier was selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoCourierReason {
    /// The order's zone could not be resolved
    UnresolvedZone,
    /// The zone is known but no courier passed the filter
    NoneEligible,
}

impl NoCourierReason {
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnresolvedZone => "delivery zone could not be resolved from the shipping address",
            Self::NoneEligible => "no available courier with free capacity serves this zone",
        }
    }
}

impl std::fmt::Display for NoCourierReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of a selection; "no courier" is a normal outcome, not an error
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection<'a> {
    Selected(&'a Courier),
    NoEligibleCourier(NoCourierReason),
}

impl<'a> Selection<'a> {
    pub fn courier(&self) -> Option<&'a Courier> {
        match *self {
            Self::Selected(courier) => Some(courier),
            Self::NoEligibleCourier(_) => None,
        }
    }

    pub fn courier_id(&self) -> Option<&'a str> {
        self.courier().map(|c| c.id.as_str())
    }
}

/// Eligibility filter for a known zone
pub fn is_eligible(courier: &Courier, zone: &str) -> bool {
    courier.is_available && courier.has_capacity() && courier.serves(zone)
}

/// Ratings outside 0..=5 (or NaN) rank as 0
fn rating_key(courier: &Courier) -> f64 {
    if courier.rating.is_finite() {
        courier.rating.clamp(0.0, 5.0)
    } else {
        0.0
    }
}

fn by_load_then_rating(a: &Courier, b: &Courier) -> Ordering {
    a.current_orders
        .cmp(&b.current_orders)
        .then_with(|| rating_key(b).total_cmp(&rating_key(a)))
}

/// Pick a courier for a zone; `None` zone fails closed
pub fn select_courier<'a>(zone: Option<&str>, couriers: &'a [Courier]) -> Selection<'a> {
    let Some(zone) = zone else {
        return Selection::NoEligibleCourier(NoCourierReason::UnresolvedZone);
    };

    // `min_by` returns the first of several equal minima, which keeps full ties stable
    couriers
        .iter()
        .filter(|c| is_eligible(c, zone))
        .min_by(|a, b| by_load_then_rating(a, b))
        .map_or(
            Selection::NoEligibleCourier(NoCourierReason::NoneEligible),
            Selection::Selected,
        )
}

/// Resolve the order's zone through `zones`, then pick a courier
pub fn select_for_order<'a>(
    order: &Order,
    zones: &ZoneDirectory,
    couriers: &'a [Courier],
) -> Selection<'a> {
    let resolved = zones.resolve_order(order);
    if let ZoneMatch::NoMatch = resolved {
        tracing::debug!(
            order_id = %order.id,
            city = %order.shipping_address.city,
            "No delivery zone for order"
        );
    }
    select_courier(resolved.code(), couriers)
}
