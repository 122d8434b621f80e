//! Batch auto-assignment
//!
//! Runs the courier selector over a list of pending orders, one order at a
//! time, persisting each choice before moving on. A successful assignment
//! bumps the chosen courier's load in a run-local copy of the roster so the
//! same courier is not picked past capacity within one run. That copy is
//! dropped when the run ends; it is never written back anywhere.

use async_trait::async_trait;
use shared::delivery::{NoCourierReason, Selection, ZoneDirectory, select_for_order};
use shared::models::{Courier, Order};

use crate::error::ClientResult;

/// Where assignments are persisted
#[async_trait]
pub trait AssignmentBackend: Send + Sync {
    async fn assign(&self, order_id: &str, courier_id: &str) -> ClientResult<()>;
}

/// What happened to one order of a batch
#[derive(Debug, Clone, PartialEq)]
pub enum AssignmentOutcome {
    Assigned { courier_id: String },
    NoCourier { reason: NoCourierReason },
    Failed { error: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderOutcome {
    pub order_id: String,
    pub outcome: AssignmentOutcome,
}

/// Totals of a batch run plus the per-order detail
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub succeeded: usize,
    pub failed: usize,
    pub outcomes: Vec<OrderOutcome>,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    /// Orders that ended without a courier, for the warning list
    pub fn unassigned(&self) -> impl Iterator<Item = &OrderOutcome> {
        self.outcomes
            .iter()
            .filter(|o| !matches!(o.outcome, AssignmentOutcome::Assigned { .. }))
    }

    fn record(&mut self, order_id: &str, outcome: AssignmentOutcome) {
        if matches!(outcome, AssignmentOutcome::Assigned { .. }) {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
        self.outcomes.push(OrderOutcome {
            order_id: order_id.to_string(),
            outcome,
        });
    }
}

/// Sequential batch assigner
pub struct BatchAssigner<'z> {
    zones: &'z ZoneDirectory,
}

impl<'z> BatchAssigner<'z> {
    pub fn new(zones: &'z ZoneDirectory) -> Self {
        Self { zones }
    }

    /// Assign `orders` in the given order against a snapshot of `couriers`
    ///
    /// Per-order failures are recorded and the run continues.
    pub async fn run<B>(&self, backend: &B, orders: &[Order], couriers: &[Courier]) -> BatchReport
    where
        B: AssignmentBackend + ?Sized,
    {
        let mut roster = couriers.to_vec();
        let mut report = BatchReport::default();

        tracing::info!(
            orders = orders.len(),
            couriers = roster.len(),
            "Starting batch assignment"
        );

        for order in orders {
            let courier_id = match select_for_order(order, self.zones, &roster) {
                Selection::Selected(courier) => courier.id.clone(),
                Selection::NoEligibleCourier(reason) => {
                    tracing::warn!(order_id = %order.id, %reason, "No courier for order");
                    report.record(&order.id, AssignmentOutcome::NoCourier { reason });
                    continue;
                }
            };

            match backend.assign(&order.id, &courier_id).await {
                Ok(()) => {
                    if let Some(courier) = roster.iter_mut().find(|c| c.id == courier_id) {
                        courier.current_orders = courier.current_orders.saturating_add(1);
                    }
                    tracing::info!(order_id = %order.id, courier_id = %courier_id, "Order assigned");
                    report.record(&order.id, AssignmentOutcome::Assigned { courier_id });
                }
                Err(e) => {
                    tracing::warn!(order_id = %order.id, courier_id = %courier_id, "Assignment failed: {e}");
                    report.record(&order.id, AssignmentOutcome::Failed { error: e.user_message() });
                }
            }
        }

        tracing::info!(
            succeeded = report.succeeded,
            failed = report.failed,
            "Batch assignment finished"
        );
        report
    }
}
