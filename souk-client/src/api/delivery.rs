//! Delivery assignment API
//!
//! Server-side endpoints plus the client-side selection path: pick a
//! courier with [`shared::delivery`] and persist it through `assign`.

use async_trait::async_trait;
use shared::delivery::{NoCourierReason, Selection, ZoneDirectory, select_courier};
use shared::models::{
    AssignCourier, AutoAssignment, Courier, CourierList, DeliveryZone, Order, OrderList, ZoneList,
};
use shared::response::Envelope;

use super::{id_segment, unwrap_data};
use crate::dispatch::{AssignmentBackend, BatchAssigner, BatchReport};
use crate::error::ClientResult;
use crate::http::HttpClient;

/// Result of a single client-side assignment
#[derive(Debug, Clone)]
pub enum AssignmentDecision {
    /// Selected and persisted; `order` is the backend's updated copy
    Assigned { courier_id: String, order: Order },
    /// Nothing persisted; surface as a warning
    NoEligibleCourier(NoCourierReason),
}

pub struct Delivery<'a, H> {
    http: &'a H,
}

impl<'a, H: HttpClient> Delivery<'a, H> {
    pub fn new(http: &'a H) -> Self {
        Self { http }
    }

    /// Courier roster, optionally restricted to one zone by the backend
    pub async fn couriers(&self, zone: Option<&str>) -> ClientResult<Vec<Courier>> {
        const PATH: &str = "/assignment/livreurs";
        let query: Vec<(&str, String)> = zone.map(|z| ("zone", z.to_string())).into_iter().collect();
        let resp: Envelope<CourierList> = self.http.get_with_query(PATH, &query).await?;
        Ok(unwrap_data(PATH, resp)?.livreurs)
    }

    /// Orders waiting for a courier, in backend order
    pub async fn pending_orders(&self) -> ClientResult<Vec<Order>> {
        const PATH: &str = "/assignment/orders/pending";
        let resp: Envelope<OrderList> = self.http.get(PATH).await?;
        Ok(unwrap_data(PATH, resp)?.orders)
    }

    pub async fn zones(&self) -> ClientResult<Vec<DeliveryZone>> {
        const PATH: &str = "/assignment/zones";
        let resp: Envelope<ZoneList> = self.http.get(PATH).await?;
        Ok(unwrap_data(PATH, resp)?.zones)
    }

    pub async fn zone_directory(&self) -> ClientResult<ZoneDirectory> {
        Ok(ZoneDirectory::new(self.zones().await?))
    }

    /// Persist an assignment
    pub async fn assign(&self, order_id: &str, courier_id: &str) -> ClientResult<Order> {
        let path = format!("/assignment/orders/{}/assign", id_segment("order", order_id)?);
        let body = AssignCourier {
            livreur_id: id_segment("courier", courier_id)?.to_string(),
        };
        let resp: Envelope<Order> = self.http.put(&path, &body).await?;
        unwrap_data(&path, resp)
    }

    /// Let the backend pick and persist a courier
    pub async fn auto_assign(&self, order_id: &str) -> ClientResult<AutoAssignment> {
        let path = format!("/assignment/orders/{}/auto-assign", id_segment("order", order_id)?);
        let resp: Envelope<AutoAssignment> = self.http.post_empty(&path).await?;
        let assignment = unwrap_data(&path, resp)?;
        tracing::info!(
            order_id = %assignment.order_id,
            courier_id = %assignment.livreur_id,
            "Order auto-assigned by server"
        );
        Ok(assignment)
    }

    /// Pick a courier client-side and persist the choice
    ///
    /// Couriers are fetched fresh for the resolved zone. An unresolved zone
    /// returns without any request.
    pub async fn select_and_assign(
        &self,
        order: &Order,
        zones: &ZoneDirectory,
    ) -> ClientResult<AssignmentDecision> {
        let Some(zone) = zones.resolve_order(order).code() else {
            tracing::warn!(order_id = %order.id, city = %order.shipping_address.city, "Unresolved delivery zone");
            return Ok(AssignmentDecision::NoEligibleCourier(NoCourierReason::UnresolvedZone));
        };

        let couriers = self.couriers(Some(zone)).await?;
        let courier_id = match select_courier(Some(zone), &couriers) {
            Selection::Selected(courier) => courier.id.clone(),
            Selection::NoEligibleCourier(reason) => {
                tracing::warn!(order_id = %order.id, zone, %reason, "No courier for order");
                return Ok(AssignmentDecision::NoEligibleCourier(reason));
            }
        };

        let updated = self.assign(&order.id, &courier_id).await?;
        tracing::info!(order_id = %order.id, courier_id = %courier_id, zone, "Order assigned");
        Ok(AssignmentDecision::Assigned {
            courier_id,
            order: updated,
        })
    }

    /// Fetch pending orders and the full roster, then run a batch
    ///
    /// An empty `zones` directory is replaced by the backend's zone list.
    pub async fn assign_all_pending(&self, zones: &ZoneDirectory) -> ClientResult<BatchReport> {
        let fetched;
        let zones = if zones.is_empty() {
            fetched = self.zone_directory().await?;
            &fetched
        } else {
            zones
        };

        let orders = self.pending_orders().await?;
        if orders.is_empty() {
            tracing::info!("No pending orders to assign");
            return Ok(BatchReport::default());
        }
        let couriers = self.couriers(None).await?;

        Ok(BatchAssigner::new(zones).run(self, &orders, &couriers).await)
    }
}

#[async_trait]
impl<H: HttpClient> AssignmentBackend for Delivery<'_, H> {
    async fn assign(&self, order_id: &str, courier_id: &str) -> ClientResult<()> {
        Delivery::assign(self, order_id, courier_id).await.map(|_| ())
    }
}
