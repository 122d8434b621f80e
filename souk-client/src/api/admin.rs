//! Admin dashboard API

use async_trait::async_trait;
use shared::models::{
    AssignCourier, Order, OrderList, OrderStatus, OrderStatusUpdate, VendorList, VendorProfile,
};
use shared::response::Envelope;

use super::{id_segment, unwrap_data};
use crate::dispatch::AssignmentBackend;
use crate::error::ClientResult;
use crate::http::HttpClient;

pub struct Admin<'a, H> {
    http: &'a H,
}

impl<'a, H: HttpClient> Admin<'a, H> {
    pub fn new(http: &'a H) -> Self {
        Self { http }
    }

    /// All orders, optionally filtered by status
    pub async fn orders(&self, status: Option<OrderStatus>) -> ClientResult<Vec<Order>> {
        const PATH: &str = "/admin/orders";
        let query: Vec<(&str, String)> = status
            .map(|s| ("status", s.as_str().to_string()))
            .into_iter()
            .collect();
        let resp: Envelope<OrderList> = self.http.get_with_query(PATH, &query).await?;
        Ok(unwrap_data(PATH, resp)?.orders)
    }

    /// Admin-initiated courier assignment
    pub async fn assign_courier(&self, order_id: &str, courier_id: &str) -> ClientResult<Order> {
        let path = format!("/admin/orders/{}/assign-livreur", id_segment("order", order_id)?);
        let body = AssignCourier {
            livreur_id: id_segment("courier", courier_id)?.to_string(),
        };
        let resp: Envelope<Order> = self.http.put(&path, &body).await?;
        let order = unwrap_data(&path, resp)?;
        tracing::info!(order_id, courier_id, "Courier assigned by admin");
        Ok(order)
    }

    pub async fn update_order_status(&self, order_id: &str, status: OrderStatus) -> ClientResult<Order> {
        let path = format!("/admin/orders/{}/status", id_segment("order", order_id)?);
        let resp: Envelope<Order> = self.http.put(&path, &OrderStatusUpdate { status }).await?;
        unwrap_data(&path, resp)
    }

    pub async fn vendors(&self) -> ClientResult<Vec<VendorProfile>> {
        const PATH: &str = "/admin/vendors";
        let resp: Envelope<VendorList> = self.http.get(PATH).await?;
        Ok(unwrap_data(PATH, resp)?.vendors)
    }

    pub async fn approve_vendor(&self, vendor_id: &str) -> ClientResult<VendorProfile> {
        let path = format!("/admin/vendors/{}/approve", id_segment("vendor", vendor_id)?);
        let resp: Envelope<VendorProfile> = self.http.put_empty(&path).await?;
        unwrap_data(&path, resp)
    }
}

/// Batches can persist through the admin endpoint as well
#[async_trait]
impl<H: HttpClient> AssignmentBackend for Admin<'_, H> {
    async fn assign(&self, order_id: &str, courier_id: &str) -> ClientResult<()> {
        self.assign_courier(order_id, courier_id).await.map(|_| ())
    }
}
