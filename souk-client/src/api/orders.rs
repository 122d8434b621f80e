//! Orders API (customer and vendor views)

use shared::models::{Order, OrderCreate, OrderList, OrderStatus, OrderStatusUpdate};
use shared::response::Envelope;

use super::{id_segment, unwrap_data};
use crate::error::ClientResult;
use crate::http::HttpClient;

pub struct Orders<'a, H> {
    http: &'a H,
}

impl<'a, H: HttpClient> Orders<'a, H> {
    pub fn new(http: &'a H) -> Self {
        Self { http }
    }

    /// Checkout: turn the current cart into an order
    pub async fn create(&self, order: &OrderCreate) -> ClientResult<Order> {
        const PATH: &str = "/orders";
        let resp: Envelope<Order> = self.http.post(PATH, order).await?;
        let order = unwrap_data(PATH, resp)?;
        tracing::info!(order_id = %order.id, total = %order.total_amount, "Order placed");
        Ok(order)
    }

    /// Orders of the logged-in customer
    pub async fn mine(&self) -> ClientResult<Vec<Order>> {
        const PATH: &str = "/orders/my-orders";
        let resp: Envelope<OrderList> = self.http.get(PATH).await?;
        Ok(unwrap_data(PATH, resp)?.orders)
    }

    pub async fn get(&self, id: &str) -> ClientResult<Order> {
        let path = format!("/orders/{}", id_segment("order", id)?);
        let resp: Envelope<Order> = self.http.get(&path).await?;
        unwrap_data(&path, resp)
    }

    pub async fn cancel(&self, id: &str) -> ClientResult<Order> {
        let path = format!("/orders/{}/cancel", id_segment("order", id)?);
        let resp: Envelope<Order> = self.http.put_empty(&path).await?;
        unwrap_data(&path, resp)
    }

    /// Vendor: orders containing the vendor's products
    pub async fn vendor_orders(&self, status: Option<OrderStatus>) -> ClientResult<Vec<Order>> {
        const PATH: &str = "/vendor/orders";
        let query: Vec<(&str, String)> = status
            .map(|s| ("status", s.as_str().to_string()))
            .into_iter()
            .collect();
        let resp: Envelope<OrderList> = self.http.get_with_query(PATH, &query).await?;
        Ok(unwrap_data(PATH, resp)?.orders)
    }

    /// Vendor: move an order forward (the backend validates the transition)
    pub async fn update_status(&self, id: &str, status: OrderStatus) -> ClientResult<Order> {
        let path = format!("/vendor/orders/{}/status", id_segment("order", id)?);
        let resp: Envelope<Order> = self.http.put(&path, &OrderStatusUpdate { status }).await?;
        unwrap_data(&path, resp)
    }
}
