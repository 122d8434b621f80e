//! Shopping cart API

use shared::models::{Cart, CartItemAdd, CartItemUpdate};
use shared::response::Envelope;

use super::{acknowledge, id_segment, unwrap_data};
use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;

pub struct CartApi<'a, H> {
    http: &'a H,
}

impl<'a, H: HttpClient> CartApi<'a, H> {
    pub fn new(http: &'a H) -> Self {
        Self { http }
    }

    pub async fn get(&self) -> ClientResult<Cart> {
        const PATH: &str = "/cart";
        let resp: Envelope<Cart> = self.http.get(PATH).await?;
        unwrap_data(PATH, resp)
    }

    pub async fn add_item(&self, product_id: &str, quantity: u32) -> ClientResult<Cart> {
        const PATH: &str = "/cart/items";
        if quantity == 0 {
            return Err(ClientError::InvalidInput("quantity must be at least 1".into()));
        }
        let body = CartItemAdd {
            product_id: id_segment("product", product_id)?.to_string(),
            quantity,
        };
        let resp: Envelope<Cart> = self.http.post(PATH, &body).await?;
        unwrap_data(PATH, resp)
    }

    /// Set a line's quantity; `0` removes the line
    pub async fn update_item(&self, product_id: &str, quantity: u32) -> ClientResult<Cart> {
        if quantity == 0 {
            return self.remove_item(product_id).await;
        }
        let path = format!("/cart/items/{}", id_segment("product", product_id)?);
        let resp: Envelope<Cart> = self.http.put(&path, &CartItemUpdate { quantity }).await?;
        unwrap_data(&path, resp)
    }

    pub async fn remove_item(&self, product_id: &str) -> ClientResult<Cart> {
        let path = format!("/cart/items/{}", id_segment("product", product_id)?);
        let resp: Envelope<Cart> = self.http.delete(&path).await?;
        unwrap_data(&path, resp)
    }

    pub async fn clear(&self) -> ClientResult<()> {
        acknowledge(self.http.delete("/cart").await?)
    }
}
