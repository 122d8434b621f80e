//! Product catalog API

use shared::models::{Product, ProductCreate, ProductPage, ProductQuery, ProductUpdate};
use shared::response::Envelope;

use super::{acknowledge, id_segment, unwrap_data};
use crate::error::ClientResult;
use crate::http::HttpClient;

pub struct Products<'a, H> {
    http: &'a H,
}

impl<'a, H: HttpClient> Products<'a, H> {
    pub fn new(http: &'a H) -> Self {
        Self { http }
    }

    /// Browse the catalog
    pub async fn list(&self, query: &ProductQuery) -> ClientResult<ProductPage> {
        const PATH: &str = "/products";
        let resp: Envelope<ProductPage> = self.http.get_with_query(PATH, &query.to_pairs()).await?;
        unwrap_data(PATH, resp)
    }

    pub async fn get(&self, id: &str) -> ClientResult<Product> {
        let path = format!("/products/{}", id_segment("product", id)?);
        let resp: Envelope<Product> = self.http.get(&path).await?;
        unwrap_data(&path, resp)
    }

    /// Vendor: publish a product
    pub async fn create(&self, product: &ProductCreate) -> ClientResult<Product> {
        const PATH: &str = "/vendor/products";
        let resp: Envelope<Product> = self.http.post(PATH, product).await?;
        let product = unwrap_data(PATH, resp)?;
        tracing::info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    /// Vendor: edit a product
    pub async fn update(&self, id: &str, update: &ProductUpdate) -> ClientResult<Product> {
        let path = format!("/vendor/products/{}", id_segment("product", id)?);
        let resp: Envelope<Product> = self.http.put(&path, update).await?;
        unwrap_data(&path, resp)
    }

    /// Vendor: remove a product
    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let path = format!("/vendor/products/{}", id_segment("product", id)?);
        acknowledge(self.http.delete(&path).await?)?;
        tracing::info!(product_id = %id, "Product deleted");
        Ok(())
    }
}
