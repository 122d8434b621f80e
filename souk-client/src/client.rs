//! Marketplace client facade

use crate::api::{
    Admin, Auth, CartApi, Coupons, Delivery, Orders, Products, Questions, Reclamations, Vendors,
};
use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::http::{HttpClient, NetworkHttpClient};
use crate::session::Session;

/// Entry point for every backend service
///
/// Cheap to clone; clones share the connection pool and the session.
#[derive(Debug, Clone)]
pub struct SoukClient {
    http: NetworkHttpClient,
}

impl SoukClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = NetworkHttpClient::new(config)?;
        tracing::debug!(base_url = %http.base_url(), "Marketplace client ready");
        Ok(Self { http })
    }

    /// Build from `SOUK_*` environment variables
    pub fn from_env() -> ClientResult<Self> {
        Self::new(&ClientConfig::from_env())
    }

    pub fn http(&self) -> &NetworkHttpClient {
        &self.http
    }

    pub fn session(&self) -> &Session {
        self.http.session()
    }

    pub fn auth(&self) -> Auth<'_, NetworkHttpClient> {
        Auth::new(&self.http)
    }

    pub fn products(&self) -> Products<'_, NetworkHttpClient> {
        Products::new(&self.http)
    }

    pub fn cart(&self) -> CartApi<'_, NetworkHttpClient> {
        CartApi::new(&self.http)
    }

    pub fn orders(&self) -> Orders<'_, NetworkHttpClient> {
        Orders::new(&self.http)
    }

    pub fn vendors(&self) -> Vendors<'_, NetworkHttpClient> {
        Vendors::new(&self.http)
    }

    pub fn coupons(&self) -> Coupons<'_, NetworkHttpClient> {
        Coupons::new(&self.http)
    }

    pub fn delivery(&self) -> Delivery<'_, NetworkHttpClient> {
        Delivery::new(&self.http)
    }

    pub fn reclamations(&self) -> Reclamations<'_, NetworkHttpClient> {
        Reclamations::new(&self.http)
    }

    pub fn questions(&self) -> Questions<'_, NetworkHttpClient> {
        Questions::new(&self.http)
    }

    pub fn admin(&self) -> Admin<'_, NetworkHttpClient> {
        Admin::new(&self.http)
    }
}
