//! Vendor shop and analytics API

use shared::models::{StatsPeriod, VendorProfile, VendorProfileUpdate, VendorStats};
use shared::response::Envelope;

use super::{id_segment, unwrap_data};
use crate::error::ClientResult;
use crate::http::HttpClient;

pub struct Vendors<'a, H> {
    http: &'a H,
}

impl<'a, H: HttpClient> Vendors<'a, H> {
    pub fn new(http: &'a H) -> Self {
        Self { http }
    }

    /// Public shop page
    pub async fn profile(&self, id: &str) -> ClientResult<VendorProfile> {
        let path = format!("/vendors/{}", id_segment("vendor", id)?);
        let resp: Envelope<VendorProfile> = self.http.get(&path).await?;
        unwrap_data(&path, resp)
    }

    /// Dashboard analytics of the logged-in vendor
    pub async fn stats(&self, period: StatsPeriod) -> ClientResult<VendorStats> {
        const PATH: &str = "/vendor/stats";
        let query = [("period", period.as_str().to_string())];
        let resp: Envelope<VendorStats> = self.http.get_with_query(PATH, &query).await?;
        unwrap_data(PATH, resp)
    }

    pub async fn update_profile(&self, update: &VendorProfileUpdate) -> ClientResult<VendorProfile> {
        const PATH: &str = "/vendor/profile";
        let resp: Envelope<VendorProfile> = self.http.put(PATH, update).await?;
        unwrap_data(PATH, resp)
    }
}
