//! Coupons API

use rust_decimal::Decimal;
use shared::models::{Coupon, CouponCreate, CouponList, CouponValidate, CouponValidation};
use shared::response::Envelope;

use super::{acknowledge, id_segment, unwrap_data};
use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;

pub struct Coupons<'a, H> {
    http: &'a H,
}

impl<'a, H: HttpClient> Coupons<'a, H> {
    pub fn new(http: &'a H) -> Self {
        Self { http }
    }

    /// Vendor: own coupons
    pub async fn list(&self) -> ClientResult<Vec<Coupon>> {
        const PATH: &str = "/vendor/coupons";
        let resp: Envelope<CouponList> = self.http.get(PATH).await?;
        Ok(unwrap_data(PATH, resp)?.coupons)
    }

    /// Vendor: create a coupon (codes are upper-cased like the backend stores them)
    pub async fn create(&self, coupon: &CouponCreate) -> ClientResult<Coupon> {
        const PATH: &str = "/vendor/coupons";
        let code = coupon.code.trim().to_uppercase();
        if code.is_empty() {
            return Err(ClientError::InvalidInput("coupon code must not be empty".into()));
        }
        let body = CouponCreate {
            code,
            ..coupon.clone()
        };
        let resp: Envelope<Coupon> = self.http.post(PATH, &body).await?;
        unwrap_data(PATH, resp)
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let path = format!("/vendor/coupons/{}", id_segment("coupon", id)?);
        acknowledge(self.http.delete(&path).await?)
    }

    /// Checkout: ask the backend what a code is worth for this total
    pub async fn validate(&self, code: &str, order_total: Decimal) -> ClientResult<CouponValidation> {
        const PATH: &str = "/coupons/validate";
        let body = CouponValidate {
            code: code.trim().to_uppercase(),
            order_total,
        };
        let resp: Envelope<CouponValidation> = self.http.post(PATH, &body).await?;
        unwrap_data(PATH, resp)
    }
}
