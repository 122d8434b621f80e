//! Vendor Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Public vendor shop profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorProfile {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub shop_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    pub is_approved: bool,
    #[serde(default)]
    pub rating: Option<f64>,
}

/// `GET /admin/vendors` payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorList {
    pub vendors: Vec<VendorProfile>,
}

/// Update profile payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shop_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Analytics window for the vendor dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsPeriod {
    Week,
    #[default]
    Month,
    Year,
}

impl StatsPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenuePoint {
    /// Bucket label as produced by the backend (e.g. `2024-03`)
    pub label: String,
    pub revenue: Decimal,
}

/// Vendor dashboard analytics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorStats {
    pub total_revenue: Decimal,
    pub total_orders: u64,
    pub pending_orders: u64,
    pub total_products: u64,
    #[serde(default)]
    pub low_stock_products: u64,
    pub revenue: Vec<RevenuePoint>,
}
