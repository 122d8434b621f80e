//! Courier (livreur) Model

use serde::{Deserialize, Serialize};

/// Delivery courier as returned by the assignment endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Courier {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Orders currently assigned and not yet delivered
    pub current_orders: u32,
    /// Capacity; a courier at capacity is never selected
    pub max_orders: u32,
    /// Average rating, 0 to 5
    pub rating: f64,
    /// Serviced zone codes
    pub zones: Vec<String>,
    pub is_available: bool,
}

impl Courier {
    /// Whether the courier has room for one more order
    pub fn has_capacity(&self) -> bool {
        self.current_orders < self.max_orders
    }

    /// Whether the courier serves the given zone code
    pub fn serves(&self, zone: &str) -> bool {
        self.zones.iter().any(|z| z == zone)
    }
}

/// `GET /assignment/livreurs` payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourierList {
    pub livreurs: Vec<Courier>,
}

/// Body of the assignment endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignCourier {
    pub livreur_id: String,
}

/// `POST /assignment/orders/{id}/auto-assign` payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoAssignment {
    pub order_id: String,
    pub livreur_id: String,
    #[serde(default)]
    pub livreur_name: Option<String>,
}
