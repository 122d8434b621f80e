//! Delivery Zone Model

use serde::{Deserialize, Serialize};

/// Delivery zone (a region code plus the city names it covers)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryZone {
    pub code: String,
    pub name: String,
    /// City-name substrings used to resolve a shipping city to this zone
    pub cities: Vec<String>,
}

impl DeliveryZone {
    pub fn new(code: impl Into<String>, name: impl Into<String>, cities: &[&str]) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            cities: cities.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// `GET /assignment/zones` payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneList {
    pub zones: Vec<DeliveryZone>,
}
