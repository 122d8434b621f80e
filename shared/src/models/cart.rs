//! Cart Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cart line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product reference (String ID)
    pub product: String,
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// Cart of the logged-in customer; `total` is computed by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub total: Decimal,
}

impl Cart {
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Add-to-cart payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemAdd {
    pub product_id: String,
    pub quantity: u32,
}

/// Quantity change payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItemUpdate {
    pub quantity: u32,
}
