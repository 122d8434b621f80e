//! API Response types
//!
//! Every backend endpoint wraps its payload in the same envelope:
//! ```json
//! {
//!     "success": true,
//!     "message": "Commande créée",
//!     "data": { ... }
//! }
//! ```
//! Each endpoint has exactly one payload type `T`; decoding is strict so
//! that contract drift surfaces as an error instead of an empty list.

use serde::{Deserialize, Serialize};

/// Unified API response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Whether the backend accepted the request
    pub success: bool,
    /// Response data (absent on acknowledgements and rejections)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// Create a rejection
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// Current page number (1-based)
    pub page: u32,
    /// Items per page
    pub limit: u32,
    /// Total number of items
    pub total: u64,
    /// Total number of pages
    pub pages: u32,
}

impl Pagination {
    /// Create a new pagination
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let pages = if limit == 0 {
            0
        } else {
            total.div_ceil(u64::from(limit)) as u32
        };
        Self {
            page,
            limit,
            total,
            pages,
        }
    }

    /// Whether another page follows this one
    pub fn has_next(&self) -> bool {
        self.page < self.pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_data() {
        let env: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"success":true,"data":[1,2,3]}"#).unwrap();
        assert!(env.success);
        assert_eq!(env.data, Some(vec![1, 2, 3]));
        assert!(env.message.is_none());
    }

    #[test]
    fn test_envelope_rejection_without_data() {
        let env: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"success":false,"message":"Coupon expiré"}"#).unwrap();
        assert!(!env.success);
        assert!(env.data.is_none());
        assert_eq!(env.message.as_deref(), Some("Coupon expiré"));
    }

    #[test]
    fn test_envelope_requires_success_flag() {
        let result = serde_json::from_str::<Envelope<Vec<u32>>>(r#"{"data":[1]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_pagination_pages() {
        assert_eq!(Pagination::new(1, 20, 0).pages, 0);
        assert_eq!(Pagination::new(1, 20, 20).pages, 1);
        assert_eq!(Pagination::new(1, 20, 21).pages, 2);
        assert_eq!(Pagination::new(1, 0, 21).pages, 0);
        assert!(Pagination::new(1, 20, 21).has_next());
        assert!(!Pagination::new(2, 20, 21).has_next());
    }
}
