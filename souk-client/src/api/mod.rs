//! Backend resource services
//!
//! One thin, stateless service per backend resource. Each borrows an
//! [`HttpClient`](crate::http::HttpClient) and decodes every response through
//! [`unwrap_data`] or [`acknowledge`], so a contract mismatch is reported as
//! [`ClientError::Decode`] instead of being papered over.

pub mod admin;
pub mod auth;
pub mod cart;
pub mod coupons;
pub mod delivery;
pub mod orders;
pub mod products;
pub mod questions;
pub mod reclamations;
pub mod vendors;

pub use admin::Admin;
pub use auth::Auth;
pub use cart::CartApi;
pub use coupons::Coupons;
pub use delivery::Delivery;
pub use orders::Orders;
pub use products::Products;
pub use questions::Questions;
pub use reclamations::Reclamations;
pub use vendors::Vendors;

use serde::de::IgnoredAny;
use shared::response::Envelope;

use crate::error::{ClientError, ClientResult};

/// Extract the payload of a successful envelope
pub(crate) fn unwrap_data<T>(endpoint: &str, envelope: Envelope<T>) -> ClientResult<T> {
    if !envelope.success {
        return Err(rejected(envelope.message));
    }
    envelope.data.ok_or_else(|| ClientError::Decode {
        endpoint: endpoint.to_string(),
        message: "missing `data` in successful response".into(),
    })
}

/// Check an envelope whose payload (if any) is not needed
pub(crate) fn acknowledge(envelope: Envelope<IgnoredAny>) -> ClientResult<()> {
    if envelope.success {
        Ok(())
    } else {
        Err(rejected(envelope.message))
    }
}

fn rejected(message: Option<String>) -> ClientError {
    ClientError::Rejected(message.unwrap_or_else(|| "request rejected by the server".into()))
}

/// Validate an identifier before splicing it into a path
pub(crate) fn id_segment<'a>(kind: &str, id: &'a str) -> ClientResult<&'a str> {
    let id = id.trim();
    if id.is_empty() || id.contains(['/', '?', '#', '%']) || id.chars().any(char::is_whitespace) {
        return Err(ClientError::InvalidInput(format!("invalid {kind} id: {id:?}")));
    }
    Ok(id)
}
