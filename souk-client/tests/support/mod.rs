//! Local fake backend for integration tests

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::Router;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Route client logs to the test output; `RUST_LOG=souk_client=debug` shows request traces
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Serve `router` on an ephemeral port and return its base URL
pub async fn spawn(router: Router) -> String {
    init_tracing();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// An address nothing is listening on
pub async fn dead_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

pub fn ok(data: Value) -> Value {
    json!({ "success": true, "data": data })
}

pub fn courier(id: &str, current: u32, max: u32, rating: f64, zones: &[&str]) -> Value {
    json!({
        "_id": id,
        "name": format!("Livreur {id}"),
        "currentOrders": current,
        "maxOrders": max,
        "rating": rating,
        "zones": zones,
        "isAvailable": true,
    })
}

pub fn order(id: &str, city: &str, zone: Option<&str>) -> Value {
    json!({
        "_id": id,
        "totalAmount": 120.5,
        "status": "confirmed",
        "paymentMethod": "cash_on_delivery",
        "shippingAddress": { "street": "12 Rue de Marseille", "city": city },
        "zone": zone,
    })
}

pub fn user(role: &str) -> Value {
    json!({ "_id": "u1", "name": "Amira", "email": "amira@souk.tn", "role": role })
}
