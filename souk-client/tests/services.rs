//! Resource services against a recording fake backend

mod support;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use shared::delivery::{NoCourierReason, ZoneDirectory};
use shared::models::{
    CouponValidate, Courier, DeliveryZone, Order, OrderStatus, ProductQuery, ProductSort,
};
use souk_client::{
    AssignmentDecision, AssignmentOutcome, BatchAssigner, ClientConfig, ClientError, SoukClient,
};
use tempfile::TempDir;

use support::{courier, ok, order, spawn, user};

/// Requests seen by the fake backend
#[derive(Clone, Default)]
struct Recorder {
    calls: Arc<Mutex<Vec<(String, Value)>>>,
}

impl Recorder {
    fn push(&self, what: impl Into<String>, body: Value) {
        self.calls.lock().unwrap().push((what.into(), body));
    }

    fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }
}

fn client(base_url: &str) -> SoukClient {
    SoukClient::new(&ClientConfig::new(base_url).with_token("tok")).unwrap()
}

fn tunis() -> ZoneDirectory {
    ZoneDirectory::new(vec![
        DeliveryZone::new("TUN", "Grand Tunis", &["Tunis", "Ariana", "Ben Arous"]),
        DeliveryZone::new("SFX", "Sfax", &["Sfax"]),
    ])
}

/// Couriers filtered by `?zone=` like the backend does
async fn list_couriers(
    State(rec): State<Recorder>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let zone = params.get("zone").cloned();
    rec.push(format!("couriers zone={}", zone.as_deref().unwrap_or("*")), Value::Null);
    let all = vec![
        courier("A", 2, 5, 4.9, &["TUN"]),
        courier("B", 1, 5, 4.0, &["TUN"]),
        courier("C", 0, 5, 5.0, &["SFX"]),
    ];
    let livreurs: Vec<Value> = all
        .into_iter()
        .filter(|c| match &zone {
            Some(z) => c["zones"].as_array().unwrap().iter().any(|v| v == z.as_str()),
            None => true,
        })
        .collect();
    Json(ok(json!({ "livreurs": livreurs })))
}

async fn assign_order(
    State(rec): State<Recorder>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Json<Value> {
    rec.push(format!("assign {id}"), body.clone());
    let mut updated = order(&id, "Ariana", Some("TUN"));
    updated["livreur"] = body["livreurId"].clone();
    Json(ok(updated))
}

#[tokio::test]
async fn test_couriers_forward_the_zone_filter() {
    let rec = Recorder::default();
    let router = Router::new()
        .route("/assignment/livreurs", get(list_couriers))
        .with_state(rec.clone());
    let base = spawn(router).await;

    let couriers = client(&base).delivery().couriers(Some("TUN")).await.unwrap();
    let ids: Vec<&str> = couriers.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B"]);
    assert_eq!(rec.calls()[0].0, "couriers zone=TUN");
}

#[tokio::test]
async fn test_select_and_assign_picks_least_loaded_courier() {
    let rec = Recorder::default();
    let router = Router::new()
        .route("/assignment/livreurs", get(list_couriers))
        .route("/assignment/orders/{id}/assign", put(assign_order))
        .with_state(rec.clone());
    let base = spawn(router).await;

    let order: Order = serde_json::from_value(order("o1", "Ariana Ville", None)).unwrap();
    let decision = client(&base)
        .delivery()
        .select_and_assign(&order, &tunis())
        .await
        .unwrap();

    match decision {
        AssignmentDecision::Assigned { courier_id, order } => {
            assert_eq!(courier_id, "B");
            assert_eq!(order.livreur.as_deref(), Some("B"));
        }
        other => panic!("expected an assignment, got {other:?}"),
    }

    let calls = rec.calls();
    assert_eq!(calls[0].0, "couriers zone=TUN");
    assert_eq!(calls[1], ("assign o1".to_string(), json!({ "livreurId": "B" })));
}

#[tokio::test]
async fn test_unresolved_zone_makes_no_request() {
    let rec = Recorder::default();
    let router = Router::new()
        .route("/assignment/livreurs", get(list_couriers))
        .route("/assignment/orders/{id}/assign", put(assign_order))
        .with_state(rec.clone());
    let base = spawn(router).await;

    let order: Order = serde_json::from_value(order("o9", "Lyon", None)).unwrap();
    let decision = client(&base)
        .delivery()
        .select_and_assign(&order, &tunis())
        .await
        .unwrap();

    assert!(matches!(
        decision,
        AssignmentDecision::NoEligibleCourier(NoCourierReason::UnresolvedZone)
    ));
    assert!(rec.calls().is_empty());
}

#[tokio::test]
async fn test_assign_all_pending_fetches_zones_and_tracks_load() {
    let rec = Recorder::default();
    let router = Router::new()
        .route(
            "/assignment/zones",
            get(|| async {
                Json(ok(json!({
                    "zones": [{ "code": "TUN", "name": "Grand Tunis", "cities": ["tunis", "ariana"] }]
                })))
            }),
        )
        .route(
            "/assignment/orders/pending",
            get(|| async {
                Json(ok(json!({
                    "orders": [
                        order("o1", "Tunis", None),
                        order("o2", "Ariana", None),
                        order("o3", "Gabès", None),
                        order("o4", "", Some("TUN")),
                    ]
                })))
            }),
        )
        .route(
            "/assignment/livreurs",
            get(|| async {
                Json(ok(json!({
                    "livreurs": [
                        courier("A", 0, 1, 4.0, &["TUN"]),
                        courier("B", 0, 2, 3.0, &["TUN"]),
                    ]
                })))
            }),
        )
        .route("/assignment/orders/{id}/assign", put(assign_order))
        .with_state(rec.clone());
    let base = spawn(router).await;

    let report = client(&base)
        .delivery()
        .assign_all_pending(&ZoneDirectory::default())
        .await
        .unwrap();

    assert_eq!(report.succeeded, 3);
    assert_eq!(report.failed, 1);
    let assigned: Vec<(String, Value)> = rec.calls();
    assert_eq!(
        assigned,
        vec![
            ("assign o1".to_string(), json!({ "livreurId": "A" })),
            ("assign o2".to_string(), json!({ "livreurId": "B" })),
            ("assign o4".to_string(), json!({ "livreurId": "B" })),
        ]
    );
    let unassigned: Vec<&str> = report.unassigned().map(|o| o.order_id.as_str()).collect();
    assert_eq!(unassigned, vec!["o3"]);
    assert_eq!(
        report.outcomes[2].outcome,
        AssignmentOutcome::NoCourier {
            reason: NoCourierReason::UnresolvedZone
        }
    );
}

#[tokio::test]
async fn test_admin_assignment_uses_admin_route() {
    let rec = Recorder::default();
    let router = Router::new()
        .route(
            "/admin/orders/{id}/assign-livreur",
            put(|State(rec): State<Recorder>, Path(id): Path<String>, Json(body): Json<Value>| async move {
                rec.push(format!("admin-assign {id}"), body);
                Json(ok(order(&id, "Sfax", Some("SFX"))))
            }),
        )
        .with_state(rec.clone());
    let base = spawn(router).await;

    let order = client(&base).admin().assign_courier("o7", "C").await.unwrap();
    assert_eq!(order.id, "o7");
    assert_eq!(order.status, OrderStatus::Confirmed);
    assert_eq!(rec.calls(), vec![("admin-assign o7".to_string(), json!({ "livreurId": "C" }))]);
}

#[tokio::test]
async fn test_product_listing_sends_query() {
    let rec = Recorder::default();
    let router = Router::new()
        .route(
            "/products",
            get(|State(rec): State<Recorder>, Query(params): Query<HashMap<String, String>>| async move {
                rec.push("products", json!(params));
                Json(ok(json!({
                    "products": [{ "_id": "p1", "name": "Tapis berbère", "price": 249.9, "stock": 3 }],
                    "pagination": { "page": 2, "limit": 12, "total": 13, "pages": 2 },
                })))
            }),
        )
        .with_state(rec.clone());
    let base = spawn(router).await;

    let query = ProductQuery::default()
        .page(2, 12)
        .search("tapis")
        .sort(ProductSort::PriceAsc);
    let page = client(&base).products().list(&query).await.unwrap();

    assert_eq!(page.products.len(), 1);
    assert!(page.products[0].in_stock());
    assert!(!page.pagination.has_next());
    assert_eq!(
        rec.calls()[0].1,
        json!({ "page": "2", "limit": "12", "search": "tapis", "sort": "price_asc" })
    );
}

#[tokio::test]
async fn test_coupon_code_is_normalized() {
    let rec = Recorder::default();
    let router = Router::new()
        .route(
            "/coupons/validate",
            post(|State(rec): State<Recorder>, Json(body): Json<Value>| async move {
                rec.push("validate", body);
                Json(ok(json!({ "valid": true, "discount": 15, "finalTotal": 135 })))
            }),
        )
        .with_state(rec.clone());
    let base = spawn(router).await;

    let result = client(&base)
        .coupons()
        .validate("  ramadan10 ", Decimal::new(150, 0))
        .await
        .unwrap();
    assert!(result.valid);
    assert_eq!(result.final_total, Decimal::new(135, 0));

    let sent: CouponValidate = serde_json::from_value(rec.calls()[0].1.clone()).unwrap();
    assert_eq!(sent.code, "RAMADAN10");
    assert_eq!(sent.order_total, Decimal::new(150, 0));
}

#[tokio::test]
async fn test_invalid_input_is_rejected_before_sending() {
    // Nothing listens here; any request would fail with a network error
    let client = client("http://127.0.0.1:9");

    let err = client.cart().add_item("p1", 0).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidInput(_)));

    let err = client.orders().get("../admin").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidInput(_)));

    let err = client.questions().ask("p1", "   ").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidInput(_)));
}

#[tokio::test]
async fn test_login_persists_and_logout_clears_the_session() {
    let temp_dir = TempDir::new().unwrap();
    let session_file = temp_dir.path().join("session.json");

    let router = Router::new()
        .route(
            "/auth/login",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["email"], "amira@souk.tn");
                Json(ok(json!({ "token": "jwt-1", "user": user("vendor") })))
            }),
        )
        .route(
            "/auth/logout",
            post(|| async { Json(json!({ "success": true, "message": "Déconnecté" })) }),
        );
    let base = spawn(router).await;
    let config = ClientConfig::new(&base).with_session_file(&session_file);

    let client = SoukClient::new(&config).unwrap();
    let user = client.auth().login(" amira@souk.tn ", "secret").await.unwrap();
    assert_eq!(user.name, "Amira");
    assert!(session_file.exists());

    // A fresh client picks the saved session up
    let restored = SoukClient::new(&config).unwrap();
    assert_eq!(restored.session().token().as_deref(), Some("jwt-1"));

    restored.auth().logout().await.unwrap();
    assert!(!restored.session().is_authenticated());
    assert!(!session_file.exists());
}

#[tokio::test]
async fn test_batch_can_persist_through_admin_route() {
    let rec = Recorder::default();
    let router = Router::new()
        .route(
            "/admin/orders/{id}/assign-livreur",
            put(|State(rec): State<Recorder>, Path(id): Path<String>, Json(body): Json<Value>| async move {
                rec.push(format!("admin-assign {id}"), body);
                Json(ok(order(&id, "Tunis", Some("TUN"))))
            }),
        )
        .with_state(rec.clone());
    let base = spawn(router).await;

    let orders: Vec<Order> = vec![
        serde_json::from_value(order("o1", "Tunis", None)).unwrap(),
        serde_json::from_value(order("o2", "Sfax", None)).unwrap(),
    ];
    let couriers: Vec<Courier> = vec![
        serde_json::from_value(courier("A", 0, 3, 4.2, &["TUN"])).unwrap(),
        serde_json::from_value(courier("C", 1, 3, 4.8, &["SFX"])).unwrap(),
    ];

    let client = client(&base);
    let zones = tunis();
    let report = BatchAssigner::new(&zones)
        .run(&client.admin(), &orders, &couriers)
        .await;

    assert_eq!(report.succeeded, 2);
    assert_eq!(
        rec.calls(),
        vec![
            ("admin-assign o1".to_string(), json!({ "livreurId": "A" })),
            ("admin-assign o2".to_string(), json!({ "livreurId": "C" })),
        ]
    );
}

#[tokio::test]
async fn test_preset_token_stays_off_disk_after_me() {
    let temp_dir = TempDir::new().unwrap();
    let session_file = temp_dir.path().join("session.json");

    let router = Router::new().route(
        "/auth/me",
        get(|| async { Json(ok(json!({ "user": user("admin") }))) }),
    );
    let base = spawn(router).await;
    let config = ClientConfig::new(&base)
        .with_token("preissued-secret")
        .with_session_file(&session_file);

    let client = SoukClient::new(&config).unwrap();
    let me = client.auth().me().await.unwrap();
    assert_eq!(me.id, "u1");
    assert_eq!(client.session().user().map(|u| u.id), Some("u1".to_string()));

    let on_disk = std::fs::read_to_string(&session_file).unwrap_or_default();
    assert!(!on_disk.contains("preissued-secret"));

    // A later run without the token starts logged out
    let later = SoukClient::new(&ClientConfig::new(&base).with_session_file(&session_file)).unwrap();
    assert!(!later.session().is_authenticated());
}
