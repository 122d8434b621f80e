//! Transport behavior of the network client against a local fake backend

mod support;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use axum::http::{HeaderMap, StatusCode, header};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use souk_client::{ClientConfig, ClientError, HttpClient, SoukClient};

use support::{dead_addr, ok, spawn, user};

fn client(base_url: &str) -> SoukClient {
    SoukClient::new(&ClientConfig::new(base_url).with_retry(1, Duration::from_millis(10))).unwrap()
}

fn echo_headers() -> Router {
    Router::new().route(
        "/echo",
        get(|headers: HeaderMap| async move {
            let read = |name: &str| headers.get(name).and_then(|v| v.to_str().ok()).map(String::from);
            Json(json!({
                "authorization": read(header::AUTHORIZATION.as_str()),
                "requestId": read("x-request-id"),
            }))
        }),
    )
}

#[tokio::test]
async fn test_bearer_token_and_request_id_are_sent() {
    let base = spawn(echo_headers()).await;
    let config = ClientConfig::new(&base).with_token("tok-123");
    let client = SoukClient::new(&config).unwrap();

    let echoed: Value = client.http().get("/echo").await.unwrap();
    assert_eq!(echoed["authorization"], "Bearer tok-123");
    let request_id = echoed["requestId"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(request_id).is_ok());
}

#[tokio::test]
async fn test_anonymous_request_has_no_authorization() {
    let base = spawn(echo_headers()).await;
    let echoed: Value = client(&base).http().get("echo").await.unwrap();
    assert!(echoed["authorization"].is_null());
}

#[tokio::test]
async fn test_shape_mismatch_is_a_decode_error() {
    let router = Router::new().route(
        "/assignment/livreurs",
        get(|| async { Json(ok(json!({ "couriers": [] }))) }),
    );
    let base = spawn(router).await;

    let err = client(&base).delivery().couriers(None).await.unwrap_err();
    match err {
        ClientError::Decode { endpoint, .. } => assert_eq!(endpoint, "/assignment/livreurs"),
        other => panic!("expected decode error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_success_false_is_rejected() {
    let router = Router::new().route(
        "/cart",
        get(|| async { Json(json!({ "success": false, "message": "Panier verrouillé" })) }),
    );
    let base = spawn(router).await;

    let err = client(&base).cart().get().await.unwrap_err();
    assert!(matches!(&err, ClientError::Rejected(m) if m == "Panier verrouillé"));
    assert_eq!(err.status(), 200);
}

#[tokio::test]
async fn test_error_statuses_are_classified() {
    let router = Router::new()
        .route(
            "/bad",
            get(|| async {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "message": "Validation failed",
                        "errors": [{ "field": "email", "message": "Email invalide" }],
                    })),
                )
            }),
        )
        .route(
            "/forbidden",
            get(|| async { (StatusCode::FORBIDDEN, Json(json!({ "error": "Vendeurs uniquement" }))) }),
        )
        .route(
            "/missing",
            get(|| async { (StatusCode::NOT_FOUND, Json(json!({ "message": "Produit introuvable" }))) }),
        )
        .route(
            "/taken",
            get(|| async { (StatusCode::CONFLICT, Json(json!({ "message": "Email déjà utilisé" }))) }),
        )
        .route(
            "/slow-down",
            get(|| async { (StatusCode::TOO_MANY_REQUESTS, [(header::RETRY_AFTER, "7")], "") }),
        )
        .route("/boom", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }))
        .route("/teapot", get(|| async { StatusCode::IM_A_TEAPOT }));
    let base = spawn(router).await;
    let client = client(&base);
    let http = client.http();

    match http.get::<Value>("/bad").await.unwrap_err() {
        ClientError::Validation { message, fields } => {
            assert_eq!(message, "Validation failed");
            assert_eq!(fields.len(), 1);
            assert_eq!(fields[0].field, "email");
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    let err = http.get::<Value>("/forbidden").await.unwrap_err();
    assert!(matches!(&err, ClientError::Forbidden(m) if m == "Vendeurs uniquement"));

    let err = http.get::<Value>("/missing").await.unwrap_err();
    assert!(matches!(&err, ClientError::NotFound(m) if m == "Produit introuvable"));
    assert_eq!(err.user_message(), "Produit introuvable");

    let err = http.get::<Value>("/taken").await.unwrap_err();
    assert!(matches!(err, ClientError::Conflict(_)));

    match http.get::<Value>("/slow-down").await.unwrap_err() {
        ClientError::RateLimited { retry_after, .. } => {
            assert_eq!(retry_after, Some(Duration::from_secs(7)));
        }
        other => panic!("expected rate limit, got {other:?}"),
    }

    match http.get::<Value>("/boom").await.unwrap_err() {
        ClientError::Server { status, message } => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected server error, got {other:?}"),
    }

    let err = http.get::<Value>("/teapot").await.unwrap_err();
    assert!(matches!(err, ClientError::UnexpectedStatus { .. }));
    assert_eq!(err.status(), 418);
}

#[tokio::test]
async fn test_unauthorized_clears_the_session() {
    let router = Router::new().route(
        "/auth/me",
        get(|| async { (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Token expiré" }))) }),
    );
    let base = spawn(router).await;
    let client = SoukClient::new(&ClientConfig::new(&base).with_token("stale")).unwrap();
    assert!(client.session().is_authenticated());

    let err = client.auth().me().await.unwrap_err();
    assert!(err.requires_login());
    assert!(!client.session().is_authenticated());

    // Clones share the session
    let clone = client.clone();
    assert!(clone.session().token().is_none());
}

#[tokio::test]
async fn test_unauthorized_on_public_route_keeps_the_session() {
    let router = Router::new().route(
        "/auth/login",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Identifiants invalides" })),
            )
        }),
    );
    let base = spawn(router).await;
    let client = SoukClient::new(&ClientConfig::new(&base).with_token("still-good")).unwrap();

    match client.auth().login("amira@souk.tn", "wrong").await.unwrap_err() {
        ClientError::Unauthorized {
            message,
            session_cleared,
        } => {
            assert_eq!(message, "Identifiants invalides");
            assert!(!session_cleared);
        }
        other => panic!("expected unauthorized, got {other:?}"),
    }
    assert_eq!(client.session().token().as_deref(), Some("still-good"));
}

#[tokio::test]
async fn test_get_is_retried_with_linear_backoff() {
    let addr = dead_addr().await;
    let config = ClientConfig::new(format!("http://{addr}")).with_retry(3, Duration::from_millis(50));
    let client = SoukClient::new(&config).unwrap();

    let started = Instant::now();
    let err = client.http().get::<Value>("/products").await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
    assert!(err.is_retryable());
    // 50ms after the first attempt, 100ms after the second
    assert!(started.elapsed() >= Duration::from_millis(150));
}

#[tokio::test]
async fn test_post_is_not_retried() {
    let addr = dead_addr().await;
    let config = ClientConfig::new(format!("http://{addr}")).with_retry(3, Duration::from_millis(500));
    let client = SoukClient::new(&config).unwrap();

    let started = Instant::now();
    let err = client
        .http()
        .post::<Value, _>("/orders", &json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
    assert!(started.elapsed() < Duration::from_millis(500));
}

#[tokio::test]
async fn test_get_succeeds_once_the_server_comes_up() {
    let addr = dead_addr().await;
    let hits = Arc::new(AtomicUsize::new(0));

    let counter = hits.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        let router = Router::new().route(
            "/auth/me",
            get(move || {
                counter.fetch_add(1, Ordering::SeqCst);
                async { Json(ok(json!({ "user": user("customer") }))) }
            }),
        );
        let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
        axum::serve(listener, router).await.unwrap();
    });

    let config = ClientConfig::new(format!("http://{addr}"))
        .with_token("tok")
        .with_retry(6, Duration::from_millis(100));
    let client = SoukClient::new(&config).unwrap();

    let me = client.auth().me().await.unwrap();
    assert_eq!(me.email, "amira@souk.tn");
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert_eq!(client.session().user().map(|u| u.id), Some("u1".to_string()));
}
