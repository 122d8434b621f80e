//! HTTP client - network communication with the marketplace backend

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Response, StatusCode, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::error::{ErrorBody, ErrorCategory};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::session::{Session, SessionStorage};

/// Query-string pairs; values are percent-encoded by the client
pub type Query<'a> = &'a [(&'a str, String)];

/// HTTP client trait
///
/// Every service is generic over this trait. Paths are relative to the
/// configured base URL (a leading `/` is optional).
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T>;
    async fn get_with_query<T: DeserializeOwned + Send>(&self, path: &str, query: Query<'_>) -> ClientResult<T>;
    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<T>;
    async fn post_empty<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T>;
    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<T>;
    async fn put_empty<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T>;
    fn session(&self) -> &Session;
}

/// Network HTTP client (reqwest)
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    session: Session,
    retry_attempts: u32,
    retry_delay: Duration,
    public_routes: Vec<String>,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::Config(format!(
                "base URL must start with http:// or https://, got {:?}",
                config.base_url
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to build HTTP client: {e}")))?;

        let session = match &config.session_file {
            Some(path) => Session::with_storage(SessionStorage::new(path)),
            None => Session::new(),
        };
        if !session.is_authenticated()
            && let Some(token) = &config.token
        {
            session.set_token(token.clone());
        }

        Ok(Self {
            client,
            base_url,
            session,
            retry_attempts: config.retry_attempts.max(1),
            retry_delay: config.retry_delay,
            public_routes: config.public_routes.iter().map(|r| normalize_path(r)).collect(),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn is_public_route(&self, path: &str) -> bool {
        let path = normalize_path(path);
        self.public_routes.iter().any(|r| *r == path)
    }

    fn auth_header(&self) -> Option<String> {
        self.session.token().map(|t| format!("Bearer {t}"))
    }

    /// Send one request; GETs are retried on transport failure with linear backoff
    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Query<'_>,
        body: Option<serde_json::Value>,
    ) -> ClientResult<T> {
        let url = self.url(path);
        let attempts = if method == Method::GET { self.retry_attempts } else { 1 };
        let request_id = uuid::Uuid::new_v4().to_string();

        let mut attempt = 0;
        loop {
            attempt += 1;
            let mut req = self
                .client
                .request(method.clone(), &url)
                .header("X-Request-Id", &request_id);
            if !query.is_empty() {
                req = req.query(query);
            }
            if let Some(auth) = self.auth_header() {
                req = req.header(header::AUTHORIZATION, auth);
            }
            if let Some(body) = &body {
                req = req.json(body);
            }

            match req.send().await {
                Ok(response) => {
                    tracing::debug!(
                        %method,
                        path,
                        request_id = %request_id,
                        status = response.status().as_u16(),
                        "HTTP response"
                    );
                    return self.handle_response(path, response).await;
                }
                Err(e) if attempt < attempts => {
                    let delay = self.retry_delay * attempt;
                    tracing::warn!(
                        %method,
                        path,
                        attempt,
                        max_attempts = attempts,
                        delay_ms = delay.as_millis() as u64,
                        "Request failed, retrying: {e}"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    tracing::error!(%method, path, attempt, "Request failed: {e}");
                    return Err(ClientError::Network(e));
                }
            }
        }
    }

    async fn handle_response<T: DeserializeOwned>(&self, path: &str, response: Response) -> ClientResult<T> {
        let status = response.status();
        let retry_after = response
            .headers()
            .get(header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs);
        let text = response.text().await.map_err(ClientError::Network)?;

        if status.is_success() {
            return serde_json::from_str(&text).map_err(|e| ClientError::Decode {
                endpoint: path.to_string(),
                message: e.to_string(),
            });
        }

        let body = ErrorBody::parse(&text);
        let category = ErrorCategory::from_status(status.as_u16());
        let message = body
            .message()
            .map(String::from)
            .unwrap_or_else(|| category.default_message().to_string());

        tracing::debug!(path, status = status.as_u16(), %category, "HTTP error: {message}");

        Err(match status {
            StatusCode::BAD_REQUEST => ClientError::Validation {
                message,
                fields: body.errors,
            },
            StatusCode::UNAUTHORIZED => {
                let session_cleared = !self.is_public_route(path);
                if session_cleared {
                    tracing::warn!(path, "Session rejected by server, logging out");
                    self.session.clear();
                }
                ClientError::Unauthorized {
                    message,
                    session_cleared,
                }
            }
            StatusCode::FORBIDDEN => ClientError::Forbidden(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            StatusCode::CONFLICT => ClientError::Conflict(message),
            StatusCode::TOO_MANY_REQUESTS => ClientError::RateLimited { message, retry_after },
            s if s.is_server_error() => ClientError::Server { status: s, message },
            s => ClientError::UnexpectedStatus { status: s, message },
        })
    }

    fn to_body<B: Serialize>(body: &B) -> ClientResult<serde_json::Value> {
        Ok(serde_json::to_value(body)?)
    }
}

/// `auth/login?x=1` -> `/auth/login`
fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    format!("/{}", path.trim().trim_matches('/'))
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        self.execute(Method::GET, path, &[], None).await
    }

    async fn get_with_query<T: DeserializeOwned + Send>(&self, path: &str, query: Query<'_>) -> ClientResult<T> {
        self.execute(Method::GET, path, query, None).await
    }

    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<T> {
        let body = Self::to_body(body)?;
        self.execute(Method::POST, path, &[], Some(body)).await
    }

    async fn post_empty<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        self.execute(Method::POST, path, &[], None).await
    }

    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<T> {
        let body = Self::to_body(body)?;
        self.execute(Method::PUT, path, &[], Some(body)).await
    }

    async fn put_empty<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        self.execute(Method::PUT, path, &[], None).await
    }

    async fn delete<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        self.execute(Method::DELETE, path, &[], None).await
    }

    fn session(&self) -> &Session {
        &self.session
    }
}
