//! Authentication API

use shared::models::{CurrentUser, LoginRequest, LoginResponse, RegisterRequest, User};
use shared::response::Envelope;

use super::{acknowledge, unwrap_data};
use crate::error::ClientResult;
use crate::http::HttpClient;

pub struct Auth<'a, H> {
    http: &'a H,
}

impl<'a, H: HttpClient> Auth<'a, H> {
    pub fn new(http: &'a H) -> Self {
        Self { http }
    }

    /// Log in and store the session
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<User> {
        const PATH: &str = "/auth/login";
        let req = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let resp: Envelope<LoginResponse> = self.http.post(PATH, &req).await?;
        self.start_session(unwrap_data(PATH, resp)?)
    }

    /// Create an account; the backend logs the new user in directly
    pub async fn register(&self, req: &RegisterRequest) -> ClientResult<User> {
        const PATH: &str = "/auth/register";
        let resp: Envelope<LoginResponse> = self.http.post(PATH, req).await?;
        self.start_session(unwrap_data(PATH, resp)?)
    }

    fn start_session(&self, login: LoginResponse) -> ClientResult<User> {
        let LoginResponse { token, user } = login;
        self.http.session().set_login(token, user.clone())?;
        tracing::info!(user_id = %user.id, role = ?user.role, "Logged in");
        Ok(user)
    }

    /// Fetch the current user and refresh the cached copy
    pub async fn me(&self) -> ClientResult<User> {
        const PATH: &str = "/auth/me";
        let resp: Envelope<CurrentUser> = self.http.get(PATH).await?;
        let user = unwrap_data(PATH, resp)?.user;
        self.http.session().set_user(user.clone())?;
        Ok(user)
    }

    /// Log out; the local session is cleared even when the call fails
    pub async fn logout(&self) -> ClientResult<()> {
        let result = self.http.post_empty("/auth/logout").await.and_then(acknowledge);
        self.http.session().clear();
        if let Err(e) = &result {
            tracing::warn!("Logout request failed, local session cleared anyway: {e}");
        }
        result
    }
}
