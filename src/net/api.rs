//! REST API client for the external backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Network` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<T, ApiError>`; a non-2xx status becomes a
//! typed error carrying the HTTP status and the body's `detail`/`message`
//! text when present. This layer is pure transport: it attaches the bearer
//! token but never mutates auth state; callers interpret 401/403 as
//! "session invalid" and trigger logout themselves.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::auth::Role;

use super::types::{
    AdminSummary, AuthResponse, ContactReceipt, ContactRequest, GoogleLoginRequest, LoginRequest,
    RegisterRequest, ServiceItem, UserSummary, VerifyResponse,
};

/// Typed failure of an API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The request never produced a response.
    #[error("Unable to reach the service. Check your connection and try again.")]
    Network,
    /// The server answered 2xx but the body did not match the expected shape.
    #[error("The service returned an unexpected response.")]
    Decode,
}

impl ApiError {
    /// Whether this error means the session is invalid or expired.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, ApiError::Status { status: 401 | 403, .. })
    }
}

/// Map a non-2xx response body into an `ApiError`, preferring the backend's
/// own `detail`/`message` text when the body is JSON.
pub(crate) fn error_from_body(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .or_else(|| value.get("message"))
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| format!("request failed with status {status}"));
    ApiError::Status { status, message }
}

/// Credential login path for a role; admins authenticate against their own
/// endpoint.
pub(crate) fn login_endpoint(role: Role) -> &'static str {
    match role {
        Role::User => "/api/v1/auth/login",
        Role::Admin => "/api/v1/auth/admin/login",
    }
}

/// `POST` credential login.
pub async fn login(role: Role, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    post_json(login_endpoint(role), request).await
}

/// `POST` federated login with a Google ID token.
pub async fn login_with_google(request: &GoogleLoginRequest) -> Result<AuthResponse, ApiError> {
    post_json("/api/v1/auth/google", request).await
}

/// `POST` account registration; signs the new account in on success.
pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    post_json("/api/v1/auth/register", request).await
}

/// `GET` session verification with an explicit bearer token.
///
/// Used by the startup refresh before the verified session is adopted, so
/// the token to trust is passed in rather than read from the store.
pub async fn verify_session(token: &str) -> Result<VerifyResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::get(&crate::util::config::endpoint("/api/v1/auth/me"))
            .header("Authorization", &format!("Bearer {token}"));
        decode_response(request.send().await.map_err(|_| ApiError::Network)?).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::Network)
    }
}

/// `GET` the Google OAuth redirect URL for a role.
pub async fn google_oauth_url(role: Role) -> Result<String, ApiError> {
    #[derive(serde::Deserialize)]
    struct UrlResponse {
        url: String,
    }
    let path = format!("/api/v1/auth/google/url?role={}", role.label());
    let response: UrlResponse = get_json(&path, false).await?;
    Ok(response.url)
}

/// `GET` the user dashboard summary (bearer-authorized).
pub async fn user_summary() -> Result<UserSummary, ApiError> {
    get_json("/api/v1/dashboard/user/summary", true).await
}

/// `GET` the admin dashboard summary (bearer-authorized).
pub async fn admin_summary() -> Result<AdminSummary, ApiError> {
    get_json("/api/v1/dashboard/admin/summary", true).await
}

/// `GET` the public services catalog.
pub async fn fetch_services() -> Result<Vec<ServiceItem>, ApiError> {
    get_json("/api/v1/services", false).await
}

/// `POST` a contact form submission.
pub async fn submit_contact(request: &ContactRequest) -> Result<ContactReceipt, ApiError> {
    post_json("/api/v1/contact", request).await
}

#[cfg(feature = "hydrate")]
async fn get_json<T>(path: &str, authorized: bool) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let mut builder = gloo_net::http::Request::get(&crate::util::config::endpoint(path));
    if authorized {
        if let Some(session) = crate::util::session_store::load() {
            builder = builder.header("Authorization", &format!("Bearer {}", session.token));
        }
    }
    decode_response(builder.send().await.map_err(|_| ApiError::Network)?).await
}

#[cfg(not(feature = "hydrate"))]
async fn get_json<T>(path: &str, authorized: bool) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let _ = (path, authorized);
    Err(ApiError::Network)
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let request = gloo_net::http::Request::post(&crate::util::config::endpoint(path))
        .json(body)
        .map_err(|_| ApiError::Decode)?;
    decode_response(request.send().await.map_err(|_| ApiError::Network)?).await
}

#[cfg(not(feature = "hydrate"))]
async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let _ = (path, body);
    Err(ApiError::Network)
}

#[cfg(feature = "hydrate")]
async fn decode_response<T>(response: gloo_net::http::Response) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(error_from_body(response.status(), &body));
    }
    response.json::<T>().await.map_err(|_| ApiError::Decode)
}
