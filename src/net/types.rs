//! Wire DTOs for the external REST API.
//!
//! DESIGN
//! ======
//! Every response is parsed through these types at the network boundary so
//! unchecked dynamic JSON never leaks into state. Fields the backend treats
//! as optional are `Option` here; everything else failing to parse surfaces
//! as a decode error in the API layer.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::auth::Role;

/// Profile metadata returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub role: Role,
}

/// Credential login payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

/// Federated login payload carrying an opaque identity-provider token.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GoogleLoginRequest {
    pub id_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Success body of the login, admin-login, google and register endpoints.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub role: Role,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

fn default_token_type() -> String {
    "bearer".to_owned()
}

/// Body of the session-verification endpoint. All fields are optional; the
/// client falls back to its stored values for anything the server omits.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct VerifyResponse {
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// Role-scoped summary for the user dashboard.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(default)]
    pub alerts: Option<i64>,
    #[serde(default)]
    pub compliance_score: Option<i64>,
    #[serde(default)]
    pub monitoring_status: Option<String>,
}

/// Role-scoped summary for the admin dashboard.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSummary {
    #[serde(default)]
    pub incidents: Option<i64>,
    #[serde(default)]
    pub compliance_score: Option<i64>,
    #[serde(default)]
    pub active_clients: Option<i64>,
}

/// One entry of the public services catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Contact form payload.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub message: String,
}

/// Acknowledgement returned by the contact endpoint.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ContactReceipt {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
}
