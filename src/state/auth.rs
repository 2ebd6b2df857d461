//! Auth-session state machine for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<AuthState>` is provided at the app root and consumed by the
//! role guard, the site header, and the dashboards. This module is the only
//! writer of both that signal and the persisted session store, so every
//! transition lands as a complete state: a session is either fully present
//! (token + role, unexpired) or absent.
//!
//! STATE MACHINE
//! =============
//! `Idle -> Loading -> {Authenticated | Unauthenticated | Error}`. A new
//! login attempt re-enters `Loading` from any terminal state; `logout`
//! forces `Unauthenticated` from anywhere. `refresh` runs once at startup
//! and must reach a terminal status before guard redirects are trusted.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::types::{AuthResponse, AuthUser, LoginRequest, RegisterRequest, VerifyResponse};
use crate::util::{jwt, session_store};

/// Closed set of access roles. Comparison is exact-match only; `Admin` does
/// not satisfy a `User` guard or vice versa.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Dashboard route this role lands on after login.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::User => "/dashboard/user",
            Role::Admin => "/dashboard/admin",
        }
    }

    /// Display label for headers and login tabs.
    pub fn label(self) -> &'static str {
        match self {
            Role::User => "User",
            Role::Admin => "Admin",
        }
    }
}

/// The authenticated identity held by the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token issued by the auth service.
    pub token: String,
    /// Role granted by the auth service.
    pub role: Role,
    /// Principal identifier decoded from the token claims, if readable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Absolute expiry in milliseconds since epoch, decoded from claims.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at_ms: Option<i64>,
    /// Profile metadata returned alongside the token, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AuthUser>,
}

impl Session {
    /// Build a session from a freshly issued token, deriving `subject` and
    /// `expires_at_ms` from the token's claims when they decode.
    pub fn from_token(token: String, role: Role, user: Option<AuthUser>) -> Self {
        let claims = jwt::decode_claims(&token).unwrap_or_default();
        Session {
            token,
            role,
            subject: claims.sub,
            // An exp too large to express in milliseconds is dropped; the
            // session then never expires locally and the server stays the
            // authority.
            expires_at_ms: claims.exp.and_then(|exp| exp.checked_mul(1000)),
            user,
        }
    }

    /// Whether the session has lapsed at `now_ms`.
    pub fn is_expired(&self, now_ms: i64) -> bool {
        self.expires_at_ms.is_some_and(|at| at < now_ms)
    }
}

/// Lifecycle status of the auth context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// Pre-initialization, before the stored session has been checked.
    #[default]
    Idle,
    /// A login or verification request is in flight.
    Loading,
    Authenticated,
    Unauthenticated,
    /// A login attempt failed; `error` carries the message.
    Error,
}

/// Shared auth state provided via context at the app root.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub status: AuthStatus,
    pub session: Option<Session>,
    pub error: Option<String>,
}

impl AuthState {
    pub fn loading() -> Self {
        AuthState { status: AuthStatus::Loading, session: None, error: None }
    }

    pub fn authenticated(session: Session) -> Self {
        AuthState { status: AuthStatus::Authenticated, session: Some(session), error: None }
    }

    pub fn unauthenticated() -> Self {
        AuthState { status: AuthStatus::Unauthenticated, session: None, error: None }
    }

    pub fn failed(message: String) -> Self {
        AuthState { status: AuthStatus::Error, session: None, error: Some(message) }
    }

    /// Role of the current session, if authenticated.
    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|session| session.role)
    }

    /// Whether `refresh` has reached a terminal status. Guard redirects are
    /// not authoritative before this.
    pub fn is_settled(&self) -> bool {
        !matches!(self.status, AuthStatus::Idle | AuthStatus::Loading)
    }
}

/// Shape a login/register response into a session.
///
/// A success payload without a usable token is treated as a failed login,
/// not a decode panic; no session is written in that case.
pub(crate) fn session_from_login(response: AuthResponse) -> Result<Session, &'static str> {
    if response.access_token.is_empty() {
        return Err("Sign-in succeeded but no access token was issued.");
    }
    Ok(Session::from_token(response.access_token, response.role, response.user))
}

/// Merge a server verification result over the locally stored session.
/// Server-confirmed token and role take precedence over cached values.
pub(crate) fn resolve_verified(stored: &Session, verified: VerifyResponse) -> Session {
    let token = verified.token.filter(|t| !t.is_empty()).unwrap_or_else(|| stored.token.clone());
    let role = verified.role.unwrap_or(stored.role);
    Session::from_token(token, role, stored.user.clone())
}

/// What `refresh` should do with the stored session, decided before any
/// network traffic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RefreshPlan {
    /// Nothing usable is stored; settle as unauthenticated.
    Absent,
    /// Stored but already lapsed; clear the store without a verification
    /// request.
    DropExpired,
    /// Stored and locally live; verify against the server.
    Verify,
}

pub(crate) fn plan_refresh(stored: Option<&Session>, now_ms: i64) -> RefreshPlan {
    match stored {
        None => RefreshPlan::Absent,
        Some(session) if session.is_expired(now_ms) => RefreshPlan::DropExpired,
        Some(_) => RefreshPlan::Verify,
    }
}

/// What the periodic session sweep should do, given the live state and the
/// session currently persisted by this or another tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SweepAction {
    /// Nothing changed; leave the state alone.
    Keep,
    /// The session lapsed or another tab signed out; drop to unauthenticated.
    Logout,
    /// Another tab replaced the session; re-verify against the server.
    Resync,
}

/// Decide the sweep outcome. Only an `Authenticated` state is swept; other
/// statuses are owned by an in-flight login or refresh.
pub(crate) fn sweep_action(
    state: &AuthState,
    stored: Option<&Session>,
    now_ms: i64,
) -> SweepAction {
    let Some(current) = (state.status == AuthStatus::Authenticated)
        .then_some(state.session.as_ref())
        .flatten()
    else {
        return SweepAction::Keep;
    };
    match stored {
        None => SweepAction::Logout,
        Some(persisted) if persisted.is_expired(now_ms) || current.is_expired(now_ms) => {
            SweepAction::Logout
        }
        Some(persisted) if persisted.token != current.token => SweepAction::Resync,
        Some(_) => SweepAction::Keep,
    }
}

/// Credential login against the role-specific endpoint. Returns whether the
/// attempt ended authenticated.
pub async fn login(auth: RwSignal<AuthState>, role: Role, request: &LoginRequest) -> bool {
    #[cfg(feature = "hydrate")]
    {
        auth.set(AuthState::loading());
        apply_login_result(auth, crate::net::api::login(role, request).await)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, role, request);
        false
    }
}

/// Federated login with an opaque Google ID token.
pub async fn login_with_google(auth: RwSignal<AuthState>, id_token: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        auth.set(AuthState::loading());
        let request =
            crate::net::types::GoogleLoginRequest { id_token: id_token.to_owned(), role: None };
        apply_login_result(auth, crate::net::api::login_with_google(&request).await)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, id_token);
        false
    }
}

/// Account registration; a successful registration signs the user in.
pub async fn register(auth: RwSignal<AuthState>, request: &RegisterRequest) -> bool {
    #[cfg(feature = "hydrate")]
    {
        auth.set(AuthState::loading());
        apply_login_result(auth, crate::net::api::register(request).await)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, request);
        false
    }
}

/// Clear the session unconditionally. No network dependency; always succeeds.
pub fn logout(auth: RwSignal<AuthState>) {
    session_store::clear();
    auth.set(AuthState::unauthenticated());
}

/// Reload-time verification of the stored session.
///
/// Runs exactly once at startup (and again on sweep-detected resync). Any
/// verification failure, network included, clears the store: a session we
/// cannot re-establish trust in is not kept around. Transient failures on
/// ordinary data fetches deliberately do not get this treatment.
pub async fn refresh(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        let stored = session_store::load();
        let plan = plan_refresh(stored.as_ref(), jwt::now_ms());
        match (plan, stored) {
            (RefreshPlan::Verify, Some(stored)) => {
                auth.set(AuthState::loading());
                match crate::net::api::verify_session(&stored.token).await {
                    Ok(verified) => {
                        let session = resolve_verified(&stored, verified);
                        session_store::save(&session);
                        auth.set(AuthState::authenticated(session));
                    }
                    Err(err) => {
                        session_store::clear();
                        auth.set(AuthState {
                            error: Some(err.to_string()),
                            ..AuthState::unauthenticated()
                        });
                    }
                }
            }
            (RefreshPlan::DropExpired, _) => {
                session_store::clear();
                auth.set(AuthState::unauthenticated());
            }
            _ => auth.set(AuthState::unauthenticated()),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        auth.set(AuthState::unauthenticated());
    }
}

#[cfg(feature = "hydrate")]
fn apply_login_result(
    auth: RwSignal<AuthState>,
    result: Result<AuthResponse, crate::net::api::ApiError>,
) -> bool {
    match result.map_err(|err| err.to_string()).and_then(|response| {
        session_from_login(response).map_err(str::to_owned)
    }) {
        Ok(session) => {
            session_store::save(&session);
            auth.set(AuthState::authenticated(session));
            true
        }
        Err(message) => {
            auth.set(AuthState::failed(message));
            false
        }
    }
}
