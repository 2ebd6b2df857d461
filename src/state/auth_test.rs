use super::*;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn signed_token(sub: &str, role: &str, exp: i64) -> String {
    let payload =
        URL_SAFE_NO_PAD.encode(serde_json::json!({ "sub": sub, "role": role, "exp": exp }).to_string());
    format!("hdr.{payload}.sig")
}

fn session(token: &str, role: Role) -> Session {
    Session { token: token.to_owned(), role, subject: None, expires_at_ms: None, user: None }
}

#[test]
fn session_from_token_derives_subject_and_expiry_from_claims() {
    let token = signed_token("a@b.com", "Admin", 4_102_444_800);
    let session = Session::from_token(token.clone(), Role::Admin, None);
    assert_eq!(session.token, token);
    assert_eq!(session.subject.as_deref(), Some("a@b.com"));
    assert_eq!(session.expires_at_ms, Some(4_102_444_800_000));
}

#[test]
fn session_from_opaque_token_keeps_role_without_claims() {
    let session = Session::from_token("abc.def.ghi".to_owned(), Role::User, None);
    assert_eq!(session.role, Role::User);
    assert_eq!(session.subject, None);
    assert_eq!(session.expires_at_ms, None);
}

#[test]
fn session_from_token_drops_oversized_expiry_claim() {
    // An exp that cannot be expressed in milliseconds must not overflow;
    // the session simply never expires locally.
    let token = signed_token("a@b.com", "User", i64::MAX);
    let session = Session::from_token(token, Role::User, None);
    assert_eq!(session.expires_at_ms, None);
    assert!(!session.is_expired(0));
    assert!(!session.is_expired(i64::MAX));
}

#[test]
fn session_expiry_uses_absolute_milliseconds() {
    let mut s = session("abc.def.ghi", Role::User);
    s.expires_at_ms = Some(1_000);
    assert!(s.is_expired(1_001));
    assert!(!s.is_expired(999));
}

#[test]
fn session_from_login_requires_a_token() {
    let response = AuthResponse {
        access_token: String::new(),
        token_type: "bearer".to_owned(),
        role: Role::User,
        user: None,
    };
    assert!(session_from_login(response).is_err());
}

#[test]
fn session_from_login_builds_admin_session() {
    let response = AuthResponse {
        access_token: "abc.def.ghi".to_owned(),
        token_type: "bearer".to_owned(),
        role: Role::Admin,
        user: None,
    };
    let session = session_from_login(response).expect("session");
    assert_eq!(session.role, Role::Admin);
    assert_eq!(session.token, "abc.def.ghi");
}

#[test]
fn resolve_verified_prefers_server_role_and_token() {
    let stored = session("old.token.sig", Role::User);
    let verified = VerifyResponse {
        role: Some(Role::Admin),
        token: Some("new.token.sig".to_owned()),
        username: None,
    };
    let merged = resolve_verified(&stored, verified);
    assert_eq!(merged.token, "new.token.sig");
    assert_eq!(merged.role, Role::Admin);
}

#[test]
fn resolve_verified_falls_back_to_stored_values() {
    let stored = session("old.token.sig", Role::User);
    let verified = VerifyResponse { role: None, token: None, username: None };
    let merged = resolve_verified(&stored, verified);
    assert_eq!(merged.token, "old.token.sig");
    assert_eq!(merged.role, Role::User);
}

#[test]
fn resolve_verified_ignores_empty_server_token() {
    let stored = session("old.token.sig", Role::User);
    let verified =
        VerifyResponse { role: None, token: Some(String::new()), username: None };
    assert_eq!(resolve_verified(&stored, verified).token, "old.token.sig");
}

#[test]
fn default_state_is_idle_and_unsettled() {
    let state = AuthState::default();
    assert_eq!(state.status, AuthStatus::Idle);
    assert!(!state.is_settled());
    assert_eq!(state.role(), None);
}

#[test]
fn loading_state_is_unsettled() {
    assert!(!AuthState::loading().is_settled());
}

#[test]
fn terminal_states_are_settled() {
    assert!(AuthState::unauthenticated().is_settled());
    assert!(AuthState::failed("boom".to_owned()).is_settled());
    assert!(AuthState::authenticated(session("abc.def.ghi", Role::User)).is_settled());
}

#[test]
fn authenticated_state_exposes_role() {
    let state = AuthState::authenticated(session("abc.def.ghi", Role::Admin));
    assert_eq!(state.role(), Some(Role::Admin));
    assert_eq!(state.error, None);
}

#[test]
fn failed_state_carries_message_and_no_session() {
    let state = AuthState::failed("Invalid credentials or role.".to_owned());
    assert_eq!(state.status, AuthStatus::Error);
    assert_eq!(state.session, None);
    assert_eq!(state.error.as_deref(), Some("Invalid credentials or role."));
}

#[test]
fn refresh_plan_is_absent_without_a_stored_session() {
    assert_eq!(plan_refresh(None, 0), RefreshPlan::Absent);
}

#[test]
fn refresh_plan_drops_expired_session_before_any_network_call() {
    let mut stored = session("abc.def.ghi", Role::User);
    stored.expires_at_ms = Some(1_000);
    assert_eq!(plan_refresh(Some(&stored), 2_000), RefreshPlan::DropExpired);
}

#[test]
fn refresh_plan_verifies_a_live_stored_session() {
    let mut stored = session("abc.def.ghi", Role::User);
    assert_eq!(plan_refresh(Some(&stored), 0), RefreshPlan::Verify);
    stored.expires_at_ms = Some(2_000);
    assert_eq!(plan_refresh(Some(&stored), 1_000), RefreshPlan::Verify);
}

#[test]
fn sweep_keeps_non_authenticated_states() {
    assert_eq!(sweep_action(&AuthState::default(), None, 0), SweepAction::Keep);
    assert_eq!(sweep_action(&AuthState::loading(), None, 0), SweepAction::Keep);
    assert_eq!(sweep_action(&AuthState::unauthenticated(), None, 0), SweepAction::Keep);
}

#[test]
fn sweep_logs_out_when_store_was_cleared_elsewhere() {
    let state = AuthState::authenticated(session("abc.def.ghi", Role::User));
    assert_eq!(sweep_action(&state, None, 0), SweepAction::Logout);
}

#[test]
fn sweep_logs_out_when_session_lapsed() {
    let mut lapsed = session("abc.def.ghi", Role::User);
    lapsed.expires_at_ms = Some(1_000);
    let state = AuthState::authenticated(lapsed.clone());
    assert_eq!(sweep_action(&state, Some(&lapsed), 2_000), SweepAction::Logout);
}

#[test]
fn sweep_resyncs_when_another_tab_replaced_the_token() {
    let state = AuthState::authenticated(session("abc.def.ghi", Role::User));
    let replaced = session("xyz.uvw.rst", Role::Admin);
    assert_eq!(sweep_action(&state, Some(&replaced), 0), SweepAction::Resync);
}

#[test]
fn sweep_keeps_a_live_matching_session() {
    let live = session("abc.def.ghi", Role::User);
    let state = AuthState::authenticated(live.clone());
    assert_eq!(sweep_action(&state, Some(&live), 0), SweepAction::Keep);
}
