use super::*;

#[test]
fn role_serializes_with_canonical_casing() {
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""User""#);
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""Admin""#);
}

#[test]
fn role_rejects_non_canonical_casing() {
    assert!(serde_json::from_str::<Role>(r#""admin""#).is_err());
    assert!(serde_json::from_str::<Role>(r#""USER""#).is_err());
}

#[test]
fn auth_response_parses_minimal_success_body() {
    let parsed: AuthResponse =
        serde_json::from_str(r#"{"access_token":"abc.def.ghi","role":"Admin"}"#).unwrap();
    assert_eq!(parsed.access_token, "abc.def.ghi");
    assert_eq!(parsed.role, Role::Admin);
    assert_eq!(parsed.token_type, "bearer");
    assert_eq!(parsed.user, None);
}

#[test]
fn auth_response_requires_access_token_and_role() {
    assert!(serde_json::from_str::<AuthResponse>(r#"{"role":"User"}"#).is_err());
    assert!(serde_json::from_str::<AuthResponse>(r#"{"access_token":"x"}"#).is_err());
}

#[test]
fn auth_response_carries_user_metadata() {
    let parsed: AuthResponse = serde_json::from_str(
        r#"{"access_token":"t.t.t","role":"User","user":{"email":"a@b.com","name":"Ana","role":"User"}}"#,
    )
    .unwrap();
    let user = parsed.user.expect("user");
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.name.as_deref(), Some("Ana"));
}

#[test]
fn verify_response_tolerates_empty_body() {
    let parsed: VerifyResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(parsed, VerifyResponse::default());
}

#[test]
fn summaries_parse_camel_case_fields() {
    let user: UserSummary =
        serde_json::from_str(r#"{"alerts":3,"complianceScore":82,"monitoringStatus":"Active"}"#)
            .unwrap();
    assert_eq!(user.alerts, Some(3));
    assert_eq!(user.compliance_score, Some(82));
    assert_eq!(user.monitoring_status.as_deref(), Some("Active"));

    let admin: AdminSummary =
        serde_json::from_str(r#"{"incidents":1,"complianceScore":90,"activeClients":12}"#).unwrap();
    assert_eq!(admin.incidents, Some(1));
    assert_eq!(admin.active_clients, Some(12));
}

#[test]
fn summaries_tolerate_missing_fields() {
    let user: UserSummary = serde_json::from_str("{}").unwrap();
    assert_eq!(user, UserSummary::default());
}

#[test]
fn google_request_omits_absent_role() {
    let body = GoogleLoginRequest { id_token: "tok".to_owned(), role: None };
    assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"id_token":"tok"}"#);
}

#[test]
fn contact_request_omits_absent_company() {
    let body = ContactRequest {
        name: "Ana".to_owned(),
        email: "a@b.com".to_owned(),
        company: None,
        message: "Need a security review.".to_owned(),
    };
    let raw = serde_json::to_string(&body).unwrap();
    assert!(!raw.contains("company"));
}
