use super::*;

fn token_with_payload(payload: &serde_json::Value) -> String {
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("hdr.{body}.sig")
}

#[test]
fn decode_claims_rejects_non_three_segment_tokens() {
    assert_eq!(decode_claims(""), None);
    assert_eq!(decode_claims("abc"), None);
    assert_eq!(decode_claims("abc.def"), None);
    assert_eq!(decode_claims("a.b.c.d"), None);
}

#[test]
fn decode_claims_rejects_non_base64_payload() {
    assert_eq!(decode_claims("hdr.!!not-base64!!.sig"), None);
}

#[test]
fn decode_claims_rejects_non_json_payload() {
    let body = URL_SAFE_NO_PAD.encode("not json");
    assert_eq!(decode_claims(&format!("hdr.{body}.sig")), None);
}

#[test]
fn decode_claims_reads_subject_role_and_expiry() {
    let token = token_with_payload(&serde_json::json!({
        "sub": "a@b.com",
        "role": "Admin",
        "exp": 4_102_444_800i64,
    }));
    let claims = decode_claims(&token).expect("claims");
    assert_eq!(claims.sub.as_deref(), Some("a@b.com"));
    assert_eq!(claims.role, Some(Role::Admin));
    assert_eq!(claims.exp, Some(4_102_444_800));
}

#[test]
fn decode_claims_tolerates_missing_fields() {
    let token = token_with_payload(&serde_json::json!({ "sub": "a@b.com" }));
    let claims = decode_claims(&token).expect("claims");
    assert_eq!(claims.role, None);
    assert_eq!(claims.exp, None);
}

#[test]
fn decode_claims_tolerates_padded_payload() {
    let padded = base64::engine::general_purpose::URL_SAFE
        .encode(serde_json::json!({ "sub": "x" }).to_string());
    let claims = decode_claims(&format!("hdr.{padded}.sig")).expect("claims");
    assert_eq!(claims.sub.as_deref(), Some("x"));
}

#[test]
fn claims_expired_when_exp_in_the_past() {
    let claims = Claims { exp: Some(1_000), ..Claims::default() };
    assert!(claims.is_expired(1_000_001));
    assert!(!claims.is_expired(999_999));
}

#[test]
fn claims_without_exp_never_expire_locally() {
    assert!(!Claims::default().is_expired(i64::MAX));
}

#[test]
fn claims_with_oversized_exp_never_expire_locally() {
    // Milliseconds conversion must not overflow for an absurd expiry.
    let claims = Claims { exp: Some(i64::MAX), ..Claims::default() };
    assert!(!claims.is_expired(0));
    assert!(!claims.is_expired(i64::MAX));
}
