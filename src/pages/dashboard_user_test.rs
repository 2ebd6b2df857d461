use super::*;

#[test]
fn classify_applies_a_successful_summary() {
    let summary = UserSummary {
        alerts: Some(2),
        compliance_score: Some(80),
        monitoring_status: Some("Active".to_owned()),
    };
    assert_eq!(classify(Ok(summary.clone())), UserLoad::Ready(summary));
}

#[test]
fn classify_treats_401_as_session_expiry() {
    let err = ApiError::Status { status: 401, message: "unauthorized".to_owned() };
    assert_eq!(classify(Err(err)), UserLoad::SessionExpired);
}

#[test]
fn classify_treats_403_as_session_expiry() {
    let err = ApiError::Status { status: 403, message: "forbidden".to_owned() };
    assert_eq!(classify(Err(err)), UserLoad::SessionExpired);
}

#[test]
fn classify_keeps_other_failures_as_banner_errors() {
    assert_eq!(
        classify(Err(ApiError::Network)),
        UserLoad::Failed(ApiError::Network.to_string())
    );
    let err = ApiError::Status { status: 500, message: "boom".to_owned() };
    assert_eq!(classify(Err(err)), UserLoad::Failed("boom".to_owned()));
}
