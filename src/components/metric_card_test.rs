use super::*;

#[test]
fn format_count_uses_placeholder_when_absent() {
    assert_eq!(format_count(None), "--");
    assert_eq!(format_count(Some(42)), "42");
}

#[test]
fn format_percent_appends_sign() {
    assert_eq!(format_percent(Some(82)), "82%");
    assert_eq!(format_percent(None), "--");
}
