use super::*;

#[test]
fn validate_message_requires_ten_characters() {
    assert_eq!(
        validate_message("too short"),
        Err("Please tell us a bit more (at least 10 characters).")
    );
    assert_eq!(validate_message("need a pentest"), Ok("need a pentest".to_owned()));
}

#[test]
fn validate_message_trims_before_counting() {
    assert_eq!(
        validate_message("   hi   "),
        Err("Please tell us a bit more (at least 10 characters).")
    );
    assert_eq!(validate_message("  need a pentest  "), Ok("need a pentest".to_owned()));
}
