use super::*;

#[test]
fn is_valid_email_accepts_plain_addresses() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("dev.team@sub.example.co"));
}

#[test]
fn is_valid_email_rejects_malformed_addresses() {
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("nodomain"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("@b.com"));
    assert!(!is_valid_email("a@.com"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email("a@b@c.com"));
}

#[test]
fn validate_email_trims_whitespace() {
    assert_eq!(validate_email("  user@example.com  "), Ok("user@example.com".to_owned()));
}

#[test]
fn validate_email_reports_field_error() {
    assert_eq!(validate_email("not-an-email"), Err("Please enter a valid work email."));
}

#[test]
fn validate_password_enforces_minimum_length() {
    // A 3-character password must be rejected before any network call.
    assert_eq!(validate_password("abc"), Err("Password must be at least 8 characters."));
    assert_eq!(validate_password("1234567"), Err("Password must be at least 8 characters."));
    assert_eq!(validate_password("12345678"), Ok("12345678".to_owned()));
}

#[test]
fn post_login_destination_defaults_to_role_dashboard() {
    assert_eq!(post_login_destination(Role::User, None), "/dashboard/user");
    assert_eq!(post_login_destination(Role::Admin, None), "/dashboard/admin");
}

#[test]
fn post_login_destination_honors_matching_from_path() {
    assert_eq!(
        post_login_destination(Role::Admin, Some("/dashboard/admin")),
        "/dashboard/admin"
    );
}

#[test]
fn post_login_destination_ignores_foreign_from_path() {
    // A User login never lands on the admin dashboard, whatever `from` says.
    assert_eq!(post_login_destination(Role::User, Some("/dashboard/admin")), "/dashboard/user");
    assert_eq!(post_login_destination(Role::Admin, Some("/dashboard/user")), "/dashboard/admin");
}
