use super::*;

#[test]
fn join_base_with_empty_base_keeps_path() {
    assert_eq!(join_base("", "/api/v1/services"), "/api/v1/services");
}

#[test]
fn join_base_with_host_prefixes_path() {
    assert_eq!(
        join_base("http://localhost:8000", "/api/v1/auth/login"),
        "http://localhost:8000/api/v1/auth/login"
    );
}

#[test]
fn join_base_strips_trailing_slash() {
    assert_eq!(
        join_base("http://localhost:8000/", "/api/v1/auth/login"),
        "http://localhost:8000/api/v1/auth/login"
    );
}
