//! Backend endpoint configuration.
//!
//! DESIGN
//! ======
//! The API base URL is fixed at compile time so the deployed WASM bundle has
//! no runtime configuration surface. An empty base means same-origin paths,
//! which is the production layout (reverse proxy in front of the API).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL for the external REST API.
///
/// Override at build time with `BE4BREACH_API_BASE_URL`
/// (e.g. `http://localhost:8000` during local development).
pub const API_BASE_URL: &str = match option_env!("BE4BREACH_API_BASE_URL") {
    Some(value) => value,
    None => "",
};

/// Join the configured base URL with an absolute API path.
pub fn endpoint(path: &str) -> String {
    join_base(API_BASE_URL, path)
}

/// Join a base URL and path without producing a doubled slash.
pub(crate) fn join_base(base: &str, path: &str) -> String {
    let trimmed = base.strip_suffix('/').unwrap_or(base);
    format!("{trimmed}{path}")
}
