//! Local JWT claims decoding for expiry and identity hints.
//!
//! DESIGN
//! ======
//! The bearer token is opaque to this client except for its self-describing
//! payload segment, which is decoded without any network round-trip so the
//! app can drop expired sessions before a guard ever consults them. Decode
//! failure is a normal outcome (`None`), never an error: a token we cannot
//! read is simply not evidence of a session.

#[cfg(test)]
#[path = "jwt_test.rs"]
mod jwt_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;

use crate::state::auth::Role;

/// Claims carried in a bearer token's payload segment.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Claims {
    /// Stable identifier of the authenticated principal.
    pub sub: Option<String>,
    /// Role embedded at token-issue time.
    pub role: Option<Role>,
    /// Expiry in whole seconds since the Unix epoch.
    pub exp: Option<i64>,
}

impl Claims {
    /// Whether the claims are stale at `now_ms` (milliseconds since epoch).
    ///
    /// Claims without an `exp`, or with one too large to express in
    /// milliseconds, never expire locally; the server-side verification in
    /// `refresh` remains the authority for those.
    pub fn is_expired(&self, now_ms: i64) -> bool {
        self.exp.and_then(|exp| exp.checked_mul(1000)).is_some_and(|at| at < now_ms)
    }
}

/// Decode the claims of a JWT-shaped bearer token.
///
/// Returns `None` unless the token has exactly three dot-separated segments
/// and the middle segment is base64url-encoded JSON.
pub fn decode_claims(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let _header = segments.next()?;
    let payload = segments.next()?;
    let _signature = segments.next()?;
    if segments.next().is_some() || payload.is_empty() {
        return None;
    }

    // Tolerate padded emitters; canonical JWTs are unpadded base64url.
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        {
            js_sys::Date::now() as i64
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
    }
}
