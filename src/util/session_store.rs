//! Browser localStorage persistence for the auth session.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single storage entry is the only durable client state in the app. The
//! auth state machine is its exclusive writer; the API layer reads it
//! opportunistically to attach bearer tokens. The session is always written
//! wholesale, never field-patched, so concurrent readers (other tabs,
//! reentrant effects) can only ever observe a complete value or nothing.
//!
//! Reads are total: corrupt JSON, missing fields, or unavailable storage all
//! degrade to "no session" rather than surfacing an error.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use crate::state::auth::Session;

/// Fixed localStorage key for the serialized session.
pub const STORAGE_KEY: &str = "be4breach_session";

/// Persist `session`, replacing any prior value.
pub fn save(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let Ok(raw) = serde_json::to_string(session) else {
            return;
        };
        let _ = storage.set_item(STORAGE_KEY, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Load the persisted session, if present and structurally valid.
///
/// Expiry is not checked here; callers combine this with the claims decoder.
pub fn load() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(STORAGE_KEY).ok().flatten()?;
        decode_stored(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Remove the persisted session. Idempotent.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

/// Parse a raw storage value into a session.
///
/// Structural validity means a deserializable shape with a non-empty token;
/// anything else is treated as absent.
pub(crate) fn decode_stored(raw: &str) -> Option<Session> {
    let session: Session = serde_json::from_str(raw).ok()?;
    if session.token.is_empty() {
        return None;
    }
    Some(session)
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
