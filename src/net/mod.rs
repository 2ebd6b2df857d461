//! Networking modules for the external REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls and owns the typed error; `types` defines the
//! serde DTOs that gate every payload at the wire boundary.

pub mod api;
pub mod types;
