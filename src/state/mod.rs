//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Auth is the only cross-cutting state in this app; it is provided as a
//! single `RwSignal<AuthState>` context at the root and written exclusively
//! through the operations in `auth`.

pub mod auth;
