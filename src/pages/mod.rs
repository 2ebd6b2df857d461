//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Validation and result-shaping logic lives in plain
//! functions so it stays testable without a browser.

pub mod about;
pub mod contact;
pub mod dashboard_admin;
pub mod dashboard_user;
pub mod home;
pub mod login;
pub mod register;
pub mod services;
pub mod unauthorized;
