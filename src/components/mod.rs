//! Reusable view components.
//!
//! ARCHITECTURE
//! ============
//! Pages own route-scoped orchestration; these components render shared
//! chrome (`site_header`, `site_footer`), dashboard widgets (`metric_card`),
//! and the access-control wrapper (`role_guard`).

pub mod google_sso;
pub mod metric_card;
pub mod role_guard;
pub mod site_footer;
pub mod site_header;
