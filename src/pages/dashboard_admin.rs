//! Admin dashboard: role-guarded command center.
//!
//! SYSTEM CONTEXT
//! ==============
//! Summary figures and the service catalog load in parallel with no
//! ordering between their completions, but they succeed or fail as one: an
//! auth rejection on either request invalidates the whole session, and any
//! other failure renders the error state instead of a partial view.

#[cfg(test)]
#[path = "dashboard_admin_test.rs"]
mod dashboard_admin_test;

use leptos::prelude::*;

use crate::components::metric_card::{MetricCard, format_count, format_percent};
use crate::components::role_guard::RoleGuard;
use crate::net::api::ApiError;
use crate::net::types::{AdminSummary, ServiceItem};
use crate::state::auth::{AuthState, Role};

/// Combined outcome of the parallel summary + services load.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum AdminLoad {
    Ready(AdminSummary, Vec<ServiceItem>),
    /// Either request was rejected with 401/403; the session is gone.
    SessionExpired,
    Failed(String),
}

/// Collapse the pair of results into one outcome. Auth failures dominate;
/// any other failure fails the load wholesale rather than rendering the
/// half that happened to succeed.
pub(crate) fn collapse(
    summary: Result<AdminSummary, ApiError>,
    services: Result<Vec<ServiceItem>, ApiError>,
) -> AdminLoad {
    if summary.as_ref().err().is_some_and(ApiError::is_auth_error)
        || services.as_ref().err().is_some_and(ApiError::is_auth_error)
    {
        return AdminLoad::SessionExpired;
    }
    match (summary, services) {
        (Ok(summary), Ok(services)) => AdminLoad::Ready(summary, services),
        (Err(err), _) | (_, Err(err)) => AdminLoad::Failed(err.to_string()),
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <RoleGuard required=Role::Admin>
            <AdminDashboardContent/>
        </RoleGuard>
    }
}

#[component]
fn AdminDashboardContent() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let summary = RwSignal::new(AdminSummary::default());
    let services = RwSignal::new(Vec::<ServiceItem>::new());
    let loading = RwSignal::new(true);
    let banner = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let (summary_result, services_result) =
                futures::join!(crate::net::api::admin_summary(), crate::net::api::fetch_services());
            if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            match collapse(summary_result, services_result) {
                AdminLoad::Ready(data, catalog) => {
                    summary.set(data);
                    services.set(catalog);
                    banner.set(None);
                }
                AdminLoad::SessionExpired => {
                    crate::state::auth::logout(auth);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login?expired=1");
                    }
                }
                AdminLoad::Failed(message) => {
                    leptos::logging::warn!("admin dashboard load failed: {message}");
                    banner.set(Some("Unable to load dashboard data at the moment.".to_owned()));
                }
            }
            loading.set(false);
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }

    let hint = move || {
        if loading.get() { "Syncing SOC telemetry...".to_owned() } else { "Updated from backend API.".to_owned() }
    };

    view! {
        <section class="dashboard-page">
            <p class="dashboard-page__kicker">"Admin Dashboard"</p>
            <h1>"Security leadership command center."</h1>

            <Show when=move || banner.get().is_some()>
                <div class="dashboard-banner dashboard-banner--error">
                    {move || banner.get().unwrap_or_default()}
                </div>
            </Show>

            <div class="dashboard-metrics">
                <MetricCard
                    label="Active incidents"
                    value=Signal::derive(move || format_count(summary.get().incidents))
                    hint=Signal::derive(hint)
                />
                <MetricCard
                    label="Compliance score"
                    value=Signal::derive(move || format_percent(summary.get().compliance_score))
                    hint=Signal::derive(hint)
                />
                <MetricCard
                    label="Active clients"
                    value=Signal::derive(move || format_count(summary.get().active_clients))
                    hint=Signal::derive(hint)
                />
            </div>

            <h2>"Service delivery"</h2>
            <div class="dashboard-services">
                <For
                    each=move || services.get()
                    key=|service| service.id.clone()
                    children=move |service: ServiceItem| {
                        view! {
                            <div class="service-card">
                                <h3>{service.name}</h3>
                                <p>{service.description}</p>
                            </div>
                        }
                    }
                />
            </div>
        </section>
    }
}
