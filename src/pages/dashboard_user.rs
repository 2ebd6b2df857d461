//! User dashboard: role-guarded security overview.
//!
//! SYSTEM CONTEXT
//! ==============
//! The summary fetch carries the bearer token; a 401/403 answer means the
//! session is no longer valid, so the page logs out and routes back to the
//! login portal with an expiry notice. Other failures surface as a banner
//! and leave the session untouched; a network blip is not a logout.

#[cfg(test)]
#[path = "dashboard_user_test.rs"]
mod dashboard_user_test;

use leptos::prelude::*;

use crate::components::metric_card::{MetricCard, format_count, format_percent};
use crate::components::role_guard::RoleGuard;
use crate::net::api::ApiError;
use crate::net::types::UserSummary;
use crate::state::auth::{AuthState, Role};

/// How a finished summary fetch should be applied.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum UserLoad {
    Ready(UserSummary),
    /// The backend rejected the bearer token; the session is gone.
    SessionExpired,
    Failed(String),
}

pub(crate) fn classify(result: Result<UserSummary, ApiError>) -> UserLoad {
    match result {
        Ok(summary) => UserLoad::Ready(summary),
        Err(err) if err.is_auth_error() => UserLoad::SessionExpired,
        Err(err) => UserLoad::Failed(err.to_string()),
    }
}

#[component]
pub fn UserDashboardPage() -> impl IntoView {
    view! {
        <RoleGuard required=Role::User>
            <UserDashboardContent/>
        </RoleGuard>
    }
}

#[component]
fn UserDashboardContent() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let summary = RwSignal::new(UserSummary::default());
    let loading = RwSignal::new(true);
    let banner = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let outcome = classify(crate::net::api::user_summary().await);
            if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            match outcome {
                UserLoad::Ready(data) => {
                    summary.set(data);
                    banner.set(None);
                }
                UserLoad::SessionExpired => {
                    crate::state::auth::logout(auth);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/login?expired=1");
                    }
                }
                UserLoad::Failed(message) => {
                    leptos::logging::warn!("user summary fetch failed: {message}");
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

    let monitoring = move || {
        summary.get().monitoring_status.unwrap_or_else(|| "--".to_owned())
    };
    let hint = move || {
        if loading.get() { "Syncing security telemetry...".to_owned() } else { "Updated from backend API.".to_owned() }
    };

    view! {
        <section class="dashboard-page">
            <p class="dashboard-page__kicker">"User Dashboard"</p>
            <h1>"Your Be4Breach security overview."</h1>

            <Show when=move || banner.get().is_some()>
                <div class="dashboard-banner dashboard-banner--error">
                    {move || banner.get().unwrap_or_default()}
                </div>
            </Show>

            <div class="dashboard-metrics">
                <MetricCard
                    label="Open alerts"
                    value=Signal::derive(move || format_count(summary.get().alerts))
                    hint=Signal::derive(hint)
                />
                <MetricCard
                    label="Compliance score"
                    value=Signal::derive(move || format_percent(summary.get().compliance_score))
                    hint=Signal::derive(hint)
                />
                <MetricCard
                    label="Monitoring status"
                    value=Signal::derive(monitoring)
                    hint=Signal::derive(hint)
                />
            </div>

            <div class="dashboard-links">
                <a class="dashboard-link" href="/services">"Review services"</a>
                <a class="dashboard-link" href="/contact">"Request an update"</a>
            </div>
        </section>
    }
}
