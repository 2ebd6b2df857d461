//! Role-gated wrapper for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dashboards wrap their content in `RoleGuard` so access decisions stay in
//! one place. While the startup refresh is still settling the guard renders
//! a neutral placeholder and takes no redirect action. Redirecting before
//! the stored session has been verified would bounce valid users through
//! the login page on every reload.

#[cfg(test)]
#[path = "role_guard_test.rs"]
mod role_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::{AuthState, AuthStatus, Role};

/// Outcome of evaluating the guard against the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GuardDecision {
    /// Auth is still settling; render a placeholder, do not redirect.
    Wait,
    /// Exact role match; render the protected content.
    Render,
    /// No session; send the visitor to the login page.
    RedirectLogin,
    /// Authenticated but with the wrong role.
    RedirectUnauthorized,
}

/// Evaluate the guard. Role comparison is exact-match only.
pub(crate) fn decide(state: &AuthState, required: Role) -> GuardDecision {
    match state.status {
        AuthStatus::Idle | AuthStatus::Loading => GuardDecision::Wait,
        AuthStatus::Authenticated => match state.role() {
            Some(role) if role == required => GuardDecision::Render,
            _ => GuardDecision::RedirectUnauthorized,
        },
        AuthStatus::Unauthenticated | AuthStatus::Error => GuardDecision::RedirectLogin,
    }
}

/// Login route carrying the attempted path so a successful sign-in with the
/// right role can return the user where they were headed.
pub(crate) fn login_redirect_target(attempted: &str) -> String {
    format!("/login?from={attempted}")
}

/// Wrapper that renders `children` only for an authenticated session whose
/// role exactly equals `required`.
#[component]
pub fn RoleGuard(required: Role, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        match decide(&state, required) {
            GuardDecision::RedirectLogin => {
                let attempted = location.pathname.get_untracked();
                navigate(
                    &login_redirect_target(&attempted),
                    NavigateOptions { replace: true, ..NavigateOptions::default() },
                );
            }
            GuardDecision::RedirectUnauthorized => {
                navigate(
                    "/unauthorized",
                    NavigateOptions { replace: true, ..NavigateOptions::default() },
                );
            }
            GuardDecision::Wait | GuardDecision::Render => {}
        }
    });

    view! {
        <Show
            when=move || decide(&auth.get(), required) == GuardDecision::Render
            fallback=move || {
                view! {
                    <div class="guard-screen">
                        <p class="guard-screen__message">
                            {move || {
                                if auth.get().is_settled() {
                                    "Redirecting..."
                                } else {
                                    "Checking access..."
                                }
                            }}
                        </p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
