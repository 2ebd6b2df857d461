//! Login portal with role tabs, credential form, and Google SSO.
//!
//! SYSTEM CONTEXT
//! ==============
//! Client-side validation runs before any network call; the busy flag keeps
//! a submitted form from firing a second request while one is outstanding.
//! Navigation away from the portal is driven off the auth state becoming
//! `Authenticated`, so credential, federated, and pre-existing sessions all
//! leave through the same door.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::google_sso::GoogleSsoButton;
use crate::net::types::LoginRequest;
use crate::state::auth::{AuthState, AuthStatus, Role};

pub(crate) const MIN_PASSWORD_CHARS: usize = 8;

/// Minimal structural email check: one `@`, a dot somewhere in the domain,
/// no whitespace, no empty labels around the separators.
pub(crate) fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

pub(crate) fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if is_valid_email(email) {
        Ok(email.to_owned())
    } else {
        Err("Please enter a valid work email.")
    }
}

pub(crate) fn validate_password(raw: &str) -> Result<String, &'static str> {
    if raw.chars().count() < MIN_PASSWORD_CHARS {
        Err("Password must be at least 8 characters.")
    } else {
        Ok(raw.to_owned())
    }
}

/// Where to land after authenticating: back to the attempted page when it
/// belongs to the granted role's territory, otherwise the role's dashboard.
pub(crate) fn post_login_destination(role: Role, from: Option<&str>) -> String {
    match from {
        Some(path) if path.starts_with(role.dashboard_path()) => path.to_owned(),
        _ => role.dashboard_path().to_owned(),
    }
}

/// Login page with User/Admin tabs, credential form, and SSO.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let role = RwSignal::new(Role::User);
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);
    let form_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let sso_exchange_started = RwSignal::new(false);

    let expired_notice = move || query.with(|q| q.get("expired").is_some());

    // Leave the portal whenever a session is (or becomes) established.
    let navigate_authed = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if state.status == AuthStatus::Authenticated {
            if let Some(granted) = state.role() {
                let from = query.with_untracked(|q| q.get("from"));
                navigate_authed(
                    &post_login_destination(granted, from.as_deref()),
                    NavigateOptions { replace: true, ..NavigateOptions::default() },
                );
            }
        }
    });

    // Complete a federated login when the provider lands back here with an
    // ID token in the query string.
    Effect::new(move || {
        let Some(id_token) = query.with(|q| q.get("id_token")) else {
            return;
        };
        if sso_exchange_started.get_untracked() {
            return;
        }
        sso_exchange_started.set(true);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let ok = crate::state::auth::login_with_google(auth, &id_token).await;
            if !ok {
                let message = auth
                    .get_untracked()
                    .error
                    .unwrap_or_else(|| "Google sign-in failed. Please try again.".to_owned());
                form_error.set(Some(message));
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id_token;
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        form_error.set(None);

        let email_result = validate_email(&email.get());
        let password_result = validate_password(&password.get());
        email_error.set(email_result.as_ref().err().copied());
        password_error.set(password_result.as_ref().err().copied());
        let (Ok(email_value), Ok(password_value)) = (email_result, password_result) else {
            return;
        };

        busy.set(true);
        let selected = role.get();
        let request = LoginRequest { email: email_value, password: password_value };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let ok = crate::state::auth::login(auth, selected, &request).await;
            if !ok {
                let message = auth
                    .get_untracked()
                    .error
                    .unwrap_or_else(|| "Unable to sign in. Please verify your credentials.".to_owned());
                form_error.set(Some(message));
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (selected, request);
            busy.set(false);
        }
    };

    let tab_class = move |tab: Role| {
        if role.get() == tab { "login-tab login-tab--active" } else { "login-tab" }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Be4Breach"</h1>
                <p class="login-card__subtitle">"Role-based access built for zero-trust security."</p>

                <Show when=expired_notice>
                    <p class="login-notice">"Your session has expired. Please sign in again."</p>
                </Show>

                <div class="login-tabs" role="tablist">
                    <button class=move || tab_class(Role::User) on:click=move |_| role.set(Role::User)>
                        "User Login"
                    </button>
                    <button class=move || tab_class(Role::Admin) on:click=move |_| role.set(Role::Admin)>
                        "Admin Login"
                    </button>
                </div>

                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@company.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <Show when=move || email_error.get().is_some()>
                        <p class="login-field-error">{move || email_error.get().unwrap_or_default()}</p>
                    </Show>
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || password_error.get().is_some()>
                        <p class="login-field-error">{move || password_error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <Show when=move || form_error.get().is_some()>
                    <p class="login-message login-message--error">
                        {move || form_error.get().unwrap_or_default()}
                    </p>
                </Show>

                <div class="login-divider"></div>
                <GoogleSsoButton
                    role=Signal::derive(move || role.get())
                    on_error=Callback::new(move |message: String| form_error.set(Some(message)))
                />
                <p class="login-card__footer">
                    "No account yet? " <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
