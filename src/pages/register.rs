//! Registration page for new user accounts.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::RegisterRequest;
use crate::pages::login::{validate_email, validate_password};
use crate::state::auth::{AuthState, AuthStatus, Role};

pub(crate) fn validate_name(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.chars().count() < 2 {
        Err("Please enter your full name.")
    } else {
        Ok(name.to_owned())
    }
}

/// Empty or whitespace-only company counts as absent.
pub(crate) fn normalize_company(raw: &str) -> Option<String> {
    let company = raw.trim();
    if company.is_empty() { None } else { Some(company.to_owned()) }
}

/// Registration form; a successful registration signs the user in and lands
/// on the user dashboard.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let name_error = RwSignal::new(None::<&'static str>);
    let email_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);
    let form_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let navigate_authed = navigate.clone();
    Effect::new(move || {
        if auth.get().status == AuthStatus::Authenticated {
            navigate_authed(
                Role::User.dashboard_path(),
                NavigateOptions { replace: true, ..NavigateOptions::default() },
            );
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        form_error.set(None);

        let name_result = validate_name(&name.get());
        let email_result = validate_email(&email.get());
        let password_result = validate_password(&password.get());
        name_error.set(name_result.as_ref().err().copied());
        email_error.set(email_result.as_ref().err().copied());
        password_error.set(password_result.as_ref().err().copied());
        let (Ok(name_value), Ok(email_value), Ok(password_value)) =
            (name_result, email_result, password_result)
        else {
            return;
        };

        busy.set(true);
        let request = RegisterRequest {
            name: name_value,
            email: email_value,
            password: password_value,
            company: normalize_company(&company.get()),
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let ok = crate::state::auth::register(auth, &request).await;
            if !ok {
                let message = auth
                    .get_untracked()
                    .error
                    .unwrap_or_else(|| "Registration failed. Please try again.".to_owned());
                form_error.set(Some(message));
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    view! {
        <div class="register-page">
            <div class="register-card">
                <h1>"Create your Be4Breach account"</h1>
                <p class="register-card__subtitle">
                    "Get visibility into your security posture in minutes."
                </p>
                <form class="register-form" on:submit=on_submit>
                    <input
                        class="register-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <Show when=move || name_error.get().is_some()>
                        <p class="register-field-error">{move || name_error.get().unwrap_or_default()}</p>
                    </Show>
                    <input
                        class="register-input"
                        type="email"
                        placeholder="Work email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <Show when=move || email_error.get().is_some()>
                        <p class="register-field-error">{move || email_error.get().unwrap_or_default()}</p>
                    </Show>
                    <input
                        class="register-input"
                        type="password"
                        placeholder="Password (8+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || password_error.get().is_some()>
                        <p class="register-field-error">{move || password_error.get().unwrap_or_default()}</p>
                    </Show>
                    <input
                        class="register-input"
                        type="text"
                        placeholder="Company (optional)"
                        prop:value=move || company.get()
                        on:input=move |ev| company.set(event_target_value(&ev))
                    />
                    <button class="register-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <Show when=move || form_error.get().is_some()>
                    <p class="register-message register-message--error">
                        {move || form_error.get().unwrap_or_default()}
                    </p>
                </Show>
                <p class="register-card__footer">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
