//! Top navigation bar shared by every page.

use leptos::prelude::*;

use crate::state::auth::{AuthState, AuthStatus};

/// Site-wide header with marketing navigation and an auth-aware account area.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let dashboard_href = move || {
        auth.get().role().map(|role| role.dashboard_path().to_owned()).unwrap_or_default()
    };
    let identity = move || {
        auth.get()
            .session
            .map(|session| {
                let who = session
                    .user
                    .as_ref()
                    .and_then(|user| user.name.clone())
                    .or_else(|| session.subject.clone())
                    .unwrap_or_else(|| "Signed in".to_owned());
                format!("{who} ({})", session.role.label())
            })
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        crate::state::auth::logout(auth);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"Be4Breach"</a>
            <nav class="site-header__nav">
                <a class="site-header__link" href="/about">"About"</a>
                <a class="site-header__link" href="/services">"Services"</a>
                <a class="site-header__link" href="/contact">"Contact"</a>
            </nav>
            <div class="site-header__account">
                <Show
                    when=move || auth.get().status == AuthStatus::Authenticated
                    fallback=|| {
                        view! {
                            <a class="site-header__link" href="/login">"Sign in"</a>
                            <a class="site-header__cta" href="/register">"Get started"</a>
                        }
                    }
                >
                    <a class="site-header__link" href=dashboard_href>"Dashboard"</a>
                    <span class="site-header__identity">{identity}</span>
                    <button class="site-header__cta" on:click=on_logout>"Sign out"</button>
                </Show>
            </div>
        </header>
    }
}
