//! Access-denied page for authenticated users with the wrong role.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let own_dashboard = move || auth.get().role().map(|role| role.dashboard_path().to_owned());

    view! {
        <section class="unauthorized-page">
            <h1>"Access restricted"</h1>
            <p>
                "Your account does not have permission to view that page. If you believe this is
                 a mistake, contact your Be4Breach administrator."
            </p>
            <div class="unauthorized-page__actions">
                <Show
                    when=move || own_dashboard().is_some()
                    fallback=|| view! { <a class="unauthorized-page__cta" href="/login">"Sign in"</a> }
                >
                    <a
                        class="unauthorized-page__cta"
                        href=move || own_dashboard().unwrap_or_default()
                    >
                        "Go to your dashboard"
                    </a>
                </Show>
                <a class="unauthorized-page__link" href="/">"Back to home"</a>
            </div>
        </section>
    }
}
