//! Google SSO entry button.
//!
//! DESIGN
//! ======
//! The button asks the backend for the provider redirect URL and navigates
//! there; the identity provider later lands the user back on `/login` with
//! an `id_token` query parameter, which the login page exchanges through the
//! federated-login endpoint. Keeping the provider handshake on the backend
//! means no vendor script runs inside this bundle.

use leptos::prelude::*;

use crate::state::auth::Role;

/// "Continue with Google" button for a given login role.
///
/// Failures to obtain the redirect URL are reported through `on_error` so
/// the login form can surface them inline.
#[component]
pub fn GoogleSsoButton(role: Signal<Role>, on_error: Callback<String>) -> impl IntoView {
    let busy = RwSignal::new(false);

    let on_click = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::google_oauth_url(role.get_untracked()).await {
                    Ok(url) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&url);
                        }
                    }
                    Err(err) => {
                        on_error.run(err.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (role, on_error);
            busy.set(false);
        }
    };

    view! {
        <button class="sso-button" type="button" on:click=on_click disabled=move || busy.get()>
            {move || if busy.get() { "Opening Google sign-in..." } else { "Continue with Google" }}
        </button>
    }
}
