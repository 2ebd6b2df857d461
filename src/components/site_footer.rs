//! Site-wide footer.

use leptos::prelude::*;

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <span class="site-footer__brand">"Be4Breach"</span>
            <span class="site-footer__tagline">
                "Predict threats. Close gaps. Before the breach."
            </span>
            <span class="site-footer__contact">"contact@be4breach.com"</span>
        </footer>
    }
}
