//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{site_footer::SiteFooter, site_header::SiteHeader};
use crate::pages::{
    about::AboutPage, contact::ContactPage, dashboard_admin::AdminDashboardPage,
    dashboard_user::UserDashboardPage, home::HomePage, login::LoginPage, register::RegisterPage,
    services::ServicesPage, unauthorized::UnauthorizedPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context, kicks off the one-time startup refresh, and
/// runs the periodic session sweep for expiry and cross-tab changes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        // Startup verification must settle before guard redirects are
        // authoritative; guards render a neutral state until then.
        leptos::task::spawn_local(async move {
            crate::state::auth::refresh(auth).await;
        });

        let sweep_alive = Arc::new(AtomicBool::new(true));
        let sweep_alive_task = sweep_alive.clone();
        leptos::task::spawn_local(async move {
            use crate::state::auth::SweepAction;
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(30)).await;
                if !sweep_alive_task.load(Ordering::Relaxed) {
                    break;
                }
                let stored = crate::util::session_store::load();
                let action = crate::state::auth::sweep_action(
                    &auth.get_untracked(),
                    stored.as_ref(),
                    crate::util::jwt::now_ms(),
                );
                match action {
                    SweepAction::Keep => {}
                    SweepAction::Logout => crate::state::auth::logout(auth),
                    SweepAction::Resync => crate::state::auth::refresh(auth).await,
                }
            }
        });
        on_cleanup(move || sweep_alive.store(false, Ordering::Relaxed));
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/be4breach-web.css"/>
        <Title text="Be4Breach"/>

        <Router>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("services") view=ServicesPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("user"))
                        view=UserDashboardPage
                    />
                    <Route
                        path=(StaticSegment("dashboard"), StaticSegment("admin"))
                        view=AdminDashboardPage
                    />
                </Routes>
            </main>
            <SiteFooter/>
        </Router>
    }
}
