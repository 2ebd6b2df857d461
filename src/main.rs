//! SSR host binary.
//!
//! Renders the app shell server-side and serves the hydration bundle from
//! `/pkg`. All `/api/v1/*` traffic goes to the external backend, so this
//! binary carries no API routes of its own.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::services::ServeDir;

    use be4breach_web::app;

    tracing_subscriber::fmt::init();

    let conf = get_configuration(None).expect("leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = std::path::PathBuf::from(leptos_options.site_root.as_ref());
    let routes = generate_route_list(app::App);

    let router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || app::shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .route("/healthz", get(|| async { StatusCode::OK }))
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(addr).await.expect("failed to bind");
    tracing::info!(%addr, "be4breach-web listening");
    axum::serve(listener, router).await.expect("server failed");
}

#[cfg(not(feature = "ssr"))]
fn main() {}
