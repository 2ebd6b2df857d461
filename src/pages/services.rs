//! Public services catalog page.
//!
//! The catalog is fetched from the backend; when the service is unreachable
//! the page falls back to the built-in listing so the marketing route never
//! renders empty.

#[cfg(test)]
#[path = "services_test.rs"]
mod services_test;

use leptos::prelude::*;

use crate::net::types::ServiceItem;

/// Built-in catalog used when the backend cannot be reached.
pub(crate) fn fallback_services() -> Vec<ServiceItem> {
    let entries = [
        ("ai-security", "AI Security", "Secure AI models against adversarial and data threats."),
        (
            "cloud-security",
            "Cloud Security",
            "Protect multi-cloud environments with continuous monitoring.",
        ),
        (
            "red-teaming",
            "Penetration Testing & Red Teaming",
            "Simulate real-world attacks to expose vulnerabilities.",
        ),
        (
            "soc-monitoring",
            "SOC Monitoring",
            "24/7 detection and response through CoE & SOC labs.",
        ),
    ];
    entries
        .into_iter()
        .map(|(id, name, description)| ServiceItem {
            id: id.to_owned(),
            name: name.to_owned(),
            description: description.to_owned(),
        })
        .collect()
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    let services = RwSignal::new(fallback_services());

    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_services().await;
            if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                return;
            }
            match result {
                Ok(catalog) if !catalog.is_empty() => services.set(catalog),
                Ok(_) => {}
                Err(err) => {
                    leptos::logging::warn!("services fetch failed, using fallback: {err}");
                }
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <section class="services-page">
            <p class="services-page__kicker">"Services"</p>
            <h1>"Security services across the full attack surface."</h1>
            <div class="services-grid">
                <For
                    each=move || services.get()
                    key=|service| service.id.clone()
                    children=move |service: ServiceItem| {
                        view! {
                            <div class="service-card">
                                <h2>{service.name}</h2>
                                <p>{service.description}</p>
                            </div>
                        }
                    }
                />
            </div>
        </section>
    }
}
