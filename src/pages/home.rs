//! Marketing home page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="hero">
            <p class="hero__kicker">"Cybersecurity, before the breach"</p>
            <h1>"Predict threats and close security gaps before they impact your business."</h1>
            <p class="hero__lede">
                "Be4Breach pairs continuous monitoring with hands-on offensive testing so your
                 team sees weaknesses the way attackers do."
            </p>
            <div class="hero__actions">
                <a class="hero__cta" href="/register">"Get started"</a>
                <a class="hero__link" href="/services">"Explore services"</a>
            </div>
        </section>

        <section class="home-highlights">
            <div class="highlight-card">
                <h2>"Offense-informed defense"</h2>
                <p>"Red-team findings feed directly into remediation plans and SOC playbooks."</p>
            </div>
            <div class="highlight-card">
                <h2>"Always-on monitoring"</h2>
                <p>"24/7 detection and response through our CoE and SOC labs."</p>
            </div>
            <div class="highlight-card">
                <h2>"Compliance, continuously"</h2>
                <p>"Track GDPR, ISO, and NIST readiness from a single dashboard."</p>
            </div>
        </section>
    }
}
