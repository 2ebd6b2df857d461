//! About page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="about-page">
            <p class="about-page__kicker">"About Be4Breach"</p>
            <h1>"Security consultancy built around prediction, not reaction."</h1>
            <p>
                "Be4Breach is a cybersecurity company headquartered in Pune, India, focused on
                 predicting threats and closing security gaps before they impact business
                 operations."
            </p>
            <p>
                "Our consultants combine adversarial research with governance experience, so
                 engagements end with fixed findings and auditable controls, not just reports."
            </p>
        </section>
    }
}
