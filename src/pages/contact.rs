//! Contact page with a validated enquiry form.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::net::types::ContactRequest;
use crate::pages::login::validate_email;
use crate::pages::register::{normalize_company, validate_name};

pub(crate) const MIN_MESSAGE_CHARS: usize = 10;

pub(crate) fn validate_message(raw: &str) -> Result<String, &'static str> {
    let message = raw.trim();
    if message.chars().count() < MIN_MESSAGE_CHARS {
        Err("Please tell us a bit more (at least 10 characters).")
    } else {
        Ok(message.to_owned())
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let name_error = RwSignal::new(None::<&'static str>);
    let email_error = RwSignal::new(None::<&'static str>);
    let message_error = RwSignal::new(None::<&'static str>);
    let form_error = RwSignal::new(None::<String>);
    let sent = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        form_error.set(None);

        let name_result = validate_name(&name.get());
        let email_result = validate_email(&email.get());
        let message_result = validate_message(&message.get());
        name_error.set(name_result.as_ref().err().copied());
        email_error.set(email_result.as_ref().err().copied());
        message_error.set(message_result.as_ref().err().copied());
        let (Ok(name_value), Ok(email_value), Ok(message_value)) =
            (name_result, email_result, message_result)
        else {
            return;
        };

        busy.set(true);
        let request = ContactRequest {
            name: name_value,
            email: email_value,
            company: normalize_company(&company.get()),
            message: message_value,
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::submit_contact(&request).await {
                Ok(_) => sent.set(true),
                Err(err) => form_error.set(Some(err.to_string())),
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
        <section class="contact-page">
            <p class="contact-page__kicker">"Contact"</p>
            <h1>"Talk to a security consultant."</h1>
            <p class="contact-page__details">"Contact: +91 9461915152 | contact@be4breach.com"</p>

            <Show
                when=move || !sent.get()
                fallback=|| {
                    view! {
                        <p class="contact-success">
                            "Thanks, your request was received. We will get back to you shortly."
                        </p>
                    }
                }
            >
                <form class="contact-form" on:submit=on_submit>
                    <input
                        class="contact-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <Show when=move || name_error.get().is_some()>
                        <p class="contact-field-error">{move || name_error.get().unwrap_or_default()}</p>
                    </Show>
                    <input
                        class="contact-input"
                        type="email"
                        placeholder="Work email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <Show when=move || email_error.get().is_some()>
                        <p class="contact-field-error">{move || email_error.get().unwrap_or_default()}</p>
                    </Show>
                    <input
                        class="contact-input"
                        type="text"
                        placeholder="Company (optional)"
                        prop:value=move || company.get()
                        on:input=move |ev| company.set(event_target_value(&ev))
                    />
                    <textarea
                        class="contact-input contact-input--area"
                        placeholder="How can we help?"
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                    <Show when=move || message_error.get().is_some()>
                        <p class="contact-field-error">{move || message_error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="contact-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Sending..." } else { "Send message" }}
                    </button>
                </form>
            </Show>

            <Show when=move || form_error.get().is_some()>
                <p class="contact-message contact-message--error">
                    {move || form_error.get().unwrap_or_default()}
                </p>
            </Show>
        </section>
    }
}
