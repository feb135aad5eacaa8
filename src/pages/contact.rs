//! Contact Page
//!
//! Contact form submitting straight to the hosted `contact_messages`
//! table.

use leptos::*;

use crate::api;
use crate::api::models::{ContactPayload, PageManifest};
use crate::state::use_global_state;

/// Contact page component
#[component]
pub fn Contact(manifest: PageManifest) -> impl IntoView {
    let state = use_global_state();

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let subject = create_rw_signal(String::new());
    let body = create_rw_signal(String::new());
    let sending = create_rw_signal(false);

    let on_submit = move |event: ev::SubmitEvent| {
        event.prevent_default();

        let payload = ContactPayload {
            name: name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            subject: subject.get().trim().to_string(),
            body: body.get().trim().to_string(),
        };

        if payload.name.is_empty() || payload.email.is_empty() || payload.body.is_empty() {
            state.show_error("Name, email and message are required");
            return;
        }

        spawn_local(async move {
            sending.set(true);
            match api::submit_contact_message(&payload).await {
                Ok(()) => {
                    state.show_success("Thanks! We'll be in touch shortly.");
                    name.set(String::new());
                    email.set(String::new());
                    subject.set(String::new());
                    body.set(String::new());
                }
                Err(message) => state.show_error(&message),
            }
            sending.set(false);
        });
    };

    view! {
        <div class="container mx-auto px-4 py-16">
            <header class="text-center max-w-2xl mx-auto mb-10">
                <h1 class="text-4xl font-bold mb-4">{manifest.title.clone()}</h1>
                <p class="text-gray-400">{manifest.description.clone()}</p>
            </header>

            <form class="max-w-xl mx-auto space-y-4" on:submit=on_submit>
                <div class="grid md:grid-cols-2 gap-4">
                    <input
                        type="text"
                        placeholder="Your name"
                        class="w-full bg-gray-800 border border-gray-700 rounded-lg px-4 py-3 focus:outline-none focus:border-primary-500"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        type="email"
                        placeholder="Email address"
                        class="w-full bg-gray-800 border border-gray-700 rounded-lg px-4 py-3 focus:outline-none focus:border-primary-500"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </div>
                <input
                    type="text"
                    placeholder="Subject"
                    class="w-full bg-gray-800 border border-gray-700 rounded-lg px-4 py-3 focus:outline-none focus:border-primary-500"
                    prop:value=move || subject.get()
                    on:input=move |ev| subject.set(event_target_value(&ev))
                />
                <textarea
                    rows="6"
                    placeholder="Tell us about your project"
                    class="w-full bg-gray-800 border border-gray-700 rounded-lg px-4 py-3 focus:outline-none focus:border-primary-500"
                    prop:value=move || body.get()
                    on:input=move |ev| body.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    disabled=move || sending.get()
                    class="w-full px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:opacity-50 rounded-lg font-medium transition-colors"
                >
                    {move || if sending.get() { "Sending..." } else { "Send message" }}
                </button>
            </form>
        </div>
    }
}
