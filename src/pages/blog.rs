//! Blog Page
//!
//! Placeholder shell; posts are authored on the hosted platform and the
//! listing ships with a later iteration.

use leptos::*;

use crate::api::models::PageManifest;

/// Blog page component
#[component]
pub fn Blog(manifest: PageManifest) -> impl IntoView {
    view! {
        <div class="container mx-auto px-4 py-16 space-y-10">
            <header class="text-center max-w-2xl mx-auto">
                <h1 class="text-4xl font-bold mb-4">{manifest.title.clone()}</h1>
                <p class="text-gray-400">{manifest.description.clone()}</p>
            </header>

            <div class="max-w-xl mx-auto text-center bg-gray-800 rounded-xl p-10">
                <div class="text-5xl mb-4">"✍️"</div>
                <h2 class="text-xl font-semibold mb-2">"Notes in progress"</h2>
                <p class="text-gray-400">
                    "We're writing up process breakdowns and case studies. Check back soon."
                </p>
            </div>
        </div>
    }
}
