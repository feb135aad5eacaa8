//! Services Page
//!
//! What the studio offers, one card per service row.

use leptos::*;

use crate::api::models::PageManifest;
use crate::components::ServiceCardSkeleton;
use crate::loader::{BoundaryHandle, Icon};
use crate::state::use_site_data;

/// Services page component
#[component]
pub fn Services(manifest: PageManifest) -> impl IntoView {
    let site = use_site_data();
    let boundary = use_context::<BoundaryHandle>();

    {
        let site = site.clone();
        create_effect(move |_| {
            site.services.load(boundary.clone());
        });
    }

    let services = site.services.rows;
    let loading = site.services.loading;
    let error = site.services.error;

    view! {
        <div class="container mx-auto px-4 py-16 space-y-10">
            <header class="text-center max-w-2xl mx-auto">
                <h1 class="text-4xl font-bold mb-4">{manifest.title.clone()}</h1>
                <p class="text-gray-400">{manifest.description.clone()}</p>
            </header>

            {move || {
                if loading.get() {
                    view! {
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                            <ServiceCardSkeleton />
                            <ServiceCardSkeleton />
                            <ServiceCardSkeleton />
                        </div>
                    }
                    .into_view()
                } else if let Some(message) = error.get() {
                    view! {
                        <p class="text-center text-red-400">{message}</p>
                    }
                    .into_view()
                } else {
                    view! {
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {services
                                .get()
                                .into_iter()
                                .map(|service| view! {
                                    <div class="bg-gray-800 rounded-xl p-6 hover:bg-gray-750 transition-colors">
                                        <div class="text-primary-400 mb-4">
                                            <Icon name=service.icon class="w-8 h-8" />
                                        </div>
                                        <h2 class="text-lg font-semibold mb-2">{service.title}</h2>
                                        <p class="text-sm text-gray-400">{service.summary}</p>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}
