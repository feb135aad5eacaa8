//! Portfolio Page
//!
//! Project grid with tag badges and tilt hover.

use leptos::*;

use crate::api::models::PageManifest;
use crate::components::{ProjectCardSkeleton, TiltCard};
use crate::loader::BoundaryHandle;
use crate::state::use_site_data;

/// Portfolio page component
#[component]
pub fn Portfolio(manifest: PageManifest) -> impl IntoView {
    let site = use_site_data();
    let boundary = use_context::<BoundaryHandle>();

    {
        let site = site.clone();
        create_effect(move |_| {
            site.projects.load(boundary.clone());
        });
    }

    let projects = site.projects.rows;
    let loading = site.projects.loading;
    let error = site.projects.error;

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
                            {(0..6).map(|_| view! { <ProjectCardSkeleton /> }).collect_view()}
                        </div>
                    }
                    .into_view()
                } else if let Some(message) = error.get() {
                    view! { <p class="text-center text-red-400">{message}</p> }.into_view()
                } else {
                    view! {
                        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                            {projects
                                .get()
                                .into_iter()
                                .map(|project| view! {
                                    <TiltCard class="bg-gray-800 rounded-xl overflow-hidden">
                                        {project.image_url.clone().map(|url| view! {
                                            <img
                                                src=url
                                                alt=project.title.clone()
                                                class="w-full h-44 object-cover"
                                            />
                                        })}
                                        <div class="p-6">
                                            <h2 class="text-lg font-semibold mb-2">{project.title.clone()}</h2>
                                            <p class="text-sm text-gray-400 mb-4">{project.summary.clone()}</p>
                                            <div class="flex flex-wrap gap-2">
                                                {project.tags.iter().map(|tag| view! {
                                                    <span class="px-2 py-1 bg-gray-700 rounded text-xs text-gray-300">
                                                        {tag.clone()}
                                                    </span>
                                                }).collect_view()}
                                            </div>
                                        </div>
                                    </TiltCard>
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
