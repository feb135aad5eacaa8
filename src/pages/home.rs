//! Home Page
//!
//! Landing page: hero with ambient effects, the work carousel, featured
//! projects and published testimonials.

use leptos::*;
use leptos_router::*;

use crate::api::models::PageManifest;
use crate::components::{Carousel, ParticleField, ProjectCardSkeleton, TiltCard, Typewriter};
use crate::loader::BoundaryHandle;
use crate::state::use_site_data;

/// Home page component
#[component]
pub fn Home(manifest: PageManifest) -> impl IntoView {
    let site = use_site_data();
    let boundary = use_context::<BoundaryHandle>();

    {
        let site = site.clone();
        create_effect(move |_| {
            site.carousel.load(boundary.clone());
            site.projects.load(boundary.clone());
            site.testimonials.load(boundary.clone());
        });
    }

    let projects = site.projects.clone();
    let featured = move || {
        projects
            .rows
            .get()
            .into_iter()
            .filter(|project| project.featured)
            .take(3)
            .collect::<Vec<_>>()
    };
    let projects_loading = site.projects.loading;

    let testimonials = site.testimonials.rows;

    view! {
        <div class="space-y-20 pb-20">
            // Hero
            <section class="relative overflow-hidden bg-gray-900">
                <ParticleField />
                <div class="relative container mx-auto px-4 py-24 text-center">
                    <h1 class="text-4xl md:text-6xl font-bold mb-4">
                        {manifest.hero_heading.clone()}
                    </h1>
                    <div class="text-xl md:text-2xl text-primary-400 h-8 mb-6">
                        "We build "
                        <Typewriter phrases=vec![
                            "brand identities".to_string(),
                            "web experiences".to_string(),
                            "product launches".to_string(),
                        ] />
                    </div>
                    <p class="text-gray-400 max-w-2xl mx-auto mb-8">{manifest.hero_body.clone()}</p>
                    <A
                        href="/contact"
                        class="inline-block px-8 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                    >
                        "Start a project"
                    </A>
                </div>
            </section>

            // Recent work carousel
            <section class="container mx-auto px-4">
                <h2 class="text-2xl font-semibold mb-6">"Recent Work"</h2>
                <Carousel />
            </section>

            // Featured projects
            <section class="container mx-auto px-4">
                <h2 class="text-2xl font-semibold mb-6">"Featured Projects"</h2>
                {move || {
                    if projects_loading.get() {
                        view! {
                            <div class="grid md:grid-cols-3 gap-6">
                                <ProjectCardSkeleton />
                                <ProjectCardSkeleton />
                                <ProjectCardSkeleton />
                            </div>
                        }
                        .into_view()
                    } else {
                        view! {
                            <div class="grid md:grid-cols-3 gap-6">
                                {featured()
                                    .into_iter()
                                    .map(|project| view! {
                                        <TiltCard class="bg-gray-800 rounded-xl p-6">
                                            <h3 class="text-lg font-semibold mb-2">{project.title}</h3>
                                            <p class="text-sm text-gray-400">{project.summary}</p>
                                        </TiltCard>
                                    })
                                    .collect_view()}
                            </div>
                        }
                        .into_view()
                    }
                }}
            </section>

            // Testimonials
            <section class="container mx-auto px-4">
                <h2 class="text-2xl font-semibold mb-6">"What Clients Say"</h2>
                <div class="grid md:grid-cols-2 gap-6">
                    {move || {
                        testimonials
                            .get()
                            .into_iter()
                            .filter(|testimonial| testimonial.published)
                            .take(4)
                            .map(|testimonial| {
                                let attribution = match testimonial.company {
                                    Some(company) => format!("{}, {}", testimonial.author, company),
                                    None => testimonial.author,
                                };
                                view! {
                                    <blockquote class="bg-gray-800 rounded-xl p-6">
                                        <p class="text-gray-300 italic mb-4">
                                            {format!("\u{201c}{}\u{201d}", testimonial.quote)}
                                        </p>
                                        <footer class="text-sm text-gray-500">{attribution}</footer>
                                    </blockquote>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </section>
        </div>
    }
}
