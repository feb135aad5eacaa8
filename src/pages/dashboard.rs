//! Dashboard Page
//!
//! Client-facing management view: CRUD over the hosted tables, inbound
//! messages, the route-load diagnostics panel and the API endpoint
//! setting.

use leptos::*;

use crate::api;
use crate::api::models::{AboutSection, NewProject, NewService, NewTestimonial};
use crate::components::RowSkeleton;
use crate::loader::{use_loader_registry, BoundaryHandle};
use crate::state::{use_global_state, use_site_data};

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let site = use_site_data();
    let boundary = use_context::<BoundaryHandle>();

    {
        let site = site.clone();
        create_effect(move |_| {
            site.projects.load(boundary.clone());
            site.services.load(boundary.clone());
            site.testimonials.load(boundary.clone());
            site.messages.load(boundary.clone());
            site.about.load(boundary.clone());
            site.carousel.load(boundary.clone());
        });
    }

    view! {
        <div class="container mx-auto px-4 py-10 space-y-10">
            <header class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Manage site content and review inbound leads"</p>
                </div>
                <div class="text-sm text-gray-500">
                    {format!("Today: {}", chrono::Utc::now().format("%Y-%m-%d"))}
                </div>
            </header>

            <div class="grid lg:grid-cols-2 gap-8">
                <ProjectsPanel />
                <ServicesPanel />
                <TestimonialsPanel />
                <MessagesPanel />
                <AboutPanel />
                <CarouselPanel />
            </div>

            <DiagnosticsPanel />
            <SettingsPanel />
        </div>
    }
}

#[component]
fn PanelShell(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6 space-y-4">
            <h2 class="text-xl font-semibold">{title}</h2>
            {children()}
        </section>
    }
}

#[component]
fn ProjectsPanel() -> impl IntoView {
    let state = use_global_state();
    let site = use_site_data();
    let store = site.projects.clone();

    let title = create_rw_signal(String::new());
    let slug = create_rw_signal(String::new());
    let summary = create_rw_signal(String::new());
    let featured = create_rw_signal(false);

    let create_store = store.clone();
    let on_create = move |event: ev::SubmitEvent| {
        event.prevent_default();
        let payload = NewProject {
            title: title.get().trim().to_string(),
            slug: slug.get().trim().to_string(),
            summary: summary.get().trim().to_string(),
            featured: featured.get(),
            ..Default::default()
        };
        if payload.title.is_empty() || payload.slug.is_empty() {
            state.show_error("Project title and slug are required");
            return;
        }
        title.set(String::new());
        slug.set(String::new());
        summary.set(String::new());
        featured.set(false);
        create_store.mutate(
            state,
            async move { api::create_project(&payload).await },
            "Project created",
        );
    };

    let list_store = store.clone();
    let delete_store = store.clone();

    view! {
        <PanelShell title="Projects">
            {move || {
                if list_store.loading.get() {
                    view! { <RowSkeleton /> }.into_view()
                } else {
                    let delete_store = delete_store.clone();
                    view! {
                        <ul class="space-y-2">
                            {list_store.rows.get().into_iter().map(|project| {
                                let store = delete_store.clone();
                                let id = project.id;
                                view! {
                                    <li class="flex items-center justify-between bg-gray-900 rounded-lg px-4 py-3">
                                        <div>
                                            <span class="font-medium">{project.title}</span>
                                            {project.featured.then(|| view! {
                                                <span class="ml-2 px-2 py-0.5 bg-primary-600/30 text-primary-300 rounded text-xs">
                                                    "featured"
                                                </span>
                                            })}
                                            <p class="text-xs text-gray-500">{project.slug}</p>
                                        </div>
                                        <button
                                            class="text-red-400 hover:text-red-300 text-sm"
                                            on:click=move |_| store.mutate(
                                                state,
                                                async move { api::delete_project(id).await },
                                                "Project deleted",
                                            )
                                        >
                                            "Delete"
                                        </button>
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    }
                    .into_view()
                }
            }}

            <form class="space-y-2 pt-2 border-t border-gray-700" on:submit=on_create>
                <div class="grid grid-cols-2 gap-2">
                    <input
                        type="text"
                        placeholder="Title"
                        class="bg-gray-900 border border-gray-700 rounded px-3 py-2 text-sm"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Slug"
                        class="bg-gray-900 border border-gray-700 rounded px-3 py-2 text-sm"
                        prop:value=move || slug.get()
                        on:input=move |ev| slug.set(event_target_value(&ev))
                    />
                </div>
                <input
                    type="text"
                    placeholder="Summary"
                    class="w-full bg-gray-900 border border-gray-700 rounded px-3 py-2 text-sm"
                    prop:value=move || summary.get()
                    on:input=move |ev| summary.set(event_target_value(&ev))
                />
                <label class="flex items-center space-x-2 text-sm text-gray-400">
                    <input
                        type="checkbox"
                        prop:checked=move || featured.get()
                        on:change=move |ev| featured.set(event_target_checked(&ev))
                    />
                    <span>"Feature on home page"</span>
                </label>
                <button
                    type="submit"
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded text-sm font-medium"
                >
                    "Add project"
                </button>
            </form>
        </PanelShell>
    }
}

#[component]
fn ServicesPanel() -> impl IntoView {
    let state = use_global_state();
    let site = use_site_data();
    let store = site.services.clone();

    let title = create_rw_signal(String::new());
    let summary = create_rw_signal(String::new());
    let icon = create_rw_signal(String::new());

    let create_store = store.clone();
    let on_create = move |event: ev::SubmitEvent| {
        event.prevent_default();
        let payload = NewService {
            title: title.get().trim().to_string(),
            summary: summary.get().trim().to_string(),
            icon: icon.get().trim().to_string(),
            position: 0,
        };
        if payload.title.is_empty() {
            state.show_error("Service title is required");
            return;
        }
        title.set(String::new());
        summary.set(String::new());
        icon.set(String::new());
        create_store.mutate(
            state,
            async move { api::create_service(&payload).await },
            "Service created",
        );
    };

    let list_store = store.clone();
    let delete_store = store.clone();

    view! {
        <PanelShell title="Services">
            {move || {
                if list_store.loading.get() {
                    view! { <RowSkeleton /> }.into_view()
                } else {
                    let delete_store = delete_store.clone();
                    view! {
                        <ul class="space-y-2">
                            {list_store.rows.get().into_iter().map(|service| {
                                let store = delete_store.clone();
                                let id = service.id;
                                view! {
                                    <li class="flex items-center justify-between bg-gray-900 rounded-lg px-4 py-3">
                                        <div>
                                            <span class="font-medium">{service.title}</span>
                                            <p class="text-xs text-gray-500">{format!("icon: {}", service.icon)}</p>
                                        </div>
                                        <button
                                            class="text-red-400 hover:text-red-300 text-sm"
                                            on:click=move |_| store.mutate(
                                                state,
                                                async move { api::delete_service(id).await },
                                                "Service deleted",
                                            )
                                        >
                                            "Delete"
                                        </button>
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    }
                    .into_view()
                }
            }}

            <form class="space-y-2 pt-2 border-t border-gray-700" on:submit=on_create>
                <div class="grid grid-cols-2 gap-2">
                    <input
                        type="text"
                        placeholder="Title"
                        class="bg-gray-900 border border-gray-700 rounded px-3 py-2 text-sm"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Icon name"
                        class="bg-gray-900 border border-gray-700 rounded px-3 py-2 text-sm"
                        prop:value=move || icon.get()
                        on:input=move |ev| icon.set(event_target_value(&ev))
                    />
                </div>
                <input
                    type="text"
                    placeholder="Summary"
                    class="w-full bg-gray-900 border border-gray-700 rounded px-3 py-2 text-sm"
                    prop:value=move || summary.get()
                    on:input=move |ev| summary.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded text-sm font-medium"
                >
                    "Add service"
                </button>
            </form>
        </PanelShell>
    }
}

#[component]
fn TestimonialsPanel() -> impl IntoView {
    let state = use_global_state();
    let site = use_site_data();
    let store = site.testimonials.clone();

    let author = create_rw_signal(String::new());
    let quote = create_rw_signal(String::new());

    let create_store = store.clone();
    let on_create = move |event: ev::SubmitEvent| {
        event.prevent_default();
        let payload = NewTestimonial {
            author: author.get().trim().to_string(),
            quote: quote.get().trim().to_string(),
            published: false,
            ..Default::default()
        };
        if payload.author.is_empty() || payload.quote.is_empty() {
            state.show_error("Author and quote are required");
            return;
        }
        author.set(String::new());
        quote.set(String::new());
        create_store.mutate(
            state,
            async move { api::create_testimonial(&payload).await },
            "Testimonial created",
        );
    };

    let list_store = store.clone();
    let row_store = store.clone();

    view! {
        <PanelShell title="Testimonials">
            {move || {
                if list_store.loading.get() {
                    view! { <RowSkeleton /> }.into_view()
                } else {
                    let row_store = row_store.clone();
                    view! {
                        <ul class="space-y-2">
                            {list_store.rows.get().into_iter().map(|testimonial| {
                                let publish_store = row_store.clone();
                                let delete_store = row_store.clone();
                                let id = testimonial.id;
                                let published = testimonial.published;
                                view! {
                                    <li class="bg-gray-900 rounded-lg px-4 py-3 space-y-1">
                                        <div class="flex items-center justify-between">
                                            <span class="font-medium">{testimonial.author}</span>
                                            <div class="space-x-3 text-sm">
                                                <button
                                                    class="text-primary-400 hover:text-primary-300"
                                                    on:click=move |_| publish_store.mutate(
                                                        state,
                                                        async move {
                                                            api::set_testimonial_published(id, !published).await
                                                        },
                                                        if published { "Unpublished" } else { "Published" },
                                                    )
                                                >
                                                    {if published { "Unpublish" } else { "Publish" }}
                                                </button>
                                                <button
                                                    class="text-red-400 hover:text-red-300"
                                                    on:click=move |_| delete_store.mutate(
                                                        state,
                                                        async move { api::delete_testimonial(id).await },
                                                        "Testimonial deleted",
                                                    )
                                                >
                                                    "Delete"
                                                </button>
                                            </div>
                                        </div>
                                        <p class="text-sm text-gray-400 truncate">{testimonial.quote}</p>
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    }
                    .into_view()
                }
            }}

            <form class="space-y-2 pt-2 border-t border-gray-700" on:submit=on_create>
                <input
                    type="text"
                    placeholder="Author"
                    class="w-full bg-gray-900 border border-gray-700 rounded px-3 py-2 text-sm"
                    prop:value=move || author.get()
                    on:input=move |ev| author.set(event_target_value(&ev))
                />
                <textarea
                    rows="2"
                    placeholder="Quote"
                    class="w-full bg-gray-900 border border-gray-700 rounded px-3 py-2 text-sm"
                    prop:value=move || quote.get()
                    on:input=move |ev| quote.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded text-sm font-medium"
                >
                    "Add testimonial"
                </button>
            </form>
        </PanelShell>
    }
}

#[component]
fn MessagesPanel() -> impl IntoView {
    let state = use_global_state();
    let site = use_site_data();
    let store = site.messages.clone();

    let list_store = store.clone();
    let delete_store = store.clone();

    view! {
        <PanelShell title="Inbox">
            {move || {
                if list_store.loading.get() {
                    view! { <RowSkeleton /> }.into_view()
                } else if list_store.rows.get().is_empty() {
                    view! { <p class="text-sm text-gray-500">"No messages yet."</p> }.into_view()
                } else {
                    let delete_store = delete_store.clone();
                    view! {
                        <ul class="space-y-2">
                            {list_store.rows.get().into_iter().map(|message| {
                                let store = delete_store.clone();
                                let id = message.id;
                                view! {
                                    <li class="bg-gray-900 rounded-lg px-4 py-3 space-y-1">
                                        <div class="flex items-center justify-between">
                                            <span class="font-medium">{message.subject}</span>
                                            <button
                                                class="text-red-400 hover:text-red-300 text-sm"
                                                on:click=move |_| store.mutate(
                                                    state,
                                                    async move { api::delete_contact_message(id).await },
                                                    "Message deleted",
                                                )
                                            >
                                                "Delete"
                                            </button>
                                        </div>
                                        <p class="text-xs text-gray-500">
                                            {format!("{} <{}>", message.name, message.email)}
                                        </p>
                                        <p class="text-sm text-gray-400">{message.body}</p>
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    }
                    .into_view()
                }
            }}
        </PanelShell>
    }
}

#[component]
fn AboutPanel() -> impl IntoView {
    let site = use_site_data();
    let store = site.about.clone();

    let list_store = store.clone();

    view! {
        <PanelShell title="About Content">
            {move || {
                if list_store.loading.get() {
                    view! { <RowSkeleton /> }.into_view()
                } else {
                    view! {
                        <div class="space-y-4">
                            {list_store.rows.get().into_iter().map(|section| view! {
                                <AboutEditor section=section />
                            }).collect_view()}
                        </div>
                    }
                    .into_view()
                }
            }}
        </PanelShell>
    }
}

/// Inline editor for one about-content section.
#[component]
fn AboutEditor(section: AboutSection) -> impl IntoView {
    let state = use_global_state();
    let site = use_site_data();
    let store = site.about.clone();

    let id = section.id;
    let heading = create_rw_signal(section.heading.clone());
    let body = create_rw_signal(section.body.clone());

    view! {
        <div class="bg-gray-900 rounded-lg p-4 space-y-2">
            <p class="text-xs uppercase tracking-wide text-gray-500">{section.section.clone()}</p>
            <input
                type="text"
                class="w-full bg-gray-800 border border-gray-700 rounded px-3 py-2 text-sm"
                prop:value=move || heading.get()
                on:input=move |ev| heading.set(event_target_value(&ev))
            />
            <textarea
                rows="3"
                class="w-full bg-gray-800 border border-gray-700 rounded px-3 py-2 text-sm"
                prop:value=move || body.get()
                on:input=move |ev| body.set(event_target_value(&ev))
            />
            <button
                class="px-3 py-1.5 bg-primary-600 hover:bg-primary-700 rounded text-sm"
                on:click=move |_| {
                    let heading = heading.get();
                    let body = body.get();
                    store.mutate(
                        state,
                        async move { api::update_about_section(id, &heading, &body).await },
                        "Section saved",
                    )
                }
            >
                "Save"
            </button>
        </div>
    }
}

#[component]
fn CarouselPanel() -> impl IntoView {
    let state = use_global_state();
    let site = use_site_data();
    let store = site.carousel.clone();

    let list_store = store.clone();
    let delete_store = store.clone();

    view! {
        <PanelShell title="Home Carousel">
            {move || {
                if list_store.loading.get() {
                    view! { <RowSkeleton /> }.into_view()
                } else {
                    let delete_store = delete_store.clone();
                    view! {
                        <ul class="space-y-2">
                            {list_store.rows.get().into_iter().map(|item| {
                                let store = delete_store.clone();
                                let id = item.id;
                                view! {
                                    <li class="flex items-center justify-between bg-gray-900 rounded-lg px-4 py-3">
                                        <div class="flex items-center space-x-3 min-w-0">
                                            <img
                                                src=item.image_url.clone()
                                                class="w-12 h-8 object-cover rounded"
                                            />
                                            <span class="text-sm text-gray-400 truncate">
                                                {item.caption.unwrap_or_else(|| "(no caption)".to_string())}
                                            </span>
                                        </div>
                                        <button
                                            class="text-red-400 hover:text-red-300 text-sm"
                                            on:click=move |_| store.mutate(
                                                state,
                                                async move { api::delete_carousel_item(id).await },
                                                "Carousel item deleted",
                                            )
                                        >
                                            "Delete"
                                        </button>
                                    </li>
                                }
                            }).collect_view()}
                        </ul>
                    }
                    .into_view()
                }
            }}
        </PanelShell>
    }
}

/// Route-load attempt log, straight from the loader registry.
#[component]
fn DiagnosticsPanel() -> impl IntoView {
    let registry = use_loader_registry();
    let version = create_rw_signal(0u32);

    let refresh_registry = std::rc::Rc::clone(&registry);
    let clear_registry = std::rc::Rc::clone(&registry);

    view! {
        <PanelShell title="Route Diagnostics">
            <div class="flex items-center space-x-3 text-sm">
                <button
                    class="px-3 py-1.5 bg-gray-700 hover:bg-gray-600 rounded"
                    on:click=move |_| version.update(|version| *version += 1)
                >
                    "Refresh"
                </button>
                <button
                    class="px-3 py-1.5 bg-gray-700 hover:bg-gray-600 rounded"
                    on:click=move |_| {
                        clear_registry.reset_metrics();
                        version.update(|version| *version += 1);
                    }
                >
                    "Clear"
                </button>
            </div>

            {move || {
                let _ = version.get();
                let entries = refresh_registry.route_metrics();
                if entries.is_empty() {
                    return view! { <p class="text-sm text-gray-500">"No load attempts recorded."</p> }
                        .into_view();
                }
                view! {
                    <table class="w-full text-sm text-left">
                        <thead class="text-gray-500">
                            <tr>
                                <th class="py-1 pr-4">"Route"</th>
                                <th class="py-1 pr-4">"Time (ms)"</th>
                                <th class="py-1 pr-4">"Outcome"</th>
                                <th class="py-1">"Error"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {entries.into_iter().map(|entry| view! {
                                <tr class="border-t border-gray-700">
                                    <td class="py-1 pr-4">{entry.route}</td>
                                    <td class="py-1 pr-4">{format!("{:.1}", entry.load_time_ms)}</td>
                                    <td class="py-1 pr-4">
                                        {if entry.success {
                                            view! { <span class="text-green-400">"ok"</span> }
                                        } else {
                                            view! { <span class="text-red-400">"failed"</span> }
                                        }}
                                    </td>
                                    <td class="py-1 text-gray-500">
                                        {entry.error.unwrap_or_default()}
                                    </td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                }
                .into_view()
            }}
        </PanelShell>
    }
}

/// API endpoint override, kept in localStorage.
#[component]
fn SettingsPanel() -> impl IntoView {
    let state = use_global_state();
    let url = create_rw_signal(api::get_api_base());

    view! {
        <PanelShell title="Settings">
            <div class="flex items-center space-x-3">
                <input
                    type="text"
                    class="flex-1 bg-gray-900 border border-gray-700 rounded px-3 py-2 text-sm"
                    prop:value=move || url.get()
                    on:input=move |ev| url.set(event_target_value(&ev))
                />
                <button
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded text-sm font-medium"
                    on:click=move |_| {
                        api::set_api_base(url.get().trim());
                        state.show_success("API endpoint saved");
                    }
                >
                    "Save"
                </button>
            </div>
            <p class="text-xs text-gray-500">
                "Data endpoint used for all queries. Changes apply to new requests."
            </p>
        </PanelShell>
    }
}
