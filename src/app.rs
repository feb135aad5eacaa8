//! App Root Component
//!
//! Main application component with routing and global providers. Every
//! route mounts through the lazy route factory inside its own retry
//! boundary.

use chrono::Datelike;
use leptos::*;
use leptos_router::*;
use std::rc::Rc;

use crate::api;
use crate::api::models::PageManifest;
use crate::components::{CursorTrail, Nav, Toast};
use crate::loader::{
    preload_icons, preload_route, provide_loader_registry, use_loader_registry, ImportFn,
    LazyRoute, LoadError, LoadOptions, PageModule, RetryBoundary, COMMON_ICONS,
};
use crate::pages::{Blog, Contact, Dashboard, Home, Portfolio, Services};
use crate::state::{provide_global_state, provide_site_data};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state, loader caches and table stores to all components
    provide_global_state();
    provide_loader_registry();
    provide_site_data();

    let registry = use_loader_registry();
    preload_icons(Rc::clone(&registry), &COMMON_ICONS);

    // Services is the most common next hop from the landing page.
    preload_route(
        registry,
        "services",
        services_import(),
        LoadOptions {
            preload: true,
            ..Default::default()
        },
    );

    view! {
        <Router>
            <div class="min-h-screen bg-gray-950 text-white flex flex-col">
                <Nav />
                <CursorTrail />

                <main class="flex-1">
                    <Routes>
                        <Route path="/" view=HomeRoute />
                        <Route path="/services" view=ServicesRoute />
                        <Route path="/portfolio" view=PortfolioRoute />
                        <Route path="/blog" view=BlogRoute />
                        <Route path="/contact" view=ContactRoute />
                        <Route path="/dashboard" view=DashboardRoute />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Build the import function for a marketing route: fetch the page's
/// content manifest, then hand back the page constructor.
fn page_import(slug: &'static str, render: fn(PageManifest) -> View) -> ImportFn {
    Rc::new(move || {
        Box::pin(async move {
            let manifest = api::fetch_page_manifest(slug)
                .await
                .map_err(LoadError::network)?;
            Ok(PageModule::new(move || render(manifest.clone())))
        })
    })
}

fn services_import() -> ImportFn {
    page_import("services", |manifest| {
        view! { <Services manifest=manifest /> }.into_view()
    })
}

/// Console sink for errors the retry boundaries see.
fn boundary_logger() -> Callback<LoadError> {
    Callback::new(|error: LoadError| {
        web_sys::console::error_1(&format!("Boundary caught: {}", error).into());
    })
}

#[component]
fn HomeRoute() -> impl IntoView {
    view! {
        <RetryBoundary on_error=boundary_logger()>
            <LazyRoute
                name="home"
                import=page_import("home", |manifest| {
                    view! { <Home manifest=manifest /> }.into_view()
                })
            />
        </RetryBoundary>
    }
}

#[component]
fn ServicesRoute() -> impl IntoView {
    view! {
        <RetryBoundary on_error=boundary_logger()>
            <LazyRoute name="services" import=services_import() />
        </RetryBoundary>
    }
}

#[component]
fn PortfolioRoute() -> impl IntoView {
    view! {
        <RetryBoundary on_error=boundary_logger()>
            <LazyRoute
                name="portfolio"
                import=page_import("portfolio", |manifest| {
                    view! { <Portfolio manifest=manifest /> }.into_view()
                })
            />
        </RetryBoundary>
    }
}

#[component]
fn BlogRoute() -> impl IntoView {
    view! {
        <RetryBoundary on_error=boundary_logger()>
            <LazyRoute
                name="blog"
                import=page_import("blog", |manifest| {
                    view! { <Blog manifest=manifest /> }.into_view()
                })
            />
        </RetryBoundary>
    }
}

#[component]
fn ContactRoute() -> impl IntoView {
    view! {
        <RetryBoundary on_error=boundary_logger()>
            <LazyRoute
                name="contact"
                import=page_import("contact", |manifest| {
                    view! { <Contact manifest=manifest /> }.into_view()
                })
            />
        </RetryBoundary>
    }
}

#[component]
fn DashboardRoute() -> impl IntoView {
    // The dashboard ships with the app shell; its import resolves locally.
    let import: ImportFn = Rc::new(|| {
        Box::pin(async { Ok(PageModule::new(|| view! { <Dashboard /> }.into_view())) })
    });

    view! {
        <RetryBoundary on_error=boundary_logger()>
            <LazyRoute name="dashboard" import=import.clone() />
        </RetryBoundary>
    }
}

/// Footer component with the global activity indicator
#[component]
fn Footer() -> impl IntoView {
    let state = crate::state::use_global_state();
    let year = chrono::Utc::now().year();

    view! {
        <footer class="bg-gray-900 border-t border-gray-800 py-6">
            <div class="container mx-auto px-4 flex items-center justify-between text-sm text-gray-500">
                <span>{format!("© {} Atelier Digital", year)}</span>

                {move || {
                    if state.loading.get() {
                        view! {
                            <span class="flex items-center space-x-2 text-primary-400">
                                <span class="loading-spinner w-4 h-4" />
                                <span>"Saving..."</span>
                            </span>
                        }
                        .into_view()
                    } else {
                        view! { <span>"Made with care in the studio"</span> }.into_view()
                    }
                }}
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Back Home"
            </A>
        </div>
    }
}
