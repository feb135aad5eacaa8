//! Lazy Route Factory
//!
//! Wraps a page-level import in retry-with-timeout logic. The produced
//! component suspends with a loading indicator while the import is in
//! flight, caches the module on first success, and renders an inline
//! error view once the attempt budget is spent.

use leptos::*;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::time::Duration;

use super::backoff::{retry_delay, BASE_RETRY_DELAY};
use super::error::LoadError;
use super::metrics::MetricsLog;
use super::registry::{use_loader_registry, LoaderRegistry};
use super::time::{self, LoadTimer};

/// A loaded page module: the stand-in for a dynamic import's default
/// export. Cloning shares the underlying constructor.
#[derive(Clone)]
pub struct PageModule {
    render: Rc<dyn Fn() -> View>,
}

impl PageModule {
    pub fn new(render: impl Fn() -> View + 'static) -> Self {
        Self {
            render: Rc::new(render),
        }
    }

    pub fn render(&self) -> View {
        (self.render)()
    }

    /// Identity comparison; true when both handles share one constructor.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.render, &other.render)
    }
}

/// Future returned by a route import function.
pub type ImportFuture = Pin<Box<dyn Future<Output = Result<PageModule, LoadError>>>>;

/// Zero-argument import function, the moral equivalent of
/// `() => import("./pages/...")`.
pub type ImportFn = Rc<dyn Fn() -> ImportFuture>;

/// Options accepted by the route factory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    /// Resolve the route in the background before first navigation.
    pub preload: bool,
    /// Total attempts before giving up.
    pub retry_attempts: u32,
    /// Upper bound on a single attempt.
    pub timeout: Duration,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            preload: false,
            retry_attempts: 3,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Run `import` until it succeeds or the attempt budget is spent.
///
/// Attempts are strictly sequential: each races the import against
/// `options.timeout`, records one metric entry, and sleeps the backoff
/// delay (1 s, 2 s, ...) before the next try. The value type is generic
/// so the loop is exercised off-wasm.
pub async fn load_with_retry<T, F, Fut>(
    route: &str,
    import: F,
    options: &LoadOptions,
    metrics: &MetricsLog,
) -> Result<T, LoadError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = Result<T, LoadError>>,
{
    let mut last_error = LoadError::new(
        "LoadError",
        format!("Route '{}' was never attempted", route),
    );

    for attempt in 0..options.retry_attempts.max(1) {
        if attempt > 0 {
            time::sleep(retry_delay(attempt - 1, BASE_RETRY_DELAY)).await;
        }

        let timer = LoadTimer::start();
        match time::timeout(options.timeout, import()).await {
            Ok(Ok(loaded)) => {
                metrics.record(route, timer.elapsed_ms(), true, None);
                return Ok(loaded);
            }
            Ok(Err(error)) => {
                metrics.record(route, timer.elapsed_ms(), false, Some(error.message.clone()));
                last_error = error;
            }
            Err(_) => {
                let error = LoadError::timeout(route);
                metrics.record(route, timer.elapsed_ms(), false, Some(error.message.clone()));
                last_error = error;
            }
        }
    }

    Err(last_error)
}

/// Cache-or-load: return the module cached under `route`, importing it
/// (with retries) on the first request. Failed resolutions are never
/// cached, so a later navigation attempts the import again.
pub async fn resolve_route(
    registry: &LoaderRegistry,
    route: &str,
    import: &ImportFn,
    options: &LoadOptions,
) -> Result<PageModule, LoadError> {
    if let Some(module) = registry.cached_route(route) {
        return Ok(module);
    }

    let module = load_with_retry(route, || import(), options, registry.metrics()).await?;
    registry.store_route(route, module.clone());
    Ok(module)
}

/// Resolve a route ahead of navigation when its options ask for it.
/// Failures are logged, not cached.
pub fn preload_route(
    registry: Rc<LoaderRegistry>,
    route: &str,
    import: ImportFn,
    options: LoadOptions,
) {
    if !options.preload {
        return;
    }
    let route = route.to_string();
    spawn_local(async move {
        if let Err(error) = resolve_route(&registry, &route, &import, &options).await {
            web_sys::console::warn_1(
                &format!("Preload of '{}' failed: {}", route, error).into(),
            );
        }
    });
}

/// Lazily loaded route: suspends while its module resolves, then renders
/// the module's constructor. Same `name`, same cached module.
#[component]
pub fn LazyRoute(
    /// Route name; the cache key and what the loading state shows.
    #[prop(into)]
    name: String,
    import: ImportFn,
    #[prop(optional)] options: LoadOptions,
) -> impl IntoView {
    let registry = use_loader_registry();
    let loading_name = name.clone();
    let failed_name = name.clone();

    let module = create_local_resource(
        || (),
        move |_| {
            let registry = Rc::clone(&registry);
            let name = name.clone();
            let import = Rc::clone(&import);
            let options = options.clone();
            async move { resolve_route(&registry, &name, &import, &options).await }
        },
    );

    SuspenseProps::builder()
        .fallback(move || {
            view! { <RouteLoading name=loading_name.clone() /> }
        })
        .children(ToChildren::to_children(move || {
            let rendered = module.get().map(|result| match result {
                Ok(module) => module.render(),
                Err(error) => {
                    view! { <RouteLoadFailed name=failed_name.clone() error=error /> }
                        .into_view()
                }
            });
            Fragment::new(rendered.into_iter().collect())
        }))
        .build()
        .into_view()
}

/// Suspension fallback shown while a route module is in flight.
#[component]
fn RouteLoading(#[prop(into)] name: String) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] space-y-4">
            <div class="loading-spinner w-8 h-8" />
            <p class="text-gray-400 text-sm">{format!("Loading {}...", name)}</p>
        </div>
    }
}

/// Inline error view rendered once the attempt budget is spent.
#[component]
fn RouteLoadFailed(#[prop(into)] name: String, error: LoadError) -> impl IntoView {
    let details = error.message.clone();

    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center px-4">
            <div class="text-6xl mb-4">"⚠️"</div>
            <h1 class="text-2xl font-bold mb-2">{format!("Failed to load {}", name)}</h1>
            <p class="text-gray-400 mb-6">
                "The page could not be loaded. Check your connection and try again."
            </p>
            <div class="flex items-center space-x-3">
                <button
                    on:click=|_| reload_page()
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Reload"
                </button>
                <button
                    on:click=|_| history_back()
                    class="px-6 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                >
                    "Go Back"
                </button>
            </div>
            <details class="mt-6 text-left text-sm text-gray-500 max-w-xl">
                <summary class="cursor-pointer">"Technical details"</summary>
                <pre class="mt-2 whitespace-pre-wrap">{details}</pre>
            </details>
        </div>
    }
}

/// Force a full navigation reload; the escape hatch of last resort.
pub(crate) fn reload_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().reload();
    }
}

fn history_back() {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.back();
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn options(retry_attempts: u32) -> LoadOptions {
        LoadOptions {
            retry_attempts,
            ..Default::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn immediate_success_records_one_metric() {
        let metrics = MetricsLog::new();
        let result: Result<&str, LoadError> =
            load_with_retry("home", || async { Ok("page") }, &options(3), &metrics).await;

        assert_eq!(result.unwrap(), "page");
        let log = metrics.snapshot();
        assert_eq!(log.len(), 1);
        assert!(log[0].success);
        assert_eq!(log[0].error, None);
    }

    #[tokio::test(start_paused = true)]
    async fn two_failures_then_success() {
        let metrics = MetricsLog::new();
        let calls = Cell::new(0u32);

        let result: Result<&str, LoadError> = load_with_retry(
            "portfolio",
            || {
                let attempt = calls.get();
                calls.set(attempt + 1);
                async move {
                    if attempt < 2 {
                        Err(LoadError::network("Failed to fetch"))
                    } else {
                        Ok("page")
                    }
                }
            },
            &options(3),
            &metrics,
        )
        .await;

        assert_eq!(result.unwrap(), "page");
        assert_eq!(calls.get(), 3);

        let log = metrics.snapshot();
        assert_eq!(log.len(), 3);
        assert!(!log[0].success);
        assert!(!log[1].success);
        assert!(log[2].success);
    }

    #[tokio::test(start_paused = true)]
    async fn exhaustion_returns_the_last_error() {
        let metrics = MetricsLog::new();

        let result: Result<(), LoadError> = load_with_retry(
            "services",
            || async { Err(LoadError::network("Failed to fetch")) },
            &options(3),
            &metrics,
        )
        .await;

        let error = result.unwrap_err();
        assert_eq!(error.message, "Failed to fetch");

        let log = metrics.snapshot();
        assert_eq!(log.len(), 3);
        assert!(log.iter().all(|entry| !entry.success));
        assert_eq!(log[2].error.as_deref(), Some("Failed to fetch"));
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_counts_as_a_failed_attempt() {
        let metrics = MetricsLog::new();

        let result: Result<(), LoadError> = load_with_retry(
            "blog",
            || std::future::pending::<Result<(), LoadError>>(),
            &options(2),
            &metrics,
        )
        .await;

        let error = result.unwrap_err();
        assert_eq!(error.message, "Route loading timeout: blog");

        let log = metrics.snapshot();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].error.as_deref(), Some("Route loading timeout: blog"));
    }

    #[tokio::test(start_paused = true)]
    async fn resolve_caches_the_first_success() {
        let registry = LoaderRegistry::new();
        let calls = Rc::new(Cell::new(0u32));

        let counter = Rc::clone(&calls);
        let import: ImportFn = Rc::new(move || {
            counter.set(counter.get() + 1);
            Box::pin(async { Ok(PageModule::new(|| unreachable!())) })
        });

        let first = resolve_route(&registry, "services", &import, &LoadOptions::default())
            .await
            .unwrap();
        let second = resolve_route(&registry, "services", &import, &LoadOptions::default())
            .await
            .unwrap();

        assert_eq!(calls.get(), 1);
        assert!(first.ptr_eq(&second));
        assert_eq!(registry.route_metrics().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn resolve_recovers_after_transient_failures() {
        let registry = LoaderRegistry::new();
        let calls = Rc::new(Cell::new(0u32));

        let counter = Rc::clone(&calls);
        let import: ImportFn = Rc::new(move || {
            let attempt = counter.get();
            counter.set(attempt + 1);
            Box::pin(async move {
                if attempt < 2 {
                    Err(LoadError::network("Failed to fetch"))
                } else {
                    Ok(PageModule::new(|| unreachable!()))
                }
            })
        });

        let module = resolve_route(&registry, "about", &import, &LoadOptions::default()).await;
        assert!(module.is_ok());

        let log = registry.route_metrics();
        assert_eq!(log.len(), 3);
        assert!(log[2].success);
        assert!(log[2].error.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn failed_resolutions_are_not_cached() {
        let registry = LoaderRegistry::new();
        let calls = Rc::new(Cell::new(0u32));

        let counter = Rc::clone(&calls);
        let import: ImportFn = Rc::new(move || {
            counter.set(counter.get() + 1);
            Box::pin(async { Err(LoadError::network("Failed to fetch")) })
        });

        let first = resolve_route(&registry, "contact", &import, &options(2)).await;
        assert!(first.is_err());
        assert!(registry.cached_route("contact").is_none());

        let second = resolve_route(&registry, "contact", &import, &options(2)).await;
        assert!(second.is_err());
        assert_eq!(calls.get(), 4);
    }
}
