//! Loader Registry
//!
//! Caches for lazily loaded routes and icons plus the load-metrics log,
//! bundled into one explicit instance. The app builds a single registry
//! at startup and provides it through context; tests build their own.
//! Both caches are insert-only and live for the life of the instance.

use leptos::*;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::icons::{IconHandle, IconSet};
use super::metrics::{MetricsLog, RouteLoadMetric};
use super::route::PageModule;

#[derive(Default)]
pub struct LoaderRegistry {
    routes: RefCell<HashMap<String, PageModule>>,
    icons: RefCell<HashMap<String, IconHandle>>,
    icon_set: RefCell<Option<Rc<IconSet>>>,
    metrics: MetricsLog,
}

impl LoaderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cached_route(&self, route: &str) -> Option<PageModule> {
        self.routes.borrow().get(route).cloned()
    }

    pub fn store_route(&self, route: &str, module: PageModule) {
        self.routes.borrow_mut().insert(route.to_string(), module);
    }

    pub fn cached_icon(&self, name: &str) -> Option<IconHandle> {
        self.icons.borrow().get(name).cloned()
    }

    pub fn store_icon(&self, name: &str, handle: IconHandle) {
        self.icons.borrow_mut().insert(name.to_string(), handle);
    }

    pub fn icon_set(&self) -> Option<Rc<IconSet>> {
        self.icon_set.borrow().clone()
    }

    pub fn store_icon_set(&self, set: Rc<IconSet>) {
        *self.icon_set.borrow_mut() = Some(set);
    }

    pub fn metrics(&self) -> &MetricsLog {
        &self.metrics
    }

    /// Snapshot of every route load attempt recorded so far.
    pub fn route_metrics(&self) -> Vec<RouteLoadMetric> {
        self.metrics.snapshot()
    }

    pub fn reset_metrics(&self) {
        self.metrics.reset();
    }
}

/// Provide a fresh registry to the component tree. Call once at the root.
pub fn provide_loader_registry() {
    provide_context(Rc::new(LoaderRegistry::new()));
}

pub fn use_loader_registry() -> Rc<LoaderRegistry> {
    use_context::<Rc<LoaderRegistry>>().expect("LoaderRegistry not provided")
}
