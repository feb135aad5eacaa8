//! Lazy Icon Loader
//!
//! Defers fetching the icon bundle until an icon is first rendered. Each
//! name gets one cached handle; unknown names degrade to a placeholder
//! glyph with a console warning and never propagate an error.

use leptos::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::rc::Rc;

use super::registry::{use_loader_registry, LoaderRegistry};

/// Where the icon bundle is served from.
pub const ICON_BUNDLE_URL: &str = "/assets/icons.json";

/// Icon names primed at startup; the set used above the fold.
pub const COMMON_ICONS: [&str; 6] = ["arrow-right", "menu", "mail", "code", "palette", "rocket"];

/// A single icon's drawing data.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IconDef {
    #[serde(default = "default_view_box")]
    pub view_box: String,
    pub path: String,
}

fn default_view_box() -> String {
    "0 0 24 24".to_string()
}

/// The decoded icon bundle.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct IconSet {
    icons: HashMap<String, IconDef>,
}

impl IconSet {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Icon bundle parse error: {}", e))
    }

    pub fn resolve(&self, name: &str) -> Option<&IconDef> {
        self.icons.get(name)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

/// Cached per-name handle. Clones share one entry, so two requests for
/// the same name observe the same instance.
#[derive(Clone)]
pub struct IconHandle {
    inner: Rc<String>,
}

impl IconHandle {
    pub fn name(&self) -> &str {
        &self.inner
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Cache-or-create the handle for `name`.
pub fn icon_handle(registry: &LoaderRegistry, name: &str) -> IconHandle {
    if let Some(handle) = registry.cached_icon(name) {
        return handle;
    }
    let handle = IconHandle {
        inner: Rc::new(name.to_string()),
    };
    registry.store_icon(name, handle.clone());
    handle
}

/// What an icon request resolves to once the bundle has settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconResolution {
    Resolved(IconDef),
    Missing,
}

/// Look `name` up in the bundle; `Missing` covers an absent bundle too.
pub fn resolve_icon(set: Option<&IconSet>, name: &str) -> IconResolution {
    match set.and_then(|set| set.resolve(name)) {
        Some(def) => IconResolution::Resolved(def.clone()),
        None => IconResolution::Missing,
    }
}

/// Fetch and cache the icon bundle; later calls reuse the cached set.
/// Returns None when the bundle cannot be loaded.
pub async fn load_icon_set(registry: &LoaderRegistry) -> Option<Rc<IconSet>> {
    if let Some(set) = registry.icon_set() {
        return Some(set);
    }

    match fetch_icon_bundle().await {
        Ok(set) => {
            let set = Rc::new(set);
            registry.store_icon_set(Rc::clone(&set));
            Some(set)
        }
        Err(error) => {
            web_sys::console::warn_1(&format!("Icon bundle failed to load: {}", error).into());
            None
        }
    }
}

async fn fetch_icon_bundle() -> Result<IconSet, String> {
    let response = gloo_net::http::Request::get(ICON_BUNDLE_URL)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Icon bundle request failed: HTTP {}", response.status()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Read error: {}", e))?;

    IconSet::from_json(&text)
}

/// Prime the icon cache for `names` and start the bundle fetch.
/// Intended to be called once during application startup.
pub fn preload_icons(registry: Rc<LoaderRegistry>, names: &[&str]) {
    for name in names {
        icon_handle(&registry, name);
    }
    spawn_local(async move {
        let _ = load_icon_set(&registry).await;
    });
}

/// Inline SVG icon, lazily backed by the shared bundle. Shows a pulsing
/// block while the bundle is in flight and a generic glyph for anything
/// the bundle does not know.
#[component]
pub fn Icon(
    #[prop(into)] name: String,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let registry = use_loader_registry();
    let handle = icon_handle(&registry, &name);

    let set = create_local_resource(
        || (),
        move |_| {
            let registry = Rc::clone(&registry);
            async move { load_icon_set(&registry).await }
        },
    );

    let svg_class = if class.is_empty() {
        "w-5 h-5".to_string()
    } else {
        class
    };
    let fallback_class = svg_class.clone();

    SuspenseProps::builder()
        .fallback(move || {
            view! {
                <span class=format!("inline-block bg-gray-700 rounded animate-pulse {}", fallback_class) />
            }
        })
        .children(ToChildren::to_children(move || {
            let rendered = set.get().map(|set| {
                let handle = handle.clone();
                match resolve_icon(set.as_deref(), handle.name()) {
                    IconResolution::Resolved(def) => view! {
                        <svg
                            class=svg_class.clone()
                            viewBox=def.view_box
                            fill="none"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                            stroke-linejoin="round"
                        >
                            <path d=def.path />
                        </svg>
                    }
                    .into_view(),
                    IconResolution::Missing => {
                        web_sys::console::warn_1(
                            &format!("Unknown icon: {}", handle.name()).into(),
                        );
                        view! {
                            <span class=format!(
                                "inline-flex items-center justify-center text-gray-500 {}",
                                svg_class.clone()
                            )>
                                "◻"
                            </span>
                        }
                        .into_view()
                    }
                }
            });
            Fragment::new(rendered.into_iter().collect())
        }))
        .build()
        .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> IconSet {
        IconSet::from_json(
            r#"{
                "mail": {"view_box": "0 0 24 24", "path": "M4 4h16v16H4z"},
                "menu": {"path": "M3 12h18"}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn parses_bundle_and_defaults_view_box() {
        let set = sample_set();
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert_eq!(set.resolve("menu").unwrap().view_box, "0 0 24 24");
        assert_eq!(set.resolve("mail").unwrap().path, "M4 4h16v16H4z");
    }

    #[test]
    fn unknown_names_resolve_to_the_placeholder() {
        let set = sample_set();
        assert_eq!(resolve_icon(Some(&set), "no-such-icon"), IconResolution::Missing);
        assert_eq!(resolve_icon(None, "mail"), IconResolution::Missing);
    }

    #[test]
    fn known_names_resolve_to_their_definition() {
        let set = sample_set();
        match resolve_icon(Some(&set), "mail") {
            IconResolution::Resolved(def) => assert_eq!(def.path, "M4 4h16v16H4z"),
            IconResolution::Missing => panic!("expected mail to resolve"),
        }
    }

    #[test]
    fn repeated_requests_share_one_handle() {
        let registry = LoaderRegistry::new();
        let first = icon_handle(&registry, "mail");
        let second = icon_handle(&registry, "mail");
        let other = icon_handle(&registry, "menu");

        assert!(first.ptr_eq(&second));
        assert!(!first.ptr_eq(&other));
    }

    #[test]
    fn malformed_bundle_reports_a_parse_error() {
        let error = IconSet::from_json("not json").unwrap_err();
        assert!(error.starts_with("Icon bundle parse error"));
    }
}
