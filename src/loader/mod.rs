//! Resilient Lazy Loading
//!
//! Route-level lazy loading with retry, a chunk-failure retry boundary,
//! and on-demand icon loading, all hanging off one explicit
//! [`LoaderRegistry`].

pub mod backoff;
pub mod boundary;
pub mod classify;
pub mod error;
pub mod icons;
pub mod metrics;
pub mod recovery;
pub mod registry;
pub mod route;
pub mod time;

pub use boundary::{BoundaryHandle, RetryBoundary};
pub use error::LoadError;
pub use icons::{preload_icons, Icon, COMMON_ICONS};
pub use registry::{provide_loader_registry, use_loader_registry, LoaderRegistry};
pub use route::{preload_route, ImportFn, LazyRoute, LoadOptions, PageModule};
