//! State Management
//!
//! Global UI state and the per-table data stores.

pub mod global;
pub mod site;
pub mod store;

pub use global::{provide_global_state, use_global_state, GlobalState};
pub use site::{provide_site_data, use_site_data, SiteData};
pub use store::TableStore;
