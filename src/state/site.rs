//! Site Data
//!
//! The per-table stores over the hosted database, provided app-wide.
//! Each store is responsible for exactly one table.

use leptos::*;

use crate::api;
use crate::api::models::{
    AboutSection, CarouselItem, ContactMessage, Project, Service, Testimonial,
};

use super::store::TableStore;

#[derive(Clone)]
pub struct SiteData {
    pub projects: TableStore<Project>,
    pub services: TableStore<Service>,
    pub testimonials: TableStore<Testimonial>,
    pub messages: TableStore<ContactMessage>,
    pub about: TableStore<AboutSection>,
    pub carousel: TableStore<CarouselItem>,
}

/// Provide the table stores to the component tree.
pub fn provide_site_data() {
    provide_context(SiteData {
        projects: TableStore::new(|| Box::pin(api::fetch_projects())),
        services: TableStore::new(|| Box::pin(api::fetch_services())),
        testimonials: TableStore::new(|| Box::pin(api::fetch_testimonials())),
        messages: TableStore::new(|| Box::pin(api::fetch_contact_messages())),
        about: TableStore::new(|| Box::pin(api::fetch_about_sections())),
        carousel: TableStore::new(|| Box::pin(api::fetch_carousel_items())),
    });
}

pub fn use_site_data() -> SiteData {
    use_context::<SiteData>().expect("SiteData not provided")
}
