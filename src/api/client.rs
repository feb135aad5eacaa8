//! HTTP API Client
//!
//! Functions for talking to the hosted database service's REST endpoint.
//! The base URL can be overridden from the dashboard and is kept in
//! localStorage.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::models::{
    AboutSection, CarouselItem, ContactMessage, ContactPayload, NewProject, NewService,
    NewTestimonial, PageManifest, Project, Service, Testimonial,
};

/// Default REST endpoint of the hosted project.
pub const DEFAULT_API_BASE: &str = "https://db.atelierdigital.example/rest/v1";

/// localStorage key holding the base URL override.
const API_BASE_KEY: &str = "atelier_api_url";

/// Get the API base URL from local storage or use the default.
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_BASE_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Persist the API base URL override.
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_BASE_KEY, url);
        }
    }
}

/// Error body the service returns on non-2xx responses.
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

async fn decode_error(response: Response) -> String {
    let error: ApiError = response.json().await.unwrap_or(ApiError {
        error: "Unknown error".to_string(),
        code: None,
    });
    error.error
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&format!("{}{}", get_api_base(), path))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(decode_error(response).await);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

async fn post_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = Request::post(&format!("{}{}", get_api_base(), path))
        .json(body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(decode_error(response).await);
    }
    Ok(())
}

async fn patch_json<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = Request::patch(&format!("{}{}", get_api_base(), path))
        .json(body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(decode_error(response).await);
    }
    Ok(())
}

async fn delete(path: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{}{}", get_api_base(), path))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(decode_error(response).await);
    }
    Ok(())
}

// ============ Projects ============

pub async fn fetch_projects() -> Result<Vec<Project>, String> {
    get_json("/projects?order=created_at.desc").await
}

pub async fn create_project(project: &NewProject) -> Result<(), String> {
    post_json("/projects", project).await
}

pub async fn delete_project(id: u32) -> Result<(), String> {
    delete(&format!("/projects/{}", id)).await
}

// ============ Services ============

pub async fn fetch_services() -> Result<Vec<Service>, String> {
    get_json("/services?order=position.asc").await
}

pub async fn create_service(service: &NewService) -> Result<(), String> {
    post_json("/services", service).await
}

pub async fn delete_service(id: u32) -> Result<(), String> {
    delete(&format!("/services/{}", id)).await
}

// ============ Testimonials ============

pub async fn fetch_testimonials() -> Result<Vec<Testimonial>, String> {
    get_json("/testimonials").await
}

pub async fn create_testimonial(testimonial: &NewTestimonial) -> Result<(), String> {
    post_json("/testimonials", testimonial).await
}

pub async fn set_testimonial_published(id: u32, published: bool) -> Result<(), String> {
    #[derive(Serialize)]
    struct PublishPatch {
        published: bool,
    }
    patch_json(&format!("/testimonials/{}", id), &PublishPatch { published }).await
}

pub async fn delete_testimonial(id: u32) -> Result<(), String> {
    delete(&format!("/testimonials/{}", id)).await
}

// ============ Contact messages ============

pub async fn submit_contact_message(payload: &ContactPayload) -> Result<(), String> {
    post_json("/contact_messages", payload).await
}

pub async fn fetch_contact_messages() -> Result<Vec<ContactMessage>, String> {
    get_json("/contact_messages?order=created_at.desc").await
}

pub async fn delete_contact_message(id: u32) -> Result<(), String> {
    delete(&format!("/contact_messages/{}", id)).await
}

// ============ About content ============

pub async fn fetch_about_sections() -> Result<Vec<AboutSection>, String> {
    get_json("/about_content").await
}

pub async fn update_about_section(id: u32, heading: &str, body: &str) -> Result<(), String> {
    #[derive(Serialize)]
    struct SectionPatch<'a> {
        heading: &'a str,
        body: &'a str,
    }
    patch_json(&format!("/about_content/{}", id), &SectionPatch { heading, body }).await
}

// ============ Carousel ============

pub async fn fetch_carousel_items() -> Result<Vec<CarouselItem>, String> {
    get_json("/carousel_items?order=position.asc").await
}

pub async fn delete_carousel_item(id: u32) -> Result<(), String> {
    delete(&format!("/carousel_items/{}", id)).await
}

// ============ Page manifests ============

/// Fetch the content manifest a marketing route renders from.
pub async fn fetch_page_manifest(slug: &str) -> Result<PageManifest, String> {
    get_json(&format!("/pages/{}", slug)).await
}
