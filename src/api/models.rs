//! Row Models
//!
//! Typed rows for the hosted tables, shaped the way the service returns
//! them. Every managed table gets a row struct; tables the dashboard can
//! insert into also get a payload struct.

use serde::{Deserialize, Serialize};

/// Portfolio project row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub slug: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Insert payload for a project.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewProject {
    pub title: String,
    pub slug: String,
    pub summary: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub featured: bool,
}

/// Offered service row. `icon` names an entry in the icon bundle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub title: String,
    pub summary: String,
    pub icon: String,
    #[serde(default)]
    pub position: i32,
}

/// Insert payload for a service.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewService {
    pub title: String,
    pub summary: String,
    pub icon: String,
    pub position: i32,
}

/// Client testimonial row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub author: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    pub quote: String,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub published: bool,
}

/// Insert payload for a testimonial.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewTestimonial {
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub quote: String,
    pub published: bool,
}

/// Inbound contact-form message row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Contact-form submission payload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
}

/// About-page content section row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutSection {
    pub id: u32,
    pub section: String,
    pub heading: String,
    pub body: String,
}

/// Home carousel item row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselItem {
    pub id: u32,
    pub image_url: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub position: i32,
}

/// Content manifest fetched by a marketing route's import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageManifest {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hero_heading: String,
    #[serde(default)]
    pub hero_body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_row_tolerates_missing_optionals() {
        let project: Project = serde_json::from_str(
            r#"{"id": 3, "title": "Brand refresh", "slug": "brand-refresh", "summary": "Full identity"}"#,
        )
        .unwrap();

        assert_eq!(project.id, 3);
        assert!(project.tags.is_empty());
        assert!(!project.featured);
        assert_eq!(project.image_url, None);
    }

    #[test]
    fn manifest_defaults_its_copy_fields() {
        let manifest: PageManifest =
            serde_json::from_str(r#"{"slug": "blog", "title": "Writing"}"#).unwrap();
        assert_eq!(manifest.hero_heading, "");
        assert_eq!(manifest.description, "");
    }

    #[test]
    fn new_project_skips_empty_optionals() {
        let payload = NewProject {
            title: "Site".to_string(),
            slug: "site".to_string(),
            summary: "A site".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("image_url"));
        assert!(!json.contains("link"));
    }
}
