//! Request DTOs and the validation pass turning them into typed payloads.
//!
//! Raw shapes keep every field optional so a missing required field surfaces
//! as an itemized [`FieldError`] instead of a deserialization failure. The
//! server-side validation here is authoritative; any client-side mirror of
//! these constraints is UX only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use folio_core::domain::{
    BlogPatch, NewBlogPost, NewGalleryImage, NewProject, ProjectPatch, Status,
};

use crate::response::FieldError;

const MAX_TITLE_LEN: usize = 255;

/// Distinguishes an absent field from an explicit `null`: absent stays
/// `None` via the default, any present value (null included) becomes `Some`.
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

fn require_text(
    errors: &mut Vec<FieldError>,
    field: &str,
    value: Option<String>,
) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        Some(_) => {
            errors.push(FieldError::new(field, "must not be empty"));
            None
        }
        None => {
            errors.push(FieldError::new(field, "is required"));
            None
        }
    }
}

fn require_url(errors: &mut Vec<FieldError>, field: &str, value: Option<String>) -> Option<String> {
    let value = require_text(errors, field, value)?;
    if check_url(errors, field, &value) {
        Some(value)
    } else {
        None
    }
}

/// Structural http(s) URL check; full parsing is left to consumers.
fn is_http_url(value: &str) -> bool {
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));
    match rest {
        Some(host) => !host.is_empty() && !value.contains(char::is_whitespace),
        None => false,
    }
}

fn check_url(errors: &mut Vec<FieldError>, field: &str, value: &str) -> bool {
    if is_http_url(value) {
        true
    } else {
        errors.push(FieldError::new(field, "must be a valid http(s) URL"));
        false
    }
}

fn check_title_len(errors: &mut Vec<FieldError>, title: &str) {
    if title.chars().count() > MAX_TITLE_LEN {
        errors.push(FieldError::new(
            "title",
            "must be at most 255 characters",
        ));
    }
}

/// Parse a status value, defaulting to draft when absent.
fn parse_status(errors: &mut Vec<FieldError>, value: Option<String>) -> Status {
    match value {
        None => Status::default(),
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            errors.push(FieldError::new("status", "must be one of: draft, published"));
            Status::default()
        }),
    }
}

fn parse_status_patch(errors: &mut Vec<FieldError>, value: Option<String>) -> Option<Status> {
    value.and_then(|raw| match raw.parse() {
        Ok(status) => Some(status),
        Err(_) => {
            errors.push(FieldError::new("status", "must be one of: draft, published"));
            None
        }
    })
}

// ---------------------------------------------------------------------------
// Blog posts
// ---------------------------------------------------------------------------

/// Raw body for `POST /api/blogs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub cover_image_url: Option<String>,
    pub status: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl CreateBlogRequest {
    pub fn validate(self) -> Result<NewBlogPost, Vec<FieldError>> {
        let mut errors = Vec::new();

        let title = require_text(&mut errors, "title", self.title);
        if let Some(title) = &title {
            check_title_len(&mut errors, title);
        }
        let content = require_text(&mut errors, "content", self.content);
        if let Some(url) = &self.cover_image_url {
            check_url(&mut errors, "coverImageUrl", url);
        }
        let status = parse_status(&mut errors, self.status);

        match (title, content) {
            (Some(title), Some(content)) if errors.is_empty() => Ok(NewBlogPost {
                title,
                excerpt: self.excerpt,
                content,
                cover_image_url: self.cover_image_url,
                status,
                published_at: self.published_at,
            }),
            _ => Err(errors),
        }
    }
}

/// Raw body for `PUT /api/blogs/{id}`. Absent fields are left untouched;
/// an explicit `null` clears a nullable field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<Option<String>>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<Option<String>>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Option<DateTime<Utc>>>,
}

impl UpdateBlogRequest {
    pub fn validate(self) -> Result<BlogPatch, Vec<FieldError>> {
        let mut errors = Vec::new();

        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                errors.push(FieldError::new("title", "must not be empty"));
            } else {
                check_title_len(&mut errors, title);
            }
        }
        if let Some(content) = &self.content {
            if content.trim().is_empty() {
                errors.push(FieldError::new("content", "must not be empty"));
            }
        }
        if let Some(Some(url)) = &self.cover_image_url {
            check_url(&mut errors, "coverImageUrl", url);
        }
        let status = parse_status_patch(&mut errors, self.status);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(BlogPatch {
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            cover_image_url: self.cover_image_url,
            status,
            published_at: self.published_at,
        })
    }
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

/// Raw body for `POST /api/projects`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub project_link: Option<String>,
    pub github_link: Option<String>,
    pub documentation_link: Option<String>,
    pub cover_image_url: Option<String>,
    pub is_group: Option<bool>,
    pub status: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

impl CreateProjectRequest {
    pub fn validate(self) -> Result<NewProject, Vec<FieldError>> {
        let mut errors = Vec::new();

        let title = require_text(&mut errors, "title", self.title);
        let content = require_text(&mut errors, "content", self.content);
        let project_link = require_url(&mut errors, "projectLink", self.project_link);
        let github_link = require_url(&mut errors, "githubLink", self.github_link);
        let cover_image_url = require_url(&mut errors, "coverImageUrl", self.cover_image_url);
        if let Some(url) = &self.documentation_link {
            check_url(&mut errors, "documentationLink", url);
        }
        let status = parse_status(&mut errors, self.status);

        match (title, content, project_link, github_link, cover_image_url) {
            (
                Some(title),
                Some(content),
                Some(project_link),
                Some(github_link),
                Some(cover_image_url),
            ) if errors.is_empty() => Ok(NewProject {
                title,
                content,
                project_link,
                github_link,
                documentation_link: self.documentation_link,
                cover_image_url,
                is_group: self.is_group.unwrap_or(false),
                status,
                published_at: self.published_at,
            }),
            _ => Err(errors),
        }
    }
}

/// Raw body for `PUT /api/projects/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub project_link: Option<String>,
    pub github_link: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_link: Option<Option<String>>,
    pub cover_image_url: Option<String>,
    pub is_group: Option<bool>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<Option<DateTime<Utc>>>,
}

impl UpdateProjectRequest {
    pub fn validate(self) -> Result<ProjectPatch, Vec<FieldError>> {
        let mut errors = Vec::new();

        if let Some(title) = &self.title
            && title.trim().is_empty()
        {
            errors.push(FieldError::new("title", "must not be empty"));
        }
        if let Some(content) = &self.content
            && content.trim().is_empty()
        {
            errors.push(FieldError::new("content", "must not be empty"));
        }
        if let Some(url) = &self.project_link {
            check_url(&mut errors, "projectLink", url);
        }
        if let Some(url) = &self.github_link {
            check_url(&mut errors, "githubLink", url);
        }
        if let Some(Some(url)) = &self.documentation_link {
            check_url(&mut errors, "documentationLink", url);
        }
        if let Some(url) = &self.cover_image_url {
            check_url(&mut errors, "coverImageUrl", url);
        }
        let status = parse_status_patch(&mut errors, self.status);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ProjectPatch {
            title: self.title,
            content: self.content,
            project_link: self.project_link,
            github_link: self.github_link,
            documentation_link: self.documentation_link,
            cover_image_url: self.cover_image_url,
            is_group: self.is_group,
            status,
            published_at: self.published_at,
        })
    }
}

// ---------------------------------------------------------------------------
// Gallery
// ---------------------------------------------------------------------------

/// Raw body for `POST /api/gallery`. Binary uploads go through the
/// file-storage collaborator first; by the time a request reaches this
/// resource it carries the resulting public URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGalleryImageRequest {
    pub name: Option<String>,
    pub url: Option<String>,
}

impl CreateGalleryImageRequest {
    pub fn validate(self) -> Result<NewGalleryImage, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = require_text(&mut errors, "name", self.name);
        let url = require_url(&mut errors, "url", self.url);

        match (name, url) {
            (Some(name), Some(url)) if errors.is_empty() => Ok(NewGalleryImage { name, url }),
            _ => Err(errors),
        }
    }
}
