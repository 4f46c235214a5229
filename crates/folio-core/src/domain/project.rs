use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Status, StoredEntity};

/// A portfolio project entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub content: String,
    pub project_link: String,
    pub github_link: String,
    pub documentation_link: Option<String>,
    pub cover_image_url: String,
    pub is_group: bool,
    pub status: Status,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated payload for creating a project.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub content: String,
    pub project_link: String,
    pub github_link: String,
    pub documentation_link: Option<String>,
    pub cover_image_url: String,
    pub is_group: bool,
    pub status: Status,
    pub published_at: Option<DateTime<Utc>>,
}

/// Partial update for a project.
#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub project_link: Option<String>,
    pub github_link: Option<String>,
    pub documentation_link: Option<Option<String>>,
    pub cover_image_url: Option<String>,
    pub is_group: Option<bool>,
    pub status: Option<Status>,
    pub published_at: Option<Option<DateTime<Utc>>>,
}

impl StoredEntity for Project {
    type Create = NewProject;
    type Patch = ProjectPatch;

    const KIND: &'static str = "project";

    fn from_create(id: String, payload: NewProject, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: payload.title,
            content: payload.content,
            project_link: payload.project_link,
            github_link: payload.github_link,
            documentation_link: payload.documentation_link,
            cover_image_url: payload.cover_image_url,
            is_group: payload.is_group,
            status: payload.status,
            published_at: payload.published_at,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: ProjectPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(project_link) = patch.project_link {
            self.project_link = project_link;
        }
        if let Some(github_link) = patch.github_link {
            self.github_link = github_link;
        }
        if let Some(documentation_link) = patch.documentation_link {
            self.documentation_link = documentation_link;
        }
        if let Some(cover_image_url) = patch.cover_image_url {
            self.cover_image_url = cover_image_url;
        }
        if let Some(is_group) = patch.is_group {
            self.is_group = is_group;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(published_at) = patch.published_at {
            self.published_at = published_at;
        }
        self.updated_at = now;
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> Option<Status> {
        Some(self.status)
    }
}
