use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Status, StoredEntity};

/// A blog post, draft or published.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image_url: Option<String>,
    pub status: Status,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated payload for creating a blog post.
#[derive(Debug, Clone)]
pub struct NewBlogPost {
    pub title: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub cover_image_url: Option<String>,
    pub status: Status,
    pub published_at: Option<DateTime<Utc>>,
}

/// Partial update for a blog post. Outer `None` means "leave the field
/// alone"; `Some(None)` on a nullable field clears it.
#[derive(Debug, Clone, Default)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub excerpt: Option<Option<String>>,
    pub content: Option<String>,
    pub cover_image_url: Option<Option<String>>,
    pub status: Option<Status>,
    pub published_at: Option<Option<DateTime<Utc>>>,
}

impl StoredEntity for BlogPost {
    type Create = NewBlogPost;
    type Patch = BlogPatch;

    const KIND: &'static str = "blog";

    fn from_create(id: String, payload: NewBlogPost, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: payload.title,
            excerpt: payload.excerpt,
            content: payload.content,
            cover_image_url: payload.cover_image_url,
            status: payload.status,
            published_at: payload.published_at,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: BlogPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(excerpt) = patch.excerpt {
            self.excerpt = excerpt;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(cover_image_url) = patch.cover_image_url {
            self.cover_image_url = cover_image_url;
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

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BlogPost {
        let now = Utc::now();
        BlogPost::from_create(
            "b1".to_string(),
            NewBlogPost {
                title: "Hello".to_string(),
                excerpt: Some("intro".to_string()),
                content: "World".to_string(),
                cover_image_url: None,
                status: Status::Draft,
                published_at: None,
            },
            now,
        )
    }

    #[test]
    fn test_patch_leaves_absent_fields_untouched() {
        let mut post = sample();
        let before = post.clone();

        post.apply_patch(
            BlogPatch {
                status: Some(Status::Published),
                ..Default::default()
            },
            Utc::now(),
        );

        assert_eq!(post.status, Status::Published);
        assert_eq!(post.title, before.title);
        assert_eq!(post.excerpt, before.excerpt);
        assert_eq!(post.content, before.content);
        assert_eq!(post.created_at, before.created_at);
    }

    #[test]
    fn test_patch_can_clear_nullable_fields() {
        let mut post = sample();
        post.apply_patch(
            BlogPatch {
                excerpt: Some(None),
                ..Default::default()
            },
            Utc::now(),
        );
        assert_eq!(post.excerpt, None);
    }
}
