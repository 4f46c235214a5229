//! In-memory entity store - the default backend for development and tests.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use folio_core::StoreError;
use folio_core::domain::{Status, StoredEntity};
use folio_core::ports::EntityStore;

/// Keyed in-memory collection for one entity kind.
///
/// Identifiers are UUID v4, unique per kind for the store's lifetime.
/// Note: data is lost on process restart.
pub struct MemoryStore<T> {
    records: RwLock<HashMap<String, T>>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: StoredEntity> EntityStore<T> for MemoryStore<T> {
    async fn list(&self, status: Option<Status>) -> Result<Vec<T>, StoreError> {
        let records = self.records.read().await;
        let all = records.values().cloned();
        Ok(match status {
            Some(wanted) => all.filter(|r| r.status() == Some(wanted)).collect(),
            None => all.collect(),
        })
    }

    async fn get(&self, id: &str) -> Result<Option<T>, StoreError> {
        let records = self.records.read().await;
        Ok(records.get(id).cloned())
    }

    async fn create(&self, payload: T::Create) -> Result<T, StoreError> {
        let id = Uuid::new_v4().to_string();
        let record = T::from_create(id.clone(), payload, Utc::now());

        let mut records = self.records.write().await;
        records.insert(id.clone(), record.clone());
        tracing::debug!(kind = T::KIND, id = %id, "record created");
        Ok(record)
    }

    async fn update(&self, id: &str, patch: T::Patch) -> Result<Option<T>, StoreError> {
        // Write lock held across the read-merge-write sequence keeps the
        // update atomic.
        let mut records = self.records.write().await;
        let Some(record) = records.get_mut(id) else {
            return Ok(None);
        };
        record.apply_patch(patch, Utc::now());
        tracing::debug!(kind = T::KIND, id = %id, "record updated");
        Ok(Some(record.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut records = self.records.write().await;
        let removed = records.remove(id).is_some();
        if removed {
            tracing::debug!(kind = T::KIND, id = %id, "record deleted");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::domain::{
        BlogPatch, BlogPost, GalleryImage, GalleryPatch, NewBlogPost, NewGalleryImage,
    };

    fn draft_post(title: &str) -> NewBlogPost {
        NewBlogPost {
            title: title.to_string(),
            excerpt: Some("intro".to_string()),
            content: "content".to_string(),
            cover_image_url: None,
            status: Status::Draft,
            published_at: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let store = MemoryStore::<BlogPost>::new();

        let created = store.create(draft_post("Hello")).await.unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(created.created_at, created.updated_at);

        let fetched = store.get(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.title, "Hello");
        assert_eq!(fetched.created_at, created.created_at);
        assert_eq!(fetched.updated_at, created.updated_at);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let store = MemoryStore::<BlogPost>::new();
        assert!(store.get("doesnotexist").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_partial_update_touches_only_patched_fields() {
        let store = MemoryStore::<BlogPost>::new();
        let created = store.create(draft_post("Hello")).await.unwrap();

        let updated = store
            .update(
                &created.id,
                BlogPatch {
                    status: Some(Status::Published),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.status, Status::Published);
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.excerpt, created.excerpt);
        assert_eq!(updated.content, created.content);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_can_clear_nullable_field() {
        let store = MemoryStore::<BlogPost>::new();
        let created = store.create(draft_post("Hello")).await.unwrap();

        let updated = store
            .update(
                &created.id,
                BlogPatch {
                    excerpt: Some(None),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.excerpt, None);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_none_not_upsert() {
        let store = MemoryStore::<BlogPost>::new();
        let result = store
            .update("doesnotexist", BlogPatch::default())
            .await
            .unwrap();
        assert!(result.is_none());
        assert!(store.list(None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_reports_whether_a_record_was_removed() {
        let store = MemoryStore::<BlogPost>::new();
        let created = store.create(draft_post("Hello")).await.unwrap();

        assert!(store.delete(&created.id).await.unwrap());
        assert!(!store.delete(&created.id).await.unwrap());
        assert!(store.get(&created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_status_filter_returns_exact_subset() {
        let store = MemoryStore::<BlogPost>::new();
        store.create(draft_post("a")).await.unwrap();
        store.create(draft_post("b")).await.unwrap();
        store
            .create(NewBlogPost {
                status: Status::Published,
                ..draft_post("c")
            })
            .await
            .unwrap();

        let drafts = store.list(Some(Status::Draft)).await.unwrap();
        assert_eq!(drafts.len(), 2);
        assert!(drafts.iter().all(|b| b.status == Status::Draft));

        let published = store.list(Some(Status::Published)).await.unwrap();
        assert_eq!(published.len(), 1);

        let all = store.list(None).await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_gallery_upload_date_survives_rename() {
        let store = MemoryStore::<GalleryImage>::new();
        let created = store
            .create(NewGalleryImage {
                name: "sunset".to_string(),
                url: "https://cdn.example.com/sunset.png".to_string(),
            })
            .await
            .unwrap();

        let updated = store
            .update(
                &created.id,
                GalleryPatch {
                    name: Some("dusk".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "dusk");
        assert_eq!(updated.url, created.url);
        assert_eq!(updated.upload_date, created.upload_date);
    }
}
