//! Domain entities - the content records managed through the dashboard.

mod blog;
mod gallery;
mod project;
mod status;

pub use blog::{BlogPatch, BlogPost, NewBlogPost};
pub use gallery::{GalleryImage, GalleryPatch, NewGalleryImage};
pub use project::{NewProject, Project, ProjectPatch};
pub use status::{InvalidStatus, Status};

use chrono::{DateTime, Utc};

/// A keyed record kind the entity store can hold.
///
/// Identifiers and creation timestamps are assigned by the store, never by
/// callers: `from_create` receives both, and patch types carry no `id` or
/// creation timestamp at all, so the immutable fields cannot be overwritten
/// through an update.
pub trait StoredEntity: Clone + Send + Sync + 'static {
    /// Validated payload for creating a record of this kind.
    type Create: Send + 'static;
    /// Validated partial payload for updating a record of this kind.
    type Patch: Send + 'static;

    /// Collection name, used in log lines.
    const KIND: &'static str;

    /// Build a fresh record from a create payload.
    fn from_create(id: String, payload: Self::Create, now: DateTime<Utc>) -> Self;

    /// Merge a partial payload onto this record. Fields absent from the
    /// patch are left untouched; the update timestamp is refreshed where
    /// the kind has one.
    fn apply_patch(&mut self, patch: Self::Patch, now: DateTime<Utc>);

    fn id(&self) -> &str;

    /// Lifecycle status, for kinds that have one.
    fn status(&self) -> Option<Status>;
}
