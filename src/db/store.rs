// src/db/store.rs
// DOCUMENTATION: Relational store abstraction
// PURPOSE: Lets services run against Postgres in production and memory in tests

use crate::errors::PhotosError;
use crate::models::{NewPhoto, Photo, PhotoWithOpinions};
use async_trait::async_trait;

/// Derives the final file path of a photo from its generated id
pub type PathForId<'a> = &'a (dyn Fn(i32) -> String + Send + Sync);

#[async_trait]
pub trait PhotoStore: Send + Sync {
    /// Round-trip to the backing store
    async fn ping(&self) -> Result<(), PhotosError>;

    async fn category_exists(&self, category_id: i32) -> Result<bool, PhotosError>;

    /// Photos of a category with LIKE / DISLIKE counts, ordered by id
    async fn list_photos_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<PhotoWithOpinions>, PhotosError>;

    async fn find_photo(&self, photo_id: i32) -> Result<Option<Photo>, PhotosError>;

    async fn find_photo_with_opinions(
        &self,
        photo_id: i32,
    ) -> Result<Option<PhotoWithOpinions>, PhotosError>;

    /// Insert the row with a null path, then set the path derived from the
    /// generated id. Both steps commit together or not at all.
    async fn create_photo(
        &self,
        new_photo: &NewPhoto,
        path_for: PathForId<'_>,
    ) -> Result<Photo, PhotosError>;

    /// Remove only the photo row. Returns false when no row matched.
    async fn delete_photo(&self, photo_id: i32) -> Result<bool, PhotosError>;

    /// Remove opinions and comments of the photo, then the photo row, in one
    /// transaction. Returns false when no photo row matched.
    async fn delete_photo_cascade(&self, photo_id: i32) -> Result<bool, PhotosError>;
}
