// src/db/memory.rs
// DOCUMENTATION: In-memory PhotoStore used by service and handler tests

use crate::db::store::{PathForId, PhotoStore};
use crate::errors::PhotosError;
use crate::models::{NewPhoto, OpinionKind, Photo, PhotoWithOpinions};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashSet};
use tokio::sync::RwLock;

#[derive(Default)]
struct MemoryState {
    categories: HashSet<i32>,
    photos: BTreeMap<i32, Photo>,
    opinions: Vec<(i32, OpinionKind)>,
    comments: Vec<i32>,
    next_id: i32,
}

impl MemoryState {
    fn with_opinions(&self, photo: &Photo) -> PhotoWithOpinions {
        let count = |kind: OpinionKind| {
            self.opinions
                .iter()
                .filter(|(id, k)| *id == photo.id && *k == kind)
                .count() as i64
        };

        PhotoWithOpinions {
            photo: photo.clone(),
            total_likes: count(OpinionKind::Like),
            total_dislikes: count(OpinionKind::Dislike),
        }
    }
}

#[derive(Default)]
pub struct MemoryPhotoStore {
    state: RwLock<MemoryState>,
}

impl MemoryPhotoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_category(&self, category_id: i32) {
        self.state.write().await.categories.insert(category_id);
    }

    pub async fn add_opinion(&self, photo_id: i32, kind: OpinionKind) {
        self.state.write().await.opinions.push((photo_id, kind));
    }

    pub async fn add_comment(&self, photo_id: i32) {
        self.state.write().await.comments.push(photo_id);
    }

    pub async fn opinion_count(&self, photo_id: i32) -> usize {
        let state = self.state.read().await;
        state.opinions.iter().filter(|(id, _)| *id == photo_id).count()
    }

    pub async fn comment_count(&self, photo_id: i32) -> usize {
        let state = self.state.read().await;
        state.comments.iter().filter(|id| **id == photo_id).count()
    }

    pub async fn photo_count(&self) -> usize {
        self.state.read().await.photos.len()
    }
}

#[async_trait]
impl PhotoStore for MemoryPhotoStore {
    async fn ping(&self) -> Result<(), PhotosError> {
        Ok(())
    }

    async fn category_exists(&self, category_id: i32) -> Result<bool, PhotosError> {
        Ok(self.state.read().await.categories.contains(&category_id))
    }

    async fn list_photos_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<PhotoWithOpinions>, PhotosError> {
        let state = self.state.read().await;
        Ok(state
            .photos
            .values()
            .filter(|p| p.category_id == category_id)
            .map(|p| state.with_opinions(p))
            .collect())
    }

    async fn find_photo(&self, photo_id: i32) -> Result<Option<Photo>, PhotosError> {
        Ok(self.state.read().await.photos.get(&photo_id).cloned())
    }

    async fn find_photo_with_opinions(
        &self,
        photo_id: i32,
    ) -> Result<Option<PhotoWithOpinions>, PhotosError> {
        let state = self.state.read().await;
        Ok(state.photos.get(&photo_id).map(|p| state.with_opinions(p)))
    }

    async fn create_photo(
        &self,
        new_photo: &NewPhoto,
        path_for: PathForId<'_>,
    ) -> Result<Photo, PhotosError> {
        let mut state = self.state.write().await;
        state.next_id += 1;
        let id = state.next_id;

        let photo = Photo {
            id,
            title: new_photo.title.clone(),
            description: new_photo.description.clone(),
            category_id: new_photo.category_id,
            user_id: new_photo.user_id,
            file_path: Some(path_for(id)),
            mime_type: new_photo.mime_type.as_str().to_string(),
        };
        state.photos.insert(id, photo.clone());

        Ok(photo)
    }

    async fn delete_photo(&self, photo_id: i32) -> Result<bool, PhotosError> {
        Ok(self.state.write().await.photos.remove(&photo_id).is_some())
    }

    async fn delete_photo_cascade(&self, photo_id: i32) -> Result<bool, PhotosError> {
        let mut state = self.state.write().await;
        state.opinions.retain(|(id, _)| *id != photo_id);
        state.comments.retain(|id| *id != photo_id);
        Ok(state.photos.remove(&photo_id).is_some())
    }
}
