// src/services/photo_service.rs
// DOCUMENTATION: Business logic for photos
// PURPOSE: Existence checks, blob I/O and view projection between handlers and stores

use crate::db::PhotoStore;
use crate::errors::PhotosError;
use crate::models::{NewPhoto, PhotoFile, PhotoUpload, PhotoUploadFields, PhotoView};
use crate::storage::{BlobError, BlobStore};

pub struct PhotoService;

impl PhotoService {
    async fn ensure_category(store: &dyn PhotoStore, category_id: i32) -> Result<(), PhotosError> {
        if store.category_exists(category_id).await? {
            Ok(())
        } else {
            Err(PhotosError::NotFound(format!(
                "Category not found with id: {}",
                category_id
            )))
        }
    }

    fn photo_not_found(photo_id: i32) -> PhotosError {
        PhotosError::NotFound(format!("Photo not found with id: {}", photo_id))
    }

    /// List the photos of a category with their like / dislike totals
    pub async fn list_photos(
        store: &dyn PhotoStore,
        category_id: i32,
        requester_id: i32,
    ) -> Result<Vec<PhotoView>, PhotosError> {
        Self::ensure_category(store, category_id).await?;

        let rows = store.list_photos_by_category(category_id).await?;
        Ok(rows.iter().map(|row| row.to_view(requester_id)).collect())
    }

    /// Create the photo row, then write its file.
    ///
    /// If the file cannot be written the row is removed again, so a photo is
    /// never visible without a file behind it.
    pub async fn add_photo(
        store: &dyn PhotoStore,
        blobs: &dyn BlobStore,
        category_id: i32,
        fields: PhotoUploadFields,
        upload: Option<PhotoUpload>,
        uploader_id: i32,
    ) -> Result<PhotoView, PhotosError> {
        Self::ensure_category(store, category_id).await?;

        let upload = upload
            .ok_or_else(|| PhotosError::InvalidInput("A photo file is required".to_string()))?;

        let new_photo = NewPhoto {
            title: fields.title,
            description: fields.description,
            category_id,
            user_id: uploader_id,
            mime_type: upload.mime_type,
        };

        let path_for = |id: i32| blobs.path_for(id);
        let photo = store.create_photo(&new_photo, &path_for).await?;
        let path = photo.file_path.clone().unwrap_or_else(|| blobs.path_for(photo.id));

        if let Err(e) = blobs.write(&path, &upload.data).await {
            log::error!("Failed to store file for photo {}: {}", photo.id, e);
            if let Err(cleanup) = store.delete_photo(photo.id).await {
                log::error!(
                    "Failed to remove photo {} after storage failure: {}",
                    photo.id,
                    cleanup
                );
            }
            return Err(PhotosError::StorageError(format!(
                "Could not store file for photo {}",
                photo.id
            )));
        }

        log::info!(
            "Stored photo {} ({} bytes, {}) in category {}",
            photo.id,
            upload.data.len(),
            photo.mime_type,
            category_id
        );

        Ok(photo.to_view(uploader_id))
    }

    /// Read the stored bytes of a photo
    pub async fn read_photo_file(
        store: &dyn PhotoStore,
        blobs: &dyn BlobStore,
        photo_id: i32,
    ) -> Result<PhotoFile, PhotosError> {
        let photo = store
            .find_photo(photo_id)
            .await?
            .ok_or_else(|| Self::photo_not_found(photo_id))?;

        let gone = || PhotosError::Gone(format!("File for photo {} is no longer available", photo_id));

        let path = photo.file_path.ok_or_else(gone)?;

        let data = blobs.read(&path).await.map_err(|e| match e {
            BlobError::NotFound(_) => gone(),
            other => {
                log::error!("Failed to read file for photo {}: {}", photo_id, other);
                PhotosError::StorageError(format!("Could not read file for photo {}", photo_id))
            }
        })?;

        Ok(PhotoFile {
            data,
            mime_type: photo.mime_type,
        })
    }

    /// Delete a photo together with its opinions and comments.
    /// The file on disk is left in place.
    pub async fn delete_photo(store: &dyn PhotoStore, photo_id: i32) -> Result<(), PhotosError> {
        if store.find_photo(photo_id).await?.is_none() {
            return Err(Self::photo_not_found(photo_id));
        }

        if !store.delete_photo_cascade(photo_id).await? {
            // Removed by a concurrent request between the lookup and the delete
            return Err(Self::photo_not_found(photo_id));
        }

        log::info!("Deleted photo {} with its opinions and comments", photo_id);
        Ok(())
    }

    /// Metadata of a single photo with like / dislike totals
    pub async fn get_photo_info(
        store: &dyn PhotoStore,
        photo_id: i32,
        requester_id: i32,
    ) -> Result<PhotoView, PhotosError> {
        let row = store
            .find_photo_with_opinions(photo_id)
            .await?
            .ok_or_else(|| Self::photo_not_found(photo_id))?;

        Ok(row.to_view(requester_id))
    }
}
