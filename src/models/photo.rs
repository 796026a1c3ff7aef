// src/models/photo.rs

use serde::Serialize;
use sqlx::FromRow;
use validator::Validate;

/// Photo row as stored in the `photo` table.
///
/// Not `Serialize`: `file_path` is a server-side location and must only leave
/// the service through [`PhotoView`], which has no such field.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Photo {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category_id: i32,
    pub user_id: i32,
    pub file_path: Option<String>,
    pub mime_type: String,
}

/// Photo row joined with its LIKE / DISLIKE counts
#[derive(Debug, Clone, FromRow)]
pub struct PhotoWithOpinions {
    #[sqlx(flatten)]
    pub photo: Photo,
    pub total_likes: i64,
    pub total_dislikes: i64,
}

/// Accepted upload content types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoMime {
    Jpeg,
    Png,
}

impl PhotoMime {
    /// Parse a Content-Type essence ("image/jpeg", "image/png")
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        match content_type.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" => Some(PhotoMime::Jpeg),
            "image/png" => Some(PhotoMime::Png),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PhotoMime::Jpeg => "image/jpeg",
            PhotoMime::Png => "image/png",
        }
    }
}

/// Data needed to create a photo row; `file_path` is filled in once the id is known
#[derive(Debug, Clone)]
pub struct NewPhoto {
    pub title: String,
    pub description: String,
    pub category_id: i32,
    pub user_id: i32,
    pub mime_type: PhotoMime,
}

/// File part of an upload, fully buffered
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub mime_type: PhotoMime,
    pub data: Vec<u8>,
}

/// Stored photo bytes with the content type recorded at upload
#[derive(Debug, Clone)]
pub struct PhotoFile {
    pub data: Vec<u8>,
    pub mime_type: String,
}

/// Text fields of the multipart upload form
#[derive(Debug, Clone, Validate)]
pub struct PhotoUploadFields {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub description: String,
}

/// Photo DTO for API responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotoView {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category_id: i32,
    pub user_id: i32,
    pub mime_type: String,
    pub url: String,
    pub total_likes: i64,
    pub total_dislikes: i64,
    #[serde(rename = "belongToUser")]
    pub belong_to_user: bool,
}

/// Public path a photo file is served from
pub fn photo_url(photo_id: i32) -> String {
    format!("/photo/{}", photo_id)
}

impl PhotoWithOpinions {
    /// Convert database row into API response DTO
    /// DOCUMENTATION: belongToUser is computed against the requesting identity
    pub fn to_view(&self, requester_id: i32) -> PhotoView {
        let photo = &self.photo;
        PhotoView {
            id: photo.id,
            title: photo.title.clone(),
            description: photo.description.clone(),
            category_id: photo.category_id,
            user_id: photo.user_id,
            mime_type: photo.mime_type.clone(),
            url: photo_url(photo.id),
            total_likes: self.total_likes,
            total_dislikes: self.total_dislikes,
            belong_to_user: photo.user_id == requester_id,
        }
    }
}

impl Photo {
    /// View of a photo that has no opinions yet
    pub fn to_view(&self, requester_id: i32) -> PhotoView {
        PhotoWithOpinions {
            photo: self.clone(),
            total_likes: 0,
            total_dislikes: 0,
        }
        .to_view(requester_id)
    }
}
