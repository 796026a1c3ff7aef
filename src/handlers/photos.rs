// src/handlers/photos.rs
// DOCUMENTATION: HTTP handlers for photo operations
// PURPOSE: Validate path ids and upload forms, call PhotoService, shape responses

use crate::config::Config;
use crate::db::PhotoStore;
use crate::errors::PhotosError;
use crate::handlers::auth::AuthenticatedUser;
use crate::models::{ApiResponse, PhotoMime, PhotoUpload, PhotoUploadFields};
use crate::services::PhotoService;
use crate::storage::BlobStore;
use actix_multipart::{Field, Multipart};
use actix_web::{http::header, web, HttpRequest, HttpResponse, Responder};
use futures_util::TryStreamExt;
use validator::Validate;

/// Parse a path id, accepting only positive integers
fn parse_id(raw: &str, name: &str) -> Result<i32, PhotosError> {
    raw.parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| PhotosError::ValidationError(format!("{} must be a positive integer", name)))
}

/// Reject a body whose declared length is over the cap before parsing it.
/// Chunked bodies have no length and are bounded by `drain_field` instead.
fn check_content_length(req: &HttpRequest, max_bytes: usize) -> Result<(), PhotosError> {
    let declared = req
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());

    match declared {
        Some(len) if len > max_bytes as u64 => Err(PhotosError::PayloadTooLarge(format!(
            "Request body of {} bytes exceeds the {} byte limit",
            len, max_bytes
        ))),
        _ => Ok(()),
    }
}

/// Read one multipart field into memory, counting against the body cap
async fn drain_field(
    field: &mut Field,
    received: &mut usize,
    max_bytes: usize,
) -> Result<Vec<u8>, PhotosError> {
    let mut buf = Vec::new();

    while let Some(chunk) = field
        .try_next()
        .await
        .map_err(|e| PhotosError::InvalidInput(e.to_string()))?
    {
        *received += chunk.len();
        if *received > max_bytes {
            return Err(PhotosError::PayloadTooLarge(format!(
                "Upload exceeds the {} byte limit",
                max_bytes
            )));
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(buf)
}

async fn read_text_field(
    field: &mut Field,
    received: &mut usize,
    max_bytes: usize,
) -> Result<String, PhotosError> {
    let bytes = drain_field(field, received, max_bytes).await?;
    String::from_utf8(bytes)
        .map_err(|_| PhotosError::ValidationError("form fields must be valid UTF-8".to_string()))
}

/// Parse the upload form: title, description and the file part
async fn read_upload_form(
    mut payload: Multipart,
    max_bytes: usize,
) -> Result<(PhotoUploadFields, Option<PhotoUpload>), PhotosError> {
    let mut title = None;
    let mut description = None;
    let mut upload = None;
    let mut received = 0usize;

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| PhotosError::InvalidInput(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "file" => {
                let mime_type = field
                    .content_type()
                    .and_then(|m| PhotoMime::from_content_type(m.essence_str()))
                    .ok_or_else(|| {
                        PhotosError::ValidationError(
                            "file must be of type image/jpeg or image/png".to_string(),
                        )
                    })?;

                let data = drain_field(&mut field, &mut received, max_bytes).await?;
                // An empty file part is what browsers send when nothing was picked
                if !data.is_empty() {
                    upload = Some(PhotoUpload { mime_type, data });
                }
            }
            "title" => title = Some(read_text_field(&mut field, &mut received, max_bytes).await?),
            "description" => {
                description = Some(read_text_field(&mut field, &mut received, max_bytes).await?)
            }
            _ => {
                drain_field(&mut field, &mut received, max_bytes).await?;
            }
        }
    }

    let fields = PhotoUploadFields {
        title: title.ok_or_else(|| PhotosError::ValidationError("title is required".to_string()))?,
        description: description
            .ok_or_else(|| PhotosError::ValidationError("description is required".to_string()))?,
    };

    if let Err(e) = fields.validate() {
        return Err(PhotosError::ValidationError(e.to_string()));
    }

    Ok((fields, upload))
}

/// GET /category/{category_id}/photos
/// List photos of a category with like / dislike totals
pub async fn list_category_photos(
    store: web::Data<dyn PhotoStore>,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<impl Responder, PhotosError> {
    let category_id = parse_id(&path, "category_id")?;

    let photos = PhotoService::list_photos(store.get_ref(), category_id, user.user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::with_data("Photos retrieved", photos)))
}

/// POST /category/{category_id}/photo
/// Upload a photo (multipart: title, description, file)
pub async fn add_photo(
    store: web::Data<dyn PhotoStore>,
    blobs: web::Data<dyn BlobStore>,
    config: web::Data<Config>,
    user: AuthenticatedUser,
    req: HttpRequest,
    path: web::Path<String>,
    payload: Multipart,
) -> Result<impl Responder, PhotosError> {
    let category_id = parse_id(&path, "category_id")?;
    check_content_length(&req, config.max_upload_bytes)?;
    let (fields, upload) = read_upload_form(payload, config.max_upload_bytes).await?;

    let photo = PhotoService::add_photo(
        store.get_ref(),
        blobs.get_ref(),
        category_id,
        fields,
        upload,
        user.user_id,
    )
    .await?;

    Ok(HttpResponse::Created().json(ApiResponse::with_data("Photo uploaded", photo)))
}

/// GET /photo/{photo_id}
/// Serve the stored file; open to anonymous callers
pub async fn read_photo_file(
    store: web::Data<dyn PhotoStore>,
    blobs: web::Data<dyn BlobStore>,
    path: web::Path<String>,
) -> Result<impl Responder, PhotosError> {
    let photo_id = parse_id(&path, "photo_id")?;

    let file = PhotoService::read_photo_file(store.get_ref(), blobs.get_ref(), photo_id).await?;
    Ok(HttpResponse::Ok()
        .content_type(file.mime_type)
        .body(file.data))
}

/// GET /photo/{photo_id}/info
pub async fn get_photo_info(
    store: web::Data<dyn PhotoStore>,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<impl Responder, PhotosError> {
    let photo_id = parse_id(&path, "photo_id")?;

    let photo = PhotoService::get_photo_info(store.get_ref(), photo_id, user.user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::with_data("Photo retrieved", photo)))
}

/// DELETE /photo/{photo_id}
/// Delete a photo with its opinions and comments
pub async fn delete_photo(
    store: web::Data<dyn PhotoStore>,
    _user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<impl Responder, PhotosError> {
    let photo_id = parse_id(&path, "photo_id")?;

    PhotoService::delete_photo(store.get_ref(), photo_id).await?;
    Ok(HttpResponse::Accepted().json(ApiResponse::message(format!(
        "Photo {} has been deleted",
        photo_id
    ))))
}

/// Configuration for photo routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/category/{category_id}/photos",
        web::get().to(list_category_photos),
    )
    .route("/category/{category_id}/photo", web::post().to(add_photo))
    .route("/photo/{photo_id}/info", web::get().to(get_photo_info))
    .route("/photo/{photo_id}", web::get().to(read_photo_file))
    .route("/photo/{photo_id}", web::delete().to(delete_photo));
}
