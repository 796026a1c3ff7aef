// src/db/photo_repository.rs
// DOCUMENTATION: Photo database operations
// PURPOSE: PostgreSQL implementation of PhotoStore

use crate::db::store::{PathForId, PhotoStore};
use crate::errors::PhotosError;
use crate::models::{NewPhoto, OpinionKind, Photo, PhotoWithOpinions};
use async_trait::async_trait;
use sqlx::PgPool;

const PHOTO_WITH_OPINIONS_SELECT: &str = r#"
    SELECT
        p.id, p.title, p.description, p.category_id, p.user_id,
        p.file_path, p.mime_type,
        (SELECT COUNT(*) FROM opinion o
            WHERE o.photo_id = p.id AND o.opinion = $2) AS total_likes,
        (SELECT COUNT(*) FROM opinion o
            WHERE o.photo_id = p.id AND o.opinion = $3) AS total_dislikes
    FROM photo p
"#;

fn db_error(operation: &str, e: sqlx::Error) -> PhotosError {
    log::error!("Failed to {}: {}", operation, e);
    PhotosError::DatabaseError(format!("{} failed: {}", operation, e))
}

/// PhotoRepository: all SQL for photos and their dependent rows
pub struct PhotoRepository {
    pool: PgPool,
}

impl PhotoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PhotoStore for PhotoRepository {
    async fn ping(&self) -> Result<(), PhotosError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("ping database", e))?;
        Ok(())
    }

    async fn category_exists(&self, category_id: i32) -> Result<bool, PhotosError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM category WHERE id = $1)")
                .bind(category_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| db_error("check category", e))?;

        Ok(exists.0)
    }

    async fn list_photos_by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<PhotoWithOpinions>, PhotosError> {
        let sql = format!(
            "{} WHERE p.category_id = $1 ORDER BY p.id ASC",
            PHOTO_WITH_OPINIONS_SELECT
        );

        sqlx::query_as::<_, PhotoWithOpinions>(&sql)
            .bind(category_id)
            .bind(OpinionKind::Like.as_str())
            .bind(OpinionKind::Dislike.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("list photos by category", e))
    }

    async fn find_photo(&self, photo_id: i32) -> Result<Option<Photo>, PhotosError> {
        sqlx::query_as::<_, Photo>(
            r#"
            SELECT id, title, description, category_id, user_id, file_path, mime_type
            FROM photo
            WHERE id = $1
            "#,
        )
        .bind(photo_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("fetch photo", e))
    }

    async fn find_photo_with_opinions(
        &self,
        photo_id: i32,
    ) -> Result<Option<PhotoWithOpinions>, PhotosError> {
        let sql = format!("{} WHERE p.id = $1", PHOTO_WITH_OPINIONS_SELECT);

        sqlx::query_as::<_, PhotoWithOpinions>(&sql)
            .bind(photo_id)
            .bind(OpinionKind::Like.as_str())
            .bind(OpinionKind::Dislike.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("fetch photo info", e))
    }

    async fn create_photo(
        &self,
        new_photo: &NewPhoto,
        path_for: PathForId<'_>,
    ) -> Result<Photo, PhotosError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("begin create transaction", e))?;

        let inserted: (i32,) = sqlx::query_as(
            r#"
            INSERT INTO photo (title, description, category_id, user_id, mime_type, file_path)
            VALUES ($1, $2, $3, $4, $5, NULL)
            RETURNING id
            "#,
        )
        .bind(&new_photo.title)
        .bind(&new_photo.description)
        .bind(new_photo.category_id)
        .bind(new_photo.user_id)
        .bind(new_photo.mime_type.as_str())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| db_error("insert photo", e))?;

        let photo = sqlx::query_as::<_, Photo>(
            r#"
            UPDATE photo
            SET file_path = $1
            WHERE id = $2
            RETURNING id, title, description, category_id, user_id, file_path, mime_type
            "#,
        )
        .bind(path_for(inserted.0))
        .bind(inserted.0)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| db_error("set photo file path", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("commit photo creation", e))?;

        Ok(photo)
    }

    async fn delete_photo(&self, photo_id: i32) -> Result<bool, PhotosError> {
        let result = sqlx::query("DELETE FROM photo WHERE id = $1")
            .bind(photo_id)
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete photo", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_photo_cascade(&self, photo_id: i32) -> Result<bool, PhotosError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("begin delete transaction", e))?;

        sqlx::query("DELETE FROM opinion WHERE photo_id = $1")
            .bind(photo_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("delete photo opinions", e))?;

        sqlx::query("DELETE FROM comment WHERE photo_id = $1")
            .bind(photo_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("delete photo comments", e))?;

        let result = sqlx::query("DELETE FROM photo WHERE id = $1")
            .bind(photo_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("delete photo", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("commit photo deletion", e))?;

        Ok(result.rows_affected() > 0)
    }
}
