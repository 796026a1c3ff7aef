// src/storage/fs.rs

use super::{BlobError, BlobStore};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;

/// Photo files on local disk, one flat file per photo.
///
/// Files are named `{root}/{photo_id}.jpg` whatever their actual type, so
/// paths already recorded in the `photo` table keep resolving.
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    /// Open the store, creating the root directory if needed
    pub async fn new(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root)
            .await
            .with_context(|| format!("Failed to create storage root: {}", root.display()))?;
        log::info!("Photo storage directory: {}", root.display());
        Ok(Self { root })
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    fn path_for(&self, photo_id: i32) -> String {
        self.root
            .join(format!("{}.jpg", photo_id))
            .to_string_lossy()
            .into_owned()
    }

    /// Writes to `{path}.part` and renames it into place, so a failed write
    /// never leaves a truncated file at `path`.
    async fn write(&self, path: &str, data: &[u8]) -> Result<(), BlobError> {
        let partial = format!("{}.part", path);

        let written = match fs::write(&partial, data).await {
            Ok(()) => fs::rename(&partial, path).await,
            Err(e) => Err(e),
        };

        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_file(&partial).await {
                if cleanup.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("Failed to remove partial file {}: {}", partial, cleanup);
                }
            }
            return Err(BlobError::from_io(path, e));
        }

        Ok(())
    }

    async fn read(&self, path: &str) -> Result<Vec<u8>, BlobError> {
        fs::read(path).await.map_err(|e| BlobError::from_io(path, e))
    }
}
