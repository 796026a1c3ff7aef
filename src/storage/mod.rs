// src/storage/mod.rs
// DOCUMENTATION: Blob storage for photo files
// PURPOSE: Whole-file write/read addressed by a path derived from the photo id

pub mod fs;

pub use fs::FsBlobStore;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlobError {
    #[error("blob not found: {0}")]
    NotFound(String),

    #[error("blob I/O failed for {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl BlobError {
    pub(crate) fn from_io(path: &str, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            BlobError::NotFound(path.to_string())
        } else {
            BlobError::Io {
                path: path.to_string(),
                source,
            }
        }
    }
}

#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Location of the file belonging to `photo_id`
    fn path_for(&self, photo_id: i32) -> String;

    async fn write(&self, path: &str, data: &[u8]) -> Result<(), BlobError>;

    async fn read(&self, path: &str) -> Result<Vec<u8>, BlobError>;
}
