//! Photo loading for the external registration

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Photo could not be read; the record continues without a face
#[derive(Debug, Error)]
#[error("Failed to read photo {}: {source}", .path.display())]
pub struct PhotoError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Read `images_dir/filename` and return it base64-encoded
///
/// `filename` must stay inside `images_dir`: absolute paths, drive prefixes
/// and `.`/`..` components are rejected before any read.
pub async fn load_photo_base64(images_dir: &Path, filename: &str) -> Result<String, PhotoError> {
    let relative = Path::new(filename);
    let path = images_dir.join(relative);

    if filename.is_empty() || !relative.components().all(|c| matches!(c, Component::Normal(_))) {
        return Err(PhotoError {
            path,
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "photo filename must be relative to the images directory",
            ),
        });
    }

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| PhotoError { path: path.clone(), source })?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Loaded photo");

    Ok(encode_photo(&bytes))
}

pub fn encode_photo(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
