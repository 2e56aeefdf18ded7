//! Receipt file handling for uploads

use std::path::Path;

use crate::error::{ClientError, ClientResult};

/// A file read from disk, ready to be sent as the `file` multipart field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Read a file from disk
    pub fn read(path: &Path) -> ClientResult<Self> {
        let bytes = std::fs::read(path)
            .map_err(|e| ClientError::Io(format!("Failed to read {}: {}", path.display(), e)))?;

        Ok(Self::from_bytes(file_name_of(path), bytes))
    }

    /// Build an upload from bytes already in memory
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_for(&file_name);
        Self {
            file_name,
            mime_type,
            bytes,
        }
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "receipt".to_string())
}

/// MIME type guessed from the file extension
///
/// The server only accepts `image/*` uploads, so anything unrecognised is
/// sent as `application/octet-stream` and left for the server to reject.
pub fn mime_for(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "heic" => "image/heic",
        _ => "application/octet-stream",
    }
}
