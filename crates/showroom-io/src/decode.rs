//! Browser file decoding.
//!
//! Reads a selected file's bytes through the Dioxus file handle and
//! produces the `data:` URI that the upload cycle eventually delivers
//! to its completion callback. The encoding itself is pure and lives
//! in `showroom_core::file`; only the byte read requires a browser
//! environment.

use dioxus::html::FileData;
use showroom_core::file::{data_uri, mime_for_filename};

/// Errors that can occur while decoding a selected file.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The underlying read mechanism reported a failure.
    #[error("failed to read file: {0}")]
    Read(String),
}

/// Read a file handle's bytes and encode them as a base64 `data:` URI.
///
/// The MIME tag is derived from the filename extension, matching what
/// the widget records in its [`SelectedFile`] metadata.
///
/// # Errors
///
/// Returns [`DecodeError::Read`] when the browser read fails (e.g.,
/// the file was removed between selection and read).
///
/// [`SelectedFile`]: showroom_core::SelectedFile
pub async fn read_data_uri(file: &FileData) -> Result<String, DecodeError> {
    let bytes = file
        .read_bytes()
        .await
        .map_err(|e| DecodeError::Read(e.to_string()))?;
    let mime = mime_for_filename(&file.name());
    Ok(data_uri(mime, &bytes.to_vec()))
}
