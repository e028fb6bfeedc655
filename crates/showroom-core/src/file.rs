//! Selected-file metadata and data-URI encoding.
//!
//! The byte payload of a selection stays with the browser file handle
//! in `showroom-io`; this module carries only the render-relevant
//! metadata (name, MIME tag) and the pure encoding of bytes into the
//! `data:` URI that the completion callback eventually receives.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// MIME type reported when the extension is unknown.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Metadata for the file currently owned by the upload widget.
///
/// Replaced wholesale by any subsequent selection; there is no
/// explicit "remove" affordance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedFile {
    /// Original filename as reported by the picker or drop event.
    pub name: String,
    /// MIME-type tag derived from the filename extension.
    pub mime: String,
}

impl SelectedFile {
    /// Build a selection from a filename, deriving the MIME tag from
    /// its extension.
    #[must_use]
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        let mime = mime_for_filename(&name).to_owned();
        Self { name, mime }
    }
}

/// Map a filename to its image MIME type, falling back to
/// [`FALLBACK_MIME`] for unknown or missing extensions.
#[must_use]
pub fn mime_for_filename(name: &str) -> &'static str {
    let Some((_, ext)) = name.rsplit_once('.') else {
        return FALLBACK_MIME;
    };
    if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") {
        "image/jpeg"
    } else if ext.eq_ignore_ascii_case("png") {
        "image/png"
    } else {
        FALLBACK_MIME
    }
}

/// Encode raw file bytes as a `data:<mime>;base64,<payload>` URI.
///
/// This mirrors what the browser's `FileReader.readAsDataURL` would
/// produce, but stays a pure function so it can be exercised off the
/// wasm target.
#[must_use]
pub fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_for_jpeg_variants() {
        assert_eq!(mime_for_filename("plan.jpg"), "image/jpeg");
        assert_eq!(mime_for_filename("plan.JPG"), "image/jpeg");
        assert_eq!(mime_for_filename("plan.jpeg"), "image/jpeg");
    }

    #[test]
    fn mime_for_png() {
        assert_eq!(mime_for_filename("plan.png"), "image/png");
        assert_eq!(mime_for_filename("a.b.PNG"), "image/png");
    }

    #[test]
    fn mime_falls_back_for_unknown_extension() {
        assert_eq!(mime_for_filename("plan.gif"), FALLBACK_MIME);
        assert_eq!(mime_for_filename("plan"), FALLBACK_MIME);
        assert_eq!(mime_for_filename(""), FALLBACK_MIME);
    }

    #[test]
    fn selected_file_derives_mime_from_name() {
        let file = SelectedFile::from_name("floor-plan.png");
        assert_eq!(file.name, "floor-plan.png");
        assert_eq!(file.mime, "image/png");
    }

    #[test]
    fn data_uri_has_expected_shape() {
        // "Man" is the canonical RFC 4648 example: base64 "TWFu".
        let uri = data_uri("image/png", b"Man");
        assert_eq!(uri, "data:image/png;base64,TWFu");
    }

    #[test]
    fn data_uri_of_empty_bytes_is_just_the_header() {
        assert_eq!(data_uri("image/jpeg", b""), "data:image/jpeg;base64,");
    }

    #[test]
    fn selected_file_serde_round_trip() {
        let file = SelectedFile::from_name("plan.jpeg");
        let json = serde_json::to_string(&file).unwrap();
        let deserialized: SelectedFile = serde_json::from_str(&json).unwrap();
        assert_eq!(file, deserialized);
    }
}
