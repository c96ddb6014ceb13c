//! Base64 data URIs for image previews and transform payloads.
//!
//! A [`DataUri`] is the string form `data:<mime>;base64,<payload>` that
//! an `<img src>` accepts directly. The page stores both the original
//! and the transformed image in this form.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

const SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// Image MIME types the studio reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageMime {
    /// `image/jpeg`.
    Jpeg,
    /// `image/png`.
    Png,
}

impl ImageMime {
    /// The MIME type string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }

    /// Map a file extension (without the dot) to a MIME type.
    ///
    /// Matching is case-insensitive. Returns `None` for anything other
    /// than `jpeg`, `jpg`, or `png`.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case("jpeg") || ext.eq_ignore_ascii_case("jpg") {
            Some(Self::Jpeg)
        } else if ext.eq_ignore_ascii_case("png") {
            Some(Self::Png)
        } else {
            None
        }
    }
}

impl fmt::Display for ImageMime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from decoding a data URI.
#[derive(Debug, thiserror::Error)]
pub enum DataUriError {
    /// The payload is not valid base64.
    #[error("invalid base64 payload: {0}")]
    InvalidPayload(#[from] base64::DecodeError),
}

/// A `data:<mime>;base64,<payload>` string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataUri {
    uri: String,
    /// Byte offset of the first payload character.
    payload_start: usize,
}

impl DataUri {
    /// Encode raw bytes as a data URI with the given MIME type.
    #[must_use]
    pub fn encode(mime: ImageMime, bytes: &[u8]) -> Self {
        Self::from_base64(mime, &STANDARD.encode(bytes))
    }

    /// Wrap an already base64-encoded payload in a data URI.
    ///
    /// The payload is taken as-is; it is not validated.
    #[must_use]
    pub fn from_base64(mime: ImageMime, payload: &str) -> Self {
        let prefix_len = SCHEME.len() + mime.as_str().len() + BASE64_MARKER.len();
        let mut uri = String::with_capacity(prefix_len + payload.len());
        uri.push_str(SCHEME);
        uri.push_str(mime.as_str());
        uri.push_str(BASE64_MARKER);
        uri.push_str(payload);
        Self {
            uri,
            payload_start: prefix_len,
        }
    }

    /// The full URI, usable as an image source or link target.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.uri
    }

    /// The MIME type between `data:` and `;base64,`.
    #[must_use]
    pub fn mime(&self) -> &str {
        &self.uri[SCHEME.len()..self.payload_start - BASE64_MARKER.len()]
    }

    /// The base64 payload with the prefix stripped.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.uri[self.payload_start..]
    }

    /// Decode the payload back to raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`DataUriError::InvalidPayload`] if the payload is not
    /// valid standard base64.
    pub fn decode(&self) -> Result<Vec<u8>, DataUriError> {
        Ok(STANDARD.decode(self.payload())?)
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uri)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn encode_produces_prefixed_base64() {
        let uri = DataUri::encode(ImageMime::Png, b"hello");
        assert_eq!(uri.as_str(), "data:image/png;base64,aGVsbG8=");
        assert_eq!(uri.mime(), "image/png");
        assert_eq!(uri.payload(), "aGVsbG8=");
    }

    #[test]
    fn encoded_bytes_decode_back() {
        let bytes: Vec<u8> = (0..=255).collect();
        let uri = DataUri::encode(ImageMime::Jpeg, &bytes);
        assert_eq!(uri.decode().unwrap(), bytes);
    }

    #[test]
    fn empty_file_encodes_to_empty_payload() {
        let uri = DataUri::encode(ImageMime::Jpeg, &[]);
        assert_eq!(uri.as_str(), "data:image/jpeg;base64,");
        assert_eq!(uri.payload(), "");
    }

    #[test]
    fn from_base64_wraps_payload_verbatim() {
        let uri = DataUri::from_base64(ImageMime::Jpeg, "AAAA");
        assert_eq!(uri.as_str(), "data:image/jpeg;base64,AAAA");
    }

    #[test]
    fn decode_rejects_garbage_payload() {
        let uri = DataUri::from_base64(ImageMime::Png, "not base64!");
        assert!(matches!(
            uri.decode(),
            Err(DataUriError::InvalidPayload(_))
        ));
    }

    #[test]
    fn mime_from_extension_is_case_insensitive() {
        assert_eq!(ImageMime::from_extension("JPG"), Some(ImageMime::Jpeg));
        assert_eq!(ImageMime::from_extension("jpeg"), Some(ImageMime::Jpeg));
        assert_eq!(ImageMime::from_extension("Png"), Some(ImageMime::Png));
        assert_eq!(ImageMime::from_extension("gif"), None);
        assert_eq!(ImageMime::from_extension(""), None);
    }
}
