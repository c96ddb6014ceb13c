//! Wire types for the remote transform endpoint.
//!
//! The endpoint takes a JSON body `{"image": "<base64>"}` and answers
//! with `{"transformedImage": "<base64>"}`. Payloads carry no data-URI
//! prefix; the response is always treated as JPEG.

use serde::{Deserialize, Serialize};

use crate::data_uri::{DataUri, ImageMime};

/// Relative path of the transform endpoint.
pub const TRANSFORM_ENDPOINT: &str = "/api/transform";

/// Filename offered when downloading the transformed image.
pub const DOWNLOAD_FILENAME: &str = "ghibli-transformed.jpg";

/// Request body for the transform endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformRequest {
    /// Base64 image payload with the data-URI prefix stripped.
    pub image: String,
}

impl TransformRequest {
    /// Build a request from the original image's data URI.
    #[must_use]
    pub fn from_original(original: &DataUri) -> Self {
        Self {
            image: original.payload().to_owned(),
        }
    }
}

/// Response body from the transform endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformResponse {
    /// Base64 JPEG payload of the stylized image.
    pub transformed_image: String,
}

impl TransformResponse {
    /// Wrap the payload as a `data:image/jpeg;base64,` URI.
    #[must_use]
    pub fn into_data_uri(self) -> DataUri {
        DataUri::from_base64(ImageMime::Jpeg, &self.transformed_image)
    }
}
