//! Shared types for the restyle pipeline.

use serde::{Deserialize, Serialize};

/// Re-export so callers can hold intermediate images without
/// depending on `image` directly.
pub use image::RgbImage;

/// Parameters for [`stylize`](crate::stylize).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Amount added to the lightness channel, on the 8-bit L scale
    /// (0–255 spans L* 0–100). Saturates at white.
    pub brightness: u8,

    /// Gaussian blur sigma for the soft-focus pass. Non-positive values
    /// skip the blur.
    pub blur_sigma: f32,

    /// JPEG quality of the encoded result, 1–100.
    pub jpeg_quality: u8,
}

impl StyleConfig {
    /// Default lightness lift.
    pub const DEFAULT_BRIGHTNESS: u8 = 10;

    /// Sigma of a 5×5 Gaussian kernel when sigma is derived from the
    /// kernel size: `0.3 * ((5 - 1) * 0.5 - 1) + 0.8`.
    pub const DEFAULT_BLUR_SIGMA: f32 = 1.1;

    /// Default JPEG quality.
    pub const DEFAULT_JPEG_QUALITY: u8 = 75;
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            brightness: Self::DEFAULT_BRIGHTNESS,
            blur_sigma: Self::DEFAULT_BLUR_SIGMA,
            jpeg_quality: Self::DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Errors that can occur while restyling an image.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// The request payload was not valid base64.
    #[error("invalid base64 payload: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Failed to decode the input image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[source] image::ImageError),

    /// Failed to encode the result as JPEG.
    #[error("failed to encode JPEG: {0}")]
    ImageEncode(#[source] image::ImageError),

    /// The configuration is out of range.
    #[error("invalid style configuration: {0}")]
    InvalidConfig(String),
}
