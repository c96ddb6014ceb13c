//! ghibli-style: Reference Ghibli-style restyle (sans-IO).
//!
//! The transform endpoint's reference behavior, as a pure function:
//!
//! 1. Decode the image (JPEG or PNG) and drop any alpha channel
//! 2. Lift lightness in L\*a\*b\* space for a softer, airier palette
//! 3. Gaussian soft-focus blur
//! 4. Encode as JPEG
//!
//! [`handle_request`] wraps the same steps in the endpoint's JSON wire
//! types, base64 in and base64 out.

pub mod blur;
pub mod lab;
pub mod types;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use ghibli_core::{TransformRequest, TransformResponse};
use image::ImageEncoder;
use image::codecs::jpeg::JpegEncoder;

pub use types::{RgbImage, StyleConfig, StyleError};

/// Restyle raw image bytes and return the result as JPEG bytes.
///
/// # Errors
///
/// Returns [`StyleError::InvalidConfig`] if `jpeg_quality` is outside
/// 1–100 or `blur_sigma` is not finite, [`StyleError::EmptyInput`] if `image_bytes` is empty,
/// [`StyleError::ImageDecode`] if the format is unrecognized or the data
/// is corrupt, and [`StyleError::ImageEncode`] if JPEG encoding fails.
pub fn stylize(image_bytes: &[u8], config: &StyleConfig) -> Result<Vec<u8>, StyleError> {
    if !(1..=100).contains(&config.jpeg_quality) {
        return Err(StyleError::InvalidConfig(format!(
            "jpeg_quality must be 1-100, got {}",
            config.jpeg_quality
        )));
    }
    if !config.blur_sigma.is_finite() {
        return Err(StyleError::InvalidConfig(format!(
            "blur_sigma must be finite, got {}",
            config.blur_sigma
        )));
    }
    if image_bytes.is_empty() {
        return Err(StyleError::EmptyInput);
    }

    let rgb = image::load_from_memory(image_bytes)
        .map_err(StyleError::ImageDecode)?
        .to_rgb8();

    let graded = lab::lift_lightness(&rgb, config.brightness);
    let softened = blur::soft_focus(&graded, config.blur_sigma);

    encode_jpeg(&softened, config.jpeg_quality)
}

/// Serve one transform request: decode the base64 payload, restyle it,
/// and return the result base64-encoded.
///
/// # Errors
///
/// Returns [`StyleError::Base64`] if the payload is not valid base64,
/// plus every error [`stylize`] can return.
pub fn handle_request(
    request: &TransformRequest,
    config: &StyleConfig,
) -> Result<TransformResponse, StyleError> {
    let image_bytes = STANDARD.decode(&request.image)?;
    let jpeg = stylize(&image_bytes, config)?;
    Ok(TransformResponse {
        transformed_image: STANDARD.encode(jpeg),
    })
}

fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>, StyleError> {
    let mut buf = Vec::new();
    JpegEncoder::new_with_quality(&mut buf, quality)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(StyleError::ImageEncode)?;
    Ok(buf)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([(x * 10) as u8, (y * 10) as u8, 120, 255])
        });
        let mut buf = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut buf);
        encoder
            .write_image(
                img.as_raw(),
                img.width(),
                img.height(),
                image::ExtendedColorType::Rgba8,
            )
            .unwrap();
        buf
    }

    #[test]
    fn stylize_empty_input() {
        let result = stylize(&[], &StyleConfig::default());
        assert!(matches!(result, Err(StyleError::EmptyInput)));
    }

    #[test]
    fn stylize_corrupt_input() {
        let result = stylize(&[0xFF, 0x00, 0x12], &StyleConfig::default());
        assert!(matches!(result, Err(StyleError::ImageDecode(_))));
    }

    #[test]
    fn stylize_rejects_zero_quality() {
        let config = StyleConfig {
            jpeg_quality: 0,
            ..StyleConfig::default()
        };
        let result = stylize(&png_bytes(4, 4), &config);
        assert!(matches!(result, Err(StyleError::InvalidConfig(_))));
    }

    #[test]
    fn stylize_rejects_non_finite_sigma() {
        for blur_sigma in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let config = StyleConfig {
                blur_sigma,
                ..StyleConfig::default()
            };
            let result = stylize(&png_bytes(4, 4), &config);
            assert!(
                matches!(result, Err(StyleError::InvalidConfig(_))),
                "sigma {blur_sigma}"
            );
        }
    }

    #[test]
    fn stylize_png_produces_jpeg_of_same_size() {
        let jpeg = stylize(&png_bytes(24, 16), &StyleConfig::default()).unwrap();
        assert_eq!(&jpeg[..2], &[0xFF, 0xD8], "expected JPEG SOI marker");

        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!(decoded.width(), 24);
        assert_eq!(decoded.height(), 16);
    }

    #[test]
    fn handle_request_rejects_bad_base64() {
        let request = TransformRequest {
            image: "%%%".into(),
        };
        let result = handle_request(&request, &StyleConfig::default());
        assert!(matches!(result, Err(StyleError::Base64(_))));
    }
}
