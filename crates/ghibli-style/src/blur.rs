//! Soft-focus Gaussian blur.
//!
//! `imageproc::filter::gaussian_blur_f32` works on single-channel
//! images, so [`soft_focus`] splits the RGB image into three planes,
//! blurs each, and reassembles them. Blur is linear and per-channel, so
//! this equals blurring in color space.
//!
//! The kernel width follows from sigma, so at the default sigma of 1.1
//! the result approximates a fixed 5×5 kernel rather than matching it
//! tap for tap.

use image::{GrayImage, Luma, Rgb};

use crate::types::RgbImage;

/// Blur an RGB image with the given sigma.
///
/// Sigma values that are not finite and positive return the image
/// unchanged; `imageproc` panics on them.
#[must_use = "returns the blurred image"]
pub fn soft_focus(image: &RgbImage, sigma: f32) -> RgbImage {
    if !(sigma.is_finite() && sigma > 0.0) {
        return image.clone();
    }

    let (w, h) = image.dimensions();

    let planes: [GrayImage; 3] = std::array::from_fn(|c| {
        GrayImage::from_fn(w, h, |x, y| Luma([image.get_pixel(x, y).0[c]]))
    });

    let blurred: [GrayImage; 3] =
        std::array::from_fn(|c| imageproc::filter::gaussian_blur_f32(&planes[c], sigma));

    RgbImage::from_fn(w, h, |x, y| {
        Rgb([
            blurred[0].get_pixel(x, y).0[0],
            blurred[1].get_pixel(x, y).0[0],
            blurred[2].get_pixel(x, y).0[0],
        ])
    })
}
