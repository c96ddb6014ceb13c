//! CIE L\*a\*b\* color grading.
//!
//! Converts sRGB pixels to L\*a\*b\* (D65 white point), raises the
//! lightness channel, and converts back. Lightness is adjusted on the
//! 8-bit scale where 0–255 spans L\* 0–100, so a lift of 10 is roughly
//! 3.9 L\* units.

use image::Rgb;

use crate::types::RgbImage;

/// D65 reference white.
const WHITE_X: f32 = 0.950_456;
const WHITE_Z: f32 = 1.088_754;

/// Threshold between the cube-root and linear segments of the Lab
/// transfer function, `(6/29)^3`.
const EPSILON: f32 = 0.008_856;
const KAPPA_SLOPE: f32 = 7.787;
const LINEAR_OFFSET: f32 = 16.0 / 116.0;

/// L\* units per step of the 8-bit lightness scale.
const L_PER_STEP: f32 = 100.0 / 255.0;

/// Raise the lightness of every pixel by `amount` steps of the 8-bit L
/// scale, saturating at L\* = 100.
///
/// A zero amount returns the image unchanged.
#[must_use = "returns the graded image"]
pub fn lift_lightness(image: &RgbImage, amount: u8) -> RgbImage {
    if amount == 0 {
        return image.clone();
    }

    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        let [l, a, b] = rgb_to_lab(pixel.0);
        let l8 = (l / L_PER_STEP).round() + f32::from(amount);
        let l = l8.min(255.0) * L_PER_STEP;
        *pixel = Rgb(lab_to_rgb([l, a, b]));
    }
    out
}

/// Convert an 8-bit sRGB color to `[L*, a*, b*]`.
#[must_use]
pub fn rgb_to_lab(rgb: [u8; 3]) -> [f32; 3] {
    let [r, g, b] = rgb.map(|c| srgb_to_linear(f32::from(c) / 255.0));

    let x = 0.180_423f32.mul_add(b, 0.412_453f32.mul_add(r, 0.357_580 * g)) / WHITE_X;
    let y = 0.072_169f32.mul_add(b, 0.212_671f32.mul_add(r, 0.715_160 * g));
    let z = 0.950_227f32.mul_add(b, 0.019_334f32.mul_add(r, 0.119_193 * g)) / WHITE_Z;

    let (fx, fy, fz) = (lab_f(x), lab_f(y), lab_f(z));
    [
        116.0f32.mul_add(fy, -16.0),
        500.0 * (fx - fy),
        200.0 * (fy - fz),
    ]
}

/// Convert `[L*, a*, b*]` back to 8-bit sRGB, clamping out-of-gamut
/// values.
#[must_use]
pub fn lab_to_rgb(lab: [f32; 3]) -> [u8; 3] {
    let [l, a, b] = lab;
    let fy = (l + 16.0) / 116.0;
    let fx = a.mul_add(1.0 / 500.0, fy);
    let fz = b.mul_add(-1.0 / 200.0, fy);

    let x = lab_f_inv(fx) * WHITE_X;
    let y = lab_f_inv(fy);
    let z = lab_f_inv(fz) * WHITE_Z;

    let r = (-0.498_535f32).mul_add(z, 3.240_479f32.mul_add(x, -1.537_150 * y));
    let g = 0.041_556f32.mul_add(z, (-0.969_256f32).mul_add(x, 1.875_991 * y));
    let b = 1.057_311f32.mul_add(z, 0.055_648f32.mul_add(x, -0.204_043 * y));

    [r, g, b].map(|c| to_u8(linear_to_srgb(c)))
}

fn lab_f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA_SLOPE.mul_add(t, LINEAR_OFFSET)
    }
}

fn lab_f_inv(t: f32) -> f32 {
    let cubed = t * t * t;
    if cubed > EPSILON {
        cubed
    } else {
        (t - LINEAR_OFFSET) / KAPPA_SLOPE
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f32.mul_add(c.powf(1.0 / 2.4), -0.055)
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(c: f32) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: [u8; 3], expected: [u8; 3], tolerance: i16) {
        for c in 0..3 {
            let diff = i16::from(actual[c]) - i16::from(expected[c]);
            assert!(
                diff.abs() <= tolerance,
                "channel {c}: expected ~{expected:?}, got {actual:?}",
            );
        }
    }

    #[test]
    fn white_maps_to_full_lightness() {
        let [l, a, b] = rgb_to_lab([255, 255, 255]);
        assert!((l - 100.0).abs() < 0.1, "L = {l}");
        assert!(a.abs() < 0.5, "a = {a}");
        assert!(b.abs() < 0.5, "b = {b}");
    }

    #[test]
    fn black_maps_to_zero_lightness() {
        let [l, _, _] = rgb_to_lab([0, 0, 0]);
        assert!(l.abs() < 0.1, "L = {l}");
    }

    #[test]
    fn round_trip_preserves_colors() {
        for rgb in [
            [0, 0, 0],
            [255, 255, 255],
            [128, 128, 128],
            [135, 206, 235],
            [34, 139, 34],
            [255, 182, 193],
            [255, 0, 0],
            [0, 0, 255],
        ] {
            assert_close(lab_to_rgb(rgb_to_lab(rgb)), rgb, 1);
        }
    }

    #[test]
    fn zero_lift_returns_identical_image() {
        let img = RgbImage::from_fn(4, 4, |x, y| Rgb([(x * 60) as u8, (y * 60) as u8, 90]));
        assert_eq!(lift_lightness(&img, 0), img);
    }

    #[test]
    fn lift_brightens_midtones() {
        let img = RgbImage::from_fn(2, 2, |_, _| Rgb([100, 120, 140]));
        let lifted = lift_lightness(&img, 10);
        let before = rgb_to_lab([100, 120, 140])[0];
        let after = rgb_to_lab(lifted.get_pixel(0, 0).0)[0];
        let expected = 10.0 * L_PER_STEP;
        assert!(
            (after - before - expected).abs() < 0.6,
            "expected L* to rise by ~{expected}, went {before} -> {after}",
        );
    }

    #[test]
    fn lift_keeps_gray_neutral() {
        let img = RgbImage::from_fn(1, 1, |_, _| Rgb([128, 128, 128]));
        let [r, g, b] = lift_lightness(&img, 10).get_pixel(0, 0).0;
        assert!(r > 128, "expected brighter gray, got {r}");
        assert!(r.abs_diff(g) <= 1 && g.abs_diff(b) <= 1, "gray drifted: {r},{g},{b}");
    }

    #[test]
    fn lift_saturates_at_white() {
        let img = RgbImage::from_fn(1, 1, |_, _| Rgb([255, 255, 255]));
        let lifted = lift_lightness(&img, 255);
        assert_close(lifted.get_pixel(0, 0).0, [255, 255, 255], 1);
    }

    #[test]
    fn lift_preserves_dimensions() {
        let img = RgbImage::new(17, 31);
        let lifted = lift_lightness(&img, 10);
        assert_eq!(lifted.dimensions(), (17, 31));
    }
}
