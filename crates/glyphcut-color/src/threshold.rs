//! Binary thresholding
//!
//! Global binarization of a grayscale image, with the threshold either given
//! or chosen by Otsu's method. Foreground is the *bright* side: a pixel is
//! set in the mask iff its gray value is strictly above the threshold.

use crate::colorspace::{check_gray, pix_convert_to_gray};
use crate::ColorResult;
use glyphcut_core::{Pix, PixelDepth};

/// Count the pixels of each gray level in an 8-bpp image.
pub fn gray_histogram(pix: &Pix) -> ColorResult<[u32; 256]> {
    check_gray(pix)?;

    let mut hist = [0u32; 256];
    for y in 0..pix.height() {
        for x in 0..pix.width() {
            hist[pix.get_pixel_unchecked(x, y) as usize] += 1;
        }
    }
    Ok(hist)
}

/// Convert a grayscale image to binary using a fixed threshold
///
/// Pixels with value > `threshold` become foreground (1), all others
/// become background (0).
pub fn threshold_to_binary(pix: &Pix, threshold: u8) -> ColorResult<Pix> {
    check_gray(pix)?;

    let mut out = Pix::new(pix.width(), pix.height(), PixelDepth::Bit1)?.to_mut();
    for y in 0..pix.height() {
        for x in 0..pix.width() {
            if pix.get_pixel_unchecked(x, y) > threshold as u32 {
                out.set_pixel_unchecked(x, y, 1);
            }
        }
    }
    Ok(out.into())
}

/// Compute Otsu's threshold for a grayscale image
///
/// Picks the `t` that maximizes the between-class variance
/// `w0 * w1 * (mu0 - mu1)^2`, where class 0 holds levels `0..=t` and
/// class 1 holds `t+1..=255`. Ties keep the lowest `t`. An image with a
/// single gray level has no split and yields 0.
pub fn compute_otsu_threshold(pix: &Pix) -> ColorResult<u8> {
    let hist = gray_histogram(pix)?;
    Ok(otsu_from_histogram(&hist))
}

fn otsu_from_histogram(hist: &[u32; 256]) -> u8 {
    let total: f64 = hist.iter().map(|&c| c as f64).sum();
    let sum_all: f64 = hist
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64)
        .sum();

    let mut best_t = 0u8;
    let mut best_var = 0.0f64;
    let mut w0 = 0.0f64;
    let mut sum0 = 0.0f64;

    for (t, &count) in hist.iter().enumerate() {
        w0 += count as f64;
        sum0 += t as f64 * count as f64;
        let w1 = total - w0;
        if w0 == 0.0 || w1 == 0.0 {
            continue;
        }

        let mu0 = sum0 / w0;
        let mu1 = (sum_all - sum0) / w1;
        let var = w0 * w1 * (mu0 - mu1) * (mu0 - mu1);
        if var > best_var {
            best_var = var;
            best_t = t as u8;
        }
    }

    best_t
}

/// Binarize with Otsu's method
///
/// Accepts 8-bpp gray or 32-bpp color input; color is converted to gray
/// first. Returns the chosen threshold together with the 1-bpp mask.
pub fn threshold_otsu(pix: &Pix) -> ColorResult<(u8, Pix)> {
    let gray = pix_convert_to_gray(pix)?;
    let t = compute_otsu_threshold(&gray)?;
    let mask = threshold_to_binary(&gray, t)?;
    Ok((t, mask))
}
