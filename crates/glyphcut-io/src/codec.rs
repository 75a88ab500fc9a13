//! Non-PNG formats through the `image` crate
//!
//! JPEG, BMP, GIF, TIFF, WebP, PNM/PAM and TGA screenshots are decoded by
//! `image` and converted into [`Pix`]. Gray images without alpha become 8 bpp,
//! everything else becomes 32 bpp RGB or RGBA.

use crate::{IoError, IoResult};
use glyphcut_core::{Pix, PixelDepth, color};
use image::{DynamicImage, ImageReader};
use std::path::Path;

/// Decode an image file with the `image` crate.
pub fn read_with_codec<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let decoded = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;
    pix_from_dynamic(&decoded)
}

/// Convert a decoded image into a `Pix`.
pub fn pix_from_dynamic(img: &DynamicImage) -> IoResult<Pix> {
    let (width, height) = (img.width(), img.height());
    let color_type = img.color();

    if color_type.channel_count() == 1 {
        let gray = img.to_luma8();
        let mut pm = Pix::new(width, height, PixelDepth::Bit8)?.to_mut();
        for (x, y, p) in gray.enumerate_pixels() {
            pm.set_pixel_unchecked(x, y, p.0[0] as u32);
        }
        return Ok(pm.into());
    }

    if color_type.has_alpha() {
        let rgba = img.to_rgba8();
        let mut pm = Pix::new_rgba(width, height)?.to_mut();
        for (x, y, p) in rgba.enumerate_pixels() {
            let [r, g, b, a] = p.0;
            pm.set_pixel_unchecked(x, y, color::compose_rgba(r, g, b, a));
        }
        return Ok(pm.into());
    }

    let rgb = img.to_rgb8();
    let mut pm = Pix::new(width, height, PixelDepth::Bit32)?.to_mut();
    for (x, y, p) in rgb.enumerate_pixels() {
        let [r, g, b] = p.0;
        pm.set_pixel_unchecked(x, y, color::compose_rgb(r, g, b));
    }
    Ok(pm.into())
}
