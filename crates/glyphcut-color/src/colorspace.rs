//! Color space conversion
//!
//! Only the RGB -> grayscale direction is needed: segmentation works on
//! luma alone.

use crate::{ColorError, ColorResult};
use glyphcut_core::{Pix, PixelDepth, color};

/// Convert RGB to grayscale using ITU-R BT.601 coefficients
///
/// Formula: gray = 0.299*R + 0.587*G + 0.114*B, rounded to nearest.
#[inline]
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
    let gray = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
    gray.round().clamp(0.0, 255.0) as u8
}

/// Convert an image to 8-bpp grayscale
///
/// - 32 bpp: luma of each pixel, alpha is ignored
/// - 8 bpp: returned as is (shared data)
/// - 1 bpp: 0 -> 0, 1 -> 255
pub fn pix_convert_to_gray(pix: &Pix) -> ColorResult<Pix> {
    match pix.depth() {
        PixelDepth::Bit8 => Ok(pix.clone()),
        PixelDepth::Bit32 => {
            let mut out = Pix::new(pix.width(), pix.height(), PixelDepth::Bit8)?.to_mut();
            for y in 0..pix.height() {
                for x in 0..pix.width() {
                    let (r, g, b) = color::extract_rgb(pix.get_pixel_unchecked(x, y));
                    out.set_pixel_unchecked(x, y, rgb_to_gray(r, g, b) as u32);
                }
            }
            Ok(out.into())
        }
        PixelDepth::Bit1 => {
            let mut out = Pix::new(pix.width(), pix.height(), PixelDepth::Bit8)?.to_mut();
            for y in 0..pix.height() {
                for x in 0..pix.width() {
                    if pix.get_pixel_unchecked(x, y) != 0 {
                        out.set_pixel_unchecked(x, y, 255);
                    }
                }
            }
            Ok(out.into())
        }
    }
}

/// Require an 8-bpp image.
pub(crate) fn check_gray(pix: &Pix) -> ColorResult<()> {
    if pix.depth() != PixelDepth::Bit8 {
        return Err(ColorError::UnsupportedDepth {
            expected: "8 bpp",
            actual: pix.depth().bits(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_gray() {
        assert_eq!(rgb_to_gray(0, 0, 0), 0);
        assert_eq!(rgb_to_gray(255, 255, 255), 255);
        assert_eq!(rgb_to_gray(255, 0, 0), 76);
        assert_eq!(rgb_to_gray(0, 255, 0), 150);
        assert_eq!(rgb_to_gray(0, 0, 255), 29);
        // 11.96 + 11.74 + 6.84 = 30.54
        assert_eq!(rgb_to_gray(40, 20, 60), 31);
    }

    #[test]
    fn test_convert_rgb_image() {
        let mut pm = Pix::new(2, 1, PixelDepth::Bit32).unwrap().to_mut();
        pm.set_rgb(0, 0, 212, 175, 55).unwrap();
        pm.set_rgb(1, 0, 40, 20, 60).unwrap();
        let gray = pix_convert_to_gray(&pm.into()).unwrap();

        assert_eq!(gray.depth(), PixelDepth::Bit8);
        // 63.388 + 102.725 + 6.27 = 172.383
        assert_eq!(gray.get_pixel(0, 0), Some(172));
        assert_eq!(gray.get_pixel(1, 0), Some(31));
    }

    #[test]
    fn test_convert_binary_image() {
        let mut pm = Pix::new(2, 1, PixelDepth::Bit1).unwrap().to_mut();
        pm.set_pixel_unchecked(1, 0, 1);
        let gray = pix_convert_to_gray(&pm.into()).unwrap();
        assert_eq!(gray.get_pixel(0, 0), Some(0));
        assert_eq!(gray.get_pixel(1, 0), Some(255));
    }

    #[test]
    fn test_gray_passes_through() {
        let pix = Pix::new(3, 3, PixelDepth::Bit8).unwrap();
        let gray = pix_convert_to_gray(&pix).unwrap();
        assert!(gray.sizes_equal(&pix));
        assert!(check_gray(&gray).is_ok());
    }
}
