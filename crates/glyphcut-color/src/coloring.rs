//! Mask coloring
//!
//! Turns a binary mask into a solid-color icon whose alpha channel is the
//! mask itself.
//!
//! # Examples
//!
//! ```
//! use glyphcut_color::colorize_mask;
//! use glyphcut_core::{Pix, PixelDepth};
//!
//! let mut mask = Pix::new(4, 4, PixelDepth::Bit1).unwrap().to_mut();
//! mask.set_pixel(1, 1, 1).unwrap();
//! let icon = colorize_mask(&mask.into(), (13, 148, 136)).unwrap();
//! assert_eq!(icon.get_rgba(1, 1), Some((13, 148, 136, 255)));
//! assert_eq!(icon.get_rgba(0, 0), Some((13, 148, 136, 0)));
//! ```

use crate::{ColorError, ColorResult};
use glyphcut_core::{Pix, PixelDepth, color};

/// Paint `target` under a 1-bpp mask.
///
/// Returns a 32-bpp RGBA image (`spp = 4`) of the mask's size. Every pixel
/// carries the target color; alpha is 255 where the mask is set and 0
/// elsewhere. Nothing is blended or smoothed.
pub fn colorize_mask(mask: &Pix, target: (u8, u8, u8)) -> ColorResult<Pix> {
    if mask.depth() != PixelDepth::Bit1 {
        return Err(ColorError::UnsupportedDepth {
            expected: "1 bpp",
            actual: mask.depth().bits(),
        });
    }

    let (r, g, b) = target;
    let opaque = color::compose_rgba(r, g, b, 255);
    let clear = color::compose_rgba(r, g, b, 0);

    let mut out = Pix::new_rgba(mask.width(), mask.height())?.to_mut();
    for y in 0..mask.height() {
        for x in 0..mask.width() {
            let val = if mask.get_pixel_unchecked(x, y) != 0 {
                opaque
            } else {
                clear
            };
            out.set_pixel_unchecked(x, y, val);
        }
    }
    Ok(out.into())
}
