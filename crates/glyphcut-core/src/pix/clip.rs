//! Rectangle clipping

use super::Pix;
use crate::Box;
use crate::error::{Error, Result};

impl Pix {
    /// Extract the region covered by `region` into a new image.
    ///
    /// The region is first intersected with the image bounds. The result
    /// keeps the source depth and samples per pixel, and pixel values are
    /// copied verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the region does not intersect
    /// the image.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphcut_core::{Box, Pix, PixelDepth};
    ///
    /// let pix = Pix::new(100, 80, PixelDepth::Bit8).unwrap();
    /// let clipped = pix.clip_rectangle(&Box::new_unchecked(80, 60, 50, 50)).unwrap();
    /// assert_eq!(clipped.width(), 20);
    /// assert_eq!(clipped.height(), 20);
    /// ```
    pub fn clip_rectangle(&self, region: &Box) -> Result<Pix> {
        let clipped = region
            .clip(self.width() as i32, self.height() as i32)
            .ok_or_else(|| {
                Error::InvalidParameter(format!(
                    "clip rectangle {:?} does not intersect {}x{} image",
                    region,
                    self.width(),
                    self.height()
                ))
            })?;

        let (x0, y0) = (clipped.x as u32, clipped.y as u32);
        let (cw, ch) = (clipped.w as u32, clipped.h as u32);

        let mut pixd = Pix::new(cw, ch, self.depth())?.to_mut();
        pixd.set_spp(self.spp());

        for dy in 0..ch {
            for dx in 0..cw {
                let val = self.get_pixel_unchecked(x0 + dx, y0 + dy);
                pixd.set_pixel_unchecked(dx, dy, val);
            }
        }

        Ok(pixd.into())
    }
}
