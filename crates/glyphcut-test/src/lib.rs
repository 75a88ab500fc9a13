//! glyphcut-test - Regression test framework for glyphcut
//!
//! Provides [`RegParams`], which collects numbered checks and reports all
//! failures at the end of a test, plus synthetic fixture builders so tests
//! do not depend on screenshot files.
//!
//! # Usage
//!
//! ```ignore
//! use glyphcut_test::RegParams;
//!
//! let mut rp = RegParams::new("boxmerge");
//! rp.compare_values(6.0, merged.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: set to "display" to also write intermediate images

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use glyphcut_core::{Box, Pix, PixMut, PixelDepth, color};

/// Background used by the synthetic screenshots: dark purple.
pub const BACKGROUND_RGB: (u8, u8, u8) = (40, 20, 60);

/// Foreground used by the synthetic screenshots: gold.
pub const ICON_RGB: (u8, u8, u8) = (212, 175, 55);

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // glyphcut-test is at crates/glyphcut-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Create a 32-bpp RGB image filled with one color.
pub fn solid_rgb(width: u32, height: u32, rgb: (u8, u8, u8)) -> TestResult<Pix> {
    let mut pm = Pix::new(width, height, PixelDepth::Bit32)?.to_mut();
    pm.set_all_arbitrary(color::compose_rgb(rgb.0, rgb.1, rgb.2))?;
    Ok(pm.into())
}

/// Paint the part of `rect` inside the image with `val`.
pub fn fill_rect(pm: &mut PixMut, rect: &Box, val: u32) {
    let Some(r) = rect.clip(pm.width() as i32, pm.height() as i32) else {
        return;
    };
    for y in r.y..r.bottom() {
        for x in r.x..r.right() {
            pm.set_pixel_unchecked(x as u32, y as u32, val);
        }
    }
}

/// Create a 1-bpp mask with the given rectangles set to foreground.
pub fn mask_from_boxes(width: u32, height: u32, rects: &[Box]) -> TestResult<Pix> {
    let mut pm = Pix::new(width, height, PixelDepth::Bit1)?.to_mut();
    for rect in rects {
        fill_rect(&mut pm, rect, 1);
    }
    Ok(pm.into())
}

/// Create a screenshot-like RGB image: gold rectangles on dark purple.
pub fn screenshot_with(width: u32, height: u32, rects: &[Box]) -> TestResult<Pix> {
    let mut pm = solid_rgb(width, height, BACKGROUND_RGB)?.to_mut();
    let fg = color::compose_rgb(ICON_RGB.0, ICON_RGB.1, ICON_RGB.2);
    for rect in rects {
        fill_rect(&mut pm, rect, fg);
    }
    Ok(pm.into())
}

/// Squares of a 2-row by 3-column icon grid, in row-major order.
///
/// Each square is 100x100 with 100 pixels between neighbours and a
/// 50-pixel margin, on a 650x400 canvas.
pub fn icon_grid_boxes() -> Vec<Box> {
    let mut boxes = Vec::with_capacity(6);
    for row in 0..2 {
        for col in 0..3 {
            boxes.push(Box::new_unchecked(50 + col * 200, 50 + row * 200, 100, 100));
        }
    }
    boxes
}

/// The 650x400 screenshot of [`icon_grid_boxes`].
pub fn icon_grid_screenshot() -> TestResult<Pix> {
    screenshot_with(650, 400, &icon_grid_boxes())
}
