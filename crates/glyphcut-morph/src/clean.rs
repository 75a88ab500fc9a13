//! Mask cleanup
//!
//! Thresholded masks of outlined icons have pinholes, broken strokes and
//! specks of noise. A closing pass joins the strokes and fills the holes,
//! then an opening pass drops whatever specks are left.

use crate::binary::{check_binary, close_iter, open_iter};
use crate::{MorphResult, Sel};
use glyphcut_core::Pix;
use serde::{Deserialize, Serialize};

/// Parameters of [`clean_mask`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanOptions {
    /// Dilations (then as many erosions) of the closing pass
    pub close_iterations: u32,
    /// Erosions (then as many dilations) of the opening pass
    pub open_iterations: u32,
    /// Width of the elliptical structuring element
    pub sel_width: u32,
    /// Height of the elliptical structuring element
    pub sel_height: u32,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            close_iterations: 2,
            open_iterations: 1,
            sel_width: 3,
            sel_height: 3,
        }
    }
}

/// Close then open a binary mask with an elliptical element.
///
/// With the default options this is two dilations, two erosions, one
/// erosion and one dilation, all with the 3x3 cross.
pub fn clean_mask(mask: &Pix, options: &CleanOptions) -> MorphResult<Pix> {
    check_binary(mask)?;
    let sel = Sel::create_ellipse(options.sel_width, options.sel_height)?;
    let closed = close_iter(mask, &sel, options.close_iterations)?;
    open_iter(&closed, &sel, options.open_iterations)
}
