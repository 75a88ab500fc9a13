//! External contours
//!
//! A contour tracer that keeps only outermost boundaries reports one
//! bounding box per shape, ignoring holes and anything drawn inside them.
//! The same boxes come out of labeling the hole-filled mask: filling joins
//! every nested shape to its enclosing one without changing the enclosing
//! shape's extent.

use crate::conncomp::{ConnectivityType, find_connected_components};
use crate::error::RegionResult;
use crate::seedfill::fill_holes;
use glyphcut_core::{Boxa, Pix};

/// Bounding boxes of the external contours of a binary mask.
///
/// Foreground is 8-connected and background 4-connected. A component
/// lying inside a hole of another component is not reported. Boxes come
/// in raster order of each component's first pixel.
///
/// # Examples
///
/// ```
/// use glyphcut_core::{Box, Pix, PixelDepth};
/// use glyphcut_region::find_external_boxes;
///
/// let mut pm = Pix::new(20, 10, PixelDepth::Bit1).unwrap().to_mut();
/// for x in 2..6 {
///     for y in 2..6 {
///         pm.set_pixel(x, y, 1).unwrap();
///     }
/// }
/// pm.set_pixel(15, 8, 1).unwrap();
/// let boxes = find_external_boxes(&pm.into()).unwrap();
/// assert_eq!(boxes.len(), 2);
/// assert_eq!(boxes.get(0), Some(&Box::new_unchecked(2, 2, 4, 4)));
/// ```
pub fn find_external_boxes(pix: &Pix) -> RegionResult<Boxa> {
    let filled = fill_holes(pix, ConnectivityType::FourWay)?;
    let components = find_connected_components(&filled, ConnectivityType::EightWay)?;
    Ok(components.into_iter().map(|c| c.bounds).collect())
}
