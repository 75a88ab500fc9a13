//! Candidate selection by box geometry
//!
//! In a grid of icons with captions, the icon glyphs are large and roughly
//! square while caption text lines are wide and short. A few thresholds on
//! area, aspect ratio and height separate the two.

use crate::contour::find_external_boxes;
use crate::error::RegionResult;
use glyphcut_core::{Box, Boxa, Pix};
use serde::{Deserialize, Serialize};

/// Geometric filter for candidate icon boxes.
///
/// All bounds are exclusive. The defaults suit icons of at least 80 pixels
/// in height; other layouts need retuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxFilter {
    /// Area (`w * h`) must exceed this
    pub min_area: i64,
    /// Aspect ratio (`w / h`) must exceed this
    pub min_aspect: f64,
    /// Aspect ratio must stay below this
    pub max_aspect: f64,
    /// Height must exceed this
    pub min_height: i32,
}

impl Default for BoxFilter {
    fn default() -> Self {
        Self {
            min_area: 500,
            min_aspect: 0.4,
            max_aspect: 2.5,
            min_height: 80,
        }
    }
}

impl BoxFilter {
    /// Check a single box against every bound.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphcut_core::Box;
    /// use glyphcut_region::BoxFilter;
    ///
    /// let filter = BoxFilter::default();
    /// assert!(filter.accepts(&Box::new_unchecked(0, 0, 60, 100)));
    /// // aspect ratio 2.5 is not below the maximum
    /// assert!(!filter.accepts(&Box::new_unchecked(0, 0, 100, 40)));
    /// ```
    pub fn accepts(&self, b: &Box) -> bool {
        let aspect = b.aspect_ratio();
        b.area() > self.min_area
            && aspect > self.min_aspect
            && aspect < self.max_aspect
            && b.h > self.min_height
    }

    /// Keep the accepted boxes, in their original order.
    pub fn apply(&self, boxes: &Boxa) -> Boxa {
        boxes.iter().copied().filter(|b| self.accepts(b)).collect()
    }
}

/// External-contour boxes of `mask` that pass `filter`.
pub fn find_candidate_regions(mask: &Pix, filter: &BoxFilter) -> RegionResult<Boxa> {
    let boxes = find_external_boxes(mask)?;
    Ok(filter.apply(&boxes))
}
