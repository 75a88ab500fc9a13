//! Structuring Element (SEL) for morphological operations
//!
//! A structuring element defines the neighborhood used in morphological operations.

use crate::{MorphError, MorphResult};

/// Element type in a structuring element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum SelElement {
    /// Don't care - this position is ignored
    #[default]
    DontCare = 0,
    /// Hit - takes part in the operation
    Hit = 1,
}

/// Structuring Element (SEL)
///
/// Defines the neighborhood pattern for morphological operations.
/// The origin (cx, cy) is the reference point for the operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sel {
    width: u32,
    height: u32,
    cx: u32,
    cy: u32,
    data: Vec<SelElement>,
}

impl Sel {
    /// Create a new structuring element of don't-care cells, origin at the center
    pub fn new(width: u32, height: u32) -> MorphResult<Self> {
        if width == 0 || height == 0 {
            return Err(MorphError::InvalidSel(format!(
                "dimensions must be positive: {}x{}",
                width, height
            )));
        }
        Ok(Self {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            data: vec![SelElement::DontCare; (width * height) as usize],
        })
    }

    /// Create a rectangular "brick" structuring element with all hits
    pub fn create_brick(width: u32, height: u32) -> MorphResult<Self> {
        let mut sel = Self::new(width, height)?;
        sel.data.fill(SelElement::Hit);
        Ok(sel)
    }

    /// Create an elliptical structuring element inscribed in `width` x `height`
    ///
    /// Row `i` is filled over `cx - dx ..= cx + dx` where `dy = i - cy` and
    /// `dx = round(cx * sqrt(1 - dy^2 / cy^2))`, with `cx = width / 2` and
    /// `cy = height / 2`. A 3x3 ellipse is therefore the plus-shaped cross.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphcut_morph::Sel;
    ///
    /// let sel = Sel::create_ellipse(3, 3).unwrap();
    /// assert_eq!(sel, Sel::from_string(".x.\nxxx\n.x.", 1, 1).unwrap());
    /// ```
    pub fn create_ellipse(width: u32, height: u32) -> MorphResult<Self> {
        let mut sel = Self::new(width, height)?;
        let cx = sel.cx as i64;
        let cy = sel.cy as i64;

        for y in 0..height {
            let dy = y as i64 - cy;
            let dx = if cy == 0 {
                cx
            } else {
                let frac = 1.0 - (dy * dy) as f64 / (cy * cy) as f64;
                (cx as f64 * frac.max(0.0).sqrt()).round() as i64
            };
            let x0 = (cx - dx).max(0);
            let x1 = (cx + dx).min(width as i64 - 1);
            for x in x0..=x1 {
                sel.set_element(x as u32, y, SelElement::Hit);
            }
        }

        Ok(sel)
    }

    /// Create a structuring element from a string pattern
    ///
    /// Rows are separated by newlines; `x` marks a hit and `.` a don't-care
    /// cell. Whitespace around each row is ignored.
    ///
    /// # Arguments
    /// * `pattern` - The rows of the element
    /// * `origin_x` - X coordinate of origin
    /// * `origin_y` - Y coordinate of origin
    pub fn from_string(pattern: &str, origin_x: u32, origin_y: u32) -> MorphResult<Self> {
        let rows: Vec<&str> = pattern
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.chars().count()) as u32;
        let mut sel = Self::new(width, height)?;

        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() as u32 != width {
                return Err(MorphError::InvalidSel(format!(
                    "row {} has length {}, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }
            for (x, ch) in row.chars().enumerate() {
                let elem = match ch {
                    'x' | 'X' => SelElement::Hit,
                    '.' => SelElement::DontCare,
                    other => {
                        return Err(MorphError::InvalidSel(format!(
                            "unexpected character {:?} in pattern",
                            other
                        )));
                    }
                };
                sel.set_element(x as u32, y as u32, elem);
            }
        }

        sel.set_origin(origin_x, origin_y)?;
        Ok(sel)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn origin_x(&self) -> u32 {
        self.cx
    }

    #[inline]
    pub fn origin_y(&self) -> u32 {
        self.cy
    }

    /// Set the origin
    pub fn set_origin(&mut self, cx: u32, cy: u32) -> MorphResult<()> {
        if cx >= self.width || cy >= self.height {
            return Err(MorphError::InvalidSel(format!(
                "origin ({}, {}) outside {}x{} element",
                cx, cy, self.width, self.height
            )));
        }
        self.cx = cx;
        self.cy = cy;
        Ok(())
    }

    /// Get an element at (x, y)
    #[inline]
    pub fn get_element(&self, x: u32, y: u32) -> Option<SelElement> {
        if x < self.width && y < self.height {
            Some(self.data[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Set an element at (x, y); positions outside the element are ignored
    #[inline]
    pub fn set_element(&mut self, x: u32, y: u32, elem: SelElement) {
        if x < self.width && y < self.height {
            self.data[(y * self.width + x) as usize] = elem;
        }
    }

    /// Count the number of hit elements
    pub fn hit_count(&self) -> usize {
        self.data.iter().filter(|&&e| e == SelElement::Hit).count()
    }

    /// Iterate over hit positions relative to origin
    pub fn hit_offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let cx = self.cx as i32;
        let cy = self.cy as i32;
        let width = self.width;

        self.data
            .iter()
            .enumerate()
            .filter_map(move |(idx, &elem)| {
                if elem == SelElement::Hit {
                    let x = (idx as u32 % width) as i32;
                    let y = (idx as u32 / width) as i32;
                    Some((x - cx, y - cy))
                } else {
                    None
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brick() {
        let sel = Sel::create_brick(5, 3).unwrap();
        assert_eq!(sel.hit_count(), 15);
        assert_eq!((sel.origin_x(), sel.origin_y()), (2, 1));
        assert!(Sel::create_brick(0, 3).is_err());
    }

    #[test]
    fn test_ellipse_3x3_is_cross() {
        let sel = Sel::create_ellipse(3, 3).unwrap();
        assert_eq!(sel.hit_count(), 5);
        assert_eq!(sel.get_element(0, 0), Some(SelElement::DontCare));
        assert_eq!(sel.get_element(1, 0), Some(SelElement::Hit));
        assert_eq!(sel.get_element(0, 1), Some(SelElement::Hit));
        let mut offsets: Vec<_> = sel.hit_offsets().collect();
        offsets.sort();
        assert_eq!(offsets, vec![(-1, 0), (0, -1), (0, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn test_ellipse_5x5() {
        // cx = cy = 2: rows have half-widths 0, 2, 2, 2, 0
        let sel = Sel::create_ellipse(5, 5).unwrap();
        let expected = Sel::from_string(
            "..x..
             xxxxx
             xxxxx
             xxxxx
             ..x..",
            2,
            2,
        )
        .unwrap();
        assert_eq!(sel, expected);
    }

    #[test]
    fn test_ellipse_single_row() {
        let sel = Sel::create_ellipse(3, 1).unwrap();
        assert_eq!(sel.hit_count(), 3);
    }

    #[test]
    fn test_from_string_errors() {
        assert!(Sel::from_string("xx\nx", 0, 0).is_err());
        assert!(Sel::from_string("xo", 0, 0).is_err());
        assert!(Sel::from_string("xx", 2, 0).is_err());
        assert!(Sel::from_string("", 0, 0).is_err());
    }
}
