//! Box, Boxa - Rectangle regions
//!
//! Contour bounding boxes, merged icon regions and padded crop windows are
//! all `Box`es. Edge arithmetic saturates, so margins taken from user
//! configuration cannot overflow.

mod geometry;

/// An axis-aligned rectangle with exclusive right and bottom edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Box {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Box {
    /// Build a box from its top-left corner and size.
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    #[inline]
    pub fn area(&self) -> i64 {
        i64::from(self.w) * i64::from(self.h)
    }

    /// `w / h`; a zero height counts as 1.
    #[inline]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.w) / f64::from(self.h.max(1))
    }

    /// Smallest box covering both.
    pub fn union(&self, other: &Box) -> Box {
        let (x, y) = (self.x.min(other.x), self.y.min(other.y));
        Box {
            x,
            y,
            w: self.right().max(other.right()).saturating_sub(x),
            h: self.bottom().max(other.bottom()).saturating_sub(y),
        }
    }

    /// Grow by `margin` on every side.
    pub fn expand(&self, margin: i32) -> Box {
        let grow = margin.saturating_mul(2);
        Box {
            x: self.x.saturating_sub(margin),
            y: self.y.saturating_sub(margin),
            w: self.w.saturating_add(grow).max(0),
            h: self.h.saturating_add(grow).max(0),
        }
    }

    /// The part of the box inside a `width` x `height` image, if any.
    pub fn clip(&self, width: i32, height: i32) -> Option<Box> {
        let (x0, y0) = (self.x.max(0), self.y.max(0));
        let (x1, y1) = (self.right().min(width), self.bottom().min(height));
        (x0 < x1 && y0 < y1).then(|| Box {
            x: x0,
            y: y0,
            w: x1 - x0,
            h: y1 - y0,
        })
    }
}

/// Ordered list of boxes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Boxa {
    boxes: Vec<Box>,
}

impl Boxa {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Box> {
        self.boxes.get(index)
    }

    pub fn boxes(&self) -> &[Box] {
        &self.boxes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Box> {
        self.boxes.iter()
    }
}

impl FromIterator<Box> for Boxa {
    fn from_iter<T: IntoIterator<Item = Box>>(iter: T) -> Self {
        Self {
            boxes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Boxa {
    type Item = Box;
    type IntoIter = std::vec::IntoIter<Box>;

    fn into_iter(self) -> Self::IntoIter {
        self.boxes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Boxa {
    type Item = &'a Box;
    type IntoIter = std::slice::Iter<'a, Box>;

    fn into_iter(self) -> Self::IntoIter {
        self.boxes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union() {
        let a = Box::new_unchecked(60, 60, 40, 20);
        let b = Box::new_unchecked(80, 70, 60, 40);
        assert_eq!(a.union(&b), Box::new_unchecked(60, 60, 80, 50));
        assert_eq!(b.union(&a), a.union(&b));
    }

    #[test]
    fn test_aspect_ratio_floors_height() {
        assert_eq!(Box::new_unchecked(0, 0, 100, 40).aspect_ratio(), 2.5);
        assert_eq!(Box::new_unchecked(0, 0, 7, 0).aspect_ratio(), 7.0);
    }

    #[test]
    fn test_clip() {
        let b = Box::new_unchecked(-5, 90, 20, 20);
        assert_eq!(b.clip(100, 100), Some(Box::new_unchecked(0, 90, 15, 10)));
        assert_eq!(Box::new_unchecked(120, 0, 5, 5).clip(100, 100), None);
    }

    #[test]
    fn test_expand_saturates() {
        let b = Box::new_unchecked(10, 10, 30, 30);
        assert_eq!(b.expand(5), Box::new_unchecked(5, 5, 40, 40));

        let huge = b.expand(2_000_000_000);
        assert_eq!(huge.x, 10 - 2_000_000_000);
        assert_eq!(huge.w, i32::MAX);
        assert_eq!(huge.clip(650, 400), Some(Box::new_unchecked(0, 0, 650, 400)));

        // A shrinking margin never yields a negative size
        assert_eq!(b.expand(-20).w, 0);
        assert_eq!(b.expand(i32::MIN).h, 0);
    }

    #[test]
    fn test_edges_saturate() {
        let b = Box::new_unchecked(i32::MAX - 5, 0, 100, 10);
        assert_eq!(b.right(), i32::MAX);
        let u = b.union(&Box::new_unchecked(i32::MIN, 0, 1, 1));
        assert_eq!(u.x, i32::MIN);
        assert_eq!(u.w, i32::MAX);
    }
}
