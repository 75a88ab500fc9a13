//! Box proximity, merging and ordering
//!
//! An icon drawn with outlines often breaks into several contours after
//! thresholding. [`Boxa::merge_nearby`] reassembles those fragments, and
//! [`Boxa::sort_reading_order`] puts the resulting icons into grid order.

use super::{Box, Boxa};

impl Box {
    /// Check whether `other` comes within `gap` pixels of this box.
    ///
    /// Equivalent to testing this box, grown by `gap` on every side, for
    /// overlap with `other`. With `gap = 0` boxes sharing only an edge do
    /// not count.
    pub fn overlaps_within(&self, other: &Box, gap: i32) -> bool {
        other.x < self.right().saturating_add(gap)
            && other.right() > self.x.saturating_sub(gap)
            && other.y < self.bottom().saturating_add(gap)
            && other.bottom() > self.y.saturating_sub(gap)
    }

    /// Grow the box by `padding` and clamp it to a `width` x `height` image.
    pub fn pad_clamped(&self, padding: i32, width: i32, height: i32) -> Option<Box> {
        self.expand(padding).clip(width, height)
    }
}

impl Boxa {
    /// Merge boxes lying within `gap` pixels of each other.
    ///
    /// Each pass walks the boxes in order; box `i` absorbs every later box
    /// that comes within `gap` of the union accumulated so far, and the
    /// union replaces them all. Passes repeat until one of them merges
    /// nothing, so merges made late in a pass can still chain with boxes
    /// visited earlier.
    ///
    /// At the fixed point no two boxes are within `gap` of each other, so
    /// merging the output again returns it unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyphcut_core::{Box, Boxa};
    ///
    /// let boxa: Boxa = [
    ///     Box::new_unchecked(0, 0, 100, 100),
    ///     Box::new_unchecked(120, 0, 50, 100),
    ///     Box::new_unchecked(400, 400, 10, 10),
    /// ]
    /// .into_iter()
    /// .collect();
    /// let merged = boxa.merge_nearby(30);
    /// assert_eq!(merged.len(), 2);
    /// assert_eq!(merged.get(0), Some(&Box::new_unchecked(0, 0, 170, 100)));
    /// ```
    pub fn merge_nearby(&self, gap: i32) -> Boxa {
        let mut boxes = self.boxes.clone();

        let mut merged = !boxes.is_empty();
        while merged {
            merged = false;
            let mut used = vec![false; boxes.len()];
            let mut next = Vec::with_capacity(boxes.len());

            for i in 0..boxes.len() {
                if used[i] {
                    continue;
                }
                let mut acc = boxes[i];
                for j in (i + 1)..boxes.len() {
                    if used[j] || !acc.overlaps_within(&boxes[j], gap) {
                        continue;
                    }
                    acc = acc.union(&boxes[j]);
                    used[j] = true;
                    merged = true;
                }
                used[i] = true;
                next.push(acc);
            }

            boxes = next;
        }

        Boxa { boxes }
    }

    /// Sort boxes into reading order for a grid layout.
    ///
    /// Boxes are bucketed into horizontal bands of `band` pixels by their
    /// top edge, bands go top to bottom and boxes within a band go left to
    /// right. The sort is stable. A non-positive `band` is treated as 1.
    pub fn sort_reading_order(&mut self, band: i32) {
        let band = band.max(1);
        self.boxes.sort_by_key(|b| (b.y.div_euclid(band), b.x));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxa(boxes: &[(i32, i32, i32, i32)]) -> Boxa {
        boxes
            .iter()
            .map(|&(x, y, w, h)| Box::new_unchecked(x, y, w, h))
            .collect()
    }

    #[test]
    fn test_overlaps_within() {
        let a = Box::new_unchecked(0, 0, 10, 10);
        // 5-pixel gap on the right
        let b = Box::new_unchecked(15, 0, 10, 10);
        assert!(a.overlaps_within(&b, 6));
        assert!(!a.overlaps_within(&b, 5));
        assert!(!a.overlaps_within(&b, 0));
        assert!(b.overlaps_within(&a, 6));
    }

    #[test]
    fn test_huge_gap_merges_everything() {
        let input = boxa(&[(0, 0, 10, 10), (5000, 9000, 10, 10), (-300, 40, 2, 2)]);
        let merged = input.merge_nearby(i32::MAX);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged.get(0), Some(&Box::new_unchecked(-300, 0, 5310, 9010)));
        assert_eq!(input.merge_nearby(i32::MIN), input);
    }

    #[test]
    fn test_merge_empty() {
        assert!(Boxa::new().merge_nearby(30).is_empty());
    }

    #[test]
    fn test_merge_pair_into_bounding_rect() {
        let merged = boxa(&[(10, 10, 50, 50), (80, 20, 40, 60)]).merge_nearby(30);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged.get(0), Some(&Box::new_unchecked(10, 10, 110, 70)));
    }

    #[test]
    fn test_far_boxes_stay_apart() {
        let input = boxa(&[(0, 0, 50, 50), (100, 100, 50, 50)]);
        let merged = input.merge_nearby(30);
        assert_eq!(merged, input);
    }

    #[test]
    fn test_merge_chains_across_passes() {
        // b is only within reach of a after a has absorbed c, and the
        // first pass has already moved past b by then.
        let input = boxa(&[(0, 0, 10, 10), (60, 0, 10, 10), (30, 0, 10, 10)]);
        let merged = input.merge_nearby(31);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged.get(0), Some(&Box::new_unchecked(0, 0, 70, 10)));
    }

    #[test]
    fn test_merge_is_idempotent() {
        let input = boxa(&[
            (0, 0, 20, 20),
            (30, 5, 20, 20),
            (300, 300, 20, 20),
            (90, 0, 10, 10),
            (330, 340, 5, 5),
        ]);
        let once = input.merge_nearby(30);
        let twice = once.merge_nearby(30);
        assert_eq!(once, twice);
        for (i, a) in once.iter().enumerate() {
            for b in once.iter().skip(i + 1) {
                assert!(!a.overlaps_within(b, 30));
            }
        }
    }

    #[test]
    fn test_sort_reading_order() {
        // A(x=50,y=10), B(x=10,y=90), C(x=5,y=15) -> [C, A, B]
        let mut b = boxa(&[(50, 10, 5, 5), (10, 90, 5, 5), (5, 15, 5, 5)]);
        b.sort_reading_order(80);
        let xs: Vec<i32> = b.iter().map(|b| b.x).collect();
        assert_eq!(xs, vec![5, 50, 10]);
    }

    #[test]
    fn test_pad_clamped() {
        let b = Box::new_unchecked(5, 10, 20, 20);
        assert_eq!(
            b.pad_clamped(15, 100, 35),
            Some(Box::new_unchecked(0, 0, 40, 35))
        );
    }
}
