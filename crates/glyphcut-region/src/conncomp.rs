//! Connected component analysis
//!
//! This module provides functions for finding and labeling connected components
//! in binary images. It uses Union-Find (disjoint set) data structure for
//! efficient labeling.

use crate::error::{RegionResult, check_binary};
use glyphcut_core::{Box, Pix};

/// Connectivity type for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    #[default]
    FourWay,
    /// 8-way connectivity (includes diagonals)
    EightWay,
}

impl ConnectivityType {
    /// Offsets of the neighbors that precede a pixel in raster order.
    fn previous_neighbors(self) -> &'static [(i32, i32)] {
        match self {
            Self::FourWay => &[(-1, 0), (0, -1)],
            Self::EightWay => &[(-1, 0), (-1, -1), (0, -1), (1, -1)],
        }
    }
}

/// A connected component in an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedComponent {
    /// Label of this component, starting at 1
    pub label: u32,
    /// Number of pixels in this component
    pub pixel_count: u32,
    /// Bounding box of this component
    pub bounds: Box,
}

impl ConnectedComponent {
    /// Create a new connected component
    pub fn new(label: u32, pixel_count: u32, bounds: Box) -> Self {
        Self {
            label,
            pixel_count,
            bounds,
        }
    }
}

/// Disjoint-set forest over provisional labels
struct UnionFind {
    parent: Vec<u32>,
}

impl UnionFind {
    fn new() -> Self {
        // Label 0 is background
        Self { parent: vec![0] }
    }

    fn make_set(&mut self) -> u32 {
        let label = self.parent.len() as u32;
        self.parent.push(label);
        label
    }

    fn find(&mut self, mut x: u32) -> u32 {
        while self.parent[x as usize] != x {
            let grandparent = self.parent[self.parent[x as usize] as usize];
            self.parent[x as usize] = grandparent;
            x = grandparent;
        }
        x
    }

    fn union(&mut self, a: u32, b: u32) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            // Keep the smaller root so roots follow raster order
            let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[hi as usize] = lo;
        }
    }
}

/// Find all connected components in a binary image
///
/// Returns the components ordered by label. Labels are assigned in the
/// raster order (top to bottom, left to right) of each component's first
/// pixel.
pub fn find_connected_components(
    pix: &Pix,
    connectivity: ConnectivityType,
) -> RegionResult<Vec<ConnectedComponent>> {
    let (_, components) = label_components(pix, connectivity)?;
    Ok(components)
}

/// Label every pixel with its component, 0 for background.
///
/// Two raster passes: the first assigns provisional labels and records
/// equivalences, the second resolves them and numbers the components.
pub(crate) fn label_components(
    pix: &Pix,
    connectivity: ConnectivityType,
) -> RegionResult<(Vec<u32>, Vec<ConnectedComponent>)> {
    check_binary(pix)?;

    let width = pix.width() as i32;
    let height = pix.height() as i32;
    let mut labels = vec![0u32; (width * height) as usize];
    let mut sets = UnionFind::new();

    for y in 0..height {
        for x in 0..width {
            if pix.get_pixel_unchecked(x as u32, y as u32) == 0 {
                continue;
            }

            let mut current = 0u32;
            for &(dx, dy) in connectivity.previous_neighbors() {
                let (nx, ny) = (x + dx, y + dy);
                if nx < 0 || nx >= width || ny < 0 {
                    continue;
                }
                let neighbor = labels[(ny * width + nx) as usize];
                if neighbor == 0 {
                    continue;
                }
                if current == 0 {
                    current = neighbor;
                } else {
                    sets.union(current, neighbor);
                }
            }
            if current == 0 {
                current = sets.make_set();
            }
            labels[(y * width + x) as usize] = current;
        }
    }

    let mut final_label = vec![0u32; sets.parent.len()];
    let mut components: Vec<ConnectedComponent> = Vec::new();

    for y in 0..height {
        for x in 0..width {
            let idx = (y * width + x) as usize;
            if labels[idx] == 0 {
                continue;
            }
            let root = sets.find(labels[idx]) as usize;
            if final_label[root] == 0 {
                components.push(ConnectedComponent::new(
                    components.len() as u32 + 1,
                    0,
                    Box::new_unchecked(x, y, 1, 1),
                ));
                final_label[root] = components.len() as u32;
            }
            let label = final_label[root];
            labels[idx] = label;

            let comp = &mut components[label as usize - 1];
            comp.pixel_count += 1;
            comp.bounds = comp.bounds.union(&Box::new_unchecked(x, y, 1, 1));
        }
    }

    Ok((labels, components))
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphcut_core::PixelDepth;

    fn from_rows(rows: &[&str]) -> Pix {
        let mut pm = Pix::new(rows[0].len() as u32, rows.len() as u32, PixelDepth::Bit1)
            .unwrap()
            .to_mut();
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == 'x' {
                    pm.set_pixel_unchecked(x as u32, y as u32, 1);
                }
            }
        }
        pm.into()
    }

    #[test]
    fn test_empty_image() {
        let pix = Pix::new(10, 10, PixelDepth::Bit1).unwrap();
        let comps = find_connected_components(&pix, ConnectivityType::EightWay).unwrap();
        assert!(comps.is_empty());
    }

    #[test]
    fn test_diagonal_connectivity() {
        let pix = from_rows(&["x...", ".x..", "..x.", "...."]);
        let four = find_connected_components(&pix, ConnectivityType::FourWay).unwrap();
        assert_eq!(four.len(), 3);
        let eight = find_connected_components(&pix, ConnectivityType::EightWay).unwrap();
        assert_eq!(eight.len(), 1);
        assert_eq!(eight[0].pixel_count, 3);
        assert_eq!(eight[0].bounds, Box::new_unchecked(0, 0, 3, 3));
    }

    #[test]
    fn test_u_shape_merges() {
        // The two arms get different provisional labels that meet at the bottom.
        let pix = from_rows(&["x..x", "x..x", "xxxx"]);
        let comps = find_connected_components(&pix, ConnectivityType::FourWay).unwrap();
        assert_eq!(comps.len(), 1);
        assert_eq!(comps[0].pixel_count, 8);
        assert_eq!(comps[0].bounds, Box::new_unchecked(0, 0, 4, 3));
    }

    #[test]
    fn test_labels_follow_raster_order() {
        let pix = from_rows(&["...xx", "x....", "x..x."]);
        let (labels, comps) = label_components(&pix, ConnectivityType::EightWay).unwrap();
        assert_eq!(comps.len(), 3);
        assert_eq!(comps[0].bounds.x, 3);
        assert_eq!(comps[1].bounds, Box::new_unchecked(0, 1, 1, 2));
        assert_eq!(comps[2].bounds, Box::new_unchecked(3, 2, 1, 1));
        assert_eq!(labels[3], 1);
        assert_eq!(labels[5], 2);
        assert_eq!(labels[13], 3);
    }

    #[test]
    fn test_rejects_gray() {
        let pix = Pix::new(4, 4, PixelDepth::Bit8).unwrap();
        assert!(find_connected_components(&pix, ConnectivityType::FourWay).is_err());
    }
}
