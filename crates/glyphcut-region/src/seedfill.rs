//! Seed fill operations
//!
//! Background flood fill from the image frame, used to fill holes so that
//! only the outer boundary of each shape remains.

use crate::conncomp::ConnectivityType;
use crate::error::{RegionResult, check_binary};
use glyphcut_core::{Pix, PixelDepth};
use std::collections::VecDeque;

/// Fill holes in a binary image
///
/// A hole is a background pixel that cannot reach the image frame through
/// background pixels under `connectivity`. Holes become foreground; so does
/// anything lying inside them. For 8-connected foreground use 4-way
/// background connectivity, and vice versa.
///
/// # Arguments
///
/// * `pix` - Input binary image (1-bit)
/// * `connectivity` - Connectivity of the background
///
/// # Returns
///
/// A new image with holes filled.
pub fn fill_holes(pix: &Pix, connectivity: ConnectivityType) -> RegionResult<Pix> {
    check_binary(pix)?;

    let width = pix.width();
    let height = pix.height();

    // Background reachable from the frame
    let mut outside = vec![false; (width * height) as usize];
    let mut queue = VecDeque::new();
    let visit = |x: u32, y: u32, outside: &mut Vec<bool>, queue: &mut VecDeque<(u32, u32)>| {
        let idx = (y * width + x) as usize;
        if !outside[idx] && pix.get_pixel_unchecked(x, y) == 0 {
            outside[idx] = true;
            queue.push_back((x, y));
        }
    };

    for x in 0..width {
        visit(x, 0, &mut outside, &mut queue);
        visit(x, height - 1, &mut outside, &mut queue);
    }
    for y in 0..height {
        visit(0, y, &mut outside, &mut queue);
        visit(width - 1, y, &mut outside, &mut queue);
    }

    let offsets: &[(i32, i32)] = match connectivity {
        ConnectivityType::FourWay => &[(-1, 0), (1, 0), (0, -1), (0, 1)],
        ConnectivityType::EightWay => &[
            (-1, 0),
            (1, 0),
            (0, -1),
            (0, 1),
            (-1, -1),
            (1, -1),
            (-1, 1),
            (1, 1),
        ],
    };

    while let Some((x, y)) = queue.pop_front() {
        for &(dx, dy) in offsets {
            let (nx, ny) = (x as i32 + dx, y as i32 + dy);
            if nx < 0 || ny < 0 || nx >= width as i32 || ny >= height as i32 {
                continue;
            }
            visit(nx as u32, ny as u32, &mut outside, &mut queue);
        }
    }

    // Result = NOT outside
    let mut result = Pix::new(width, height, PixelDepth::Bit1)?.to_mut();
    for y in 0..height {
        for x in 0..width {
            if !outside[(y * width + x) as usize] {
                result.set_pixel_unchecked(x, y, 1);
            }
        }
    }

    Ok(result.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_ring() {
        let mut pm = Pix::new(7, 7, PixelDepth::Bit1).unwrap().to_mut();
        for i in 1..6 {
            pm.set_pixel_unchecked(i, 1, 1);
            pm.set_pixel_unchecked(i, 5, 1);
            pm.set_pixel_unchecked(1, i, 1);
            pm.set_pixel_unchecked(5, i, 1);
        }
        let ring: Pix = pm.into();
        let filled = fill_holes(&ring, ConnectivityType::FourWay).unwrap();
        assert_eq!(filled.count_pixels().unwrap(), 25);
        assert_eq!(filled.get_pixel(3, 3), Some(1));
        assert_eq!(filled.get_pixel(0, 0), Some(0));
    }

    #[test]
    fn test_diagonal_leak_depends_on_connectivity() {
        // A diamond outline: closed for 4-way background, open for 8-way.
        let mut pm = Pix::new(5, 5, PixelDepth::Bit1).unwrap().to_mut();
        for (x, y) in [(2, 0), (1, 1), (3, 1), (0, 2), (4, 2), (1, 3), (3, 3), (2, 4)] {
            pm.set_pixel_unchecked(x, y, 1);
        }
        let diamond: Pix = pm.into();

        let four = fill_holes(&diamond, ConnectivityType::FourWay).unwrap();
        assert_eq!(four.get_pixel(2, 2), Some(1));
        let eight = fill_holes(&diamond, ConnectivityType::EightWay).unwrap();
        assert_eq!(eight.get_pixel(2, 2), Some(0));
    }
}
