//! Binary morphology regression test
//!
//! Tests dilation, erosion, opening and closing on masks shaped like
//! thresholded icons, and the close-then-open cleanup pass.
//!
//! Run with:
//! ```
//! cargo test -p glyphcut-morph --test binmorph_reg
//! ```

use glyphcut_core::{Box, Pix};
use glyphcut_morph::{
    CleanOptions, Sel, clean_mask, close, close_iter, dilate, erode, open, open_iter,
};
use glyphcut_test::{RegParams, icon_grid_boxes, mask_from_boxes};

fn count(pix: &Pix) -> f64 {
    pix.count_pixels().unwrap() as f64
}

#[test]
fn binmorph_reg() {
    let mut rp = RegParams::new("binmorph");
    let sel = Sel::create_ellipse(3, 3).unwrap();

    // Solid squares are unchanged by closing and opening with a cross,
    // apart from the four corners that the opening trims.
    let clean = mask_from_boxes(650, 400, &icon_grid_boxes()).unwrap();
    let orig = count(&clean);
    eprintln!("Original foreground pixels: {}", orig);

    let closed = close(&clean, &sel).unwrap();
    rp.compare_pix(&clean, &closed);
    let opened = open(&clean, &sel).unwrap();
    rp.compare_values(orig - 6.0 * 4.0, count(&opened), 0.0);

    // Dilation grows by the perimeter, erosion shrinks by it
    let dilated = dilate(&clean, &sel).unwrap();
    rp.compare_values(orig + 6.0 * 400.0, count(&dilated), 0.0);
    let eroded = erode(&clean, &sel).unwrap();
    rp.compare_values(orig - 6.0 * 396.0, count(&eroded), 0.0);

    // Opening on a mask whose width is not a multiple of 32
    let odd = mask_from_boxes(
        45,
        30,
        &[Box::new_unchecked(3, 3, 20, 10), Box::new_unchecked(30, 10, 15, 20)],
    )
    .unwrap();
    let e = erode(&odd, &sel).unwrap();
    let d = dilate(&e, &sel).unwrap();
    rp.compare_pix(&d, &open(&odd, &sel).unwrap());
    // The second box touches the right and bottom edges and keeps them
    rp.check(e.get_pixel_unchecked(44, 29) == 1, "frame does not erode");

    assert!(rp.cleanup());
}

#[test]
fn maskclean_reg() {
    let mut rp = RegParams::new("maskclean");
    let sel = Sel::create_ellipse(3, 3).unwrap();

    // An outlined icon: a 6-pixel ring broken by a 2-pixel gap, with
    // single-pixel noise around it.
    let ring = [
        Box::new_unchecked(20, 20, 60, 6),
        Box::new_unchecked(20, 74, 60, 6),
        Box::new_unchecked(20, 20, 6, 60),
        Box::new_unchecked(74, 20, 6, 27),
        Box::new_unchecked(74, 49, 6, 31),
    ];
    let mut noisy = mask_from_boxes(100, 100, &ring).unwrap().to_mut();
    for (x, y) in [(5, 5), (90, 10), (50, 50), (8, 92)] {
        noisy.set_pixel_unchecked(x, y, 1);
    }
    let noisy: Pix = noisy.into();
    rp.write_pix(&noisy).unwrap();

    let once = close(&noisy, &sel).unwrap();
    rp.check(once.get_pixel_unchecked(77, 47) == 1, "single closing bridges gap");

    let cleaned = clean_mask(&noisy, &CleanOptions::default()).unwrap();
    rp.write_pix(&cleaned).unwrap();
    for (x, y) in [(5, 5), (90, 10), (50, 50), (8, 92)] {
        rp.check(cleaned.get_pixel_unchecked(x, y) == 0, "speck removed");
    }
    rp.check(cleaned.get_pixel_unchecked(77, 47) == 1, "gap bridged");
    rp.check(cleaned.get_pixel_unchecked(77, 48) == 1, "gap bridged");

    // clean_mask is exactly close_iter(2) then open_iter(1)
    let manual = open_iter(&close_iter(&noisy, &sel, 2).unwrap(), &sel, 1).unwrap();
    rp.compare_pix(&manual, &cleaned);

    assert!(rp.cleanup());
}
