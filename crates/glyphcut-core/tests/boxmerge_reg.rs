//! Box merge regression test
//!
//! Merging nearby fragments of icons, ordering the merged boxes row by row
//! and padding them for cropping.
//!
//! Run with:
//! ```
//! cargo test -p glyphcut-core --test boxmerge_reg
//! ```

use glyphcut_core::{Box, Boxa};
use glyphcut_test::RegParams;

fn boxa(boxes: &[(i32, i32, i32, i32)]) -> Boxa {
    boxes
        .iter()
        .map(|&(x, y, w, h)| Box::new_unchecked(x, y, w, h))
        .collect()
}

fn compare_box(rp: &mut RegParams, expected: (i32, i32, i32, i32), actual: Option<&Box>) {
    let Some(b) = actual else {
        rp.check(false, "box present");
        return;
    };
    rp.compare_values(expected.0 as f64, b.x as f64, 0.0);
    rp.compare_values(expected.1 as f64, b.y as f64, 0.0);
    rp.compare_values(expected.2 as f64, b.w as f64, 0.0);
    rp.compare_values(expected.3 as f64, b.h as f64, 0.0);
}

#[test]
fn boxmerge_reg() {
    let mut rp = RegParams::new("boxmerge");

    // --- Fragments of one outlined icon plus a far-away icon ---
    let fragments = boxa(&[
        (100, 100, 30, 90),
        (160, 100, 30, 90),
        (120, 210, 50, 10),
        (400, 100, 90, 90),
    ]);
    let merged = fragments.merge_nearby(40);
    rp.compare_values(2.0, merged.len() as f64, 0.0);
    compare_box(&mut rp, (100, 100, 90, 120), merged.get(0));
    compare_box(&mut rp, (400, 100, 90, 90), merged.get(1));

    // No two merged boxes remain within the gap, so merging is a fixed point
    let boxes = merged.boxes();
    for (i, a) in boxes.iter().enumerate() {
        for b in &boxes[i + 1..] {
            rp.check(!a.overlaps_within(b, 40), "merged boxes are separated");
        }
    }
    rp.check(merged.merge_nearby(40) == merged, "merge is idempotent");

    // --- Chain that only closes on a later pass ---
    // Box 0 reaches box 1 only after absorbing box 2, which it visits later.
    let chain = boxa(&[(0, 0, 10, 10), (100, 0, 10, 10), (20, 0, 70, 10)]);
    let once = chain.merge_nearby(15);
    rp.compare_values(1.0, once.len() as f64, 0.0);
    compare_box(&mut rp, (0, 0, 110, 10), once.get(0));

    // --- Reading order ---
    let mut order = boxa(&[(50, 10, 5, 5), (10, 90, 5, 5), (5, 15, 5, 5)]);
    order.sort_reading_order(80);
    compare_box(&mut rp, (5, 15, 5, 5), order.get(0));
    compare_box(&mut rp, (50, 10, 5, 5), order.get(1));
    compare_box(&mut rp, (10, 90, 5, 5), order.get(2));

    // --- Padding clamps to the image ---
    let padded = Box::new_unchecked(5, 380, 100, 15).pad_clamped(15, 650, 400);
    compare_box(&mut rp, (0, 365, 120, 35), padded.as_ref());
    rp.check(
        Box::new_unchecked(700, 10, 5, 5).pad_clamped(15, 650, 400).is_none(),
        "box outside the image has no crop",
    );

    assert!(rp.cleanup());
}
