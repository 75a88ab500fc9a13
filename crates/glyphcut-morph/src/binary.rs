//! Binary morphological operations
//!
//! Implements erosion, dilation, opening, and closing for 1-bpp images.
//!
//! For a hit at offset `(dx, dy)` the output at `(x, y)` reads the source
//! at `(x + dx, y + dy)`. Pixels beyond the image never help a dilation
//! and never hurt an erosion, so shapes touching the frame keep their
//! edge pixels through a closing.

use crate::{MorphError, MorphResult, Sel};
use glyphcut_core::{Pix, PixMut, PixelDepth};

/// Dilate a binary image using rasterop (word-level shift-and-OR)
///
/// Dilation expands foreground regions. For each hit position in the SEL,
/// the source rows are shifted by that offset and OR-accumulated into the
/// output at 32-bit word granularity.
pub fn dilate(pix: &Pix, sel: &Sel) -> MorphResult<Pix> {
    check_binary(pix)?;
    let mut out_mut = dilate_rasterop(pix.data(), pix.width(), pix.height(), sel)?;
    clear_unused_bits(out_mut.data_mut(), pix.width(), pix.wpl() as usize);
    Ok(out_mut.into())
}

/// Rasterop dilation over raw word data.
///
/// Rows outside the image contribute nothing. Bits past the image width in
/// `src` must be zero; the same bits in the result are left dirty.
fn dilate_rasterop(src_data: &[u32], w: u32, h: u32, sel: &Sel) -> MorphResult<PixMut> {
    let mut out_mut = Pix::new(w, h, PixelDepth::Bit1)?.to_mut();
    let wpl = out_mut.wpl() as usize;
    let dst_data = out_mut.data_mut();

    for (dx, dy) in sel.hit_offsets() {
        for y in 0..h as i32 {
            let src_y = y + dy;
            if src_y < 0 || src_y >= h as i32 {
                continue;
            }

            let src_start = src_y as usize * wpl;
            let dst_start = y as usize * wpl;

            shift_or_row(
                &mut dst_data[dst_start..dst_start + wpl],
                &src_data[src_start..src_start + wpl],
                -dx,
            );
        }
    }

    Ok(out_mut)
}

/// Erode a binary image
///
/// Erosion shrinks foreground regions: a pixel survives only if every hit
/// of the SEL lands on foreground. Positions outside the image count as
/// foreground.
///
/// Computed as the complement of dilating the complement; the complement
/// has background beyond the frame, which is foreground for the erosion.
pub fn erode(pix: &Pix, sel: &Sel) -> MorphResult<Pix> {
    check_binary(pix)?;

    let (w, h) = (pix.width(), pix.height());
    let wpl = pix.wpl() as usize;

    let mut inverted: Vec<u32> = pix.data().iter().map(|word| !word).collect();
    clear_unused_bits(&mut inverted, w, wpl);

    let mut out_mut = dilate_rasterop(&inverted, w, h, sel)?;
    let dst = out_mut.data_mut();
    for word in dst.iter_mut() {
        *word = !*word;
    }
    clear_unused_bits(dst, w, wpl);
    Ok(out_mut.into())
}

/// Open a binary image
///
/// Opening = Erosion followed by Dilation.
/// Removes small foreground objects and smooths contours.
pub fn open(pix: &Pix, sel: &Sel) -> MorphResult<Pix> {
    let eroded = erode(pix, sel)?;
    dilate(&eroded, sel)
}

/// Close a binary image
///
/// Closing = Dilation followed by Erosion.
/// Fills small holes and connects nearby objects.
pub fn close(pix: &Pix, sel: &Sel) -> MorphResult<Pix> {
    let dilated = dilate(pix, sel)?;
    erode(&dilated, sel)
}

/// Close with `iterations` dilations followed by as many erosions.
///
/// This is not the same as closing `iterations` times: closing is
/// idempotent, while repeated dilation bridges gaps up to `iterations`
/// times wider. With `iterations == 0` the input is returned unchanged.
pub fn close_iter(pix: &Pix, sel: &Sel, iterations: u32) -> MorphResult<Pix> {
    check_binary(pix)?;
    let mut result = pix.clone();
    for _ in 0..iterations {
        result = dilate(&result, sel)?;
    }
    for _ in 0..iterations {
        result = erode(&result, sel)?;
    }
    Ok(result)
}

/// Open with `iterations` erosions followed by as many dilations.
///
/// With `iterations == 0` the input is returned unchanged.
pub fn open_iter(pix: &Pix, sel: &Sel, iterations: u32) -> MorphResult<Pix> {
    check_binary(pix)?;
    let mut result = pix.clone();
    for _ in 0..iterations {
        result = erode(&result, sel)?;
    }
    for _ in 0..iterations {
        result = dilate(&result, sel)?;
    }
    Ok(result)
}

/// Dilate with a `width` x `height` brick
pub fn dilate_brick(pix: &Pix, width: u32, height: u32) -> MorphResult<Pix> {
    let sel = Sel::create_brick(width, height)?;
    dilate(pix, &sel)
}

/// Erode with a `width` x `height` brick
pub fn erode_brick(pix: &Pix, width: u32, height: u32) -> MorphResult<Pix> {
    let sel = Sel::create_brick(width, height)?;
    erode(pix, &sel)
}

/// Shift src row by `shift` pixels and OR into dst (word-level).
///
/// MSB-first bit ordering: pixel 0 = bit 31, pixel 31 = bit 0.
/// Positive shift = image content moves right (src >> shift in bit terms).
/// Negative shift = image content moves left (src << |shift| in bit terms).
///
/// Inner loops have no bounds checks to enable auto-vectorization.
#[allow(clippy::needless_range_loop)]
fn shift_or_row(dst: &mut [u32], src: &[u32], shift: i32) {
    let wpl = dst.len();

    if shift == 0 {
        for i in 0..wpl {
            dst[i] |= src[i];
        }
        return;
    }

    let abs_shift = shift.unsigned_abs() as usize;
    let word_shift = abs_shift / 32;
    let bit_shift = (abs_shift % 32) as u32;

    if word_shift >= wpl {
        return; // Entire row shifts out of bounds; OR with 0 is no-op
    }

    if shift > 0 {
        // Shift right: dst[word_shift..wpl] gets src[0..wpl-word_shift]
        if bit_shift == 0 {
            for i in word_shift..wpl {
                dst[i] |= src[i - word_shift];
            }
        } else {
            dst[word_shift] |= src[0] >> bit_shift;
            for i in (word_shift + 1)..wpl {
                let si = i - word_shift;
                dst[i] |= (src[si] >> bit_shift) | (src[si - 1] << (32 - bit_shift));
            }
        }
    } else {
        // Shift left: dst[0..wpl-word_shift] gets src[word_shift..wpl]
        let end = wpl - word_shift;
        if bit_shift == 0 {
            for i in 0..end {
                dst[i] |= src[i + word_shift];
            }
        } else {
            for i in 0..end.saturating_sub(1) {
                let si = i + word_shift;
                dst[i] |= (src[si] << bit_shift) | (src[si + 1] >> (32 - bit_shift));
            }
            if end > 0 {
                dst[end - 1] |= src[wpl - 1] << bit_shift;
            }
        }
    }
}

/// Clear unused bits in the last word of each row.
///
/// When image width is not a multiple of 32, the last word of each row
/// has unused bit positions (lower bits in MSB-first ordering). Word-level
/// shifts and inversion can set these bits, which would leak into the
/// next operation as phantom pixels.
fn clear_unused_bits(data: &mut [u32], width: u32, wpl: usize) {
    let extra = width % 32;
    if extra == 0 {
        return;
    }
    // MSB-first: valid bits are the top `extra` bits; mask off the rest
    let mask = !0u32 << (32 - extra);
    for row in data.chunks_exact_mut(wpl) {
        row[wpl - 1] &= mask;
    }
}

/// Check that the image is binary (1-bpp)
pub(crate) fn check_binary(pix: &Pix) -> MorphResult<()> {
    if pix.depth() != PixelDepth::Bit1 {
        return Err(MorphError::UnsupportedDepth {
            expected: "1-bpp binary",
            actual: pix.depth().bits(),
        });
    }
    Ok(())
}
