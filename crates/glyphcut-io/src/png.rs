//! PNG image format support
//!
//! Grayscale PNGs keep their depth when it is 1 or 8 bits; 2, 4 and 16-bit
//! gray is scaled to 8 bits. Palette images are expanded to RGB, since the
//! pipeline only ever looks at pixel colors.

use crate::{IoError, IoResult};
use glyphcut_core::{Pix, PixelDepth, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::IDENTITY);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;
    let palette: Option<Vec<u8>> = info.palette.as_ref().map(|p| p.to_vec());

    let (pix_depth, spp) = match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::One) => (PixelDepth::Bit1, 1),
        (ColorType::Grayscale, _) => (PixelDepth::Bit8, 1),
        (ColorType::GrayscaleAlpha, _) | (ColorType::Rgba, _) => (PixelDepth::Bit32, 4),
        (ColorType::Rgb, _) | (ColorType::Indexed, _) => (PixelDepth::Bit32, 3),
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let mut pix_mut = Pix::new(width, height, pix_depth)?.to_mut();
    pix_mut.set_spp(spp);

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let bits = bit_depth as u32;

    match color_type {
        ColorType::Grayscale if bit_depth == BitDepth::One => {
            for y in 0..height {
                let row = &data[y as usize * bytes_per_row..];
                for x in 0..width {
                    pix_mut.set_pixel_unchecked(x, y, packed_sample(row, x, 1));
                }
            }
        }
        ColorType::Grayscale => {
            for y in 0..height {
                let row = &data[y as usize * bytes_per_row..];
                for x in 0..width {
                    let val = match bit_depth {
                        BitDepth::Sixteen => row[x as usize * 2] as u32,
                        BitDepth::Eight => row[x as usize] as u32,
                        // Replicate the sample bits to fill a byte.
                        _ => packed_sample(row, x, bits) * 255 / ((1 << bits) - 1),
                    };
                    pix_mut.set_pixel_unchecked(x, y, val);
                }
            }
        }
        ColorType::Indexed => {
            let palette = palette
                .ok_or_else(|| IoError::InvalidData("indexed PNG without palette".to_string()))?;
            for y in 0..height {
                let row = &data[y as usize * bytes_per_row..];
                for x in 0..width {
                    let index = packed_sample(row, x, bits) as usize * 3;
                    let entry = palette.get(index..index + 3).ok_or_else(|| {
                        IoError::InvalidData(format!("palette index {} out of range", index / 3))
                    })?;
                    let pixel = color::compose_rgb(entry[0], entry[1], entry[2]);
                    pix_mut.set_pixel_unchecked(x, y, pixel);
                }
            }
        }
        ColorType::GrayscaleAlpha => {
            let samples = if bit_depth == BitDepth::Sixteen { 4 } else { 2 };
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + (x as usize * samples);
                    let (g, a) = (data[idx], data[idx + samples / 2]);
                    pix_mut.set_pixel_unchecked(x, y, color::compose_rgba(g, g, g, a));
                }
            }
        }
        ColorType::Rgb => {
            let step = if bit_depth == BitDepth::Sixteen { 2 } else { 1 };
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + (x as usize * 3 * step);
                    let (r, g, b) = (data[idx], data[idx + step], data[idx + 2 * step]);
                    pix_mut.set_pixel_unchecked(x, y, color::compose_rgb(r, g, b));
                }
            }
        }
        ColorType::Rgba => {
            let step = if bit_depth == BitDepth::Sixteen { 2 } else { 1 };
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + (x as usize * 4 * step);
                    let pixel = color::compose_rgba(
                        data[idx],
                        data[idx + step],
                        data[idx + 2 * step],
                        data[idx + 3 * step],
                    );
                    pix_mut.set_pixel_unchecked(x, y, pixel);
                }
            }
        }
    }

    Ok(pix_mut.into())
}

/// Sample `x` of a row packed MSB-first at `bits` (1, 2, 4 or 8) per sample.
fn packed_sample(row: &[u8], x: u32, bits: u32) -> u32 {
    let per_byte = 8 / bits;
    let byte = row[(x / per_byte) as usize] as u32;
    let shift = 8 - bits * (x % per_byte + 1);
    (byte >> shift) & ((1 << bits) - 1)
}

/// Write a PNG image
///
/// 1-bpp images are written as 1-bit grayscale, 8-bpp as 8-bit grayscale
/// and 32-bpp as RGBA when the image has 4 samples per pixel, RGB otherwise.
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let width = pix.width();
    let height = pix.height();

    let (color_type, bit_depth, bytes_per_row) = match pix.depth() {
        PixelDepth::Bit1 => (ColorType::Grayscale, BitDepth::One, width.div_ceil(8)),
        PixelDepth::Bit8 => (ColorType::Grayscale, BitDepth::Eight, width),
        PixelDepth::Bit32 if pix.spp() == 4 => (ColorType::Rgba, BitDepth::Eight, width * 4),
        PixelDepth::Bit32 => (ColorType::Rgb, BitDepth::Eight, width * 3),
    };
    let bytes_per_row = bytes_per_row as usize;

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(bit_depth);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = vec![0u8; bytes_per_row * height as usize];

    for y in 0..height {
        let row = &mut data[y as usize * bytes_per_row..(y as usize + 1) * bytes_per_row];

        match color_type {
            ColorType::Grayscale if bit_depth == BitDepth::One => {
                for x in 0..width {
                    if pix.get_pixel_unchecked(x, y) != 0 {
                        row[(x / 8) as usize] |= 1 << (7 - (x % 8));
                    }
                }
            }
            ColorType::Grayscale => {
                for x in 0..width {
                    row[x as usize] = pix.get_pixel_unchecked(x, y) as u8;
                }
            }
            ColorType::Rgb => {
                for x in 0..width {
                    let (r, g, b) = color::extract_rgb(pix.get_pixel_unchecked(x, y));
                    row[x as usize * 3..x as usize * 3 + 3].copy_from_slice(&[r, g, b]);
                }
            }
            _ => {
                for x in 0..width {
                    let (r, g, b, a) = color::extract_rgba(pix.get_pixel_unchecked(x, y));
                    row[x as usize * 4..x as usize * 4 + 4].copy_from_slice(&[r, g, b, a]);
                }
            }
        }
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn roundtrip(pix: &Pix) -> Pix {
        let mut buffer = Vec::new();
        write_png(pix, &mut buffer).unwrap();
        read_png(Cursor::new(buffer)).unwrap()
    }

    #[test]
    fn test_png_roundtrip_grayscale() {
        let mut pix_mut = Pix::new(10, 10, PixelDepth::Bit8).unwrap().to_mut();
        for y in 0..10 {
            for x in 0..10 {
                pix_mut.set_pixel(x, y, (x + y) * 10).unwrap();
            }
        }
        let pix: Pix = pix_mut.into();

        let pix2 = roundtrip(&pix);
        assert_eq!(pix2.depth(), PixelDepth::Bit8);
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(pix2.get_pixel(x, y), pix.get_pixel(x, y));
            }
        }
    }

    #[test]
    fn test_png_roundtrip_binary() {
        let mut pix_mut = Pix::new(13, 3, PixelDepth::Bit1).unwrap().to_mut();
        pix_mut.set_pixel(0, 0, 1).unwrap();
        pix_mut.set_pixel(12, 2, 1).unwrap();
        let pix2 = roundtrip(&pix_mut.into());

        assert_eq!(pix2.depth(), PixelDepth::Bit1);
        assert_eq!(pix2.get_pixel(0, 0), Some(1));
        assert_eq!(pix2.get_pixel(12, 2), Some(1));
        assert_eq!(pix2.count_pixels().unwrap(), 2);
    }

    #[test]
    fn test_png_roundtrip_rgb() {
        let mut pix_mut = Pix::new(5, 5, PixelDepth::Bit32).unwrap().to_mut();
        pix_mut.set_rgb(0, 0, 255, 0, 0).unwrap();
        pix_mut.set_rgb(1, 1, 0, 255, 0).unwrap();
        pix_mut.set_rgb(2, 2, 0, 0, 255).unwrap();

        let pix2 = roundtrip(&pix_mut.into());
        assert_eq!(pix2.spp(), 3);
        assert_eq!(pix2.get_rgb(0, 0), Some((255, 0, 0)));
        assert_eq!(pix2.get_rgb(1, 1), Some((0, 255, 0)));
        assert_eq!(pix2.get_rgb(2, 2), Some((0, 0, 255)));
    }

    #[test]
    fn test_png_roundtrip_rgba_keeps_alpha() {
        let mut pix_mut = Pix::new_rgba(4, 1).unwrap().to_mut();
        pix_mut.set_rgba(0, 0, 13, 148, 136, 255).unwrap();
        pix_mut.set_rgba(1, 0, 13, 148, 136, 0).unwrap();

        let pix2 = roundtrip(&pix_mut.into());
        assert_eq!(pix2.spp(), 4);
        assert_eq!(pix2.get_rgba(0, 0), Some((13, 148, 136, 255)));
        assert_eq!(pix2.get_rgba(1, 0), Some((13, 148, 136, 0)));
    }

    #[test]
    fn test_packed_sample() {
        let row = [0b1011_0001u8];
        assert_eq!(packed_sample(&row, 0, 1), 1);
        assert_eq!(packed_sample(&row, 1, 1), 0);
        assert_eq!(packed_sample(&row, 0, 2), 0b10);
        assert_eq!(packed_sample(&row, 3, 2), 0b01);
        assert_eq!(packed_sample(&row, 1, 4), 0b0001);
    }
}
