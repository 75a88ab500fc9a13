//! glyphcut-io - Image I/O for the glyphcut icon extractor
//!
//! PNG is read and written natively through the `png` crate, so 1-bpp
//! masks and RGBA icons keep their exact depth and alpha. Screenshots in
//! other raster formats are decoded through the `image` crate. Output is
//! always PNG.
//!
//! # Examples
//!
//! ```no_run
//! use glyphcut_io::{read_image, write_png_file};
//!
//! let pix = read_image("screenshot.png").unwrap();
//! write_png_file(&pix, "copy.png").unwrap();
//! ```

mod codec;
mod error;
pub mod png;

pub use codec::{pix_from_dynamic, read_with_codec};
pub use error::{IoError, IoResult};

use glyphcut_core::Pix;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;

/// Read an image from a file path.
///
/// PNG is recognized from its signature and decoded natively. Anything
/// else is handed to the `image` crate, which sniffs the contents and
/// falls back to the extension for headerless formats such as TGA.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = path.as_ref();
    let mut reader = BufReader::new(File::open(path)?);
    let is_png = matches!(
        image::guess_format(reader.fill_buf()?),
        Ok(image::ImageFormat::Png)
    );

    if is_png {
        png::read_png(reader)
    } else {
        codec::read_with_codec(path)
    }
}

/// Write an image as PNG.
pub fn write_png_file<P: AsRef<Path>>(pix: &Pix, path: P) -> IoResult<()> {
    let file = File::create(path)?;
    png::write_png(pix, BufWriter::new(file))
}
