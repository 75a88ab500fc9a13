//! glyphcut - Icon extraction from screenshots
//!
//! Finds icon shapes in a screenshot of an icon grid, masks away the
//! background and writes each icon as a recolored, transparent PNG.
//!
//! # Overview
//!
//! The pipeline runs four stages in order:
//!
//! - Segmentation: grayscale conversion and a global Otsu threshold
//! - Mask cleaning: morphological closing then opening
//! - Region finding: external contours filtered by size and shape
//! - Merging nearby boxes, reading-order sort, padded crop and recolor
//!
//! # Example
//!
//! ```
//! use glyphcut::{ExtractOptions, IconExtractor, Pix, PixelDepth};
//!
//! // A blank screenshot contains no icons
//! let pix = Pix::new(320, 240, PixelDepth::Bit32).unwrap();
//! let extraction = IconExtractor::new(ExtractOptions::default())
//!     .extract(&pix)
//!     .unwrap();
//! assert!(extraction.icons.is_empty());
//! ```

mod error;
mod extract;
mod options;

pub use glyphcut_core::{Box, Boxa, Pix, PixMut, PixelDepth};

// Stage crates, each under its own name
pub use glyphcut_color as color;
pub use glyphcut_io as io;
pub use glyphcut_morph as morph;
pub use glyphcut_region as region;

pub use error::{ExtractError, ExtractResult};
pub use extract::{Extraction, IconExtractor, IconRegion};
pub use options::{DEFAULT_ICON_NAMES, ExtractOptions, IconNames, MAX_MARGIN, parse_hex_color};
