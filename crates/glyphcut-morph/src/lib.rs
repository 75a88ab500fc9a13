//! glyphcut-morph - Binary morphology for mask cleanup
//!
//! This crate provides:
//!
//! - Structuring elements (SEL): bricks, ellipses and string patterns
//! - Binary morphology: erosion, dilation, opening, closing, and the
//!   iterated forms used to clean segmentation masks
//! - [`clean_mask`]: the close-then-open cleanup pass

pub mod binary;
pub mod clean;
mod error;
pub mod sel;

pub use error::{MorphError, MorphResult};
pub use sel::{Sel, SelElement};

pub use binary::{close, close_iter, dilate, dilate_brick, erode, erode_brick, open, open_iter};
pub use clean::{CleanOptions, clean_mask};
