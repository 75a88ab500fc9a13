//! glyphcut-color - Color processing for icon segmentation
//!
//! This crate provides the pixel-value stages of the extractor:
//!
//! - **Color space conversion** ([`colorspace`]): RGB -> grayscale
//! - **Thresholding** ([`threshold`]): histogram, Otsu's method, binarization
//! - **Coloring** ([`coloring`]): turn a binary mask into a solid-color RGBA icon

pub mod coloring;
pub mod colorspace;
pub mod error;
pub mod threshold;

// Re-export core types
pub use glyphcut_core;

pub use error::{ColorError, ColorResult};

pub use colorspace::{pix_convert_to_gray, rgb_to_gray};

pub use threshold::{compute_otsu_threshold, gray_histogram, threshold_otsu, threshold_to_binary};

pub use coloring::colorize_mask;
