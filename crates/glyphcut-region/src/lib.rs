//! glyphcut-region - Region finding for glyphcut
//!
//! This crate provides region processing functionality including:
//!
//! - **Connected component analysis** - Finding and labeling connected regions
//! - **Hole filling** - Background flood fill from the image frame
//! - **External contours** - One bounding box per outermost shape
//! - **Candidate selection** - Geometric filtering of icon boxes
//!
//! # Examples
//!
//! ## Finding connected components
//!
//! ```
//! use glyphcut_region::{find_connected_components, ConnectivityType};
//! use glyphcut_core::{Pix, PixelDepth};
//!
//! let mut pix_mut = Pix::new(100, 100, PixelDepth::Bit1).unwrap().to_mut();
//! pix_mut.set_pixel(10, 10, 1).unwrap();
//! pix_mut.set_pixel(11, 10, 1).unwrap();
//! pix_mut.set_pixel(50, 50, 1).unwrap();
//! let pix: Pix = pix_mut.into();
//!
//! let components = find_connected_components(&pix, ConnectivityType::FourWay).unwrap();
//! assert_eq!(components.len(), 2);
//! ```

pub mod conncomp;
pub mod contour;
pub mod error;
pub mod seedfill;
pub mod select;

// Re-export core types
pub use glyphcut_core;

pub use conncomp::{ConnectedComponent, ConnectivityType, find_connected_components};
pub use contour::find_external_boxes;
pub use error::{RegionError, RegionResult};
pub use seedfill::fill_holes;
pub use select::{BoxFilter, find_candidate_regions};
