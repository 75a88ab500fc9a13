//! The icon extraction pipeline

use crate::{ExtractError, ExtractOptions, ExtractResult};
use glyphcut_core::{Box, Boxa, Pix};
use glyphcut_morph::clean_mask;
use glyphcut_region::find_candidate_regions;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// One extracted icon
#[derive(Debug, Clone)]
pub struct IconRegion {
    /// Output file stem
    pub name: String,
    /// Merged bounding box of the icon in the source image
    pub bounds: Box,
    /// Padded rectangle that was cropped, clamped to the image
    pub crop: Box,
    /// The recolored icon, 32 bpp with alpha from the mask
    pub pix: Pix,
}

/// Result of running the pipeline on one image
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Cleaned foreground mask of the whole image
    pub mask: Pix,
    /// Number of regions that passed the filter, before merging
    pub candidate_count: usize,
    /// Icons in reading order
    pub icons: Vec<IconRegion>,
}

/// Runs segmentation, mask cleaning, region finding and recoloring.
///
/// Each stage is exposed on its own so callers can inspect the
/// intermediate masks and boxes.
#[derive(Debug, Clone, Default)]
pub struct IconExtractor {
    options: ExtractOptions,
}

impl IconExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Binary foreground mask by a global Otsu threshold on luma.
    pub fn segment(&self, pix: &Pix) -> ExtractResult<Pix> {
        let (threshold, mask) = glyphcut_color::threshold_otsu(pix)?;
        debug!(threshold, "segmented image");
        Ok(mask)
    }

    /// Close gaps inside icons, then remove specks.
    pub fn clean(&self, mask: &Pix) -> ExtractResult<Pix> {
        Ok(clean_mask(mask, &self.options.clean)?)
    }

    /// Bounding boxes of the outer contours that look like icons.
    pub fn find_regions(&self, mask: &Pix) -> ExtractResult<Boxa> {
        Ok(find_candidate_regions(mask, &self.options.filter)?)
    }

    /// Merge fragments of the same icon and order icons row by row.
    pub fn merge_and_sort(&self, boxes: &Boxa) -> Boxa {
        let mut merged = boxes.merge_nearby(self.options.gap);
        merged.sort_reading_order(self.options.row_band);
        merged
    }

    /// Run every stage on `pix`.
    ///
    /// An image without icons yields an empty [`Extraction::icons`].
    /// Options outside their valid range are rejected before any stage
    /// runs.
    pub fn extract(&self, pix: &Pix) -> ExtractResult<Extraction> {
        self.options.validate()?;
        let mask = self.clean(&self.segment(pix)?)?;

        let candidates = self.find_regions(&mask)?;
        info!("found {} candidate regions", candidates.len());

        let merged = self.merge_and_sort(&candidates);
        info!("after merging: {} icons", merged.len());

        let (width, height) = (mask.width() as i32, mask.height() as i32);
        let color = self.options.target_rgb();
        let mut icons = Vec::with_capacity(merged.len());

        for (index, bounds) in merged.iter().enumerate() {
            let Some(crop) = bounds.pad_clamped(self.options.padding, width, height) else {
                warn!(?bounds, "icon lies outside the image, skipping");
                continue;
            };
            let name = self.options.name_for(index);
            debug!(
                name = %name,
                x = bounds.x,
                y = bounds.y,
                w = bounds.w,
                h = bounds.h,
                "icon region"
            );

            let cropped = mask.clip_rectangle(&crop)?;
            let pix = glyphcut_color::colorize_mask(&cropped, color)?;
            icons.push(IconRegion {
                name,
                bounds: *bounds,
                crop,
                pix,
            });
        }

        Ok(Extraction {
            mask,
            candidate_count: candidates.len(),
            icons,
        })
    }

    /// Extract the icons of the image at `input` into `out_dir`.
    ///
    /// The directory is created first. A load failure aborts before any
    /// icon is written. Returns the written paths in reading order.
    pub fn extract_to_dir(&self, input: &Path, out_dir: &Path) -> ExtractResult<Vec<PathBuf>> {
        self.options.validate()?;
        fs::create_dir_all(out_dir).map_err(|source| ExtractError::OutputDir {
            path: out_dir.to_path_buf(),
            source,
        })?;

        let pix = glyphcut_io::read_image(input).map_err(|source| ExtractError::Load {
            path: input.to_path_buf(),
            source,
        })?;
        info!("loaded {} ({}x{})", input.display(), pix.width(), pix.height());

        let extraction = self.extract(&pix)?;
        if extraction.icons.is_empty() {
            warn!("no icon regions found in {}", input.display());
        }

        let mut written = Vec::with_capacity(extraction.icons.len());
        for icon in &extraction.icons {
            let path = out_dir.join(format!("{}.png", icon.name));
            glyphcut_io::write_png_file(&icon.pix, &path).map_err(|source| {
                ExtractError::Save {
                    path: path.clone(),
                    source,
                }
            })?;
            info!(
                "saved {} ({}x{} at {},{})",
                path.display(),
                icon.bounds.w,
                icon.bounds.h,
                icon.bounds.x,
                icon.bounds.y
            );
            written.push(path);
        }

        info!("extracted {} icons to {}", written.len(), out_dir.display());
        Ok(written)
    }
}
