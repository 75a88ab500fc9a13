//! Error types for the extraction pipeline

use glyphcut_color::ColorError;
use glyphcut_io::IoError;
use glyphcut_morph::MorphError;
use glyphcut_region::RegionError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading, processing or writing icons
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The source image could not be read or decoded
    #[error("failed to load image `{}`", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    /// An icon could not be written
    #[error("failed to write icon `{}`", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    /// The output directory could not be created
    #[error("failed to create output directory `{}`", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error when reading config `{}`", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file parsing error")]
    ConfigParse(#[from] toml::de::Error),

    #[error("{name} = {value} is out of range {min}..={max}")]
    OutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("invalid color `{0}`: expected #rrggbb")]
    InvalidColor(String),

    #[error(transparent)]
    Core(#[from] glyphcut_core::Error),

    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Morph(#[from] MorphError),

    #[error(transparent)]
    Region(#[from] RegionError),
}

/// Result type alias for pipeline operations
pub type ExtractResult<T> = std::result::Result<T, ExtractError>;
