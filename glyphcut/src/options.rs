//! Pipeline configuration
//!
//! Every field has a default, so a TOML file only needs the keys it
//! changes:
//!
//! ```toml
//! target_color = [255, 255, 255]
//! gap = 30
//!
//! [filter]
//! min_height = 60
//! ```

use crate::{ExtractError, ExtractResult};
use glyphcut_morph::CleanOptions;
use glyphcut_region::BoxFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Icon names assigned in reading order.
pub const DEFAULT_ICON_NAMES: [&str; 6] = [
    "tension-relief",
    "stress-relief",
    "cellular-homeostasis",
    "deep-meditation",
    "performance-recovery",
    "elevated-mood",
];

/// Output names for icons, in reading order.
///
/// Deserializes from a plain list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconNames(Vec<String>);

impl IconNames {
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    /// Name of the icon at reading-order position `index`.
    ///
    /// Positions past the end of the list become `icon-N`, counting from 1.
    pub fn name_for(&self, index: usize) -> String {
        self.0
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("icon-{}", index + 1))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Default for IconNames {
    fn default() -> Self {
        Self(DEFAULT_ICON_NAMES.iter().map(|s| s.to_string()).collect())
    }
}

impl<S: Into<String>> FromIterator<S> for IconNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Largest accepted `gap`, `padding` or `row_band`, in pixels.
pub const MAX_MARGIN: i32 = 100_000;

/// Options for [`IconExtractor`](crate::IconExtractor)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// RGB color given to every extracted icon
    pub target_color: [u8; 3],
    /// Boxes closer than this many pixels are merged into one icon
    pub gap: i32,
    /// Margin added around each icon before cropping
    pub padding: i32,
    /// Height of the rows used to sort icons into reading order
    pub row_band: i32,
    pub filter: BoxFilter,
    pub clean: CleanOptions,
    /// Output file stems, in reading order
    pub names: IconNames,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            target_color: [13, 148, 136],
            gap: 40,
            padding: 15,
            row_band: 80,
            filter: BoxFilter::default(),
            clean: CleanOptions::default(),
            names: IconNames::default(),
        }
    }
}

impl ExtractOptions {
    /// Parse options from TOML text.
    pub fn from_toml_str(content: &str) -> ExtractResult<Self> {
        let options: Self = toml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Check that the pixel distances are in range.
    ///
    /// `gap` and `padding` must lie in `0..=MAX_MARGIN` and `row_band` in
    /// `1..=MAX_MARGIN`.
    pub fn validate(&self) -> ExtractResult<()> {
        let check = |name: &'static str, value: i32, min: i32| {
            if (min..=MAX_MARGIN).contains(&value) {
                Ok(())
            } else {
                Err(ExtractError::OutOfRange {
                    name,
                    value: i64::from(value),
                    min: i64::from(min),
                    max: i64::from(MAX_MARGIN),
                })
            }
        };
        check("gap", self.gap, 0)?;
        check("padding", self.padding, 0)?;
        check("row_band", self.row_band, 1)
    }

    /// Load options from a TOML file.
    pub fn from_toml_file(path: &Path) -> ExtractResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ExtractError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn name_for(&self, index: usize) -> String {
        self.names.name_for(index)
    }

    pub fn target_rgb(&self) -> (u8, u8, u8) {
        let [r, g, b] = self.target_color;
        (r, g, b)
    }
}

/// Parse `#rrggbb` or `rrggbb` into RGB components.
pub fn parse_hex_color(text: &str) -> ExtractResult<[u8; 3]> {
    let invalid = || ExtractError::InvalidColor(text.to_string());
    let hex = text.trim().strip_prefix('#').unwrap_or(text.trim());
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let mut rgb = [0u8; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        *channel = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|_| invalid())?;
    }
    Ok(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ExtractOptions::default();
        assert_eq!(opts.target_color, [13, 148, 136]);
        assert_eq!((opts.gap, opts.padding, opts.row_band), (40, 15, 80));
        assert_eq!(opts.names.len(), 6);
        assert_eq!(opts.clean.close_iterations, 2);
        assert_eq!(opts.filter.min_height, 80);
    }

    #[test]
    fn test_name_fallback() {
        let opts = ExtractOptions::default();
        assert_eq!(opts.name_for(0), "tension-relief");
        assert_eq!(opts.name_for(5), "elevated-mood");
        assert_eq!(opts.name_for(6), "icon-7");
    }

    #[test]
    fn test_partial_toml() {
        let opts = ExtractOptions::from_toml_str(
            r#"
            gap = 25
            names = ["a", "b"]

            [filter]
            min_height = 40
            "#,
        )
        .unwrap();
        assert_eq!(opts.gap, 25);
        assert_eq!(opts.padding, 15);
        assert_eq!(opts.names.as_slice(), ["a", "b"]);
        assert_eq!(opts.name_for(2), "icon-3");
        assert_eq!(opts.filter.min_height, 40);
        assert_eq!(opts.filter.min_area, 500);
        assert_eq!(opts.clean, CleanOptions::default());
    }

    #[test]
    fn test_bad_toml() {
        let err = ExtractOptions::from_toml_str("gap = \"wide\"").unwrap_err();
        assert!(matches!(err, ExtractError::ConfigParse(_)));
    }

    #[test]
    fn test_missing_config_file() {
        let err = ExtractOptions::from_toml_file(Path::new("/nonexistent/glyphcut.toml"))
            .unwrap_err();
        assert!(matches!(err, ExtractError::ConfigIo { .. }));
    }

    #[test]
    fn test_validate_ranges() {
        assert!(ExtractOptions::default().validate().is_ok());

        let err = ExtractOptions::from_toml_str("padding = 2000000000").unwrap_err();
        assert!(matches!(err, ExtractError::OutOfRange { name: "padding", .. }));
        let err = ExtractOptions::from_toml_str("gap = -1").unwrap_err();
        assert!(matches!(err, ExtractError::OutOfRange { name: "gap", .. }));
        let err = ExtractOptions::from_toml_str("row_band = 0").unwrap_err();
        assert!(matches!(err, ExtractError::OutOfRange { name: "row_band", .. }));

        let edge = ExtractOptions {
            gap: 0,
            padding: MAX_MARGIN,
            ..ExtractOptions::default()
        };
        assert!(edge.validate().is_ok());
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#0d9488").unwrap(), [13, 148, 136]);
        assert_eq!(parse_hex_color("FFFFFF").unwrap(), [255, 255, 255]);
        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("#12345g").is_err());
        assert!(parse_hex_color("").is_err());
    }
}
