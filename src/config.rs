//! Encoding configuration.
//!
//! `Default` gives the production look: 8px square cells, two characters per
//! cell, CSS `rgba()` colors. Overrides come from a JSON file whose missing
//! fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::{DEFAULT_CHANNELS, MAX_CHANNELS};
use crate::error::{Error, MalformedBufferError, Result};
use crate::style::{CellMetrics, ColorFormatKind};

/// Upper bound on characters per cell.
pub const MAX_CELL_TEXT_WIDTH: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwatchConfig {
    /// Values per color in the input buffer.
    pub channel_count: usize,
    /// Characters rendered per cell.
    pub cell_text_width: usize,
    pub font_size_px: u32,
    pub line_height_px: u32,
    pub font_family: String,
    /// Filler for cells that carry no message.
    pub placeholder: char,
    pub color_format: ColorFormatKind,
    /// Images wider than this are downscaled before encoding.
    pub max_width: Option<u32>,
}

impl Default for SwatchConfig {
    fn default() -> Self {
        Self {
            channel_count: DEFAULT_CHANNELS,
            cell_text_width: 2,
            font_size_px: 8,
            line_height_px: 8,
            font_family: "monospace".to_string(),
            placeholder: '#',
            color_format: ColorFormatKind::Rgba,
            max_width: Some(64),
        }
    }
}

impl SwatchConfig {
    /// Loads and validates a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// An unsupported channel count is a malformed-buffer condition, not a
    /// config one, so it keeps that error kind.
    pub fn validate(&self) -> Result<()> {
        if self.cell_text_width == 0 || self.cell_text_width > MAX_CELL_TEXT_WIDTH {
            return Err(Error::Config(format!(
                "cell_text_width must be 1..={MAX_CELL_TEXT_WIDTH}, got {}",
                self.cell_text_width
            )));
        }
        if self.channel_count == 0 || self.channel_count > MAX_CHANNELS {
            return Err(MalformedBufferError::UnsupportedChannelCount {
                channels: self.channel_count,
            }
            .into());
        }
        if self.font_family.trim().is_empty() {
            return Err(Error::Config("font_family must not be empty".to_string()));
        }
        if self.max_width == Some(0) {
            return Err(Error::Config("max_width must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn metrics(&self) -> CellMetrics {
        CellMetrics {
            font_size_px: self.font_size_px,
            line_height_px: self.line_height_px,
            font_family: self.font_family.clone(),
        }
    }
}
