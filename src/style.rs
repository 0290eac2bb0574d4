//! Style descriptors and the pluggable color → style text conversion.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Converts a color into the text a rendering surface understands.
///
/// Any `Fn(&Color) -> String` closure is a `ColorFormat`.
pub trait ColorFormat {
    fn format(&self, color: &Color) -> String;
}

impl<F> ColorFormat for F
where
    F: Fn(&Color) -> String,
{
    fn format(&self, color: &Color) -> String {
        self(color)
    }
}

/// `rgba(r, g, b, a)` with alpha scaled to `0..=1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssRgba;

impl ColorFormat for CssRgba {
    fn format(&self, color: &Color) -> String {
        let [r, g, b, a] = color.to_rgba();
        let alpha = format!("{:.3}", f64::from(a) / 255.0);
        let alpha = alpha.trim_end_matches('0').trim_end_matches('.');
        format!("rgba({r}, {g}, {b}, {alpha})")
    }
}

/// `#rrggbbaa`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssHex;

impl ColorFormat for CssHex {
    fn format(&self, color: &Color) -> String {
        let [r, g, b, a] = color.to_rgba();
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

/// Named converter choice, for config files and the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormatKind {
    #[default]
    Rgba,
    Hex,
}

impl ColorFormatKind {
    pub fn formatter(self) -> Box<dyn ColorFormat> {
        match self {
            Self::Rgba => Box::new(CssRgba),
            Self::Hex => Box::new(CssHex),
        }
    }
}

/// Fixed glyph box every cell is drawn in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellMetrics {
    pub font_size_px: u32,
    pub line_height_px: u32,
    pub font_family: String,
}

/// Style for one cell: foreground and background share one color so the
/// literal glyphs vanish into the swatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleDescriptor {
    pub color: String,
    pub font_size_px: u32,
    pub line_height_px: u32,
    pub font_family: String,
}

impl StyleDescriptor {
    pub fn new(color: String, metrics: &CellMetrics) -> Self {
        Self {
            color,
            font_size_px: metrics.font_size_px,
            line_height_px: metrics.line_height_px,
            font_family: metrics.font_family.clone(),
        }
    }
}

impl fmt::Display for StyleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "color: {c}; background: {c}; font-size: {}px; line-height: {}px; font-family: {};",
            self.font_size_px,
            self.line_height_px,
            self.font_family,
            c = self.color,
        )
    }
}
