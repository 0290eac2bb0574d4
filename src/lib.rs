//! Turns a flat pixel buffer into styled console lines.
//!
//! Each pixel becomes one cell of a `%c` template whose style paints the
//! cell's glyphs in the same color as its background. Swatch mode fills the
//! cells with a placeholder; message mode fills them with the characters of
//! a hidden text, visible only to someone reading the template itself.
//!
//! ```text
//! buffer ─ extract_colors ─ ColorGrid::reshape ─ GridEncoder ─ StyledLine*
//!                                                    │
//!                                          normalize(message)
//! ```

pub mod color;
pub mod config;
pub mod encoder;
pub mod error;
pub mod grid;
pub mod image_source;
pub mod line;
pub mod message;
pub mod reveal;
pub mod row;
pub mod seal;
pub mod sink;
pub mod style;

pub use color::{check_dimensions, extract_colors, ChannelBuffer, Color};
pub use config::SwatchConfig;
pub use encoder::GridEncoder;
pub use error::{Error, MalformedBufferError, Result};
pub use grid::ColorGrid;
pub use line::StyledLine;
pub use message::{normalize, NormalizedMessage};
pub use row::RowEncoder;
pub use style::{ColorFormat, CssHex, CssRgba, StyleDescriptor};

/// A grid together with its encoded lines.
#[derive(Debug, Clone)]
pub struct Swatch {
    pub grid: ColorGrid,
    pub lines: Vec<StyledLine>,
}

/// Runs the whole pipeline on a caller-owned buffer.
///
/// The buffer length must equal `width * height * config.channel_count`.
/// With `message`, its normalized text is laid over the cells.
pub fn transform(
    buffer: &[u8],
    width: usize,
    height: usize,
    config: &SwatchConfig,
    message: Option<&str>,
    formatter: &dyn ColorFormat,
) -> Result<Swatch> {
    config.validate()?;
    check_dimensions(buffer.len(), width, height, config.channel_count)?;
    let colors = extract_colors(buffer, config.channel_count)?;
    let grid = ColorGrid::reshape(colors, width)?;
    let message = message.map(normalize);

    let rows = RowEncoder::new(
        config.cell_text_width,
        config.placeholder,
        config.metrics(),
        formatter,
    );
    let lines = GridEncoder::new(&grid, rows, message.as_ref())
        .lines()
        .collect();
    Ok(Swatch { grid, lines })
}

/// [`transform`] for a [`ChannelBuffer`], using its own geometry and the
/// configured color format.
pub fn transform_buffer(
    buffer: &ChannelBuffer,
    config: &SwatchConfig,
    message: Option<&str>,
) -> Result<Swatch> {
    let config = SwatchConfig {
        channel_count: buffer.channels,
        ..config.clone()
    };
    let formatter = config.color_format.formatter();
    transform(
        &buffer.data,
        buffer.width,
        buffer.height,
        &config,
        message,
        formatter.as_ref(),
    )
}
