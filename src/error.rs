//! Error types for the swatch pipeline.
//!
//! [`MalformedBufferError`] is the only error the core transform raises: the
//! caller handed over a buffer whose length disagrees with the declared
//! channel count, width or height. [`Error`] wraps it together with the
//! failures of the outer surfaces (image decoding, JSON, config, sealing).

/// Buffer length is inconsistent with the declared dimensions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedBufferError {
    #[error("buffer length {len} is not a multiple of the channel count {channels}")]
    ChannelMismatch { len: usize, channels: usize },

    #[error("unsupported channel count {channels} (expected 1..={max})", max = crate::color::MAX_CHANNELS)]
    UnsupportedChannelCount { channels: usize },

    #[error("{colors} colors cannot be split into rows of width {width}")]
    RaggedRow { colors: usize, width: usize },

    #[error(
        "buffer length {actual} does not match {width}x{height}x{channels} (expected {expected})"
    )]
    DimensionMismatch {
        expected: usize,
        actual: usize,
        width: usize,
        height: usize,
        channels: usize,
    },
}

/// Crate-level error for everything outside the pure transform.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed buffer: {0}")]
    MalformedBuffer(#[from] MalformedBufferError),

    #[error("image error: {0}")]
    Image(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("seal error: {0}")]
    Seal(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
