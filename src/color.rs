//! Channel tuples and the flat-buffer → color extraction step.

use serde::{Deserialize, Serialize};

use crate::error::MalformedBufferError;

/// Largest channel tuple a [`Color`] can hold (RGBA).
pub const MAX_CHANNELS: usize = 4;

/// Channel count of decoded images and the default for every transform.
pub const DEFAULT_CHANNELS: usize = 4;

/// One color cell: `len` raw channel values in buffer order.
///
/// Interpretation follows the usual image layouts: 1 channel is luma,
/// 2 is luma + alpha, 3 is RGB and 4 is RGBA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    channels: [u8; MAX_CHANNELS],
    len: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            channels: [r, g, b, a],
            len: 4,
        }
    }

    /// Builds a color from 1..=4 raw channel values.
    pub fn from_channels(values: &[u8]) -> Result<Self, MalformedBufferError> {
        if values.is_empty() || values.len() > MAX_CHANNELS {
            return Err(MalformedBufferError::UnsupportedChannelCount {
                channels: values.len(),
            });
        }
        let mut channels = [0u8; MAX_CHANNELS];
        channels[..values.len()].copy_from_slice(values);
        Ok(Self {
            channels,
            len: values.len() as u8,
        })
    }

    /// Raw channel values, exactly as they appeared in the buffer.
    pub fn channels(&self) -> &[u8] {
        &self.channels[..self.len as usize]
    }

    /// The color expanded to RGBA.
    pub fn to_rgba(&self) -> [u8; 4] {
        let c = self.channels;
        match self.len {
            1 => [c[0], c[0], c[0], u8::MAX],
            2 => [c[0], c[0], c[0], c[1]],
            3 => [c[0], c[1], c[2], u8::MAX],
            _ => c,
        }
    }
}

/// Caller-owned flat pixel data plus its declared geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelBuffer {
    pub data: Vec<u8>,
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

impl ChannelBuffer {
    /// Checks `data.len() == width * height * channels`.
    pub fn validate(&self) -> Result<(), MalformedBufferError> {
        check_dimensions(self.data.len(), self.width, self.height, self.channels)
    }
}

/// Checks a buffer length against `width * height * channels`.
pub fn check_dimensions(
    len: usize,
    width: usize,
    height: usize,
    channels: usize,
) -> Result<(), MalformedBufferError> {
    let expected = width
        .checked_mul(height)
        .and_then(|cells| cells.checked_mul(channels))
        .unwrap_or(usize::MAX);
    if len != expected {
        return Err(MalformedBufferError::DimensionMismatch {
            expected,
            actual: len,
            width,
            height,
            channels,
        });
    }
    Ok(())
}

/// Groups `buffer` into colors of `channels` consecutive values each.
///
/// The buffer is only borrowed; the caller's data is never touched.
pub fn extract_colors(buffer: &[u8], channels: usize) -> Result<Vec<Color>, MalformedBufferError> {
    if channels == 0 || channels > MAX_CHANNELS {
        return Err(MalformedBufferError::UnsupportedChannelCount { channels });
    }
    if buffer.len() % channels != 0 {
        return Err(MalformedBufferError::ChannelMismatch {
            len: buffer.len(),
            channels,
        });
    }
    let colors = buffer
        .chunks_exact(channels)
        .map(Color::from_channels)
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!(
        "extracted {} colors from {} values ({} channels)",
        colors.len(),
        buffer.len(),
        channels
    );
    Ok(colors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn extracts_rgba_tuples_in_order() {
        let buffer = [1, 2, 3, 4, 5, 6, 7, 8];
        let colors = extract_colors(&buffer, 4).unwrap();
        assert_eq!(colors, vec![Color::rgba(1, 2, 3, 4), Color::rgba(5, 6, 7, 8)]);
        assert_eq!(buffer, [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn rejects_partial_tuple() {
        let err = extract_colors(&[1, 2, 3, 4, 5], 4).unwrap_err();
        assert_eq!(err, MalformedBufferError::ChannelMismatch { len: 5, channels: 4 });
    }

    #[test_case(0 ; "zero channels")]
    #[test_case(5 ; "too many channels")]
    fn rejects_unsupported_channel_count(channels: usize) {
        let err = extract_colors(&[0; 20], channels).unwrap_err();
        assert_eq!(err, MalformedBufferError::UnsupportedChannelCount { channels });
    }

    #[test]
    fn empty_buffer_yields_no_colors() {
        assert!(extract_colors(&[], 4).unwrap().is_empty());
    }

    #[test_case(&[9], [9, 9, 9, 255] ; "luma")]
    #[test_case(&[9, 7], [9, 9, 9, 7] ; "luma alpha")]
    #[test_case(&[1, 2, 3], [1, 2, 3, 255] ; "rgb")]
    #[test_case(&[1, 2, 3, 4], [1, 2, 3, 4] ; "rgba")]
    fn expands_to_rgba(values: &[u8], expected: [u8; 4]) {
        let color = Color::from_channels(values).unwrap();
        assert_eq!(color.to_rgba(), expected);
        assert_eq!(color.channels(), values);
    }

    #[test]
    fn channel_buffer_validates_geometry() {
        let buffer = ChannelBuffer {
            data: vec![0; 15],
            width: 2,
            height: 2,
            channels: 4,
        };
        assert_eq!(
            buffer.validate().unwrap_err(),
            MalformedBufferError::DimensionMismatch {
                expected: 16,
                actual: 15,
                width: 2,
                height: 2,
                channels: 4,
            }
        );
    }
}
