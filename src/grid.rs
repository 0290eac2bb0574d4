//! Row-major grid of colors.

use crate::color::Color;
use crate::error::MalformedBufferError;

/// Colors laid out in `height` rows of `width` cells, top row first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGrid {
    cells: Vec<Color>,
    width: usize,
}

impl ColorGrid {
    /// Partitions a flat color sequence into rows of `width` colors.
    ///
    /// A zero width is only accepted for an empty sequence, which yields an
    /// empty grid.
    pub fn reshape(colors: Vec<Color>, width: usize) -> Result<Self, MalformedBufferError> {
        let ragged = if width == 0 {
            !colors.is_empty()
        } else {
            colors.len() % width != 0
        };
        if ragged {
            return Err(MalformedBufferError::RaggedRow {
                colors: colors.len(),
                width,
            });
        }
        let grid = Self {
            cells: colors,
            width,
        };
        log::debug!("reshaped grid to {}x{}", grid.width(), grid.height());
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.cells.len() / self.width
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row `index`, or `None` past the bottom.
    pub fn row(&self, index: usize) -> Option<&[Color]> {
        let start = index.checked_mul(self.width)?;
        let end = start.checked_add(self.width)?;
        if self.width == 0 || end > self.cells.len() {
            return None;
        }
        Some(&self.cells[start..end])
    }

    /// Rows in order, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        // `chunks_exact` panics on zero; an empty grid has no rows anyway.
        self.cells.chunks_exact(self.width.max(1))
    }

    /// Flattens back to a channel buffer in row-major order.
    pub fn to_channel_buffer(&self) -> Vec<u8> {
        self.cells
            .iter()
            .flat_map(|color| color.channels().iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::extract_colors;
    use pretty_assertions::assert_eq;

    #[test]
    fn reshapes_two_by_two() {
        let buffer = [0, 0, 0, 0, 10, 10, 10, 10, 20, 20, 20, 20, 30, 30, 30, 30];
        let grid = ColorGrid::reshape(extract_colors(&buffer, 4).unwrap(), 2).unwrap();
        let rows: Vec<Vec<Color>> = grid.rows().map(<[Color]>::to_vec).collect();
        assert_eq!(
            rows,
            vec![
                vec![Color::rgba(0, 0, 0, 0), Color::rgba(10, 10, 10, 10)],
                vec![Color::rgba(20, 20, 20, 20), Color::rgba(30, 30, 30, 30)],
            ]
        );
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.to_channel_buffer(), buffer.to_vec());
    }

    #[test]
    fn rejects_ragged_final_row() {
        let colors = vec![Color::rgba(1, 1, 1, 1); 5];
        assert_eq!(
            ColorGrid::reshape(colors, 2).unwrap_err(),
            MalformedBufferError::RaggedRow { colors: 5, width: 2 }
        );
    }

    #[test]
    fn zero_width_is_only_valid_when_empty() {
        let empty = ColorGrid::reshape(Vec::new(), 0).unwrap();
        assert_eq!(empty.height(), 0);
        assert_eq!(empty.rows().count(), 0);
        assert!(ColorGrid::reshape(vec![Color::rgba(0, 0, 0, 0)], 0).is_err());
    }

    #[test]
    fn row_lookup_stops_at_bottom() {
        let grid = ColorGrid::reshape(vec![Color::rgba(5, 5, 5, 5); 6], 3).unwrap();
        assert_eq!(grid.row(1).map(<[Color]>::len), Some(3));
        assert!(grid.row(2).is_none());
    }
}
