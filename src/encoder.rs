//! Drives the row encoder over a whole grid.

use crate::grid::ColorGrid;
use crate::line::StyledLine;
use crate::message::NormalizedMessage;
use crate::reveal::capacity;
use crate::row::RowEncoder;

pub struct GridEncoder<'a> {
    grid: &'a ColorGrid,
    rows: RowEncoder<'a>,
    message: Option<&'a NormalizedMessage>,
}

impl<'a> GridEncoder<'a> {
    pub fn new(
        grid: &'a ColorGrid,
        rows: RowEncoder<'a>,
        message: Option<&'a NormalizedMessage>,
    ) -> Self {
        if let Some(message) = message {
            let room = capacity(grid, rows.cell_text_width());
            if message.len() > room {
                log::warn!(
                    "message has {} chars but the {}x{} grid only carries {}; the rest is dropped",
                    message.len(),
                    grid.width(),
                    grid.height(),
                    room
                );
            }
        }
        Self {
            grid,
            rows,
            message,
        }
    }

    /// One line per grid row, top to bottom. Each call starts over.
    pub fn lines(&self) -> impl Iterator<Item = StyledLine> + '_ {
        self.grid
            .rows()
            .enumerate()
            .map(move |(index, row)| self.rows.encode_row(row, self.message.map(|m| (index, m))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::message::normalize;
    use crate::style::{CellMetrics, CssRgba};
    use pretty_assertions::assert_eq;

    fn metrics() -> CellMetrics {
        CellMetrics {
            font_size_px: 8,
            line_height_px: 8,
            font_family: "monospace".to_string(),
        }
    }

    fn grid(width: usize, height: usize) -> ColorGrid {
        let colors = (0..width * height)
            .map(|i| Color::rgba(i as u8, 0, 0, 255))
            .collect();
        ColorGrid::reshape(colors, width).unwrap()
    }

    #[test]
    fn one_line_per_row() {
        let grid = grid(3, 4);
        let encoder = GridEncoder::new(&grid, RowEncoder::new(2, '#', metrics(), &CssRgba), None);
        let lines: Vec<StyledLine> = encoder.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|line| line.directive_count() == 3));
        assert_eq!(lines[1].styles()[0].color, "rgba(3, 0, 0, 1)");
    }

    #[test]
    fn lines_restart_from_the_top() {
        let grid = grid(2, 2);
        let message = normalize("abcdefgh");
        let encoder = GridEncoder::new(
            &grid,
            RowEncoder::new(2, '#', metrics(), &CssRgba),
            Some(&message),
        );
        let first: Vec<String> = encoder.lines().map(|l| l.template().to_string()).collect();
        let second: Vec<String> = encoder.lines().map(|l| l.template().to_string()).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec!["%cab%ccd", "%cef%cgh"]);
    }

    #[test]
    fn empty_grid_yields_nothing() {
        let grid = grid(0, 0);
        let encoder = GridEncoder::new(&grid, RowEncoder::new(2, '#', metrics(), &CssRgba), None);
        assert_eq!(encoder.lines().count(), 0);
    }
}
