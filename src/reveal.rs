//! Reads the hidden text back out of encoded lines.

use crate::grid::ColorGrid;
use crate::line::{cell_texts, StyledLine};

/// Message chars a grid can carry at `cell_text_width` chars per cell.
pub fn capacity(grid: &ColorGrid, cell_text_width: usize) -> usize {
    grid.width()
        .saturating_mul(grid.height())
        .saturating_mul(cell_text_width)
}

/// Concatenates every cell's text in row-major order and strips the
/// trailing pad.
pub fn recover_message<'t>(templates: impl IntoIterator<Item = &'t str>) -> String {
    let mut text: String = templates
        .into_iter()
        .flat_map(cell_texts)
        .collect();
    let kept = text.trim_end_matches(' ').len();
    text.truncate(kept);
    text
}

pub fn recover_from_lines(lines: &[StyledLine]) -> String {
    recover_message(lines.iter().map(StyledLine::template))
}
