//! Encodes one row of colors into a [`StyledLine`].

use std::iter;

use crate::color::Color;
use crate::config::MAX_CELL_TEXT_WIDTH;
use crate::line::StyledLine;
use crate::message::NormalizedMessage;
use crate::style::{CellMetrics, ColorFormat, StyleDescriptor};

const PAD: char = ' ';

/// Per-cell settings shared by every row of one transform.
pub struct RowEncoder<'a> {
    cell_text_width: usize,
    placeholder: char,
    metrics: CellMetrics,
    formatter: &'a dyn ColorFormat,
}

impl<'a> RowEncoder<'a> {
    /// `cell_text_width` is clamped to `1..=MAX_CELL_TEXT_WIDTH`.
    pub fn new(
        cell_text_width: usize,
        placeholder: char,
        metrics: CellMetrics,
        formatter: &'a dyn ColorFormat,
    ) -> Self {
        Self {
            cell_text_width: cell_text_width.clamp(1, MAX_CELL_TEXT_WIDTH),
            placeholder,
            metrics,
            formatter,
        }
    }

    pub fn cell_text_width(&self) -> usize {
        self.cell_text_width
    }

    /// Encodes `row`. With an overlay, cell `c` of row `r` carries the
    /// message chars starting at `(r * width + c) * cell_text_width`,
    /// space-padded to the full cell width.
    pub fn encode_row(
        &self,
        row: &[Color],
        overlay: Option<(usize, &NormalizedMessage)>,
    ) -> StyledLine {
        let width = row.len();
        let cw = self.cell_text_width;
        let mut line = StyledLine::with_capacity(width, cw);
        for (column, color) in row.iter().enumerate() {
            let style = StyleDescriptor::new(self.formatter.format(color), &self.metrics);
            match overlay {
                Some((row_index, message)) => {
                    let offset = row_index
                        .saturating_mul(width)
                        .saturating_mul(cw)
                        .saturating_add(column.saturating_mul(cw));
                    let text = message.window(offset, cw);
                    let pad = iter::repeat(PAD).take(cw - text.len());
                    line.push_cell(text.iter().copied().chain(pad), style);
                }
                None => line.push_cell(iter::repeat(self.placeholder).take(cw), style),
            }
        }
        line
    }
}
