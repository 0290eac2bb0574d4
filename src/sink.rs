//! Output adapters for encoded lines.
//!
//! None of these touch the encoding itself; they only change how a
//! (template, styles) pair is handed to whatever prints it.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::ColorGrid;
use crate::line::StyledLine;

/// A line as a console expects it: the template and its CSS strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedLine {
    pub template: String,
    pub styles: Vec<String>,
}

impl From<&StyledLine> for RenderedLine {
    fn from(line: &StyledLine) -> Self {
        Self {
            template: line.template().to_string(),
            styles: line.styles().iter().map(ToString::to_string).collect(),
        }
    }
}

/// Pretty JSON array of `{ "template", "styles" }` objects.
pub fn to_json(lines: &[StyledLine]) -> Result<String> {
    let rendered: Vec<RenderedLine> = lines.iter().map(RenderedLine::from).collect();
    Ok(serde_json::to_string_pretty(&rendered)?)
}

pub fn from_json(text: &str) -> Result<Vec<RenderedLine>> {
    Ok(serde_json::from_str(text)?)
}

/// One `console.log(template, ...styles);` statement per line.
pub fn to_console_script(lines: &[StyledLine]) -> Result<String> {
    let mut out = String::new();
    for line in lines {
        let rendered = RenderedLine::from(line);
        out.push_str("console.log(");
        out.push_str(&serde_json::to_string(&rendered.template)?);
        for style in &rendered.styles {
            out.push_str(", ");
            out.push_str(&serde_json::to_string(style)?);
        }
        out.push_str(");\n");
    }
    Ok(out)
}

/// Replaces control characters with U+FFFD so text cannot smuggle escape
/// sequences into a terminal.
pub fn terminal_safe(text: &str) -> String {
    text.chars()
        .map(|ch| if ch.is_control() { char::REPLACEMENT_CHARACTER } else { ch })
        .collect()
}

/// Truecolor terminal preview. Each cell's text is drawn in its own color on
/// the same background, as a console would show it. Cell text goes through
/// [`terminal_safe`].
pub fn to_ansi(grid: &ColorGrid, lines: &[StyledLine]) -> String {
    let mut out = String::new();
    for (row, line) in grid.rows().zip(lines) {
        for (color, (text, _)) in row.iter().zip(line.cells()) {
            let [r, g, b, _] = color.to_rgba();
            let text = terminal_safe(&text);
            // Writing into a String cannot fail.
            let _ = write!(out, "\x1b[38;2;{r};{g};{b}m\x1b[48;2;{r};{g};{b}m{text}");
        }
        out.push_str("\x1b[0m\n");
    }
    out
}
