//! Styled lines: a `%c` template plus one style per marker.
//!
//! A literal `%` inside cell text is written as `%%`, so cell text can never
//! introduce a marker of its own.

use crate::style::StyleDescriptor;

/// Directive marker: "apply the next style here".
pub const MARKER: &str = "%c";

const ESCAPE: char = '%';
const MARKER_TAG: char = 'c';

/// One encoded row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    template: String,
    styles: Vec<StyleDescriptor>,
}

impl StyledLine {
    pub(crate) fn with_capacity(cells: usize, cell_text_width: usize) -> Self {
        Self {
            template: String::with_capacity(
                cells.saturating_mul(MARKER.len().saturating_add(cell_text_width)),
            ),
            styles: Vec::with_capacity(cells),
        }
    }

    /// Appends a marker, its escaped cell text, and the paired style.
    pub(crate) fn push_cell(&mut self, text: impl IntoIterator<Item = char>, style: StyleDescriptor) {
        self.template.push_str(MARKER);
        for ch in text {
            if ch == ESCAPE {
                self.template.push(ESCAPE);
            }
            self.template.push(ch);
        }
        self.styles.push(style);
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn styles(&self) -> &[StyleDescriptor] {
        &self.styles
    }

    pub fn directive_count(&self) -> usize {
        directive_count(&self.template)
    }

    /// Each cell's unescaped text paired with its style, left to right.
    pub fn cells(&self) -> impl Iterator<Item = (String, &StyleDescriptor)> + '_ {
        cell_texts(&self.template).into_iter().zip(self.styles.iter())
    }

    pub fn into_parts(self) -> (String, Vec<StyleDescriptor>) {
        (self.template, self.styles)
    }
}

/// Number of `%c` markers, ignoring `%%` escapes.
pub fn directive_count(template: &str) -> usize {
    let mut count = 0;
    scan(template, |token| {
        if matches!(token, Token::Marker) {
            count += 1;
        }
    });
    count
}

/// Unescaped text following each marker. Text before the first marker is
/// not part of any cell and is dropped.
pub fn cell_texts(template: &str) -> Vec<String> {
    let mut cells: Vec<String> = Vec::new();
    scan(template, |token| match token {
        Token::Marker => cells.push(String::new()),
        Token::Literal(ch) => {
            if let Some(cell) = cells.last_mut() {
                cell.push(ch);
            }
        }
    });
    cells
}

enum Token {
    Marker,
    Literal(char),
}

fn scan(template: &str, mut visit: impl FnMut(Token)) {
    let mut chars = template.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch != ESCAPE {
            visit(Token::Literal(ch));
            continue;
        }
        match chars.peek() {
            Some(&MARKER_TAG) => {
                chars.next();
                visit(Token::Marker);
            }
            Some(&ESCAPE) => {
                chars.next();
                visit(Token::Literal(ESCAPE));
            }
            _ => visit(Token::Literal(ESCAPE)),
        }
    }
}
