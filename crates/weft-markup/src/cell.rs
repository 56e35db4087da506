#![forbid(unsafe_code)]

//! Cell and line types produced by the render pipeline.
//!
//! A [`Cell`] holds exactly one display character (one UTF-8 sequence, 1-6
//! bytes) plus the colour name it should be drawn in. A [`Line`] is the
//! ordered run of cells for one terminal row, with the scroll trim applied
//! before a renderer walks it.
//!
//! Cell text is raw bytes rather than `str`: a clamped read can hand a cell
//! a malformed sequence, and the renderer still needs to show something for
//! it.

use smallvec::SmallVec;
use unicode_width::UnicodeWidthStr;
use weft_style::ColorName;

/// One display character with its settled colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Colour the renderer should draw this cell in.
    pub color: ColorName,
    /// The character's bytes: one UTF-8 sequence, 1-6 bytes, never empty.
    pub text: SmallVec<[u8; 6]>,
}

impl Cell {
    /// Create a cell from one character's bytes.
    #[must_use]
    pub fn new(color: ColorName, bytes: &[u8]) -> Self {
        debug_assert!(!bytes.is_empty(), "cell text is never empty");
        Self {
            color,
            text: SmallVec::from_slice(bytes),
        }
    }

    /// A single-space cell, as emitted by tab expansion.
    #[must_use]
    pub fn space(color: ColorName) -> Self {
        Self::new(color, b" ")
    }

    /// The `?` cell emitted for bytes that do not form a character.
    #[must_use]
    pub fn replacement(color: ColorName) -> Self {
        Self::new(color, b"?")
    }

    /// The cell's bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.text
    }

    /// The cell's text, when its bytes form valid UTF-8.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.text).ok()
    }

    /// Display columns this cell occupies. Malformed bytes count as one
    /// column, matching how the renderer shows them.
    #[must_use]
    pub fn width(&self) -> usize {
        self.as_str().map_or(1, UnicodeWidthStr::width)
    }
}

/// An ordered run of cells for one terminal row.
///
/// Built fresh on every render call and owned by the caller; nothing is
/// retained between calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    cells: Vec<Cell>,
}

impl Line {
    /// An empty line.
    #[must_use]
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// An empty line with room for `capacity` cells.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
        }
    }

    /// Append a cell.
    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the line has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cells in display order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate the cells in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Drop the first `min(offset, len)` cells: the trim for a horizontally
    /// scrolled row. Offsets past the end leave an empty line, never an
    /// error.
    pub fn scroll_left(&mut self, offset: usize) {
        let n = offset.min(self.cells.len());
        self.cells.drain(..n);
    }

    /// Concatenated cell text.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let total = self.cells.iter().map(|cell| cell.text.len()).sum();
        let mut bytes = Vec::with_capacity(total);
        for cell in &self.cells {
            bytes.extend_from_slice(&cell.text);
        }
        bytes
    }

    /// Total display columns across all cells.
    #[must_use]
    pub fn display_width(&self) -> usize {
        self.cells.iter().map(Cell::width).sum()
    }
}

impl FromIterator<Cell> for Line {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Line {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a Line {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn scroll_length_arithmetic(len in 0usize..200, offset in 0usize..400) {
            let mut line: Line = std::iter::repeat_with(|| Cell::space(ColorName::white()))
                .take(len)
                .collect();
            line.scroll_left(offset);
            prop_assert_eq!(line.len(), len - offset.min(len));
        }

        #[test]
        fn to_bytes_length_sums_cell_lengths(text in "[a-z 的\t]{0,50}") {
            let line: Line = text
                .chars()
                .map(|c| Cell::new(ColorName::white(), c.to_string().as_bytes()))
                .collect();
            prop_assert_eq!(line.to_bytes().len(), text.len());
        }
    }
}
