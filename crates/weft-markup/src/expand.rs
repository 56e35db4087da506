#![forbid(unsafe_code)]

//! Expansion of resolved segments into display cells.
//!
//! Walks each segment's text one UTF-8 sequence at a time, emitting one
//! [`Cell`] per display character. Tabs become runs of space cells; a byte
//! that cannot start a sequence, or that claims more bytes than the segment
//! has left, becomes a `?` cell so damaged input still renders.

use crate::cell::{Cell, Line};
use crate::markup::ResolvedSegment;

/// Byte length claimed by a UTF-8 lead byte, 0 when the byte cannot start a
/// sequence. The legacy five- and six-byte lead forms are accepted.
#[inline]
#[must_use]
pub const fn utf8_sequence_len(byte: u8) -> usize {
    match byte {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        0xF8..=0xFB => 5,
        0xFC..=0xFD => 6,
        // Continuation bytes and 0xFE/0xFF never start a sequence.
        _ => 0,
    }
}

/// Expand resolved segments into a line of cells.
///
/// Each `\t` becomes `tab_width` single-space cells (a width of 0 drops
/// tabs outright). A multi-byte read never crosses the segment boundary: a
/// lead byte claiming more than the segment has left takes the `?` path and
/// the walk advances one byte, same as for a byte that is no lead at all.
/// Every cell carries its segment's colour.
#[must_use]
pub fn expand_segments(segments: &[ResolvedSegment], tab_width: usize) -> Line {
    // One cell per byte is exact for ASCII and an over-estimate for
    // multi-byte text; only tabs can push past it.
    let total: usize = segments.iter().map(|segment| segment.text.len()).sum();
    let mut line = Line::with_capacity(total);

    for segment in segments {
        let bytes = segment.text.as_slice();
        let mut i = 0;
        while i < bytes.len() {
            let byte = bytes[i];
            if byte == b'\t' {
                for _ in 0..tab_width {
                    line.push(Cell::space(segment.color.clone()));
                }
                i += 1;
                continue;
            }

            let len = utf8_sequence_len(byte);
            if len == 0 || i + len > bytes.len() {
                line.push(Cell::replacement(segment.color.clone()));
                i += 1;
            } else {
                line.push(Cell::new(segment.color.clone(), &bytes[i..i + len]));
                i += len;
            }
        }
    }

    line
}
