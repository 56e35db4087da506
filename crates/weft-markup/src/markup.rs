#![forbid(unsafe_code)]

//! Colour marker tokenization and colour propagation.
//!
//! Templates colour text with `$[NAME]` markers: `"$[red]error"` draws
//! "error" in red until the next marker takes over. `NAME` is a non-empty
//! run of ASCII letters, `#` and `|`; anything else in the brackets (digits
//! included) keeps the text literal. The escape form `$[#NAME]` displays
//! `$[NAME]` itself without changing the active colour.
//!
//! Matching is backward-greedy: the *rightmost* well-formed marker splits
//! the template first. That keeps an unmatched `$[` prefix literal without
//! any lookahead, because whatever is left of the final marker gets
//! re-scanned on the next pass.
//!
//! # Example
//! ```
//! use weft_markup::markup::{resolve_colors, tokenize};
//!
//! let segments = resolve_colors(tokenize(b"$[red]a$[#blue]b"));
//! assert_eq!(segments.len(), 2);
//! assert_eq!(segments[1].color.as_str(), "red");
//! assert_eq!(segments[1].text, b"$[blue]b");
//! ```

use memchr::memrchr_iter;
use weft_style::ColorName;

/// Colour assigned to text before the first marker.
pub const DEFAULT_COLOR: &str = "white";

/// A tokenized run of template text, tagged but not yet coloured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Marker body as written: case preserved, `#` prefix intact.
    pub tag: String,
    /// Text between this marker and the next.
    pub text: Vec<u8>,
}

/// A segment with its display colour settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSegment {
    /// Colour for every cell expanded from this segment.
    pub color: ColorName,
    /// Text to expand, escape markers already rewritten to literals.
    pub text: Vec<u8>,
}

/// Split a template into tagged segments.
///
/// Segments come back in reading order. Text before the first marker
/// becomes a leading segment tagged [`DEFAULT_COLOR`]; an empty template
/// yields no segments; a marker with nothing after it yields a segment with
/// empty text.
#[must_use]
pub fn tokenize(input: &[u8]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = input;

    while let Some((prefix, tag, suffix)) = split_last_marker(rest) {
        segments.push(Segment {
            tag,
            text: suffix.to_vec(),
        });
        rest = prefix;
    }

    if !rest.is_empty() {
        segments.push(Segment {
            tag: DEFAULT_COLOR.to_string(),
            text: rest.to_vec(),
        });
    }

    segments.reverse();
    segments
}

/// Find the rightmost well-formed `$[NAME]` in `input`.
///
/// Returns the bytes before the marker, the marker body, and the bytes
/// after it.
fn split_last_marker(input: &[u8]) -> Option<(&[u8], String, &[u8])> {
    for dollar in memrchr_iter(b'$', input) {
        let Some(body) = marker_body(&input[dollar..]) else {
            continue;
        };
        // "$[" + body + "]"
        let after = dollar + body.len() + 3;
        return Some((
            &input[..dollar],
            String::from_utf8_lossy(body).into_owned(),
            &input[after..],
        ));
    }
    None
}

/// The marker body when `input` begins with a well-formed `$[NAME]`.
fn marker_body(input: &[u8]) -> Option<&[u8]> {
    let rest = input.strip_prefix(b"$[")?;
    let len = rest.iter().take_while(|&&b| is_name_byte(b)).count();
    if len > 0 && rest.get(len) == Some(&b']') {
        Some(&rest[..len])
    } else {
        None
    }
}

/// Marker names are ASCII letters plus `#` and `|`; digits never match.
#[inline]
const fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'#' || b == b'|'
}

/// Settle segment colours with a single left-to-right walk.
///
/// A plain tag colours its own text and becomes the active colour for the
/// segments that follow. An escape tag (`#` prefix) rewrites its text to
/// the literal marker, inherits the colour already active, and leaves it
/// untouched.
#[must_use]
pub fn resolve_colors(segments: Vec<Segment>) -> Vec<ResolvedSegment> {
    let mut resolved = Vec::with_capacity(segments.len());
    let mut previous = ColorName::white();

    for segment in segments {
        if let Some(name) = segment.tag.strip_prefix('#') {
            let mut text = Vec::with_capacity(name.len() + 3 + segment.text.len());
            text.extend_from_slice(b"$[");
            text.extend_from_slice(name.as_bytes());
            text.push(b']');
            text.extend_from_slice(&segment.text);
            resolved.push(ResolvedSegment {
                color: previous.clone(),
                text,
            });
        } else {
            let color = ColorName::new(&segment.tag);
            previous = color.clone();
            resolved.push(ResolvedSegment {
                color,
                text: segment.text,
            });
        }
    }

    resolved
}
