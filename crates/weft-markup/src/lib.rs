#![forbid(unsafe_code)]

//! Colour-tagged template rendering for terminal rows.
//!
//! A template like `"$[red]error:$[white] disk full"` renders to a [`Line`]
//! of single-character [`Cell`]s, each carrying the colour name the
//! renderer should draw it in. The pipeline runs four fixed stages:
//!
//! 1. [`tokenize`] - split on `$[NAME]` markers, rightmost marker first;
//! 2. [`resolve_colors`] - settle each segment's colour, rewriting
//!    `$[#NAME]` escapes into literal text;
//! 3. [`expand_segments`] - one cell per display character, tabs widened
//!    to spaces, broken bytes degraded to `?`;
//! 4. [`Line::scroll_left`] - drop the cells left of the scroll offset.
//!
//! Nothing is cached between calls and no stage can fail: malformed input
//! renders as literal text rather than an error.
//!
//! # Example
//! ```
//! use weft_markup::{RenderOptions, render_line_str};
//!
//! let line = render_line_str("$[red]hot$[#blue] stuff", &RenderOptions::new());
//! assert_eq!(line.to_bytes(), b"hot$[blue] stuff");
//! assert!(line.iter().all(|cell| cell.color.as_str() == "red"));
//! ```

pub mod cell;
pub mod expand;
pub mod markup;

pub use cell::{Cell, Line};
pub use expand::{expand_segments, utf8_sequence_len};
pub use markup::{DEFAULT_COLOR, ResolvedSegment, Segment, resolve_colors, tokenize};

/// Options for template rendering.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Space cells emitted per tab byte.
    pub tab_width: usize,
    /// Leading cells dropped after expansion.
    pub scroll: usize,
}

impl RenderOptions {
    /// Default options: tab width 8, no scroll.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tab_width: 8,
            scroll: 0,
        }
    }

    /// Set the number of space cells a tab expands to.
    #[must_use]
    pub fn tab_width(mut self, width: usize) -> Self {
        self.tab_width = width;
        self
    }

    /// Set how many leading cells to drop.
    #[must_use]
    pub fn scroll(mut self, offset: usize) -> Self {
        self.scroll = offset;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a template to a line of coloured cells.
#[must_use]
pub fn render_line(template: &[u8], options: &RenderOptions) -> Line {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "render_line",
        template_len = template.len(),
        tab_width = options.tab_width,
        scroll = options.scroll
    )
    .entered();

    let segments = resolve_colors(tokenize(template));
    let mut line = expand_segments(&segments, options.tab_width);
    line.scroll_left(options.scroll);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        segments = segments.len(),
        cells = line.len(),
        "template rendered"
    );

    line
}

/// [`render_line`] for string templates.
#[must_use]
pub fn render_line_str(template: &str, options: &RenderOptions) -> Line {
    render_line(template.as_bytes(), options)
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Options
    // =========================================================================

    #[test]
    fn default_options() {
        let options = RenderOptions::default();
        assert_eq!(options.tab_width, 8);
        assert_eq!(options.scroll, 0);
    }

    #[test]
    fn builder_chain() {
        let options = RenderOptions::new().tab_width(4).scroll(10);
        assert_eq!(options.tab_width, 4);
        assert_eq!(options.scroll, 10);
    }

    // =========================================================================
    // Full pipeline
    // =========================================================================

    #[test]
    fn renders_unmarked_text_white() {
        let line = render_line_str("hi", &RenderOptions::new());
        assert_eq!(line.len(), 2);
        assert!(line.iter().all(|cell| cell.color == "white"));
    }

    #[test]
    fn applies_scroll_after_expansion() {
        let line = render_line_str("$[red]abcdef", &RenderOptions::new().scroll(4));
        assert_eq!(line.to_bytes(), b"ef");
        assert!(line.iter().all(|cell| cell.color == "red"));
    }

    #[test]
    fn scroll_counts_cells_not_bytes() {
        // Two CJK characters are six bytes but only two cells.
        let line = render_line_str("的展会", &RenderOptions::new().scroll(2));
        assert_eq!(line.to_bytes(), "会".as_bytes());
    }

    #[test]
    fn scroll_past_end_yields_empty_line() {
        let line = render_line_str("ab", &RenderOptions::new().scroll(99));
        assert!(line.is_empty());
    }

    #[test]
    fn tab_width_flows_through() {
        let line = render_line_str("a\tb", &RenderOptions::new().tab_width(2));
        assert_eq!(line.to_bytes(), b"a  b");
    }

    #[test]
    fn empty_template_renders_empty() {
        assert!(render_line(b"", &RenderOptions::new()).is_empty());
    }
}
