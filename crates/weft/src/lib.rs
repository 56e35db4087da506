#![forbid(unsafe_code)]

//! Weft public facade crate.
//!
//! Weft renders colour-tagged templates into per-character cell runs for a
//! terminal renderer, and expands `$NAME{...}` field markers in format
//! strings. This crate re-exports the common types from the internal
//! crates and offers a lightweight prelude.
//!
//! # Example
//! ```
//! use weft::prelude::*;
//!
//! let mut fields = FieldMap::new();
//! fields.insert("WHO".to_string(), "steve".to_string());
//!
//! let line = render_template(
//!     "$[red]$WHO{min:8}",
//!     &fields,
//!     &ColorTable::new(),
//!     80,
//!     &RenderOptions::new(),
//! );
//! assert_eq!(line.len(), 8);
//! assert!(line.iter().all(|cell| cell.color == "red"));
//! ```

// --- Style re-exports ------------------------------------------------------

pub use weft_style::{ColorName, ColorTable, SGR_RESET};

// --- Markup re-exports -----------------------------------------------------

pub use weft_markup::{
    Cell, DEFAULT_COLOR, Line, RenderOptions, ResolvedSegment, Segment, expand_segments,
    render_line, render_line_str, resolve_colors, tokenize,
};

// --- Format re-exports -----------------------------------------------------

pub use weft_format::{FieldMap, FieldSpec, expand_fields};

// --- Composition -----------------------------------------------------------

/// Expand field markers, then render the result to coloured cells.
///
/// Field values land first (names missing from `fields` become empty
/// strings), and the expanded string then renders through the marker
/// pipeline with `options`. Colour markers in the original template survive
/// field expansion, so a format string can mix both kinds.
#[must_use]
pub fn render_template(
    template: &str,
    fields: &FieldMap,
    colors: &ColorTable,
    terminal_width: usize,
    options: &RenderOptions,
) -> Line {
    let expanded = expand_fields(template, fields, colors, terminal_width);
    render_line_str(&expanded, options)
}

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Cell, ColorName, ColorTable, FieldMap, FieldSpec, Line, RenderOptions, expand_fields,
        render_line, render_line_str, render_template,
    };

    pub use crate::{format, markup, style};
}

pub use weft_format as format;
pub use weft_markup as markup;
pub use weft_style as style;
