#![forbid(unsafe_code)]

//! Field template expansion for status lines and index rows.
//!
//! A format string names its variable parts with `$NAME{...}` markers; each
//! marker is replaced by the named field's value, optionally padded or
//! truncated to a width (absolute, or a percentage of the terminal) and
//! wrapped in a colour escape. Everything else in the string, colour
//! markers included, passes through byte for byte.
//!
//! Like the cell pipeline, expansion cannot fail: unknown fields become
//! empty strings and unparseable spec options are skipped.
//!
//! # Example
//! ```
//! use weft_format::{FieldMap, expand_fields};
//! use weft_style::ColorTable;
//!
//! let mut fields = FieldMap::new();
//! fields.insert("SUBJECT".to_string(), "steve".to_string());
//!
//! let out = expand_fields(" $SUBJECT{min:10 max:20}", &fields, &ColorTable::new(), 80);
//! assert_eq!(out, " steve     ");
//! ```

pub mod expand;
pub mod field;

pub use expand::{FieldMap, expand_fields};
pub use field::FieldSpec;
