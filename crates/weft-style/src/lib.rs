#![forbid(unsafe_code)]

//! Colour vocabulary shared by the markup and field pipelines.
//!
//! Cells and field specs carry colour *names*, not escape codes. Resolution
//! into terminal escapes happens at the edge, through a caller-supplied
//! [`ColorTable`]. A name may be a `|`-separated compound ("red|bold"),
//! matching the marker grammar.
//!
//! # Example
//! ```
//! use weft_style::{ColorName, ColorTable};
//!
//! let table = ColorTable::ansi();
//! let name = ColorName::new("RED|bold");
//! assert_eq!(name.as_str(), "red|bold");
//! assert_eq!(table.resolve(name.as_str()).as_deref(), Some("\x1b[31m\x1b[1m"));
//! ```

pub mod color;
pub mod table;

pub use color::ColorName;
pub use table::{ColorTable, SGR_RESET};
