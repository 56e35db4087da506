#![forbid(unsafe_code)]

//! Colour names as carried on cells and field specs.

use std::fmt;
use std::sync::Arc;

/// A settled colour name, normalized to ASCII lowercase.
///
/// Backed by a shared allocation, so stamping one name onto every cell of a
/// long segment is a reference-count bump rather than a string copy. Names
/// from markers keep their `|` compounds ("red|bold") intact; splitting them
/// is [`ColorTable`](crate::ColorTable)'s job at resolve time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorName(Arc<str>);

impl ColorName {
    /// Create a colour name, folding ASCII uppercase to lowercase.
    #[must_use]
    pub fn new(name: &str) -> Self {
        if name.bytes().any(|b| b.is_ascii_uppercase()) {
            Self(Arc::from(name.to_ascii_lowercase()))
        } else {
            Self(Arc::from(name))
        }
    }

    /// The colour given to text no marker has claimed.
    #[must_use]
    pub fn white() -> Self {
        Self(Arc::from("white"))
    }

    /// The name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ColorName {
    fn default() -> Self {
        Self::white()
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColorName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ColorName {
    fn from(mut name: String) -> Self {
        name.make_ascii_lowercase();
        Self(Arc::from(name))
    }
}

impl PartialEq<str> for ColorName {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ColorName {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
