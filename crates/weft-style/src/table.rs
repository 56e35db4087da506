#![forbid(unsafe_code)]

//! Name to escape-code mapping supplied by the embedding application.

use std::borrow::Cow;

use rustc_hash::FxHashMap;

/// Escape that returns the terminal to its default rendition. Colour-wrapped
/// output always closes with this exact sequence.
pub const SGR_RESET: &str = "\x1b[0m";

/// The standard palette: base colours (SGR 30-37), bright variants (90-97)
/// and the attribute names compounds are built from.
const ANSI_CODES: [(&str, &str); 21] = [
    ("black", "\x1b[30m"),
    ("red", "\x1b[31m"),
    ("green", "\x1b[32m"),
    ("yellow", "\x1b[33m"),
    ("blue", "\x1b[34m"),
    ("magenta", "\x1b[35m"),
    ("cyan", "\x1b[36m"),
    ("white", "\x1b[37m"),
    ("bright_black", "\x1b[90m"),
    ("bright_red", "\x1b[91m"),
    ("bright_green", "\x1b[92m"),
    ("bright_yellow", "\x1b[93m"),
    ("bright_blue", "\x1b[94m"),
    ("bright_magenta", "\x1b[95m"),
    ("bright_cyan", "\x1b[96m"),
    ("bright_white", "\x1b[97m"),
    ("bold", "\x1b[1m"),
    ("dim", "\x1b[2m"),
    ("underline", "\x1b[4m"),
    ("blink", "\x1b[5m"),
    ("reverse", "\x1b[7m"),
];

/// Mapping from colour names to terminal escape codes.
///
/// The table is caller-owned configuration: the pipelines read it, never
/// write it. Lookups fold names to ASCII lowercase; unknown names resolve to
/// `None` and the value passes through unwrapped.
#[derive(Debug, Clone, Default)]
pub struct ColorTable {
    codes: FxHashMap<String, String>,
}

impl ColorTable {
    /// Empty table: every lookup misses and nothing gets wrapped.
    #[must_use]
    pub fn new() -> Self {
        Self {
            codes: FxHashMap::default(),
        }
    }

    /// Table pre-populated with the standard ANSI palette.
    #[must_use]
    pub fn ansi() -> Self {
        let mut table = Self::new();
        for (name, code) in ANSI_CODES {
            table.insert(name, code);
        }
        table
    }

    /// Register or replace a colour. Names fold to ASCII lowercase.
    pub fn insert(&mut self, name: &str, code: &str) {
        self.codes
            .insert(name.to_ascii_lowercase(), code.to_string());
    }

    /// Escape code for a single (non-compound) name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        if name.bytes().any(|b| b.is_ascii_uppercase()) {
            self.codes.get(&name.to_ascii_lowercase()).map(String::as_str)
        } else {
            self.codes.get(name).map(String::as_str)
        }
    }

    /// Resolve a possibly-compound name ("red|bold") to an escape sequence.
    ///
    /// Compound parts resolve independently and their codes concatenate in
    /// written order; parts missing from the table are skipped. `None` when
    /// nothing at all resolves.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<Cow<'_, str>> {
        if !name.contains('|') {
            return self.get(name).map(Cow::Borrowed);
        }

        let mut combined = String::new();
        for part in name.split('|') {
            if let Some(code) = self.get(part) {
                combined.push_str(code);
            }
        }
        if combined.is_empty() {
            None
        } else {
            Some(Cow::Owned(combined))
        }
    }

    /// Number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// True when no names are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // Lookup
    // =========================================================================

    #[test]
    fn empty_table_misses() {
        let table = ColorTable::new();
        assert!(table.is_empty());
        assert_eq!(table.get("red"), None);
        assert_eq!(table.resolve("red"), None);
    }

    #[test]
    fn ansi_palette_has_base_colors() {
        let table = ColorTable::ansi();
        assert_eq!(table.get("red"), Some("\x1b[31m"));
        assert_eq!(table.get("white"), Some("\x1b[37m"));
        assert_eq!(table.get("bright_cyan"), Some("\x1b[96m"));
        assert_eq!(table.get("bold"), Some("\x1b[1m"));
        assert_eq!(table.len(), ANSI_CODES.len());
    }

    #[test]
    fn lookups_fold_case() {
        let table = ColorTable::ansi();
        assert_eq!(table.get("RED"), table.get("red"));
        assert_eq!(table.resolve("Blue").as_deref(), Some("\x1b[34m"));
    }

    #[test]
    fn insert_replaces_existing() {
        let mut table = ColorTable::ansi();
        table.insert("RED", "\x1b[38;5;196m");
        assert_eq!(table.get("red"), Some("\x1b[38;5;196m"));
        assert_eq!(table.len(), ANSI_CODES.len());
    }

    // =========================================================================
    // Compound resolution
    // =========================================================================

    #[test]
    fn compound_concatenates_in_order() {
        let table = ColorTable::ansi();
        assert_eq!(
            table.resolve("red|bold").as_deref(),
            Some("\x1b[31m\x1b[1m")
        );
        assert_eq!(
            table.resolve("bold|red").as_deref(),
            Some("\x1b[1m\x1b[31m")
        );
    }

    #[test]
    fn compound_skips_unknown_parts() {
        let table = ColorTable::ansi();
        assert_eq!(table.resolve("red|sparkly").as_deref(), Some("\x1b[31m"));
    }

    #[test]
    fn all_unknown_compound_resolves_to_none() {
        let table = ColorTable::ansi();
        assert_eq!(table.resolve("sparkly|glittery"), None);
        assert_eq!(table.resolve("|"), None);
    }

    #[test]
    fn single_name_borrows_from_table() {
        let table = ColorTable::ansi();
        assert!(matches!(table.resolve("red"), Some(Cow::Borrowed(_))));
        assert!(matches!(table.resolve("red|bold"), Some(Cow::Owned(_))));
    }
}
