#![forbid(unsafe_code)]

//! Field spec parsing: the option body of a `$NAME{...}` marker.

use weft_style::ColorName;

/// Width and colour options attached to a field marker.
///
/// Percentages resolve against the terminal width at parse time, so a spec
/// is only meaningful for the width it was parsed with. Nothing here errors:
/// an option that fails to parse is simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSpec {
    /// Pad the value with trailing spaces up to this many characters.
    pub min: Option<usize>,
    /// Truncate the value to this many characters, unless padding already
    /// applied.
    pub max: Option<usize>,
    /// Colour to wrap the value in, resolved through the caller's table.
    pub color: Option<ColorName>,
}

impl FieldSpec {
    /// Parse a spec body such as `"min:10 max:50% color:red"`.
    ///
    /// Each option is located by its keyword; the value is the run of ASCII
    /// alphanumerics that follows, and a `%` directly after the run scales
    /// by the terminal width. When both widths parse and `min > max`, `min`
    /// collapses down to `max`.
    #[must_use]
    pub fn parse(spec: &str, terminal_width: usize) -> Self {
        let mut parsed = Self {
            min: width_option(spec, "min:", terminal_width),
            max: width_option(spec, "max:", terminal_width),
            color: option_value(spec, "color:").map(|(name, _)| ColorName::new(name)),
        };

        if let (Some(min), Some(max)) = (parsed.min, parsed.max)
            && min > max
        {
            parsed.min = Some(max);
        }

        parsed
    }
}

/// The alphanumeric run following `keyword`, plus whether a `%` trails it.
/// `None` when the keyword is absent or its value empty.
fn option_value<'a>(spec: &'a str, keyword: &str) -> Option<(&'a str, bool)> {
    let start = spec.find(keyword)? + keyword.len();
    let rest = &spec[start..];
    let len = rest.bytes().take_while(u8::is_ascii_alphanumeric).count();
    if len == 0 {
        return None;
    }
    let percent = rest.as_bytes().get(len) == Some(&b'%');
    Some((&rest[..len], percent))
}

/// A width value for `keyword`: an absolute character count, or a
/// percentage of the terminal width.
fn width_option(spec: &str, keyword: &str, terminal_width: usize) -> Option<usize> {
    let (value, percent) = option_value(spec, keyword)?;
    let value: usize = value.parse().ok()?;
    Some(if percent {
        value.saturating_mul(terminal_width) / 100
    } else {
        value
    })
}
