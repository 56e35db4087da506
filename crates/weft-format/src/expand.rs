#![forbid(unsafe_code)]

//! Field expansion: `$NAME{...}` markers replaced by mapped values.

use std::collections::HashMap;

use memchr::{memchr, memchr_iter};
use weft_style::{ColorTable, SGR_RESET};

use crate::field::FieldSpec;

/// Field values by name. Lookups are case sensitive; names absent from the
/// map expand to the empty string.
pub type FieldMap = HashMap<String, String>;

/// A located field marker: `$NAME{SPEC}`.
#[derive(Debug)]
struct Field<'a> {
    /// Byte offset of the `$`.
    start: usize,
    /// Byte offset just past the closing `}`.
    end: usize,
    name: &'a str,
    spec: &'a str,
}

/// Expand every `$NAME{SPEC}` marker in `template`, leftmost first.
///
/// `NAME` is one or more ASCII letters and `SPEC` is the shortest run up to
/// the next `}`. Text outside markers, `$[...]` colour markers included,
/// passes through untouched, so the result can feed straight into the cell
/// renderer. Values are fetched from `fields`, fitted per the spec's
/// `min`/`max`, and wrapped in an escape from `colors` plus [`SGR_RESET`]
/// when the spec names a resolvable colour.
#[must_use]
pub fn expand_fields(
    template: &str,
    fields: &FieldMap,
    colors: &ColorTable,
    terminal_width: usize,
) -> String {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "expand_fields",
        template_len = template.len(),
        terminal_width
    )
    .entered();

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(field) = find_field(rest) {
        out.push_str(&rest[..field.start]);
        render_field(&mut out, &field, fields, colors, terminal_width);

        #[cfg(feature = "tracing")]
        tracing::trace!(name = field.name, "field expanded");

        rest = &rest[field.end..];
    }
    out.push_str(rest);

    out
}

/// Locate the leftmost well-formed field marker.
fn find_field(template: &str) -> Option<Field<'_>> {
    let bytes = template.as_bytes();
    for dollar in memchr_iter(b'$', bytes) {
        let name_start = dollar + 1;
        let name_len = bytes[name_start..]
            .iter()
            .take_while(|b| b.is_ascii_alphabetic())
            .count();
        if name_len == 0 {
            continue;
        }

        let brace = name_start + name_len;
        if bytes.get(brace) != Some(&b'{') {
            continue;
        }
        let Some(close) = memchr(b'}', &bytes[brace + 1..]) else {
            continue;
        };

        let spec_start = brace + 1;
        return Some(Field {
            start: dollar,
            end: spec_start + close + 1,
            name: &template[name_start..brace],
            spec: &template[spec_start..spec_start + close],
        });
    }
    None
}

/// Append one field's formatted value to `out`.
fn render_field(
    out: &mut String,
    field: &Field<'_>,
    fields: &FieldMap,
    colors: &ColorTable,
    terminal_width: usize,
) {
    let spec = FieldSpec::parse(field.spec, terminal_width);
    let value = fields.get(field.name).map_or("", String::as_str);
    let chars = value.chars().count();

    let code = spec
        .color
        .as_ref()
        .and_then(|name| colors.resolve(name.as_str()));
    if let Some(code) = &code {
        out.push_str(code);
    }

    match (spec.min, spec.max) {
        (Some(min), _) if chars < min => {
            out.push_str(value);
            for _ in chars..min {
                out.push(' ');
            }
        }
        (_, Some(max)) if chars > max => {
            out.extend(value.chars().take(max));
        }
        _ => out.push_str(value),
    }

    if code.is_some() {
        out.push_str(SGR_RESET);
    }
}
