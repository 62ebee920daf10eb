//! Emit a resolved profile in the forms C tooling consumes.

use std::fmt::Write as _;

use crate::{Attribute, FlavorProfile, Value};

/// A guarded C header defining every identity symbol.
///
/// Each definition sits in its own `#ifndef` block, so a later compile can
/// still override any symbol with `-D`. When `FLAVOR_UPPER` tracks
/// `MCCODE_NAME` it is emitted as a reference to that symbol.
pub fn c_header(profile: &FlavorProfile) -> String {
    let guard = format!("{}_D_H", identifier(profile.product_name_upper()));
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "#ifndef {}", guard);
    let _ = writeln!(out, "#define {}", guard);

    for (attribute, value) in profile.entries() {
        let body = match attribute {
            Attribute::FlavorUpper if profile.flavor_upper() == profile.product_name_upper() => {
                Attribute::ProductNameUpper.symbol().to_string()
            }
            _ => c_literal(&value),
        };
        let _ = writeln!(out);
        let _ = writeln!(out, "#ifndef {}", attribute.symbol());
        let _ = writeln!(out, "#  define {} {}", attribute.symbol(), body);
        let _ = writeln!(out, "#endif");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "#endif /* {} */", guard);
    out
}

/// Compiler arguments (`-DSYMBOL=value`), one per attribute, unquoted for
/// the shell.
pub fn cflags(profile: &FlavorProfile) -> Vec<String> {
    profile
        .entries()
        .map(|(attribute, value)| format!("-D{}={}", attribute.symbol(), c_literal(&value)))
        .collect()
}

/// The value as a C token: strings become escaped string literals.
pub fn c_literal(value: &Value) -> String {
    match value {
        Value::Str(s) => {
            let mut lit = String::with_capacity(s.len() + 2);
            lit.push('"');
            for c in s.chars() {
                match c {
                    '"' => lit.push_str("\\\""),
                    '\\' => lit.push_str("\\\\"),
                    '\n' => lit.push_str("\\n"),
                    '\t' => lit.push_str("\\t"),
                    '\r' => lit.push_str("\\r"),
                    c if c.is_ascii_control() => {
                        let _ = write!(lit, "\\{:03o}", c as u32);
                    }
                    c => lit.push(c),
                }
            }
            lit.push('"');
            lit
        }
        other => other.to_string(),
    }
}

fn identifier(name: &str) -> String {
    let mut id: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();
    if id.is_empty() || id.starts_with(|c: char| c.is_ascii_digit()) {
        id.insert(0, '_');
    }
    id
}
