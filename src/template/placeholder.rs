//! `${name}` placeholder substitution

use std::convert::Infallible;

use logos::Logos;
use serde_yaml::{Mapping, Value};

use crate::recipe::value::{display_string, map_strings};

/// Pieces of a template string
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum Piece {
    #[regex(r"\$\{[^}]+\}")]
    Placeholder,
    #[regex(r"[^$]+")]
    Literal,
    #[token("$")]
    Dollar,
}

/// Replace every `${name}` in `template` with the string form of `props[name]`
///
/// Names missing from `props` are left in place verbatim. Substituted text is
/// not scanned again.
pub fn substitute_str(template: &str, props: &Mapping) -> String {
    let mut out = String::with_capacity(template.len());
    let mut lexer = Piece::lexer(template);
    while let Some(piece) = lexer.next() {
        let slice = lexer.slice();
        match piece {
            Ok(Piece::Placeholder) => {
                let name = &slice[2..slice.len() - 1];
                match props.get(name) {
                    Some(value) => out.push_str(&display_string(value)),
                    None => out.push_str(slice),
                }
            }
            _ => out.push_str(slice),
        }
    }
    out
}

/// Substitute placeholders in every string of a nested tree
///
/// Returns a new tree; `template` itself is never modified, so one template
/// can be instantiated many times with different properties.
pub fn substitute(template: &Value, props: &Mapping) -> Value {
    let result: Result<Value, Infallible> = map_strings(template, &mut |s| {
        Ok(Value::String(substitute_str(s, props)))
    });
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}
