//! Helpers over the generic document value tree
//!
//! Recipes are loaded as `serde_yaml::Value` trees (string, number, bool,
//! null, sequence, mapping). The passes that rewrite them (placeholder
//! substitution and color resolution) only touch string leaves, so they share
//! a single recursive rebuild in [`map_strings`].

use serde_yaml::value::TaggedValue;
use serde_yaml::{Mapping, Value};

use crate::error::RecipeError;

/// Rebuild `value`, passing every string leaf through `f`
///
/// The input is never modified; the result is a fresh tree with the same
/// shape. Mapping keys are copied as-is. Numbers, booleans and nulls pass
/// through unchanged.
pub fn map_strings<E, F>(value: &Value, f: &mut F) -> Result<Value, E>
where
    F: FnMut(&str) -> Result<Value, E>,
{
    match value {
        Value::String(s) => f(s),
        Value::Sequence(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                out.push(map_strings(item, f)?);
            }
            Ok(Value::Sequence(out))
        }
        Value::Mapping(map) => {
            let mut out = Mapping::with_capacity(map.len());
            for (key, item) in map {
                out.insert(key.clone(), map_strings(item, f)?);
            }
            Ok(Value::Mapping(out))
        }
        Value::Tagged(tagged) => Ok(Value::Tagged(Box::new(TaggedValue {
            tag: tagged.tag.clone(),
            value: map_strings(&tagged.value, f)?,
        }))),
        other => Ok(other.clone()),
    }
}

/// String form of a value as it appears in rendered text
///
/// Scalars print as written; null prints as an empty string; sequences and
/// mappings print as single-line YAML.
pub fn display_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Tagged(tagged) => display_string(&tagged.value),
        nested => serde_yaml::to_string(nested)
            .map(|s| s.trim_end().replace('\n', " "))
            .unwrap_or_default(),
    }
}

/// Read a value as a float, accepting numbers and numeric strings
pub fn number(value: &Value, field: &str) -> Result<f64, RecipeError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Tagged(tagged) => return number(&tagged.value, field),
        _ => None,
    };
    parsed.ok_or_else(|| RecipeError::InvalidNumber {
        field: field.to_string(),
        found: display_string(value),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn yaml(src: &str) -> Value {
        serde_yaml::from_str(src).unwrap()
    }

    #[test]
    fn test_map_strings_preserves_shape() {
        let input = yaml("a: [x, 1, {b: y}]\nc: true\n");
        let out: Result<Value, ()> =
            map_strings(&input, &mut |s| Ok(Value::String(s.to_uppercase())));
        assert_eq!(out.unwrap(), yaml("a: [X, 1, {b: Y}]\nc: true\n"));
    }

    #[test]
    fn test_map_strings_propagates_error() {
        let input = yaml("[ok, bad, ok]");
        let out = map_strings(&input, &mut |s| {
            if s == "bad" {
                Err(s.to_string())
            } else {
                Ok(Value::String(s.to_string()))
            }
        });
        assert_eq!(out.unwrap_err(), "bad");
    }

    #[test]
    fn test_number_coercion() {
        assert_eq!(number(&yaml("12"), "x").unwrap(), 12.0);
        assert_eq!(number(&yaml("1.5"), "x").unwrap(), 1.5);
        assert_eq!(number(&yaml("' 40 '"), "x").unwrap(), 40.0);
        assert!(matches!(
            number(&yaml("wide"), "w"),
            Err(RecipeError::InvalidNumber { field, .. }) if field == "w"
        ));
    }

    #[test]
    fn test_display_string() {
        assert_eq!(display_string(&yaml("42")), "42");
        assert_eq!(display_string(&yaml("true")), "true");
        assert_eq!(display_string(&yaml("~")), "");
        assert_eq!(display_string(&yaml("hello")), "hello");
    }
}
