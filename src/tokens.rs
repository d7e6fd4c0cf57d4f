//! Design token table and color token resolution
//!
//! Style values may reference a named color as `@colors.<key>`. The key is
//! everything after the prefix and is looked up verbatim in the table's
//! `colors` mapping; dotted keys are not traversed further.

use serde_yaml::{Mapping, Value};

use crate::error::RecipeError;
use crate::recipe::value::map_strings;

/// Prefix marking a symbolic color reference
pub const COLOR_PREFIX: &str = "@colors.";

/// Design tokens for one render
#[derive(Debug, Clone, Default)]
pub struct TokenTable {
    /// Color mappings: token name -> color value
    pub colors: Mapping,
}

impl TokenTable {
    /// Build a token table from a loaded tokens document
    ///
    /// Only the `colors` sub-mapping is read. A document without one yields
    /// an empty table, so every color reference fails to resolve.
    pub fn from_value(value: &Value) -> Self {
        let colors = match value.get("colors") {
            Some(Value::Mapping(colors)) => colors.clone(),
            _ => Mapping::new(),
        };
        Self { colors }
    }

    /// Look up a color token by key
    pub fn color(&self, key: &str) -> Option<&Value> {
        self.colors.get(key)
    }

    /// Resolve a single string: `@colors.<key>` becomes the table entry,
    /// anything else is returned unchanged
    pub fn resolve_str(&self, value: &str) -> Result<Value, RecipeError> {
        match value.strip_prefix(COLOR_PREFIX) {
            Some(key) => self
                .color(key)
                .cloned()
                .ok_or_else(|| RecipeError::UnknownColor {
                    key: key.to_string(),
                }),
            None => Ok(Value::String(value.to_string())),
        }
    }

    /// Resolve a single value; non-strings pass through
    pub fn resolve(&self, value: &Value) -> Result<Value, RecipeError> {
        match value {
            Value::String(s) => self.resolve_str(s),
            other => Ok(other.clone()),
        }
    }

    /// Resolve every color reference in a nested tree, returning a new tree
    pub fn resolve_deep(&self, value: &Value) -> Result<Value, RecipeError> {
        map_strings(value, &mut |s| self.resolve_str(s))
    }
}
