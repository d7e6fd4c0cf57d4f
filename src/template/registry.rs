//! Component registry for storing and retrieving component definitions

use std::collections::HashMap;

use serde::Deserialize;
use serde_yaml::Value;

use crate::error::RecipeError;

/// A stored component: an ordered, not yet substituted element template
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDefinition {
    pub name: String,
    pub elements: Vec<Value>,
}

/// Shape of a components document
#[derive(Deserialize)]
struct LibraryFile {
    components: Option<HashMap<String, RawComponent>>,
}

#[derive(Deserialize)]
struct RawComponent {
    elements: Option<Vec<Value>>,
}

/// Registry of component definitions, keyed by name
#[derive(Debug, Default, Clone)]
pub struct ComponentRegistry {
    components: HashMap<String, ComponentDefinition>,
}

impl ComponentRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a loaded components document
    pub fn from_value(value: Value) -> Result<Self, RecipeError> {
        let file: LibraryFile = serde_yaml::from_value(value).map_err(RecipeError::Library)?;
        let mut registry = Self::new();
        for (name, raw) in file.components.unwrap_or_default() {
            registry.register(ComponentDefinition {
                name,
                elements: raw.elements.unwrap_or_default(),
            });
        }
        Ok(registry)
    }

    /// Register a definition, replacing any previous one with the same name
    pub fn register(&mut self, def: ComponentDefinition) {
        self.components.insert(def.name.clone(), def);
    }

    /// Get a component by name
    pub fn get(&self, name: &str) -> Result<&ComponentDefinition, RecipeError> {
        self.components
            .get(name)
            .ok_or_else(|| RecipeError::UnknownComponent {
                name: name.to_string(),
            })
    }

    /// Check if a component exists
    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(src: &str) -> ComponentRegistry {
        ComponentRegistry::from_value(serde_yaml::from_str(src).unwrap()).unwrap()
    }

    #[test]
    fn test_load_components() {
        let reg = registry(
            r#"
components:
  header:
    elements:
      - { type: rect, id: bg }
      - { type: text, id: title, text: "${title}" }
  spacer: {}
"#,
        );
        assert_eq!(reg.len(), 2);
        let header = reg.get("header").unwrap();
        assert_eq!(header.name, "header");
        assert_eq!(header.elements.len(), 2);
        assert!(reg.get("spacer").unwrap().elements.is_empty());
    }

    #[test]
    fn test_unknown_component() {
        let reg = registry("components: {}");
        let err = reg.get("missing").unwrap_err();
        assert!(matches!(err, RecipeError::UnknownComponent { name } if name == "missing"));
    }

    #[test]
    fn test_document_without_components() {
        let reg = registry("version: 1");
        assert!(reg.is_empty());
        assert!(!reg.contains("header"));
    }

    #[test]
    fn test_malformed_library() {
        let err = ComponentRegistry::from_value(serde_yaml::from_str("components: [1, 2]").unwrap())
            .unwrap_err();
        assert!(matches!(err, RecipeError::Library(_)));
    }
}
