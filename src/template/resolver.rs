//! Component expansion - inlines `uses` instances into a screen's element list

use serde_yaml::Value;
use tracing::debug;

use crate::error::RecipeError;
use crate::recipe::value::display_string;
use crate::recipe::{Screen, UseInstruction};

use super::placeholder::substitute;
use super::registry::ComponentRegistry;

/// Expand every component instance of a screen
///
/// The result starts with copies of the screen's own elements, followed by
/// each instance's generated elements in `uses` order. Later elements paint
/// on top of earlier ones.
pub fn expand_elements(
    screen: &Screen,
    registry: &ComponentRegistry,
) -> Result<Vec<Value>, RecipeError> {
    let mut elements = screen.elements.clone();
    for instance in &screen.uses {
        let generated = instantiate(instance, registry)?;
        debug!(
            component = %instance.component,
            elements = generated.len(),
            "expanded component instance"
        );
        elements.extend(generated);
    }
    Ok(elements)
}

/// Generate the elements of a single component instance
pub fn instantiate(
    instance: &UseInstruction,
    registry: &ComponentRegistry,
) -> Result<Vec<Value>, RecipeError> {
    let component = registry.get(&instance.component)?;
    let prefix = instance.id_prefix.as_deref().unwrap_or_default();

    Ok(component
        .elements
        .iter()
        .map(|template| {
            let mut element = substitute(template, &instance.props);
            if !prefix.is_empty() {
                prefix_id(&mut element, prefix);
            }
            element
        })
        .collect())
}

/// Prefix a generated element's `id`, if it has one
///
/// Only the element itself is renamed; group children keep their ids.
fn prefix_id(element: &mut Value, prefix: &str) {
    if let Value::Mapping(map) = element {
        if let Some(id) = map.get_mut("id") {
            *id = Value::String(format!("{}{}", prefix, display_string(id)));
        }
    }
}
