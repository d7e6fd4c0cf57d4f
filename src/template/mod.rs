//! Component templates
//!
//! A component library maps names to element templates. A screen's `uses`
//! entries instantiate those templates: each instance substitutes its
//! properties into `${name}` placeholders and optionally prefixes the ids of
//! the generated elements.
//!
//! # Example
//!
//! ```text
//! # components.yaml
//! components:
//!   badge:
//!     elements:
//!       - { id: label, type: text, text: "${title}", frame: { x: 0, y: 0, w: 80, h: 20 } }
//!
//! # screens/main.yaml
//! uses:
//!   - { use: badge, props: { title: Level 3 }, idPrefix: hud_ }
//! ```

mod placeholder;
mod registry;
mod resolver;

pub use placeholder::{substitute, substitute_str};
pub use registry::{ComponentDefinition, ComponentRegistry};
pub use resolver::{expand_elements, instantiate};
