//! Recipe documents
//!
//! Screens, component libraries and token tables are loaded as generic
//! document-value trees. The rewriting passes run over those trees; only the
//! final, fully expanded and resolved nodes are typed into [`Element`]s.

mod model;
pub mod value;

pub use model::{Artboard, Element, ElementKind, Frame, Meta, Screen, Style, UseInstruction};
