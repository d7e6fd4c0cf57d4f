//! Recipe SVG - renders declarative UI recipes to self-contained SVG
//!
//! A recipe is a screen document plus the component library and design token
//! table it draws from. Rendering expands component instances, resolves
//! `@colors.*` tokens and maps each typed element to SVG primitives, inlining
//! the icon font so the output needs nothing else.
//!
//! # Example
//!
//! ```rust
//! use recipe_svg::render;
//!
//! let screen = r##"
//! meta:
//!   artboard: { w: 360, h: 800 }
//!   viewport: { x: 0, y: 0, w: 360, h: 800 }
//! uses:
//!   - { use: banner, props: { title: Hello } }
//! "##;
//! let tokens = "colors: { primary: '#2E8E43' }";
//! let components = r##"
//! components:
//!   banner:
//!     elements:
//!       - { type: rect, style: { fill: "@colors.primary" }, frame: { x: 0, y: 0, w: 360, h: 80 } }
//!       - { type: text, text: "${title}", frame: { x: 16, y: 16, w: 328, h: 48 } }
//! "##;
//!
//! let svg = render(screen, tokens, components, b"font bytes").unwrap();
//! assert!(svg.contains(r##"fill="#2E8E43""##));
//! assert!(svg.contains("Hello"));
//! ```

pub mod error;
pub mod pipeline;
pub mod recipe;
pub mod renderer;
pub mod template;
pub mod tokens;

use std::path::Path;

pub use error::{LoadError, RecipeError};
pub use pipeline::{render_file, Recipe, RecipePaths};
pub use recipe::{Element, ElementKind, Frame, Screen, Style};
pub use renderer::{IconFont, SvgBuilder, SvgConfig};
pub use template::ComponentRegistry;
pub use tokens::TokenTable;

use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error reading or parsing an input document
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Error expanding, resolving or drawing the recipe
    #[error("recipe error: {0}")]
    Recipe(#[from] RecipeError),

    /// Error writing the output document
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RenderError {
    /// Human-readable report, with source context for syntax errors
    pub fn format(&self) -> String {
        match self {
            RenderError::Load(err) => err.format(),
            other => other.to_string(),
        }
    }
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Clip every primitive to the screen's viewport
    pub clip_to_viewport: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            svg: SvgConfig::default(),
            clip_to_viewport: true,
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Enable or disable the viewport clip
    pub fn with_viewport_clip(mut self, clip: bool) -> Self {
        self.clip_to_viewport = clip;
        self
    }
}

/// Render a recipe given as YAML text, with default configuration
pub fn render(
    screen: &str,
    tokens: &str,
    components: &str,
    font: &[u8],
) -> Result<String, RenderError> {
    render_with_config(screen, tokens, components, font, &RenderConfig::default())
}

/// Render a recipe given as YAML text
pub fn render_with_config(
    screen: &str,
    tokens: &str,
    components: &str,
    font: &[u8],
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let tokens = pipeline::parse_document(Path::new("tokens.yaml"), tokens.to_string())?;
    let components = pipeline::parse_document(Path::new("components.yaml"), components.to_string())?;
    let screen = pipeline::parse_document(Path::new("screen.yaml"), screen.to_string())?;

    let recipe = Recipe::new(
        Screen::from_value(screen)?,
        TokenTable::from_value(&tokens),
        ComponentRegistry::from_value(components)?,
    );
    Ok(recipe.render(font, config)?)
}
