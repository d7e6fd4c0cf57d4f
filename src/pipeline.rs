//! Recipe loading and the render pipeline
//!
//! A recipe lives in a directory laid out as
//!
//! ```text
//! pack/
//!   tokens.yaml
//!   components.yaml
//!   screens/
//!     main.portrait.yaml
//! ```
//!
//! The token table and component library are found two levels above the
//! screen file. Rendering runs expansion, color resolution and drawing in
//! that order; any failure aborts the whole render.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::info;

use crate::error::{LoadError, RecipeError};
use crate::recipe::{Element, Screen};
use crate::renderer::{render_document, IconFont};
use crate::template::{expand_elements, ComponentRegistry};
use crate::tokens::TokenTable;
use crate::{RenderConfig, RenderError};

/// Icon font looked up next to the executable when none is given
pub const DEFAULT_FONT_FILE: &str = "material-symbols-outlined.woff2";

const TOKENS_STEM: &str = "tokens";
const COMPONENTS_STEM: &str = "components";
const EXTENSIONS: [&str; 3] = ["yaml", "yml", "toml"];

/// Parse a document's text; `.toml` paths are read as TOML, anything else as YAML
pub fn parse_document(path: &Path, text: String) -> Result<Value, LoadError> {
    let is_toml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("toml"));

    if is_toml {
        let parsed: toml::Value = match toml::from_str(&text) {
            Ok(parsed) => parsed,
            Err(source) => {
                return Err(LoadError::Toml {
                    path: path.to_path_buf(),
                    text,
                    source,
                })
            }
        };
        serde_yaml::to_value(parsed).map_err(|source| LoadError::Convert {
            path: path.to_path_buf(),
            source,
        })
    } else {
        match serde_yaml::from_str(&text) {
            Ok(value) => Ok(value),
            Err(source) => Err(LoadError::Yaml {
                path: path.to_path_buf(),
                text,
                source,
            }),
        }
    }
}

/// Read and parse a document from disk
pub fn load_document(path: &Path) -> Result<Value, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let value = parse_document(path, text)?;
    info!(path = %path.display(), "loaded document");
    Ok(value)
}

/// Locations of the documents making up one recipe
#[derive(Debug, Clone, PartialEq)]
pub struct RecipePaths {
    pub root: PathBuf,
    pub tokens: PathBuf,
    pub components: PathBuf,
    pub screen: PathBuf,
}

impl RecipePaths {
    /// Find the token table and component library for a screen file
    pub fn locate(screen: &Path) -> Result<Self, LoadError> {
        let root = screen
            .parent()
            .and_then(Path::parent)
            .ok_or_else(|| LoadError::NoRecipeRoot {
                screen: screen.to_path_buf(),
            })?;

        Ok(Self {
            root: root.to_path_buf(),
            tokens: find_document(root, TOKENS_STEM)?,
            components: find_document(root, COMPONENTS_STEM)?,
            screen: screen.to_path_buf(),
        })
    }
}

fn find_document(root: &Path, stem: &'static str) -> Result<PathBuf, LoadError> {
    EXTENSIONS
        .iter()
        .map(|ext| root.join(format!("{}.{}", stem, ext)))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| LoadError::NotFound {
            root: root.to_path_buf(),
            stem,
        })
}

/// A screen together with the tokens and components it draws from
#[derive(Debug, Clone)]
pub struct Recipe {
    pub screen: Screen,
    pub tokens: TokenTable,
    pub components: ComponentRegistry,
}

impl Recipe {
    pub fn new(screen: Screen, tokens: TokenTable, components: ComponentRegistry) -> Self {
        Self {
            screen,
            tokens,
            components,
        }
    }

    /// Load every document of a recipe from disk
    pub fn load(paths: &RecipePaths) -> Result<Self, RenderError> {
        let tokens = TokenTable::from_value(&load_document(&paths.tokens)?);
        let components = ComponentRegistry::from_value(load_document(&paths.components)?)?;
        let screen = Screen::from_value(load_document(&paths.screen)?)?;
        Ok(Self::new(screen, tokens, components))
    }

    /// Expand components, resolve color tokens and type the result
    ///
    /// Colors are resolved only after expansion, since substituted
    /// properties may themselves be color references.
    pub fn resolve(&self) -> Result<Vec<Element>, RecipeError> {
        expand_elements(&self.screen, &self.components)?
            .iter()
            .map(|raw| Element::from_value(&self.tokens.resolve_deep(raw)?))
            .collect()
    }

    /// Render the recipe to an SVG string
    pub fn render(&self, font: &[u8], config: &RenderConfig) -> Result<String, RecipeError> {
        let icon_font = IconFont::new(font, &config.svg);
        let elements = self.resolve()?;
        let builder = render_document(
            &self.screen.meta,
            &elements,
            &icon_font,
            &config.svg,
            config.clip_to_viewport,
        )?;
        Ok(builder.build())
    }
}

/// Render a screen file to an SVG file
///
/// The output's parent directory is created if needed.
pub fn render_file(
    screen: &Path,
    output: &Path,
    font: &Path,
    config: &RenderConfig,
) -> Result<(), RenderError> {
    let paths = RecipePaths::locate(screen)?;
    let recipe = Recipe::load(&paths)?;
    let font_bytes = fs::read(font).map_err(|source| LoadError::Io {
        path: font.to_path_buf(),
        source,
    })?;

    let svg = recipe.render(&font_bytes, config)?;

    let write_err = |source| RenderError::Write {
        path: output.to_path_buf(),
        source,
    };
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(output, svg).map_err(write_err)?;
    info!(output = %output.display(), "wrote svg");
    Ok(())
}
