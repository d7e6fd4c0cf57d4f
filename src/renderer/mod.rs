//! SVG renderer for resolved recipe elements
//!
//! This module takes typed elements and produces a self-contained SVG
//! document, clipped to the screen's viewport.

pub mod config;
pub mod elements;
pub mod font;
pub mod svg;

pub use config::SvgConfig;
pub use elements::{render_element, RenderContext, RingGeometry, TextLayout, TextStyle};
pub use font::IconFont;
pub use svg::SvgBuilder;

use crate::error::RecipeError;
use crate::recipe::{Element, Meta};

/// Render elements onto a fresh document sized to the artboard
///
/// When `clip` is set, a clip path matching the viewport is defined and
/// applied to every primitive.
pub fn render_document(
    meta: &Meta,
    elements: &[Element],
    font: &IconFont,
    config: &SvgConfig,
    clip: bool,
) -> Result<SvgBuilder, RecipeError> {
    let mut builder = SvgBuilder::new(config.clone(), meta.artboard.w, meta.artboard.h);

    let clip_id = if clip {
        builder.add_clip_rect(&config.clip_id, &meta.viewport);
        Some(config.clip_id.as_str())
    } else {
        None
    };

    let ctx = RenderContext {
        clip_id,
        icon_font: font,
    };
    for element in elements {
        render_element(element, &mut builder, &ctx)?;
    }

    Ok(builder)
}
