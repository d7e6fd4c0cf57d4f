//! SVG document assembly

use tracing::debug;

use crate::recipe::Frame;

use super::font::IconFont;
use super::SvgConfig;

/// Build an SVG document incrementally
///
/// Primitives are kept in insertion order, which is also paint order.
pub struct SvgBuilder {
    config: SvgConfig,
    width: f64,
    height: f64,
    styles: Vec<String>,
    defs: Vec<String>,
    elements: Vec<String>,
    font_embedded: bool,
}

impl SvgBuilder {
    /// Create a builder for a `width` x `height` artboard
    pub fn new(config: SvgConfig, width: f64, height: f64) -> Self {
        Self {
            config,
            width,
            height,
            styles: vec![],
            defs: vec![],
            elements: vec![],
            font_embedded: false,
        }
    }

    pub fn config(&self) -> &SvgConfig {
        &self.config
    }

    /// Drawn primitives, in paint order
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    /// Style blocks added to the document
    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    pub fn font_embedded(&self) -> bool {
        self.font_embedded
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Embed an icon font into the document's style block
    ///
    /// Only the first call per document adds the `@font-face` rule; later
    /// calls return `false` and change nothing.
    pub fn embed_font(&mut self, font: &IconFont) -> bool {
        if self.font_embedded {
            return false;
        }
        self.styles.push(font.css());
        self.font_embedded = true;
        debug!(
            family = font.family(),
            bytes = font.encoded().len(),
            "embedded icon font"
        );
        true
    }

    /// Define a rectangular clip path
    pub fn add_clip_rect(&mut self, id: &str, frame: &Frame) {
        self.defs.push(format!(
            r#"<clipPath id="{}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath>"#,
            escape_xml(id),
            frame.x,
            frame.y,
            frame.w,
            frame.h
        ));
    }

    /// Add a rounded rectangle
    pub fn add_rect(
        &mut self,
        id: Option<&str>,
        frame: &Frame,
        radius: f64,
        attrs: &str,
        clip: Option<&str>,
    ) {
        self.elements.push(format!(
            r#"{}<rect{} x="{}" y="{}" width="{}" height="{}" rx="{}" ry="{}"{}{}/>"#,
            self.indent_str(),
            id_attr(id),
            frame.x,
            frame.y,
            frame.w,
            frame.h,
            radius,
            radius,
            attrs,
            clip_attr(clip)
        ));
    }

    /// Add a circle
    pub fn add_circle(
        &mut self,
        id: Option<&str>,
        cx: f64,
        cy: f64,
        r: f64,
        attrs: &str,
        clip: Option<&str>,
    ) {
        self.elements.push(format!(
            r#"{}<circle{} cx="{}" cy="{}" r="{}"{}{}/>"#,
            self.indent_str(),
            id_attr(id),
            cx,
            cy,
            r,
            attrs,
            clip_attr(clip)
        ));
    }

    /// Add a text element, one `<tspan>` per line
    ///
    /// Lines after the first are placed `line_step` below the previous one,
    /// all sharing the anchor `x`.
    #[allow(clippy::too_many_arguments)]
    pub fn add_text(
        &mut self,
        id: Option<&str>,
        lines: &[&str],
        x: f64,
        y: f64,
        line_step: f64,
        attrs: &str,
        clip: Option<&str>,
    ) {
        let spans = if lines.len() == 1 {
            format!("<tspan>{}</tspan>", escape_xml(lines[0]))
        } else {
            lines
                .iter()
                .enumerate()
                .map(|(i, line)| {
                    let dy = if i == 0 { 0.0 } else { line_step };
                    format!(
                        r#"<tspan x="{}" dy="{}">{}</tspan>"#,
                        x,
                        dy,
                        escape_xml(line)
                    )
                })
                .collect::<String>()
        };

        self.elements.push(format!(
            r#"{}<text{} x="{}" y="{}"{}{}>{}</text>"#,
            self.indent_str(),
            id_attr(id),
            x,
            y,
            attrs,
            clip_attr(clip),
            spans
        ));
    }

    /// Add an external image reference
    pub fn add_image(&mut self, id: Option<&str>, href: &str, frame: &Frame, clip: Option<&str>) {
        self.elements.push(format!(
            r#"{}<image{} xlink:href="{}" x="{}" y="{}" width="{}" height="{}"{}/>"#,
            self.indent_str(),
            id_attr(id),
            escape_xml(href),
            frame.x,
            frame.y,
            frame.w,
            frame.h,
            clip_attr(clip)
        ));
    }

    /// Build the final SVG string
    pub fn build(self) -> String {
        let nl = self.newline();
        let indent = self.indent_str();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() || !self.defs.is_empty() {
            svg.push_str(indent);
            svg.push_str("<defs>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str(indent);
                svg.push_str(indent);
                svg.push_str("<style>");
                svg.push_str(style);
                svg.push_str("</style>");
                svg.push_str(nl);
            }
            for def in &self.defs {
                svg.push_str(indent);
                svg.push_str(indent);
                svg.push_str(def);
                svg.push_str(nl);
            }
            svg.push_str(indent);
            svg.push_str("</defs>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");
        svg.push_str(nl);

        svg
    }
}

/// Format one attribute with a leading space, escaping the value
pub fn attr(name: &str, value: impl std::fmt::Display) -> String {
    format!(r#" {}="{}""#, name, escape_xml(&value.to_string()))
}

fn id_attr(id: Option<&str>) -> String {
    id.map(|i| attr("id", i)).unwrap_or_default()
}

fn clip_attr(clip: Option<&str>) -> String {
    clip.map(|c| attr("clip-path", format!("url(#{})", c)))
        .unwrap_or_default()
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
