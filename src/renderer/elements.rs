//! Element rendering: maps each typed element to SVG primitives

use std::f64::consts::PI;

use tracing::debug;

use crate::error::RecipeError;
use crate::recipe::{Element, ElementKind, Frame, Style};

use super::font::IconFont;
use super::svg::{attr, SvgBuilder};

const DEFAULT_BUTTON_FILL: &str = "#2E8E43";
const DEFAULT_ICON_ASSET: &str = "icon:help";
const DEFAULT_ICON_COLOR: &str = "#111111";
const ICON_SCALE: f64 = 0.95;
const LINE_HEIGHT_FACTOR: f64 = 1.1;

/// Shared state for rendering the elements of one document
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Clip path applied to every primitive, if any
    pub clip_id: Option<&'a str>,
    /// Font embedded on first use by an icon
    pub icon_font: &'a IconFont,
}

/// Map the CSS keyword `transparent` to the SVG paint `none`
pub fn normalize_paint(value: &str) -> &str {
    if value == "transparent" {
        "none"
    } else {
        value
    }
}

/// Horizontal text alignment within a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

impl Align {
    /// Parse an `align` style value; unrecognized values align left
    pub fn parse(value: &str) -> Self {
        match value {
            "center" => Align::Center,
            "right" => Align::Right,
            _ => Align::Left,
        }
    }

    pub fn anchor(self) -> &'static str {
        match self {
            Align::Left => "start",
            Align::Center => "middle",
            Align::Right => "end",
        }
    }

    fn anchor_x(self, frame: &Frame) -> f64 {
        match self {
            Align::Left => frame.x,
            Align::Center => frame.x + frame.w / 2.0,
            Align::Right => frame.x + frame.w,
        }
    }
}

/// Resolved typography of a text label
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    pub font_weight: String,
    pub color: String,
    pub align: Align,
    /// `valign: middle`; otherwise the label is top-aligned
    pub middle: bool,
    pub line_height: Option<f64>,
}

impl TextStyle {
    /// Typography of a `text` element
    pub fn from_style(style: &Style) -> Result<Self, RecipeError> {
        Ok(Self {
            font_size: style.number("fontSize", 16.0)?,
            font_weight: style.text_or("fontWeight", "400"),
            color: style.text_or("color", "#000"),
            align: Align::parse(&style.text_or("align", "left")),
            middle: style.text("valign").as_deref() == Some("middle"),
            line_height: match style.get("lineHeight") {
                Some(_) => Some(style.number("lineHeight", 0.0)?),
                None => None,
            },
        })
    }

    /// Typography of a button label, read from the button's `textStyle`
    pub fn button(style: &Style) -> Result<Self, RecipeError> {
        let text_style = style.nested("textStyle");
        Ok(Self {
            font_size: text_style.number("fontSize", 32.0)?,
            font_weight: text_style.text_or("fontWeight", "900"),
            color: text_style.text_or("color", "#FFFFFF"),
            align: Align::Center,
            middle: true,
            line_height: None,
        })
    }

    /// Position of the first line inside `frame`
    pub fn layout(&self, frame: &Frame) -> TextLayout {
        let baseline = if self.middle {
            frame.y + frame.h / 2.0
        } else {
            // top-aligned approximation, not the font's real ascent
            frame.y + self.font_size
        };
        TextLayout {
            anchor: self.align.anchor(),
            x: self.align.anchor_x(frame),
            baseline,
            line_step: self
                .line_height
                .unwrap_or(self.font_size * LINE_HEIGHT_FACTOR),
        }
    }
}

/// Computed placement of a (possibly multi-line) label
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextLayout {
    pub anchor: &'static str,
    pub x: f64,
    pub baseline: f64,
    pub line_step: f64,
}

impl TextLayout {
    /// Offset of each line's baseline from the first one
    pub fn line_offsets(&self, lines: usize) -> Vec<f64> {
        (0..lines).map(|i| i as f64 * self.line_step).collect()
    }
}

/// Geometry of a progress ring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub circumference: f64,
    /// Length of the drawn arc
    pub dash: f64,
    /// Length of the remaining gap
    pub gap: f64,
}

impl RingGeometry {
    /// Ring inset by half the stroke so it stays inside `frame`; `progress`
    /// is clamped to `0..=1`
    pub fn new(frame: &Frame, stroke_width: f64, progress: f64) -> Self {
        let (cx, cy) = frame.center();
        let r = (frame.min_side() / 2.0 - stroke_width / 2.0).max(0.0);
        let circumference = 2.0 * PI * r;
        let dash = progress.clamp(0.0, 1.0) * circumference;
        let gap = (circumference - dash).max(0.0);
        Self {
            cx,
            cy,
            r,
            circumference,
            dash,
            gap,
        }
    }
}

/// Render a single element, recursing into groups
///
/// Unknown element types draw nothing.
pub fn render_element(
    element: &Element,
    builder: &mut SvgBuilder,
    ctx: &RenderContext<'_>,
) -> Result<(), RecipeError> {
    let id = element.id.as_deref();
    let frame = &element.frame;
    let style = &element.style;

    match &element.kind {
        ElementKind::Rect => {
            let mut attrs = attr("fill", normalize_paint(&style.text_or("fill", "none")));
            if let Some(stroke) = style.text("stroke").filter(|s| !s.is_empty()) {
                attrs.push_str(&attr("stroke", normalize_paint(&stroke)));
            }
            if let Some(width) = style.text("strokeWidth") {
                attrs.push_str(&attr("stroke-width", width));
            }
            let radius = style.number("radius", 0.0)?;
            builder.add_rect(id, frame, radius, &attrs, ctx.clip_id);
        }
        ElementKind::Text { text } => {
            let text_style = TextStyle::from_style(style)?;
            draw_text(builder, id, frame, text, &text_style, ctx);
        }
        ElementKind::Image { asset } => {
            builder.add_image(id, asset, frame, ctx.clip_id);
        }
        ElementKind::Button { text } => {
            let fill = style.text_or("fill", DEFAULT_BUTTON_FILL);
            let radius = style.number("radius", frame.min_side() / 2.0)?;
            builder.add_rect(
                id,
                frame,
                radius,
                &attr("fill", normalize_paint(&fill)),
                ctx.clip_id,
            );
            // label sits slightly below center
            let label_frame = Frame::new(frame.x, frame.y + frame.h * 0.1, frame.w, frame.h);
            draw_text(builder, None, &label_frame, text, &TextStyle::button(style)?, ctx);
        }
        ElementKind::Icon { asset } => {
            builder.embed_font(ctx.icon_font);
            let asset = asset.as_deref().unwrap_or(DEFAULT_ICON_ASSET);
            let name = asset.replace("icon:", "");
            let color = style.text_or("color", DEFAULT_ICON_COLOR);
            let (cx, cy) = frame.center();

            let attrs = [
                attr("fill", normalize_paint(&color)),
                attr("text-anchor", "middle"),
                attr("dominant-baseline", "central"),
                attr("font-size", frame.min_side() * ICON_SCALE),
                attr("font-family", ctx.icon_font.family()),
                attr("font-weight", 400),
                attr("class", ctx.icon_font.class()),
            ]
            .concat();
            builder.add_text(id, &[name.as_str()], cx, cy, 0.0, &attrs, ctx.clip_id);
        }
        ElementKind::ProgressRing => {
            let progress = style.number("progress", 0.75)?;
            let stroke_width = style.number("strokeWidth", 18.0)?;
            let track = style.text_or("trackColor", "#ccc");
            let color = style.text_or("progressColor", "#333");
            let ring = RingGeometry::new(frame, stroke_width, progress);

            let track_attrs = [
                attr("fill", "none"),
                attr("stroke", normalize_paint(&track)),
                attr("stroke-width", stroke_width),
            ]
            .concat();
            builder.add_circle(id, ring.cx, ring.cy, ring.r, &track_attrs, ctx.clip_id);

            // rotated so the arc starts at 12 o'clock
            let progress_attrs = [
                attr("fill", "none"),
                attr("stroke", normalize_paint(&color)),
                attr("stroke-width", stroke_width),
                attr("stroke-dasharray", format!("{} {}", ring.dash, ring.gap)),
                attr("transform", format!("rotate(-90 {} {})", ring.cx, ring.cy)),
            ]
            .concat();
            builder.add_circle(None, ring.cx, ring.cy, ring.r, &progress_attrs, ctx.clip_id);
        }
        ElementKind::Group { children } => {
            for child in children {
                render_element(child, builder, ctx)?;
            }
        }
        ElementKind::Unknown { type_name } => {
            debug!(element_type = %type_name, "skipping unknown element type");
        }
    }

    Ok(())
}

fn draw_text(
    builder: &mut SvgBuilder,
    id: Option<&str>,
    frame: &Frame,
    text: &str,
    style: &TextStyle,
    ctx: &RenderContext<'_>,
) {
    let layout = style.layout(frame);
    let attrs = [
        attr("fill", normalize_paint(&style.color)),
        attr("text-anchor", layout.anchor),
        attr("font-size", style.font_size),
        attr("font-weight", &style.font_weight),
        attr("font-family", &builder.config().text_font_family),
    ]
    .concat();
    let lines: Vec<&str> = text.split('\n').collect();
    builder.add_text(
        id,
        &lines,
        layout.x,
        layout.baseline,
        layout.line_step,
        &attrs,
        ctx.clip_id,
    );
}
