//! Typed recipe documents: screens, component uses and renderable elements

use serde::{Deserialize, Deserializer};
use serde_yaml::{Mapping, Value};

use crate::error::RecipeError;

use super::value::{display_string, number};

/// A screen document: artboard metadata, direct elements and component uses
#[derive(Debug, Clone, Deserialize)]
pub struct Screen {
    pub meta: Meta,
    /// Raw element nodes, drawn before any expanded component
    #[serde(default, deserialize_with = "null_as_default")]
    pub elements: Vec<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub uses: Vec<UseInstruction>,
}

impl Screen {
    /// Type a loaded screen document
    pub fn from_value(value: Value) -> Result<Self, RecipeError> {
        serde_yaml::from_value(value).map_err(RecipeError::Screen)
    }
}

/// Output sizing for a screen
#[derive(Debug, Clone, Deserialize)]
pub struct Meta {
    pub artboard: Artboard,
    pub viewport: Frame,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Artboard {
    pub w: f64,
    pub h: f64,
}

/// One instantiation of a library component
#[derive(Debug, Clone, Deserialize)]
pub struct UseInstruction {
    #[serde(rename = "use")]
    pub component: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub props: Mapping,
    #[serde(rename = "idPrefix", default)]
    pub id_prefix: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Position and size of an element, in artboard coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(try_from = "Value")]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Frame {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// The smaller of width and height
    pub fn min_side(&self) -> f64 {
        self.w.min(self.h)
    }
}

impl TryFrom<Value> for Frame {
    type Error = RecipeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let field = |key: &str| -> Result<f64, RecipeError> {
            match value.get(key) {
                Some(v) if !v.is_null() => number(v, key),
                _ => Ok(0.0),
            }
        };
        Ok(Self {
            x: field("x")?,
            y: field("y")?,
            w: field("w")?,
            h: field("h")?,
        })
    }
}

/// Free-form style mapping of an element
///
/// Null entries read as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style(Mapping);

impl Style {
    pub fn new(map: Mapping) -> Self {
        Self(map)
    }

    /// Style from an optional node; anything but a mapping is empty
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Mapping(map)) => Self(map.clone()),
            _ => Self::default(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key).filter(|v| !v.is_null())
    }

    pub fn number(&self, key: &str, default: f64) -> Result<f64, RecipeError> {
        match self.get(key) {
            Some(v) => number(v, key),
            None => Ok(default),
        }
    }

    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).map(display_string)
    }

    pub fn text_or(&self, key: &str, default: &str) -> String {
        self.text(key).unwrap_or_else(|| default.to_string())
    }

    /// Nested style mapping such as a button's `textStyle`
    pub fn nested(&self, key: &str) -> Style {
        Self::from_value(self.get(key))
    }
}

/// A resolved, renderable element node
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: Option<String>,
    pub frame: Frame,
    pub style: Style,
    pub kind: ElementKind,
}

/// The closed set of element types
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    Rect,
    Text { text: String },
    Image { asset: String },
    Button { text: String },
    Icon { asset: Option<String> },
    ProgressRing,
    Group { children: Vec<Element> },
    /// Any other `type`; draws nothing
    Unknown { type_name: String },
}

impl Element {
    /// Type a raw element node
    ///
    /// Nodes without a `type` (or that are not mappings at all) become
    /// [`ElementKind::Unknown`]. A missing frame reads as all zeros.
    pub fn from_value(value: &Value) -> Result<Self, RecipeError> {
        let type_name = value
            .get("type")
            .map(display_string)
            .unwrap_or_default();
        let text = || value.get("text").map(display_string).unwrap_or_default();
        let asset = || value.get("asset").filter(|v| !v.is_null()).map(display_string);

        let kind = match type_name.as_str() {
            "rect" => ElementKind::Rect,
            "text" => ElementKind::Text { text: text() },
            "image" => ElementKind::Image {
                asset: asset().unwrap_or_default(),
            },
            "button" => ElementKind::Button { text: text() },
            "icon" => ElementKind::Icon { asset: asset() },
            "progress_ring" => ElementKind::ProgressRing,
            "group" => {
                let children = match value.get("children") {
                    Some(Value::Sequence(items)) => items
                        .iter()
                        .map(Element::from_value)
                        .collect::<Result<Vec<_>, _>>()?,
                    _ => Vec::new(),
                };
                ElementKind::Group { children }
            }
            _ => {
                return Ok(Self {
                    id: None,
                    frame: Frame::default(),
                    style: Style::default(),
                    kind: ElementKind::Unknown { type_name },
                })
            }
        };

        let frame = match value.get("frame") {
            Some(frame) if !frame.is_null() => Frame::try_from(frame.clone())?,
            _ => Frame::default(),
        };

        Ok(Self {
            id: value.get("id").filter(|v| !v.is_null()).map(display_string),
            frame,
            style: Style::from_value(value.get("style")),
            kind,
        })
    }
}
