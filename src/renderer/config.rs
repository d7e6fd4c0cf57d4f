//! Configuration for SVG rendering

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Id of the `<clipPath>` covering the viewport
    pub clip_id: String,

    /// Font family for `text` and `button` labels
    pub text_font_family: String,

    /// Font family declared by the embedded icon font
    pub icon_font_family: String,

    /// Class attached to icon text elements
    pub icon_class: String,

    /// MIME type of the embedded font data URI
    pub font_mime: String,

    /// CSS `format()` hint for the embedded font
    pub font_format: String,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            standalone: true,
            pretty_print: true,
            clip_id: "viewportClip".to_string(),
            text_font_family: "Inter, Arial, sans-serif".to_string(),
            icon_font_family: "Material Symbols Outlined".to_string(),
            icon_class: "material-symbols-outlined".to_string(),
            font_mime: "font/woff2".to_string(),
            font_format: "woff2".to_string(),
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the viewport clip path id
    pub fn with_clip_id(mut self, id: impl Into<String>) -> Self {
        self.clip_id = id.into();
        self
    }

    /// Set the font family used for labels
    pub fn with_text_font_family(mut self, family: impl Into<String>) -> Self {
        self.text_font_family = family.into();
        self
    }

    /// Set the icon font family name
    pub fn with_icon_font_family(mut self, family: impl Into<String>) -> Self {
        self.icon_font_family = family.into();
        self
    }

    /// Set the class attached to icon text
    pub fn with_icon_class(mut self, class: impl Into<String>) -> Self {
        self.icon_class = class.into();
        self
    }

    /// Set the embedded font's MIME type and CSS format hint
    pub fn with_font_format(mut self, mime: impl Into<String>, format: impl Into<String>) -> Self {
        self.font_mime = mime.into();
        self.font_format = format.into();
        self
    }
}
