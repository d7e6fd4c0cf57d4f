//! Embedded icon font
//!
//! Icons are drawn as ligature text in an icon font. To keep the output
//! self-contained, the font bytes are inlined as a base64 data URI inside an
//! `@font-face` rule in the document's style block.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::SvgConfig;

/// An icon font, base64-encoded once and shared by every icon of a render
#[derive(Debug, Clone)]
pub struct IconFont {
    family: String,
    class: String,
    mime: String,
    format: String,
    encoded: String,
}

impl IconFont {
    pub fn new(bytes: &[u8], config: &SvgConfig) -> Self {
        Self {
            family: config.icon_font_family.clone(),
            class: config.icon_class.clone(),
            mime: config.font_mime.clone(),
            format: config.font_format.clone(),
            encoded: STANDARD.encode(bytes),
        }
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    /// Base64 form of the font bytes
    pub fn encoded(&self) -> &str {
        &self.encoded
    }

    /// The `@font-face` declaration plus the ligature rule for icon text
    pub fn css(&self) -> String {
        format!(
            r#"@font-face {{
  font-family: "{family}";
  font-style: normal;
  font-weight: 100 700;
  font-display: block;
  src: url("data:{mime};base64,{data}") format("{format}");
}}
text.{class} {{
  font-family: "{family}";
  font-variation-settings: "FILL" 0, "wght" 400, "GRAD" 0, "opsz" 48;
  font-feature-settings: "liga";
}}"#,
            family = self.family,
            mime = self.mime,
            data = self.encoded,
            format = self.format,
            class = self.class,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encodes_once() {
        let font = IconFont::new(b"abc", &SvgConfig::default());
        assert_eq!(font.encoded(), "YWJj");
        assert_eq!(font.family(), "Material Symbols Outlined");
        assert_eq!(font.class(), "material-symbols-outlined");
    }

    #[test]
    fn test_css() {
        let font = IconFont::new(b"abc", &SvgConfig::default());
        insta::assert_snapshot!(font.css(), @r#"
        @font-face {
          font-family: "Material Symbols Outlined";
          font-style: normal;
          font-weight: 100 700;
          font-display: block;
          src: url("data:font/woff2;base64,YWJj") format("woff2");
        }
        text.material-symbols-outlined {
          font-family: "Material Symbols Outlined";
          font-variation-settings: "FILL" 0, "wght" 400, "GRAD" 0, "opsz" 48;
          font-feature-settings: "liga";
        }
        "#);
    }

    #[test]
    fn test_css_follows_config() {
        let config = SvgConfig::default()
            .with_icon_font_family("Icons")
            .with_icon_class("ico")
            .with_font_format("font/ttf", "truetype");
        let css = IconFont::new(&[0xff, 0x00], &config).css();
        assert!(css.contains(r#"font-family: "Icons";"#));
        assert!(css.contains("text.ico {"));
        assert!(css.contains(r#"url("data:font/ttf;base64,/wA=") format("truetype")"#));
    }
}
