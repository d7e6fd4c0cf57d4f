//! Error types for loading and resolving recipes

use std::path::PathBuf;

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors raised while reading recipe documents from disk
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        text: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid TOML in {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        text: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("TOML document {} has no YAML equivalent: {source}", path.display())]
    Convert {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("no {stem}.yaml, {stem}.yml or {stem}.toml in {}", root.display())]
    NotFound { root: PathBuf, stem: &'static str },

    #[error("cannot find a recipe root two levels above {}", screen.display())]
    NoRecipeRoot { screen: PathBuf },
}

impl LoadError {
    /// Format the error, annotating syntax errors with source context using ariadne
    pub fn format(&self) -> String {
        let (path, text, span, message) = match self {
            LoadError::Yaml { path, text, source } => {
                let start = source.location().map(|l| l.index()).unwrap_or(0);
                (path, text, start..start + 1, source.to_string())
            }
            LoadError::Toml { path, text, source } => {
                let span = source.span().unwrap_or(0..0);
                (path, text, span, source.message().to_string())
            }
            other => return other.to_string(),
        };

        let filename = path.display().to_string();
        let span = clamp_span(span, text.len());
        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename.as_str(), span.start)
            .with_message(format!("cannot parse {}", filename))
            .with_label(
                Label::new((filename.as_str(), span))
                    .with_message(message)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename.as_str(), Source::from(text.as_str())), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

fn clamp_span(span: Span, len: usize) -> Span {
    let start = span.start.min(len);
    let end = span.end.clamp(start, len);
    start..end
}

/// Errors raised while expanding, resolving or typing a recipe
#[derive(Error, Debug)]
pub enum RecipeError {
    /// `@colors.<key>` with no matching entry in the token table
    #[error("unknown color token '@colors.{key}'")]
    UnknownColor { key: String },

    /// A `uses` entry names a component the library does not define
    #[error("component not found: {name}")]
    UnknownComponent { name: String },

    /// A frame or style value could not be read as a number
    #[error("expected a number for '{field}', found {found}")]
    InvalidNumber { field: String, found: String },

    #[error("malformed screen document: {0}")]
    Screen(#[source] serde_yaml::Error),

    #[error("malformed component library: {0}")]
    Library(#[source] serde_yaml::Error),
}
