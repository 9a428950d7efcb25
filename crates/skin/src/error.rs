//! Skin configuration errors.

use core::error::Error;
use core::fmt;
use style_values::ValueError;

/// A skin that cannot be turned into a stylesheet.
///
/// Raised while loading the skin, never during lookups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    EmptyVariantSet { property: &'static str },
    PaletteSize {
        palette: &'static str,
        expected: usize,
        found: usize,
    },
    BadColor { input: String, reason: String },
    MissingTexture { path: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyVariantSet { property } => {
                write!(formatter, "no variants found for {property}")
            }
            Self::PaletteSize {
                palette,
                expected,
                found,
            } => write!(
                formatter,
                "{palette} palette needs {expected} colors, found {found}"
            ),
            Self::BadColor { input, reason } => {
                write!(formatter, "invalid color {input:?}: {reason}")
            }
            Self::MissingTexture { path } => write!(formatter, "missing texture {path}"),
        }
    }
}

impl Error for ConfigError {}

impl From<ValueError> for ConfigError {
    fn from(err: ValueError) -> Self {
        match err {
            ValueError::EmptyVariantSet => Self::EmptyVariantSet {
                property: "variant set",
            },
            ValueError::BadColor { input, reason } => Self::BadColor { input, reason },
            ValueError::PaletteSize { expected, found } => Self::PaletteSize {
                palette: "color",
                expected,
                found,
            },
        }
    }
}
