//! Configuration errors raised while building style values.

use core::error::Error;
use core::fmt;

/// A malformed value detected at stylesheet build time.
///
/// These are configuration defects: they are reported once, when the skin or
/// stylesheet is constructed, never per lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValueError {
    /// A depth-selected property was given no variants.
    EmptyVariantSet,
    /// A colour string could not be parsed.
    BadColor { input: String, reason: String },
    /// A palette did not have the expected number of entries.
    PaletteSize { expected: usize, found: usize },
}

impl fmt::Display for ValueError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyVariantSet => formatter.write_str("variant set must not be empty"),
            Self::BadColor { input, reason } => {
                write!(formatter, "invalid color {input:?}: {reason}")
            }
            Self::PaletteSize { expected, found } => {
                write!(formatter, "palette needs {expected} colors, found {found}")
            }
        }
    }
}

impl Error for ValueError {}
