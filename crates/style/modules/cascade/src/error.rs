//! Stylesheet build errors.

use core::error::Error;
use core::fmt;

/// A rule set that cannot form a valid stylesheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CascadeError {
    /// A depth-selected property was declared with something other than a
    /// variant set.
    NotAVariantSet {
        key: &'static str,
        selector: String,
        found: &'static str,
    },
}

impl fmt::Display for CascadeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAVariantSet {
                key,
                selector,
                found,
            } => write!(
                formatter,
                "property {key} on {selector} must be a variant set, found {found}"
            ),
        }
    }
}

impl Error for CascadeError {}
