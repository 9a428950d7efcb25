//! Values carried by style rules: colours, style boxes, textures, fonts and
//! the depth-indexed variant sets.

mod color;
mod error;
mod font;
mod oklab;
mod style_box;
mod texture;
mod value;
mod variants;

pub use color::Rgba;
pub use error::ValueError;
pub use font::{FontHandle, FontWeight};
pub use oklab::{OklabColor, luminance};
pub use style_box::StyleBox;
pub use texture::Texture;
pub use value::{Size, StyleValue};
pub use variants::VariantSet;
