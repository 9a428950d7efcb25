//! The value stored against a property key in a style rule.

use crate::{FontHandle, Rgba, StyleBox, Texture, VariantSet};
use std::sync::Arc;

/// Two-dimensional size in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    Color(Rgba),
    Palette(Arc<[Rgba]>),
    Box(StyleBox),
    Variants(VariantSet),
    Texture(Texture),
    Font(FontHandle),
    Size(Size),
    Number(f32),
    Keyword(&'static str),
}

impl StyleValue {
    /// Short name of the value's kind, for diagnostics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Color(_) => "color",
            Self::Palette(_) => "palette",
            Self::Box(_) => "style box",
            Self::Variants(_) => "variant set",
            Self::Texture(_) => "texture",
            Self::Font(_) => "font",
            Self::Size(_) => "size",
            Self::Number(_) => "number",
            Self::Keyword(_) => "keyword",
        }
    }

    #[inline]
    pub const fn as_color(&self) -> Option<Rgba> {
        match self {
            Self::Color(color) => Some(*color),
            _ => None,
        }
    }

    #[inline]
    pub fn as_palette(&self) -> Option<&[Rgba]> {
        match self {
            Self::Palette(palette) => Some(palette.as_ref()),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_style_box(&self) -> Option<&StyleBox> {
        match self {
            Self::Box(style_box) => Some(style_box),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_variants(&self) -> Option<&VariantSet> {
        match self {
            Self::Variants(variants) => Some(variants),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_texture(&self) -> Option<&Texture> {
        match self {
            Self::Texture(texture) => Some(texture),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_font(&self) -> Option<&FontHandle> {
        match self {
            Self::Font(font) => Some(font),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_size(&self) -> Option<Size> {
        match self {
            Self::Size(size) => Some(*size),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_number(&self) -> Option<f32> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    #[inline]
    pub const fn as_keyword(&self) -> Option<&'static str> {
        match self {
            Self::Keyword(keyword) => Some(*keyword),
            _ => None,
        }
    }
}

impl From<Rgba> for StyleValue {
    #[inline]
    fn from(color: Rgba) -> Self {
        Self::Color(color)
    }
}

impl From<Vec<Rgba>> for StyleValue {
    #[inline]
    fn from(palette: Vec<Rgba>) -> Self {
        Self::Palette(Arc::from(palette))
    }
}

impl From<StyleBox> for StyleValue {
    #[inline]
    fn from(style_box: StyleBox) -> Self {
        Self::Box(style_box)
    }
}

impl From<VariantSet> for StyleValue {
    #[inline]
    fn from(variants: VariantSet) -> Self {
        Self::Variants(variants)
    }
}

impl From<Texture> for StyleValue {
    #[inline]
    fn from(texture: Texture) -> Self {
        Self::Texture(texture)
    }
}

impl From<FontHandle> for StyleValue {
    #[inline]
    fn from(font: FontHandle) -> Self {
        Self::Font(font)
    }
}

impl From<Size> for StyleValue {
    #[inline]
    fn from(size: Size) -> Self {
        Self::Size(size)
    }
}

impl From<f32> for StyleValue {
    #[inline]
    fn from(number: f32) -> Self {
        Self::Number(number)
    }
}

impl From<&'static str> for StyleValue {
    #[inline]
    fn from(keyword: &'static str) -> Self {
        Self::Keyword(keyword)
    }
}
