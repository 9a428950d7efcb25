//! Background style boxes.

use crate::{Rgba, Texture, luminance};

/// A drawable background.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleBox {
    /// Solid colour fill.
    Flat { color: Rgba },
    /// Nine-patch texture with a uniform patch margin and a colour modulation.
    Texture {
        texture: Texture,
        patch_margin: u32,
        modulate: Rgba,
    },
    /// Another box drawn at a scale factor.
    Scaled { inner: Box<StyleBox>, scale: f32 },
}

impl StyleBox {
    #[inline]
    pub const fn flat(color: Rgba) -> Self {
        Self::Flat { color }
    }

    /// Nine-patch box over `texture` with `margin` pixels on every side.
    #[inline]
    pub const fn patch(texture: Texture, margin: u32) -> Self {
        Self::Texture {
            texture,
            patch_margin: margin,
            modulate: Rgba::WHITE,
        }
    }

    /// Copy of this box tinted by `color`. Flat boxes are multiplied directly.
    #[must_use]
    pub fn modulate(&self, color: Rgba) -> Self {
        match self {
            Self::Flat { color: base } => Self::Flat {
                color: base.modulate(color),
            },
            Self::Texture {
                texture,
                patch_margin,
                ..
            } => Self::Texture {
                texture: texture.clone(),
                patch_margin: *patch_margin,
                modulate: color,
            },
            Self::Scaled { inner, scale } => Self::Scaled {
                inner: Box::new(inner.modulate(color)),
                scale: *scale,
            },
        }
    }

    #[must_use]
    pub fn zoom(self, amount: f32) -> Self {
        Self::Scaled {
            inner: Box::new(self),
            scale: amount,
        }
    }

    /// The colour this box appears as on average.
    pub fn effective_color(&self) -> Rgba {
        match self {
            Self::Flat { color } => *color,
            Self::Texture {
                texture, modulate, ..
            } => texture.mean_color().modulate(*modulate),
            Self::Scaled { inner, .. } => inner.effective_color(),
        }
    }

    /// Perceptual luminance of [`Self::effective_color`].
    #[inline]
    pub fn luminance(&self) -> f32 {
        luminance(self.effective_color())
    }
}
