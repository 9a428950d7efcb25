//! RGBA colour with straight (non-premultiplied) float channels.

use crate::ValueError;
use core::str::FromStr;
use serde::Deserialize;

/// Colour with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgba {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Rgba {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Opaque grey with all three channels set to `level`.
    #[inline]
    pub const fn grey(level: f32) -> Self {
        Self::new(level, level, level, 1.0)
    }

    /// Parse any CSS colour string (`#141111FF`, `rgb(…)`, named colours).
    ///
    /// # Errors
    /// Returns [`ValueError::BadColor`] when the string is not a colour.
    pub fn from_hex(input: &str) -> Result<Self, ValueError> {
        let parsed = csscolorparser::parse(input).map_err(|err| ValueError::BadColor {
            input: input.to_owned(),
            reason: err.to_string(),
        })?;
        Ok(Self::new(parsed.r, parsed.g, parsed.b, parsed.a))
    }

    /// Channel-wise multiplication, as used for style box modulation.
    #[inline]
    #[must_use]
    pub fn modulate(self, by: Self) -> Self {
        Self::new(
            self.red * by.red,
            self.green * by.green,
            self.blue * by.blue,
            self.alpha * by.alpha,
        )
    }
}

impl FromStr for Rgba {
    type Err = ValueError;

    #[inline]
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::from_hex(input)
    }
}

impl TryFrom<String> for Rgba {
    type Error = ValueError;

    #[inline]
    fn try_from(input: String) -> Result<Self, Self::Error> {
        Self::from_hex(&input)
    }
}
