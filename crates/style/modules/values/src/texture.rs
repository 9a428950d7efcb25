use crate::Rgba;
use std::sync::Arc;

/// A loaded texture, as handed out by the resource provider.
///
/// The engine never samples pixels; it only needs the texture's mean colour
/// to estimate the luminance of a textured background.
#[derive(Clone, Debug, PartialEq)]
pub struct Texture {
    path: Arc<str>,
    mean_color: Rgba,
}

impl Texture {
    #[inline]
    pub fn new(path: &str, mean_color: Rgba) -> Self {
        Self {
            path: Arc::from(path),
            mean_color,
        }
    }

    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub const fn mean_color(&self) -> Rgba {
        self.mean_color
    }
}
