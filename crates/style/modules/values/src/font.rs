use serde::Deserialize;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Opaque handle to a rasterizable font, produced by the font provider.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FontHandle {
    pub family: Arc<str>,
    pub size: u32,
    pub weight: FontWeight,
}

impl FontHandle {
    #[inline]
    pub fn new(family: &str, size: u32, weight: FontWeight) -> Self {
        Self {
            family: Arc::from(family),
            size,
            weight,
        }
    }
}
