use crate::{StyleBox, ValueError};
use std::sync::Arc;

/// A non-empty array of style boxes, one of which is picked by nesting depth.
#[derive(Clone, Debug, PartialEq)]
pub struct VariantSet {
    boxes: Arc<[StyleBox]>,
}

impl VariantSet {
    /// # Errors
    /// Returns [`ValueError::EmptyVariantSet`] if `boxes` is empty.
    pub fn new(boxes: Vec<StyleBox>) -> Result<Self, ValueError> {
        if boxes.is_empty() {
            return Err(ValueError::EmptyVariantSet);
        }
        Ok(Self {
            boxes: Arc::from(boxes),
        })
    }

    /// The variant for `depth`, wrapping around: `boxes[depth % len]`.
    #[inline]
    pub fn select(&self, depth: usize) -> &StyleBox {
        let index = depth % self.boxes.len();
        &self.boxes[index]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Always false; kept for the `len` convention.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&StyleBox> {
        self.boxes.get(index)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &StyleBox> {
        self.boxes.iter()
    }
}
