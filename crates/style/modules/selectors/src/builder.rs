//! Fluent selector construction.
//!
//! ```text
//! of_type(&BUTTON).class("positive").pseudo("hover").bg_darker_than(0.4)
//! element().class("window-background")
//! of_type(&TEXTURE_BUTTON).parent_of(of_type(&TEXTURE_RECT))
//! ```

use crate::{LuminanceMode, NeighbourDirection, Selector};
use style_tree::WidgetType;

/// Selector matching any node.
#[inline]
pub fn element() -> Selector {
    Selector::Compound(Vec::new())
}

/// Selector matching `ty` and its subtypes.
#[inline]
pub fn of_type(ty: &'static WidgetType) -> Selector {
    Selector::Compound(vec![Selector::Type(ty)])
}

impl Selector {
    /// Conjoin `part` onto this selector.
    #[must_use]
    pub fn and(self, part: Self) -> Self {
        match self {
            Self::Compound(mut parts) => {
                parts.push(part);
                Self::Compound(parts)
            }
            other => Self::Compound(vec![other, part]),
        }
    }

    #[must_use]
    #[inline]
    pub fn class(self, class: &str) -> Self {
        self.and(Self::Class(class.to_owned()))
    }

    #[must_use]
    #[inline]
    pub fn pseudo(self, pseudo: &str) -> Self {
        self.and(Self::Pseudo(pseudo.to_owned()))
    }

    /// Match `child` anywhere below a node matching `self`.
    #[must_use]
    #[inline]
    pub fn parent_of(self, child: Self) -> Self {
        Self::Child {
            ancestor: Box::new(self),
            target: Box::new(child),
        }
    }

    /// Background of the nearest brightness-aware ancestor is at least `threshold`.
    #[must_use]
    #[inline]
    pub fn bg_brighter_than(self, threshold: f32) -> Self {
        self.luminance(threshold, LuminanceMode::GreaterThan)
    }

    /// Background of the nearest brightness-aware ancestor is at most `threshold`.
    #[must_use]
    #[inline]
    pub fn bg_darker_than(self, threshold: f32) -> Self {
        self.luminance(threshold, LuminanceMode::LessThan)
    }

    #[must_use]
    #[inline]
    pub fn luminance(self, threshold: f32, mode: LuminanceMode) -> Self {
        Self::Luminance {
            inner: Box::new(self),
            threshold,
            mode,
        }
    }

    /// This node sits `by` slots above a node matching `other`.
    #[must_use]
    #[inline]
    pub fn above(self, other: Self, by: usize) -> Self {
        self.neighbour(other, by, NeighbourDirection::Above)
    }

    /// This node sits `by` slots below a node matching `other`.
    #[must_use]
    #[inline]
    pub fn below(self, other: Self, by: usize) -> Self {
        self.neighbour(other, by, NeighbourDirection::Below)
    }

    /// A node matching `other` sits `by` slots away on either side.
    #[must_use]
    #[inline]
    pub fn nearby(self, other: Self, by: usize) -> Self {
        self.neighbour(other, by, NeighbourDirection::Either)
    }

    #[must_use]
    #[inline]
    pub fn neighbour(self, other: Self, distance: usize, direction: NeighbourDirection) -> Self {
        Self::Neighbour {
            base: Box::new(self),
            other: Box::new(other),
            distance,
            direction,
        }
    }
}
