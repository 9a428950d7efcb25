//! Selector shorthands used by the skin's rules.

use crate::consts;
use style_selectors::{Selector, of_type};
use style_tree::WidgetType;
use style_tree::widget_type::CONTAINER_BUTTON;

/// Any button: a container button carrying the `button` class.
#[inline]
pub fn button() -> Selector {
    button_of(&CONTAINER_BUTTON)
}

/// A button of a specific type.
#[inline]
pub fn button_of(ty: &'static WidgetType) -> Selector {
    of_type(ty).class(consts::BUTTON)
}

/// Class and pseudo-state refinements.
pub trait SkinSelectorExt: Sized {
    #[must_use]
    fn positive(self) -> Self;
    #[must_use]
    fn negative(self) -> Self;
    #[must_use]
    fn normal(self) -> Self;
    #[must_use]
    fn hover(self) -> Self;
    #[must_use]
    fn pressed(self) -> Self;
    #[must_use]
    fn disabled(self) -> Self;

    /// Apply `refine` only when `condition` holds.
    #[must_use]
    fn and_if(self, condition: bool, refine: impl FnOnce(Self) -> Self) -> Self {
        if condition { refine(self) } else { self }
    }
}

impl SkinSelectorExt for Selector {
    #[inline]
    fn positive(self) -> Self {
        self.class(consts::POSITIVE)
    }

    #[inline]
    fn negative(self) -> Self {
        self.class(consts::NEGATIVE)
    }

    #[inline]
    fn normal(self) -> Self {
        self.pseudo(consts::PSEUDO_NORMAL)
    }

    #[inline]
    fn hover(self) -> Self {
        self.pseudo(consts::PSEUDO_HOVER)
    }

    #[inline]
    fn pressed(self) -> Self {
        self.pseudo(consts::PSEUDO_PRESSED)
    }

    #[inline]
    fn disabled(self) -> Self {
        self.pseudo(consts::PSEUDO_DISABLED)
    }
}
