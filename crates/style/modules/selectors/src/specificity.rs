//! Selector specificity.

use crate::Selector;
use core::ops::Add;

/// Specificity triple (pseudo-states, classes, types), compared
/// lexicographically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Specificity(pub u16, pub u16, pub u16);

impl Specificity {
    pub const ZERO: Self = Self(0, 0, 0);

    #[inline]
    pub const fn pseudos(self) -> u16 {
        self.0
    }

    #[inline]
    pub const fn classes(self) -> u16 {
        self.1
    }

    #[inline]
    pub const fn types(self) -> u16 {
        self.2
    }
}

impl Add for Specificity {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self(
            self.0.saturating_add(other.0),
            self.1.saturating_add(other.1),
            self.2.saturating_add(other.2),
        )
    }
}

/// Count simple selectors across the selector's structure.
///
/// Combinators sum their constituents. A `Luminance` wrapper is an operator,
/// not a refinement: it is exactly as specific as what it wraps.
pub fn specificity_of(selector: &Selector) -> Specificity {
    match selector {
        Selector::Type(_) => Specificity(0, 0, 1),
        Selector::Class(_) => Specificity(0, 1, 0),
        Selector::Pseudo(_) => Specificity(1, 0, 0),
        Selector::Compound(parts) => parts
            .iter()
            .map(specificity_of)
            .fold(Specificity::ZERO, Add::add),
        Selector::Child { ancestor, target } => specificity_of(ancestor) + specificity_of(target),
        Selector::Neighbour { base, other, .. } => specificity_of(base) + specificity_of(other),
        Selector::Luminance { inner, .. } => specificity_of(inner),
    }
}
