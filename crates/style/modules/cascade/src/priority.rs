//! Cascade ordering.

use style_selectors::Specificity;

/// Priority used to order candidate rules for one property.
///
/// Fields compare in declaration order: higher specificity wins, and among
/// equal specificities the rule declared later wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CascadePriority {
    pub specificity: Specificity,
    /// Index of the rule in its stylesheet.
    pub source_order: u32,
}

impl CascadePriority {
    #[inline]
    pub const fn new(specificity: Specificity, source_order: u32) -> Self {
        Self {
            specificity,
            source_order,
        }
    }
}

/// Rank a rule at `index` with the given specificity.
#[inline]
pub fn rank_candidate(specificity: Specificity, index: usize) -> CascadePriority {
    CascadePriority::new(
        specificity,
        u32::try_from(index).unwrap_or(u32::MAX),
    )
}
