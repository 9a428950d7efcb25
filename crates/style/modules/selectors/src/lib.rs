//! Selector algebra for the widget style cascade.
//!
//! Selectors are immutable predicates over a node and its ancestor/sibling
//! context, reached through [`NodeView`]:
//! - type (with subtype matching), class and pseudo-state selectors
//! - compounds (conjunction on one node)
//! - the descendant combinator
//! - sibling-distance (`Neighbour`) and ancestor-luminance selectors
//!
//! Matching is pure. Specificity is derived from the selector shape only.

mod builder;
mod display;
mod matcher;
mod specificity;

pub use builder::{element, of_type};
pub use matcher::{BackgroundProbe, MatchContext, NEUTRAL_LUMINANCE, ancestor_luminance};
pub use specificity::Specificity;

use style_tree::{NodeView, WidgetType};

/// Where the node sits relative to the sibling a `Neighbour` selector looks at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NeighbourDirection {
    /// The node is above the sibling: the sibling is `distance` later in the
    /// parent's child order.
    Above,
    /// The node is below the sibling: the sibling is `distance` earlier.
    Below,
    /// Either of the two.
    Either,
}

/// Comparison applied by a `Luminance` selector. Both are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LuminanceMode {
    /// Matches when `threshold <= luminance`.
    GreaterThan,
    /// Matches when `threshold >= luminance`.
    LessThan,
}

impl LuminanceMode {
    #[inline]
    pub fn evaluate(self, threshold: f32, luminance: f32) -> bool {
        match self {
            Self::GreaterThan => threshold <= luminance,
            Self::LessThan => threshold >= luminance,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Selector {
    /// The node's declared type is this type or a subtype of it.
    Type(&'static WidgetType),
    /// The node carries this class tag.
    Class(String),
    /// This pseudo-state is active on the node.
    Pseudo(String),
    /// Every member matches the node. Empty matches any node.
    Compound(Vec<Selector>),
    /// `target` matches the node and `ancestor` matches some strict ancestor.
    Child {
        ancestor: Box<Selector>,
        target: Box<Selector>,
    },
    /// `base` matches the node and the sibling `distance` away, as given by
    /// `direction`, matches `other`.
    Neighbour {
        base: Box<Selector>,
        other: Box<Selector>,
        distance: usize,
        direction: NeighbourDirection,
    },
    /// `inner` matches the node and the nearest ancestor luminance satisfies
    /// `mode` against `threshold`.
    Luminance {
        inner: Box<Selector>,
        threshold: f32,
        mode: LuminanceMode,
    },
}

impl Selector {
    /// Match against `node` using only the nodes' own capabilities.
    #[inline]
    pub fn matches<V: NodeView>(&self, view: &V, node: V::Handle) -> bool {
        matcher::matches_in(&MatchContext::new(view), node, self)
    }

    /// Match against `node`, consulting the context's background probe for
    /// ancestor luminance.
    #[inline]
    pub fn matches_in<V: NodeView>(&self, context: &MatchContext<'_, V>, node: V::Handle) -> bool {
        matcher::matches_in(context, node, self)
    }

    #[inline]
    pub fn specificity(&self) -> Specificity {
        specificity::specificity_of(self)
    }
}
