//! Selector matching.

use crate::{NeighbourDirection, Selector};
use log::trace;
use style_tree::NodeView;

/// Luminance assumed when no ancestor exposes one.
pub const NEUTRAL_LUMINANCE: f32 = 0.0;

/// Source of resolved background luminance for a node, typically the
/// stylesheet resolving the node's background style box.
pub trait BackgroundProbe<V: NodeView> {
    fn background_luminance(&self, view: &V, node: V::Handle) -> Option<f32>;
}

/// Everything a match needs besides the selector and the node.
pub struct MatchContext<'ctx, V: NodeView> {
    pub view: &'ctx V,
    pub probe: Option<&'ctx dyn BackgroundProbe<V>>,
}

impl<'ctx, V: NodeView> MatchContext<'ctx, V> {
    #[inline]
    pub const fn new(view: &'ctx V) -> Self {
        Self { view, probe: None }
    }

    #[inline]
    pub const fn with_probe(view: &'ctx V, probe: &'ctx dyn BackgroundProbe<V>) -> Self {
        Self {
            view,
            probe: Some(probe),
        }
    }
}

/// Match a selector against a single node.
pub fn matches_in<V: NodeView>(
    context: &MatchContext<'_, V>,
    node: V::Handle,
    selector: &Selector,
) -> bool {
    let view = context.view;
    match selector {
        Selector::Type(ty) => view.widget_type(node).is_a(ty),
        Selector::Class(class) => view.has_class(node, class),
        Selector::Pseudo(pseudo) => view.has_pseudo(node, pseudo),
        Selector::Compound(parts) => parts.iter().all(|part| matches_in(context, node, part)),
        Selector::Child { ancestor, target } => {
            matches_in(context, node, target)
                && view
                    .ancestors(node)
                    .any(|candidate| matches_in(context, candidate, ancestor))
        }
        Selector::Neighbour {
            base,
            other,
            distance,
            direction,
        } => {
            matches_in(context, node, base)
                && neighbour_matches(context, node, other, *distance, *direction)
        }
        Selector::Luminance {
            inner,
            threshold,
            mode,
        } => {
            matches_in(context, node, inner)
                && mode.evaluate(*threshold, ancestor_luminance(context, node))
        }
    }
}

/// Check the sibling `distance` away from `node` against `other`.
/// No parent or an offset outside the children list is simply no match.
fn neighbour_matches<V: NodeView>(
    context: &MatchContext<'_, V>,
    node: V::Handle,
    other: &Selector,
    distance: usize,
    direction: NeighbourDirection,
) -> bool {
    let view = context.view;
    let Some(parent) = view.parent(node) else {
        return false;
    };
    let Some(index) = view.child_index(node) else {
        return false;
    };
    let sibling_matches = |position: Option<usize>| {
        position
            .and_then(|pos| view.child_at(parent, pos))
            .is_some_and(|sibling| matches_in(context, sibling, other))
    };
    match direction {
        NeighbourDirection::Below => sibling_matches(index.checked_sub(distance)),
        NeighbourDirection::Above => sibling_matches(index.checked_add(distance)),
        NeighbourDirection::Either => {
            sibling_matches(index.checked_sub(distance))
                || sibling_matches(index.checked_add(distance))
        }
    }
}

/// Luminance of the nearest ancestor that exposes one.
///
/// Each ancestor is asked first for a resolved background (through the
/// context's probe), then for its own brightness capability. Without any
/// such ancestor the result is [`NEUTRAL_LUMINANCE`].
pub fn ancestor_luminance<V: NodeView>(context: &MatchContext<'_, V>, node: V::Handle) -> f32 {
    let view = context.view;
    let found = view.ancestors(node).find_map(|ancestor| {
        context
            .probe
            .and_then(|probe| probe.background_luminance(view, ancestor))
            .or_else(|| view.brightness(ancestor))
    });
    found.unwrap_or_else(|| {
        trace!("no brightness-aware ancestor, using neutral luminance");
        NEUTRAL_LUMINANCE
    })
}
