//! Depth-based variant selection.
//!
//! A depth-aware node counts how many of its strict ancestors carry the same
//! [`DepthTag`] and uses that count to pick one background out of a
//! [`VariantSet`]. The count is recomputed whenever the node's style changes,
//! it is re-parented, or it enters the live tree; the node is only told
//! about values that differ from the last one it was told.

mod tracker;

pub use tracker::{DepthTracker, DepthTrigger};

use log::trace;
use style_tree::{DepthTag, NodeView};
use style_values::{StyleBox, VariantSet};

/// Receiver of depth changes.
pub trait DepthAware {
    fn on_depth_changed(&mut self, depth: usize);
}

/// Number of strict ancestors of `node` sharing its depth tag, or `None` if
/// the node is not depth-aware.
pub fn compute_depth<V: NodeView>(view: &V, node: V::Handle) -> Option<usize> {
    let tag = view.depth_tag(node)?;
    let depth = count_tagged_ancestors(view, node, tag);
    trace!("depth of {} node is {depth}", tag.name());
    Some(depth)
}

fn count_tagged_ancestors<V: NodeView>(view: &V, node: V::Handle, tag: DepthTag) -> usize {
    view.ancestors(node)
        .filter(|&ancestor| view.depth_tag(ancestor) == Some(tag))
        .count()
}

/// The variant for `depth`, cycling through the set.
#[inline]
pub fn select_variant(variants: &VariantSet, depth: usize) -> &StyleBox {
    variants.select(depth)
}
