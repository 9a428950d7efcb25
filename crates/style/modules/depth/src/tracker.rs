use crate::{DepthAware, compute_depth};
use style_tree::NodeView;
use tracing::debug;

/// Event that makes a depth-aware node recompute its depth.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DepthTrigger {
    StyleChanged,
    Parented,
    EnteredTree,
}

/// Remembers the last depth a node was notified of.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DepthTracker {
    last: Option<usize>,
}

impl DepthTracker {
    #[inline]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Last notified depth. `None` until the first computation.
    #[inline]
    pub const fn last(&self) -> Option<usize> {
        self.last
    }

    /// Recompute and return the new depth if it differs from the last one.
    ///
    /// The first computation always counts as a change. Nodes without a
    /// depth tag never change.
    pub fn update<V: NodeView>(
        &mut self,
        view: &V,
        node: V::Handle,
        trigger: DepthTrigger,
    ) -> Option<usize> {
        let depth = compute_depth(view, node)?;
        if self.last == Some(depth) {
            return None;
        }
        debug!(?trigger, previous = ?self.last, depth, "depth changed");
        self.last = Some(depth);
        Some(depth)
    }

    /// Recompute and notify `target` on change. Returns whether it was notified.
    pub fn check_changes<V: NodeView, A: DepthAware + ?Sized>(
        &mut self,
        view: &V,
        node: V::Handle,
        trigger: DepthTrigger,
        target: &mut A,
    ) -> bool {
        let Some(depth) = self.update(view, node, trigger) else {
            return false;
        };
        target.on_depth_changed(depth);
        true
    }

    /// Forget the last depth, e.g. after the node leaves the tree.
    #[inline]
    pub fn reset(&mut self) {
        self.last = None;
    }
}
