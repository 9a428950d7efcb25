//! Depth protocol glue: which widgets recompute on which events.

use crate::WidgetTree;
use crate::node::WidgetKind;
use indextree::NodeId;
use style_depth::{DepthAware as _, DepthTrigger, select_variant};
use tracing::debug;

impl WidgetTree {
    /// Deliver `trigger` to `node` and every descendant, parents first.
    pub(crate) fn trigger_subtree(&mut self, node: NodeId, trigger: DepthTrigger) {
        if !self.contains(node) {
            return;
        }
        let subtree: Vec<_> = node.descendants(self.arena()).collect();
        for widget in subtree {
            if trigger == DepthTrigger::EnteredTree {
                self.entered_tree(widget);
            }
            self.recompute_depth(widget, trigger);
        }
    }

    /// Recompute the depth of a depth-aware widget and, when it changed,
    /// pick the matching background from the widget's variant property.
    pub(crate) fn recompute_depth(&mut self, node: NodeId, trigger: DepthTrigger) {
        let Some(role) = self.node(node).and_then(|entry| entry.kind().depth_role()) else {
            return;
        };
        let key = role.key();
        let mut tracker = role.tracker();
        let changed = tracker.update(&*self, node, trigger);
        let background = changed.and_then(|depth| {
            let variants = self.stylesheet().resolve_variants(&*self, node, key)?;
            Some(select_variant(variants, depth).clone())
        });

        let Some(state) = self.depth_role_mut(node) else {
            return;
        };
        state.set_tracker(tracker);
        let Some(depth) = changed else {
            return;
        };
        state.on_depth_changed(depth);
        let Some(background) = background else {
            debug!(%key, depth, "no variants to pick a background from");
            return;
        };
        state.set_background(background);
    }

    /// A button entering the tree takes its localized text, or its name when
    /// it has no text.
    fn entered_tree(&mut self, node: NodeId) {
        let Some(entry) = self.node(node) else {
            return;
        };
        let WidgetKind::Button { text } = entry.kind() else {
            return;
        };
        let localized = self
            .localization()
            .and_then(|provider| self.localized_string(node, provider, None));
        let fallback = entry.name().filter(|_| text.is_none()).map(str::to_owned);
        if let Some(value) = localized.or(fallback) {
            self.set_button_text(node, Some(&value));
        }
    }
}
