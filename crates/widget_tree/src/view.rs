use crate::WidgetTree;
use crate::node::{PANEL_DEPTH, WidgetKind, WidgetNode};
use indextree::NodeId;
use style_cascade::keys::STYLE_BOX;
use style_tree::widget_type::CONTROL;
use style_tree::{DepthTag, NodeView, WidgetType};
use style_values::StyleBox;

impl NodeView for WidgetTree {
    type Handle = NodeId;

    #[inline]
    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.arena().get(node)?.parent()
    }

    #[inline]
    fn child_count(&self, node: NodeId) -> usize {
        node.children(self.arena()).count()
    }

    #[inline]
    fn child_at(&self, node: NodeId, index: usize) -> Option<NodeId> {
        node.children(self.arena()).nth(index)
    }

    #[inline]
    fn child_index(&self, node: NodeId) -> Option<usize> {
        self.parent(node)?;
        Some(node.preceding_siblings(self.arena()).skip(1).count())
    }

    #[inline]
    fn widget_type(&self, node: NodeId) -> &'static WidgetType {
        self.node(node).map_or(&CONTROL, WidgetNode::widget_type)
    }

    #[inline]
    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.node(node).is_some_and(|entry| entry.has_class(class))
    }

    #[inline]
    fn has_pseudo(&self, node: NodeId, pseudo: &str) -> bool {
        self.node(node).is_some_and(|entry| entry.has_pseudo(pseudo))
    }

    /// Bordered panels report their depth-selected background; buttons their
    /// resolved style box.
    fn brightness(&self, node: NodeId) -> Option<f32> {
        match self.node(node)?.kind() {
            WidgetKind::BorderedPanel(role) => role.background().map(StyleBox::luminance),
            WidgetKind::Button { .. } => self
                .stylesheet()
                .resolve_style_box(self, node, STYLE_BOX)
                .map(StyleBox::luminance),
            WidgetKind::Plain | WidgetKind::Bar(_) => None,
        }
    }

    #[inline]
    fn depth_tag(&self, node: NodeId) -> Option<DepthTag> {
        self.node(node)?.kind().depth_role().map(|_| PANEL_DEPTH)
    }
}
