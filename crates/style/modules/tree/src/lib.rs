//! Node capability view.
//!
//! Everything the style engine needs to know about a widget tree goes through
//! [`NodeView`]: identity, declared type, class tags, pseudo-states, the parent
//! link and the ordered children. Two capabilities are optional and default
//! to "not implemented": brightness (consumed by luminance selectors) and the
//! depth tag (consumed by the depth protocol).

mod ancestors;
mod memory;
pub mod widget_type;

pub use ancestors::Ancestors;
pub use memory::MemoryTree;
pub use widget_type::WidgetType;

/// Identity of the depth-aware capability a node implements.
///
/// Nodes only count ancestors carrying the same tag when computing their
/// nesting depth, regardless of their declared widget type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DepthTag(pub &'static str);

impl DepthTag {
    #[inline]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

/// An adapter that abstracts widget tree access for selector matching,
/// cascade resolution and depth computation.
///
/// Implementations must keep the parent link and the children list mutually
/// consistent: a node is found exactly once among its parent's children.
pub trait NodeView {
    type Handle: Copy + Eq;

    /// Parent node, if any.
    fn parent(&self, node: Self::Handle) -> Option<Self::Handle>;

    /// Number of direct children.
    fn child_count(&self, node: Self::Handle) -> usize;

    /// The child at `index` in the parent's current child order.
    fn child_at(&self, node: Self::Handle, index: usize) -> Option<Self::Handle>;

    /// Declared widget type.
    fn widget_type(&self, node: Self::Handle) -> &'static WidgetType;

    /// True if the node carries the given class tag.
    fn has_class(&self, node: Self::Handle, class: &str) -> bool;

    /// True if the given pseudo-state is currently active on the node.
    fn has_pseudo(&self, node: Self::Handle, pseudo: &str) -> bool;

    /// Position of `node` among its parent's children.
    #[inline]
    fn child_index(&self, node: Self::Handle) -> Option<usize> {
        let parent = self.parent(node)?;
        (0..self.child_count(parent)).find(|&index| self.child_at(parent, index) == Some(node))
    }

    /// Brightness capability: the rendered luminance of the node in `[0, 1]`.
    #[inline]
    fn brightness(&self, _node: Self::Handle) -> Option<f32> {
        None
    }

    /// Depth-aware capability: the tag shared with the ancestors this node counts.
    #[inline]
    fn depth_tag(&self, _node: Self::Handle) -> Option<DepthTag> {
        None
    }

    /// Strict ancestors of `node`, nearest first.
    #[inline]
    fn ancestors(&self, node: Self::Handle) -> Ancestors<'_, Self>
    where
        Self: Sized,
    {
        Ancestors::new(self, node)
    }
}
