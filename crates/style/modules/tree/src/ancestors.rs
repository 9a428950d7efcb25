//! Lazy nearest-first walk over a node's strict ancestors.

use crate::NodeView;
use core::iter::FusedIterator;

/// Iterator over the strict ancestors of a node, nearest first.
///
/// The walk is lazy and finite. A clone walks independently from the same
/// position; call [`NodeView::ancestors`] again to restart from the node.
pub struct Ancestors<'view, V: NodeView> {
    view: &'view V,
    next: Option<V::Handle>,
}

impl<'view, V: NodeView> Ancestors<'view, V> {
    #[inline]
    pub fn new(view: &'view V, node: V::Handle) -> Self {
        Self {
            view,
            next: view.parent(node),
        }
    }
}

impl<V: NodeView> Clone for Ancestors<'_, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            view: self.view,
            next: self.next,
        }
    }
}

impl<V: NodeView> Iterator for Ancestors<'_, V> {
    type Item = V::Handle;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.view.parent(current);
        Some(current)
    }
}

impl<V: NodeView> FusedIterator for Ancestors<'_, V> {}
