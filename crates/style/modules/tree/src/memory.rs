//! Minimal in-memory tree implementing [`NodeView`].
//!
//! Handles are plain indices. Used by headless tooling and by the engine's
//! test suites, where a full widget tree is more than needed.

use crate::widget_type::CONTROL;
use crate::{DepthTag, NodeView, WidgetType};

#[derive(Debug)]
struct MemoryNode {
    ty: &'static WidgetType,
    classes: Vec<String>,
    pseudos: Vec<String>,
    parent: Option<usize>,
    children: Vec<usize>,
    brightness: Option<f32>,
    depth_tag: Option<DepthTag>,
}

#[derive(Debug, Default)]
pub struct MemoryTree {
    nodes: Vec<MemoryNode>,
}

impl MemoryTree {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a detached node and return its handle.
    pub fn add(&mut self, ty: &'static WidgetType) -> usize {
        self.nodes.push(MemoryNode {
            ty,
            classes: Vec::new(),
            pseudos: Vec::new(),
            parent: None,
            children: Vec::new(),
            brightness: None,
            depth_tag: None,
        });
        self.nodes.len().saturating_sub(1)
    }

    /// Add a node as the last child of `parent`.
    pub fn add_child(&mut self, parent: usize, ty: &'static WidgetType) -> usize {
        let node = self.add(ty);
        if let Some(parent_node) = self.nodes.get_mut(parent) {
            parent_node.children.push(node);
            if let Some(child) = self.nodes.get_mut(node) {
                child.parent = Some(parent);
            }
        }
        node
    }

    pub fn add_class(&mut self, node: usize, class: &str) -> &mut Self {
        if let Some(entry) = self.nodes.get_mut(node)
            && !entry.classes.iter().any(|existing| existing == class)
        {
            entry.classes.push(class.to_owned());
        }
        self
    }

    pub fn remove_class(&mut self, node: usize, class: &str) -> &mut Self {
        if let Some(entry) = self.nodes.get_mut(node) {
            entry.classes.retain(|existing| existing != class);
        }
        self
    }

    pub fn set_pseudo(&mut self, node: usize, pseudo: &str) -> &mut Self {
        if let Some(entry) = self.nodes.get_mut(node)
            && !entry.pseudos.iter().any(|existing| existing == pseudo)
        {
            entry.pseudos.push(pseudo.to_owned());
        }
        self
    }

    pub fn clear_pseudo(&mut self, node: usize, pseudo: &str) -> &mut Self {
        if let Some(entry) = self.nodes.get_mut(node) {
            entry.pseudos.retain(|existing| existing != pseudo);
        }
        self
    }

    pub fn set_brightness(&mut self, node: usize, brightness: f32) -> &mut Self {
        if let Some(entry) = self.nodes.get_mut(node) {
            entry.brightness = Some(brightness);
        }
        self
    }

    pub fn set_depth_tag(&mut self, node: usize, tag: DepthTag) -> &mut Self {
        if let Some(entry) = self.nodes.get_mut(node) {
            entry.depth_tag = Some(tag);
        }
        self
    }

    /// Swap two positions in `parent`'s child order.
    pub fn swap_children(&mut self, parent: usize, first: usize, second: usize) {
        if let Some(entry) = self.nodes.get_mut(parent)
            && first < entry.children.len()
            && second < entry.children.len()
        {
            entry.children.swap(first, second);
        }
    }
}

impl NodeView for MemoryTree {
    type Handle = usize;

    #[inline]
    fn parent(&self, node: usize) -> Option<usize> {
        self.nodes.get(node)?.parent
    }

    #[inline]
    fn child_count(&self, node: usize) -> usize {
        self.nodes.get(node).map_or(0, |entry| entry.children.len())
    }

    #[inline]
    fn child_at(&self, node: usize, index: usize) -> Option<usize> {
        self.nodes.get(node)?.children.get(index).copied()
    }

    #[inline]
    fn widget_type(&self, node: usize) -> &'static WidgetType {
        self.nodes
            .get(node)
            .map_or(&CONTROL, |entry| entry.ty)
    }

    #[inline]
    fn has_class(&self, node: usize, class: &str) -> bool {
        self.nodes
            .get(node)
            .is_some_and(|entry| entry.classes.iter().any(|existing| existing == class))
    }

    #[inline]
    fn has_pseudo(&self, node: usize, pseudo: &str) -> bool {
        self.nodes
            .get(node)
            .is_some_and(|entry| entry.pseudos.iter().any(|existing| existing == pseudo))
    }

    #[inline]
    fn brightness(&self, node: usize) -> Option<f32> {
        self.nodes.get(node)?.brightness
    }

    #[inline]
    fn depth_tag(&self, node: usize) -> Option<DepthTag> {
        self.nodes.get(node)?.depth_tag
    }
}
