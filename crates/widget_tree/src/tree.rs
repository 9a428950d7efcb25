//! The retained widget tree and its mutation API.

use crate::TreeError;
use crate::node::{DepthRole, WidgetKind, WidgetNode};
use indextree::{Arena, Node, NodeId};
use log::debug;
use skin::LocalizationProvider;
use skin::consts::BUTTON as BUTTON_CLASS;
use std::sync::Arc;
use style_cascade::keys::{BACKGROUND_PANELS, BAR_STYLEBOXES};
use style_cascade::{PropertyKey, Stylesheet};
use style_depth::DepthTrigger;
use style_tree::WidgetType;
use style_tree::widget_type::{BAR, BORDERED_PANEL, BUTTON, WINDOW};
use style_values::{StyleBox, StyleValue};

/// Arena-backed widget tree.
///
/// The root is a window that is always part of the live tree; other widgets
/// are created detached and enter the live tree when attached below it.
/// Detached subtrees can be assembled ahead of time: a depth-aware widget
/// attached inside one counts the tagged ancestors it has there.
/// Every structural or style mutation synchronously recomputes the depth of
/// the affected depth-aware widgets.
pub struct WidgetTree {
    arena: Arena<WidgetNode>,
    root: NodeId,
    stylesheet: Arc<Stylesheet>,
    localization: Option<Arc<dyn LocalizationProvider>>,
}

impl WidgetTree {
    pub fn new(stylesheet: Arc<Stylesheet>) -> Self {
        let mut arena = Arena::new();
        let mut window = WidgetNode::new(&WINDOW, WidgetKind::Plain);
        window.set_name_scope(true);
        let root = arena.new_node(window);
        Self {
            arena,
            root,
            stylesheet,
            localization: None,
        }
    }

    #[must_use]
    pub fn with_localization(mut self, localization: Arc<dyn LocalizationProvider>) -> Self {
        self.localization = Some(localization);
        self
    }

    #[inline]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    #[inline]
    pub fn localization(&self) -> Option<&dyn LocalizationProvider> {
        self.localization.as_deref()
    }

    /// Swap the stylesheet. Every depth-aware widget that already has a
    /// depth picks its background again.
    pub fn set_stylesheet(&mut self, stylesheet: Arc<Stylesheet>) {
        self.stylesheet = stylesheet;
        let tracked: Vec<_> = self
            .arena
            .iter()
            .filter(|entry| !entry.is_removed())
            .filter(|entry| {
                entry
                    .get()
                    .kind()
                    .depth_role()
                    .is_some_and(|role| role.depth().is_some())
            })
            .filter_map(|entry| self.arena.get_node_id(entry))
            .collect();
        for node in tracked {
            if let Some(role) = self.depth_role_mut(node) {
                role.reset();
            }
            self.recompute_depth(node, DepthTrigger::StyleChanged);
        }
    }

    /// Widget data, if `node` exists.
    #[inline]
    pub fn node(&self, node: NodeId) -> Option<&WidgetNode> {
        self.arena
            .get(node)
            .filter(|entry| !entry.is_removed())
            .map(|entry| entry.get())
    }

    /// Mutable widget data. Style-relevant changes should go through the
    /// tree's own setters so depth-aware widgets are notified.
    pub fn node_mut(&mut self, node: NodeId) -> Option<&mut WidgetNode> {
        self.arena
            .get_mut(node)
            .filter(|entry| !entry.is_removed())
            .map(|entry| entry.get_mut())
    }

    #[inline]
    pub(crate) const fn arena(&self) -> &Arena<WidgetNode> {
        &self.arena
    }

    pub(crate) fn depth_role_mut(&mut self, node: NodeId) -> Option<&mut DepthRole> {
        self.node_mut(node)?.kind_mut().depth_role_mut()
    }

    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        self.node(node).is_some()
    }

    /// Whether `node` is attached, directly or not, below the root.
    pub fn is_live(&self, node: NodeId) -> bool {
        self.contains(node) && node.ancestors(&self.arena).any(|ancestor| ancestor == self.root)
    }

    /// Create a detached widget.
    pub fn create(&mut self, ty: &'static WidgetType) -> NodeId {
        self.arena.new_node(WidgetNode::new(ty, WidgetKind::Plain))
    }

    /// Create a detached bordered panel picking from `background-panels`.
    pub fn create_bordered_panel(&mut self) -> NodeId {
        let role = DepthRole::new(BACKGROUND_PANELS);
        self.arena
            .new_node(WidgetNode::new(&BORDERED_PANEL, WidgetKind::BorderedPanel(role)))
    }

    /// Create a detached bar picking from `bar-styleboxes`.
    pub fn create_bar(&mut self) -> NodeId {
        let role = DepthRole::new(BAR_STYLEBOXES);
        self.arena
            .new_node(WidgetNode::new(&BAR, WidgetKind::Bar(role)))
    }

    /// Create a detached button. A named button looks its text up when it
    /// enters the tree.
    pub fn create_button(&mut self, name: Option<&str>) -> NodeId {
        let mut button = WidgetNode::new(&BUTTON, WidgetKind::Button { text: None });
        button.add_class(BUTTON_CLASS);
        button.set_name(name.map(str::to_owned));
        self.arena.new_node(button)
    }

    pub fn set_name(&mut self, node: NodeId, name: Option<&str>) {
        if let Some(entry) = self.node_mut(node) {
            entry.set_name(name.map(str::to_owned));
        }
    }

    pub fn set_name_scope(&mut self, node: NodeId, scope: bool) {
        if let Some(entry) = self.node_mut(node) {
            entry.set_name_scope(scope);
        }
    }

    pub fn set_button_text(&mut self, node: NodeId, value: Option<&str>) {
        if let Some(WidgetKind::Button { text }) = self.node_mut(node).map(WidgetNode::kind_mut) {
            *text = value.map(str::to_owned);
        }
    }

    /// Attach `child` as the last child of `parent`.
    ///
    /// # Errors
    /// Fails if either widget is unknown, `child` is the root, or `child` is
    /// `parent` or one of its ancestors.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        self.check_attach(parent, child)?;
        self.take(child);
        parent
            .checked_append(child, &mut self.arena)
            .map_err(|err| TreeError::Arena(err.to_string()))?;
        self.attached(child);
        Ok(())
    }

    /// Attach `child` at `index` among `parent`'s children. When `child` is
    /// already one of them, `index` counts the other children.
    ///
    /// # Errors
    /// Fails like [`Self::append_child`], or if `index` is past the end.
    /// A failed call leaves the tree unchanged.
    pub fn insert_child(
        &mut self,
        parent: NodeId,
        index: usize,
        child: NodeId,
    ) -> Result<(), TreeError> {
        self.check_attach(parent, child)?;
        let mut len = parent.children(&self.arena).count();
        if self.arena.get(child).and_then(Node::parent) == Some(parent) {
            len -= 1;
        }
        if index > len {
            return Err(TreeError::OutOfRange { index, len });
        }
        self.take(child);
        let sibling = parent.children(&self.arena).nth(index);
        let inserted = match sibling {
            Some(next) => next.checked_insert_before(child, &mut self.arena),
            None => parent.checked_append(child, &mut self.arena),
        };
        inserted.map_err(|err| TreeError::Arena(err.to_string()))?;
        self.attached(child);
        Ok(())
    }

    /// Move the child at `from` to position `to` within the same parent.
    ///
    /// Reordering is not a style event: nothing is recomputed, and sibling
    /// selectors see the new order on the next lookup.
    ///
    /// # Errors
    /// Fails if `parent` is unknown or either position is out of range.
    pub fn move_child(&mut self, parent: NodeId, from: usize, to: usize) -> Result<(), TreeError> {
        if !self.contains(parent) {
            return Err(TreeError::UnknownNode);
        }
        let len = parent.children(&self.arena).count();
        let out_of_range = |index| TreeError::OutOfRange { index, len };
        let child = parent
            .children(&self.arena)
            .nth(from)
            .ok_or_else(|| out_of_range(from))?;
        if to >= len {
            return Err(out_of_range(to));
        }
        child.detach(&mut self.arena);
        let sibling = parent.children(&self.arena).nth(to);
        let moved = match sibling {
            Some(next) => next.checked_insert_before(child, &mut self.arena),
            None => parent.checked_append(child, &mut self.arena),
        };
        moved.map_err(|err| TreeError::Arena(err.to_string()))
    }

    /// Detach `node` and its subtree from its parent. The subtree leaves the
    /// live tree and its depth-aware widgets forget their depth.
    ///
    /// # Errors
    /// Fails if `node` is unknown or the root.
    pub fn detach(&mut self, node: NodeId) -> Result<(), TreeError> {
        if !self.contains(node) {
            return Err(TreeError::UnknownNode);
        }
        if node == self.root {
            return Err(TreeError::RootMoved);
        }
        self.take(node);
        Ok(())
    }

    /// Remove `node` and its subtree from the arena.
    ///
    /// # Errors
    /// Fails if `node` is unknown or the root.
    pub fn remove(&mut self, node: NodeId) -> Result<(), TreeError> {
        self.detach(node)?;
        node.remove_subtree(&mut self.arena);
        Ok(())
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if self.node_mut(node).is_some_and(|entry| entry.add_class(class)) {
            self.trigger_subtree(node, DepthTrigger::StyleChanged);
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if self.node_mut(node).is_some_and(|entry| entry.remove_class(class)) {
            self.trigger_subtree(node, DepthTrigger::StyleChanged);
        }
    }

    pub fn set_pseudo(&mut self, node: NodeId, pseudo: &str) {
        if self.node_mut(node).is_some_and(|entry| entry.set_pseudo(pseudo)) {
            self.trigger_subtree(node, DepthTrigger::StyleChanged);
        }
    }

    pub fn clear_pseudo(&mut self, node: NodeId, pseudo: &str) {
        if self.node_mut(node).is_some_and(|entry| entry.clear_pseudo(pseudo)) {
            self.trigger_subtree(node, DepthTrigger::StyleChanged);
        }
    }

    /// Resolve `key` for `node` against the current stylesheet.
    #[inline]
    pub fn resolve(&self, node: NodeId, key: PropertyKey) -> Option<&StyleValue> {
        self.stylesheet.resolve(self, node, key)
    }

    /// Last depth a depth-aware widget was notified of.
    #[inline]
    pub fn depth(&self, node: NodeId) -> Option<usize> {
        self.node(node)?.kind().depth_role()?.depth()
    }

    /// Background a depth-aware widget picked for its depth.
    #[inline]
    pub fn background(&self, node: NodeId) -> Option<&StyleBox> {
        self.node(node)?.kind().depth_role()?.background()
    }

    #[inline]
    pub fn button_text(&self, node: NodeId) -> Option<&str> {
        self.node(node)?.button_text()
    }

    fn check_attach(&self, parent: NodeId, child: NodeId) -> Result<(), TreeError> {
        if !self.contains(parent) || !self.contains(child) {
            return Err(TreeError::UnknownNode);
        }
        if child == self.root {
            return Err(TreeError::RootMoved);
        }
        if parent.ancestors(&self.arena).any(|ancestor| ancestor == child) {
            return Err(TreeError::Cycle);
        }
        Ok(())
    }

    /// Unlink `node` from its parent. Its subtree forgets every depth.
    fn take(&mut self, node: NodeId) {
        node.detach(&mut self.arena);
        let subtree: Vec<_> = node.descendants(&self.arena).collect();
        for widget in subtree {
            if let Some(role) = self.depth_role_mut(widget) {
                role.reset();
            }
        }
    }

    /// `child` was just given a parent: it is parented, and if the parent is
    /// live its whole subtree enters the tree.
    fn attached(&mut self, child: NodeId) {
        self.recompute_depth(child, DepthTrigger::Parented);
        let live = self.is_live(child);
        debug!("attached widget {child:?} (live: {live})");
        if live {
            self.trigger_subtree(child, DepthTrigger::EnteredTree);
        }
    }
}
