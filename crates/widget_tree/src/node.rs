//! Per-widget data stored in the arena.

use smallvec::SmallVec;
use style_cascade::PropertyKey;
use style_depth::{DepthAware, DepthTracker};
use style_tree::{DepthTag, WidgetType};
use style_values::StyleBox;

/// Depth tag shared by bordered panels and bars: both count enclosing
/// bordered panels.
pub const PANEL_DEPTH: DepthTag = DepthTag("bordered-panel");

/// State of a widget that picks its background by nesting depth.
#[derive(Clone, Debug)]
pub struct DepthRole {
    key: PropertyKey,
    tracker: DepthTracker,
    depth: Option<usize>,
    background: Option<StyleBox>,
}

impl DepthRole {
    /// Role selecting from the variant set stored under `key`.
    #[inline]
    pub const fn new(key: PropertyKey) -> Self {
        Self {
            key,
            tracker: DepthTracker::new(),
            depth: None,
            background: None,
        }
    }

    #[inline]
    pub const fn key(&self) -> PropertyKey {
        self.key
    }

    #[inline]
    pub const fn tracker(&self) -> DepthTracker {
        self.tracker
    }

    #[inline]
    pub fn set_tracker(&mut self, tracker: DepthTracker) {
        self.tracker = tracker;
    }

    /// Last depth this widget was notified of.
    #[inline]
    pub const fn depth(&self) -> Option<usize> {
        self.depth
    }

    /// Background picked for the current depth.
    #[inline]
    pub const fn background(&self) -> Option<&StyleBox> {
        self.background.as_ref()
    }

    #[inline]
    pub fn set_background(&mut self, background: StyleBox) {
        self.background = Some(background);
    }

    /// Forget the depth so the next computation notifies again.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.depth = None;
    }
}

impl DepthAware for DepthRole {
    fn on_depth_changed(&mut self, depth: usize) {
        self.depth = Some(depth);
    }
}

#[derive(Clone, Debug, Default)]
pub enum WidgetKind {
    #[default]
    Plain,
    /// Panel whose background varies with depth. Brightness-aware.
    BorderedPanel(DepthRole),
    /// Separator whose background varies with depth.
    Bar(DepthRole),
    /// Button with a text filled in from localization when it enters the tree.
    /// Brightness-aware through its resolved style box.
    Button { text: Option<String> },
}

impl WidgetKind {
    #[inline]
    pub const fn depth_role(&self) -> Option<&DepthRole> {
        match self {
            Self::BorderedPanel(role) | Self::Bar(role) => Some(role),
            Self::Plain | Self::Button { .. } => None,
        }
    }

    #[inline]
    pub const fn depth_role_mut(&mut self) -> Option<&mut DepthRole> {
        match self {
            Self::BorderedPanel(role) | Self::Bar(role) => Some(role),
            Self::Plain | Self::Button { .. } => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct WidgetNode {
    ty: &'static WidgetType,
    name: Option<String>,
    name_scope: bool,
    classes: SmallVec<String, 4>,
    pseudos: SmallVec<String, 2>,
    kind: WidgetKind,
}

impl WidgetNode {
    pub fn new(ty: &'static WidgetType, kind: WidgetKind) -> Self {
        Self {
            ty,
            name: None,
            name_scope: false,
            classes: SmallVec::new(),
            pseudos: SmallVec::new(),
            kind,
        }
    }

    #[inline]
    pub const fn widget_type(&self) -> &'static WidgetType {
        self.ty
    }

    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }

    /// Whether localization keys of named descendants are scoped to this widget.
    #[inline]
    pub const fn is_name_scope(&self) -> bool {
        self.name_scope
    }

    pub fn set_name_scope(&mut self, scope: bool) {
        self.name_scope = scope;
    }

    #[inline]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    #[inline]
    pub fn has_pseudo(&self, pseudo: &str) -> bool {
        self.pseudos.iter().any(|existing| existing == pseudo)
    }

    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Returns whether the class was newly added.
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        self.classes.push(class.to_owned());
        true
    }

    /// Returns whether the class was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|existing| existing.as_str() != class);
        self.classes.len() != before
    }

    /// Returns whether the pseudo-state was newly set.
    pub fn set_pseudo(&mut self, pseudo: &str) -> bool {
        if self.has_pseudo(pseudo) {
            return false;
        }
        self.pseudos.push(pseudo.to_owned());
        true
    }

    /// Returns whether the pseudo-state was set.
    pub fn clear_pseudo(&mut self, pseudo: &str) -> bool {
        let before = self.pseudos.len();
        self.pseudos.retain(|existing| existing.as_str() != pseudo);
        self.pseudos.len() != before
    }

    #[inline]
    pub const fn kind(&self) -> &WidgetKind {
        &self.kind
    }

    #[inline]
    pub const fn kind_mut(&mut self) -> &mut WidgetKind {
        &mut self.kind
    }

    /// Text shown by a button, if this is one.
    pub fn button_text(&self) -> Option<&str> {
        match &self.kind {
            WidgetKind::Button { text } => text.as_deref(),
            WidgetKind::Plain | WidgetKind::BorderedPanel(_) | WidgetKind::Bar(_) => None,
        }
    }
}
