//! Widget type descriptors and the built-in type hierarchy.

use core::fmt;

/// A declared widget type with an optional supertype.
///
/// Types are `'static` descriptors linked into a single-inheritance chain,
/// so `Type` selectors can match a type or any of its subtypes.
#[derive(Debug)]
pub struct WidgetType {
    name: &'static str,
    parent: Option<&'static WidgetType>,
}

impl WidgetType {
    /// A type with no supertype.
    #[inline]
    pub const fn root(name: &'static str) -> Self {
        Self { name, parent: None }
    }

    /// A type deriving from `parent`.
    #[inline]
    pub const fn derived(name: &'static str, parent: &'static Self) -> Self {
        Self {
            name,
            parent: Some(parent),
        }
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn parent(&self) -> Option<&'static Self> {
        self.parent
    }

    /// True if `self` is `other` or one of its subtypes.
    pub fn is_a(&self, other: &Self) -> bool {
        let mut current = Some(self);
        while let Some(ty) = current {
            if ty == other {
                return true;
            }
            current = ty.parent;
        }
        false
    }
}

/// Type names are unique; identity is the name.
impl PartialEq for WidgetType {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for WidgetType {}

impl fmt::Display for WidgetType {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name)
    }
}

/// Root of every widget type.
pub static CONTROL: WidgetType = WidgetType::root("Control");
/// Any widget that lays out children.
pub static CONTAINER: WidgetType = WidgetType::derived("Container", &CONTROL);
/// Container that draws a single panel style box behind its children.
pub static PANEL_CONTAINER: WidgetType = WidgetType::derived("PanelContainer", &CONTAINER);
/// Panel whose background alternates with nesting depth.
pub static BORDERED_PANEL: WidgetType = WidgetType::derived("BorderedPanel", &PANEL_CONTAINER);
/// Thin horizontal or vertical separator bar.
pub static BAR: WidgetType = WidgetType::derived("Bar", &PANEL_CONTAINER);
/// Vertical or horizontal stack.
pub static STACK: WidgetType = WidgetType::derived("Stack", &CONTAINER);
/// Grid layout container.
pub static GRID: WidgetType = WidgetType::derived("Grid", &CONTAINER);
/// Top-level window.
pub static WINDOW: WidgetType = WidgetType::derived("Window", &CONTAINER);
/// Clickable container drawing a style box.
pub static CONTAINER_BUTTON: WidgetType = WidgetType::derived("ContainerButton", &CONTAINER);
/// Container button with a text child.
pub static BUTTON: WidgetType = WidgetType::derived("Button", &CONTAINER_BUTTON);
/// Button drawn from textures.
pub static TEXTURE_BUTTON: WidgetType = WidgetType::derived("TextureButton", &CONTROL);
/// Textured rectangle.
pub static TEXTURE_RECT: WidgetType = WidgetType::derived("TextureRect", &CONTROL);
/// Text label.
pub static LABEL: WidgetType = WidgetType::derived("Label", &CONTROL);
/// Label naming an input field.
pub static INPUT_LABEL: WidgetType = WidgetType::derived("InputLabel", &LABEL);
/// Range slider.
pub static SLIDER: WidgetType = WidgetType::derived("Slider", &CONTROL);
