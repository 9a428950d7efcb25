//! Property keys.

use core::fmt;

/// Name of a style property. Rules map keys to values and widgets query by key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropertyKey(pub &'static str);

impl PropertyKey {
    #[inline]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.0)
    }
}

/// Keys understood by the built-in widgets.
pub mod keys {
    use super::PropertyKey;

    /// Background style box. Also what luminance selectors probe on ancestors.
    pub const STYLE_BOX: PropertyKey = PropertyKey("style-box");
    /// Depth-selected backgrounds of bordered panels.
    pub const BACKGROUND_PANELS: PropertyKey = PropertyKey("background-panels");
    /// Depth-selected backgrounds of bars.
    pub const BAR_STYLEBOXES: PropertyKey = PropertyKey("bar-styleboxes");
    /// Panel background of panel containers.
    pub const PANEL: PropertyKey = PropertyKey("panel");
    pub const PRIMARY_PALETTE: PropertyKey = PropertyKey("primary-palette");
    pub const SECONDARY_PALETTE: PropertyKey = PropertyKey("secondary-palette");
    pub const FONT: PropertyKey = PropertyKey("font");
    pub const FONT_COLOR: PropertyKey = PropertyKey("font-color");
    pub const TEXTURE: PropertyKey = PropertyKey("texture");
    /// Target size textures are scaled to fit, e.g. checkbox icons.
    pub const TEXTURE_SIZE_TARGET: PropertyKey = PropertyKey("texture-size-target");
    pub const STRETCH_MODE: PropertyKey = PropertyKey("stretch-mode");
    /// Minimum size of the node's content.
    pub const MIN_SIZE: PropertyKey = PropertyKey("min-size");

    pub const SLIDER_BACKGROUND: PropertyKey = PropertyKey("background");
    pub const SLIDER_FOREGROUND: PropertyKey = PropertyKey("foreground");
    pub const SLIDER_GRABBER: PropertyKey = PropertyKey("grabber");
    pub const SLIDER_FILL: PropertyKey = PropertyKey("fill");
}
