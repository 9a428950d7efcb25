//! Style class and pseudo-state names shared by rules and widgets.

pub const BUTTON: &str = "button";
pub const POSITIVE: &str = "positive";
pub const NEGATIVE: &str = "negative";
pub const BOLD: &str = "bold";

pub const WINDOW_BACKGROUND: &str = "windowBackground";
pub const WINDOW_CONTENTS_BACKGROUND: &str = "windowContentsBackground";
pub const WINDOW_CLOSE_BUTTON: &str = "windowCloseButton";
pub const WINDOW_ICON: &str = "windowIcon";

pub const CHECKBOX: &str = "checkBox";
pub const CHECKBOX_CHECKED: &str = "checkBoxChecked";

pub const PSEUDO_NORMAL: &str = "normal";
pub const PSEUDO_HOVER: &str = "hover";
pub const PSEUDO_PRESSED: &str = "pressed";
pub const PSEUDO_DISABLED: &str = "disabled";
