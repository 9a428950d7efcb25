//! Skin configuration.
//!
//! ```json
//! {
//!   "file_root": "/Textures/Interface/Default",
//!   "primary_palette": ["#4A90D9", "#3B7BC0", "#2E66A6", "#22518A", "#173C6E"],
//!   "secondary_palette": ["#E6E6E6", "#9A9A9A", "#4D4D4D", "#2B2B2B", "#141414"],
//!   "panel_margin": 3,
//!   "base_font_size": 12,
//!   "fonts": { "regular": "NotoSans", "display": "NotoSansDisplay", "mono": "NotoMono" }
//! }
//! ```
//! Every field is optional and falls back to [`SkinConfig::default`].

use crate::ConfigError;
use anyhow::{Context as _, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use style_values::Rgba;

/// Number of entries in each palette.
pub const PALETTE_SIZE: usize = 5;

const DEFAULT_PRIMARY: [Rgba; PALETTE_SIZE] = [
    Rgba::new(0.290, 0.565, 0.851, 1.0),
    Rgba::new(0.231, 0.482, 0.753, 1.0),
    Rgba::new(0.180, 0.400, 0.651, 1.0),
    Rgba::new(0.133, 0.318, 0.541, 1.0),
    Rgba::new(0.090, 0.235, 0.431, 1.0),
];

const DEFAULT_SECONDARY: [Rgba; PALETTE_SIZE] = [
    Rgba::grey(0.902),
    Rgba::grey(0.604),
    Rgba::grey(0.302),
    Rgba::grey(0.169),
    Rgba::grey(0.078),
];

static DEFAULT_CONFIG: Lazy<SkinConfig> = Lazy::new(|| SkinConfig {
    file_root: "/Textures/Interface/Default".to_owned(),
    primary_palette: DEFAULT_PRIMARY.to_vec(),
    secondary_palette: DEFAULT_SECONDARY.to_vec(),
    panel_margin: 3,
    base_font_size: 12,
    fonts: FontFamilies::default(),
});

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FontFamilies {
    pub regular: String,
    pub display: String,
    pub mono: String,
}

impl Default for FontFamilies {
    fn default() -> Self {
        Self {
            regular: "NotoSans".to_owned(),
            display: "NotoSansDisplay".to_owned(),
            mono: "NotoMono".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SkinConfig {
    /// Content directory holding the skin's textures.
    pub file_root: String,
    /// Five intense colours for accents.
    pub primary_palette: Vec<Rgba>,
    /// Five dull colours, e.g. window backgrounds and text.
    pub secondary_palette: Vec<Rgba>,
    /// Nine-patch margin of panel and button textures.
    pub panel_margin: u32,
    pub base_font_size: u32,
    pub fonts: FontFamilies,
}

impl Default for SkinConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

impl SkinConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// # Errors
    /// Returns an error on malformed JSON, unparsable colours, or palettes
    /// without exactly five entries.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text).context("parsing skin configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid configuration.
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("loading skin {}", path.display()))
    }

    /// # Errors
    /// Returns [`ConfigError::PaletteSize`] if a palette does not have
    /// [`PALETTE_SIZE`] entries.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_palette("primary", &self.primary_palette)?;
        check_palette("secondary", &self.secondary_palette)
    }

    /// Content path of a file under [`Self::file_root`].
    pub fn path(&self, file: &str) -> String {
        format!("{}/{file}", self.file_root.trim_end_matches('/'))
    }
}

fn check_palette(palette: &'static str, colors: &[Rgba]) -> Result<(), ConfigError> {
    if colors.len() == PALETTE_SIZE {
        Ok(())
    } else {
        Err(ConfigError::PaletteSize {
            palette,
            expected: PALETTE_SIZE,
            found: colors.len(),
        })
    }
}
