//! Skins: palettes, textures and fonts loaded through collaborator
//! interfaces, and the stylesheet rules built from them.
//!
//! A skin is described by a [`SkinConfig`] and loaded with [`Skin::load`],
//! which probes numbered texture sets (`panel_bg_{0}.png`, ...) under the
//! configured file root. [`Skin::stylesheet`] then assembles the base rules
//! and the built-in sub-sheets into an immutable stylesheet.

mod base;
mod config;
pub mod consts;
mod error;
mod helpers;
mod providers;
pub mod sheets;
mod textures;

pub use base::{ButtonBackgrounds, Skin};
pub use config::{FontFamilies, PALETTE_SIZE, SkinConfig};
pub use error::ConfigError;
pub use helpers::{SkinSelectorExt, button, button_of};
pub use providers::{
    DEFAULT_MEAN_COLOR, FontProvider, FsResourceProvider, LocalizationProvider, MapLocalization,
    ResourceProvider, StaticFontProvider,
};
pub use textures::{load_indefinite_texture_set, load_nine_patch_set, texture_path};
