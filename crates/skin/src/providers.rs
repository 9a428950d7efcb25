//! Collaborator interfaces the skin is built against.

use crate::ConfigError;
use anyhow::{Context as _, Result};
use log::debug;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use style_values::{FontHandle, FontWeight, Rgba, Texture};

/// Loads textures by content path.
pub trait ResourceProvider {
    /// # Errors
    /// Returns an error if the texture does not exist or cannot be read.
    fn load_texture(&self, path: &str) -> Result<Texture>;

    fn texture_exists(&self, path: &str) -> bool;
}

/// Mean colour assumed for textures without a sidecar.
pub const DEFAULT_MEAN_COLOR: Rgba = Rgba::grey(0.5);

/// Serves textures from a directory.
///
/// Content paths are resolved against the root, ignoring a leading `/`.
/// A texture's mean colour is read from a `<file>.mean` sidecar holding a hex
/// colour, or defaults to [`DEFAULT_MEAN_COLOR`].
#[derive(Clone, Debug)]
pub struct FsResourceProvider {
    root: PathBuf,
}

impl FsResourceProvider {
    #[inline]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }

    fn mean_color(file: &Path) -> Result<Rgba> {
        let mut sidecar = file.as_os_str().to_owned();
        sidecar.push(".mean");
        let sidecar = PathBuf::from(sidecar);
        if !sidecar.is_file() {
            return Ok(DEFAULT_MEAN_COLOR);
        }
        let text = fs::read_to_string(&sidecar)
            .with_context(|| format!("reading {}", sidecar.display()))?;
        let color = Rgba::from_hex(text.trim()).map_err(ConfigError::from)?;
        Ok(color)
    }
}

impl ResourceProvider for FsResourceProvider {
    fn load_texture(&self, path: &str) -> Result<Texture> {
        let file = self.resolve(path);
        if !file.is_file() {
            return Err(ConfigError::MissingTexture {
                path: path.to_owned(),
            }
            .into());
        }
        let mean = Self::mean_color(&file)?;
        debug!("loaded texture {path}");
        Ok(Texture::new(path, mean))
    }

    fn texture_exists(&self, path: &str) -> bool {
        self.resolve(path).is_file()
    }
}

/// Hands out font handles.
pub trait FontProvider {
    fn get_font(&self, family: &str, size: u32, weight: FontWeight) -> FontHandle;
}

/// Font provider without rasterization: every request is answered with a
/// plain handle.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticFontProvider;

impl FontProvider for StaticFontProvider {
    #[inline]
    fn get_font(&self, family: &str, size: u32, weight: FontWeight) -> FontHandle {
        FontHandle::new(family, size, weight)
    }
}

/// Looks up localized strings.
pub trait LocalizationProvider {
    fn lookup(&self, key: &str) -> Option<String>;
}

/// In-memory string table.
#[derive(Clone, Debug, Default)]
pub struct MapLocalization {
    strings: HashMap<String, String>,
}

impl MapLocalization {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.strings.insert(key.into(), value.into());
        self
    }
}

impl FromIterator<(String, String)> for MapLocalization {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            strings: iter.into_iter().collect(),
        }
    }
}

impl LocalizationProvider for MapLocalization {
    #[inline]
    fn lookup(&self, key: &str) -> Option<String> {
        self.strings.get(key).cloned()
    }
}
