//! Numbered texture sets.
//!
//! A set is named by a template containing `{0}`, e.g. `panel_bg_{0}.png`.
//! Indices are probed from zero until the first missing file.

use crate::ResourceProvider;
use anyhow::Result;
use log::{debug, warn};
use style_values::{StyleBox, Texture};

/// Expand a `{0}` template for one index.
#[inline]
pub fn texture_path(template: &str, index: usize) -> String {
    template.replace("{0}", &index.to_string())
}

/// Load every texture of a numbered set, in index order.
///
/// # Errors
/// Returns an error if a probed texture exists but fails to load.
pub fn load_indefinite_texture_set(
    resources: &dyn ResourceProvider,
    template: &str,
) -> Result<Vec<Texture>> {
    let mut textures = Vec::new();
    loop {
        let path = texture_path(template, textures.len());
        if !resources.texture_exists(&path) {
            break;
        }
        textures.push(resources.load_texture(&path)?);
    }
    if textures.is_empty() {
        warn!("texture set {template} is empty");
    } else {
        debug!("texture set {template}: {} textures", textures.len());
    }
    Ok(textures)
}

/// Load a numbered set as nine-patch style boxes with a uniform margin.
///
/// # Errors
/// Returns an error if a probed texture exists but fails to load.
pub fn load_nine_patch_set(
    resources: &dyn ResourceProvider,
    template: &str,
    margin: u32,
) -> Result<Vec<StyleBox>> {
    let textures = load_indefinite_texture_set(resources, template)?;
    Ok(textures
        .into_iter()
        .map(|texture| StyleBox::patch(texture, margin))
        .collect())
}
