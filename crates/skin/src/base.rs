//! The loaded skin: palettes, textures and fonts, and the rules built from them.

use crate::sheets::{BarSheet, ButtonSheet, CheckBoxSheet, InputLabelSheet, WindowSheet};
use crate::textures::{load_indefinite_texture_set, load_nine_patch_set};
use crate::{ConfigError, FontProvider, ResourceProvider, SkinConfig, consts};
use anyhow::{Context as _, Result};
use log::info;
use std::sync::Arc;
use style_cascade::keys::{
    BACKGROUND_PANELS, BAR_STYLEBOXES, FONT, FONT_COLOR, PRIMARY_PALETTE, SECONDARY_PALETTE,
    SLIDER_BACKGROUND, SLIDER_FILL, SLIDER_FOREGROUND, SLIDER_GRABBER, STRETCH_MODE, STYLE_BOX,
};
use style_cascade::{Rule, SelectorExt as _, Stylesheet, StylesheetBuilder};
use style_selectors::{element, of_type};
use style_tree::widget_type::{BAR, SLIDER, TEXTURE_BUTTON, TEXTURE_RECT};
use style_values::{FontHandle, FontWeight, Rgba, StyleBox, StyleValue, Texture, VariantSet};

/// Nine-patch margin of slider textures.
const SLIDER_MARGIN: u32 = 14;
const SLIDER_TRACK_TINT: &str = "#141111FF";

/// Backgrounds of one button flavour, indexed normal, hover, pressed, disabled.
#[derive(Clone, Debug, Default)]
pub struct ButtonBackgrounds(Vec<StyleBox>);

impl ButtonBackgrounds {
    #[inline]
    pub fn normal(&self) -> Option<&StyleBox> {
        self.0.first()
    }

    #[inline]
    pub fn hover(&self) -> Option<&StyleBox> {
        self.0.get(1)
    }

    #[inline]
    pub fn pressed(&self) -> Option<&StyleBox> {
        self.0.get(2)
    }

    #[inline]
    pub fn disabled(&self) -> Option<&StyleBox> {
        self.0.get(3)
    }
}

pub struct Skin {
    config: SkinConfig,
    resources: Arc<dyn ResourceProvider>,
    panel_backgrounds: VariantSet,
    bar_backgrounds: VariantSet,
    primary_solids: Vec<StyleBox>,
    secondary_solids: Vec<StyleBox>,
    buttons: ButtonBackgrounds,
    positive_buttons: ButtonBackgrounds,
    negative_buttons: ButtonBackgrounds,
    font: FontHandle,
    bold_font: FontHandle,
}

impl Skin {
    /// Load every texture set the skin needs and resolve its fonts.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid, no panel backgrounds
    /// exist under the file root, or a texture fails to load.
    pub fn load(
        config: SkinConfig,
        resources: Arc<dyn ResourceProvider>,
        fonts: &dyn FontProvider,
    ) -> Result<Self> {
        config.validate()?;
        let margin = config.panel_margin;
        let nine_patch = |file: &str| {
            let template = config.path(file);
            load_nine_patch_set(resources.as_ref(), &template, margin)
                .with_context(|| format!("loading texture set {template}"))
        };

        let panels = nine_patch("panel_bg_{0}.png")?;
        let panel_backgrounds = VariantSet::new(panels).map_err(|_err| {
            ConfigError::EmptyVariantSet {
                property: BACKGROUND_PANELS.name(),
            }
        })?;
        let buttons = ButtonBackgrounds(nine_patch("button_bg_{0}.png")?);
        let positive_buttons = ButtonBackgrounds(nine_patch("button_positive_bg_{0}.png")?);
        let negative_buttons = ButtonBackgrounds(nine_patch("button_negative_bg_{0}.png")?);

        let primary_solids: Vec<_> = config
            .primary_palette
            .iter()
            .map(|&color| StyleBox::flat(color))
            .collect();
        let secondary_solids: Vec<_> = config
            .secondary_palette
            .iter()
            .map(|&color| StyleBox::flat(color))
            .collect();
        let bar_backgrounds = VariantSet::new(secondary_solids.clone()).map_err(|_err| {
            ConfigError::EmptyVariantSet {
                property: BAR_STYLEBOXES.name(),
            }
        })?;

        let size = config.base_font_size;
        let font = fonts.get_font(&config.fonts.regular, size, FontWeight::Regular);
        let bold_font = fonts.get_font(&config.fonts.regular, size, FontWeight::Bold);

        info!(
            "loaded skin from {}: {} panel variants",
            config.file_root,
            panel_backgrounds.len()
        );
        Ok(Self {
            config,
            resources,
            panel_backgrounds,
            bar_backgrounds,
            primary_solids,
            secondary_solids,
            buttons,
            positive_buttons,
            negative_buttons,
            font,
            bold_font,
        })
    }

    #[inline]
    pub const fn config(&self) -> &SkinConfig {
        &self.config
    }

    #[inline]
    pub fn primary_palette(&self) -> &[Rgba] {
        &self.config.primary_palette
    }

    #[inline]
    pub fn secondary_palette(&self) -> &[Rgba] {
        &self.config.secondary_palette
    }

    #[inline]
    pub const fn panel_backgrounds(&self) -> &VariantSet {
        &self.panel_backgrounds
    }

    #[inline]
    pub fn primary_solids(&self) -> &[StyleBox] {
        &self.primary_solids
    }

    #[inline]
    pub fn secondary_solids(&self) -> &[StyleBox] {
        &self.secondary_solids
    }

    #[inline]
    pub const fn buttons(&self) -> &ButtonBackgrounds {
        &self.buttons
    }

    #[inline]
    pub const fn positive_buttons(&self) -> &ButtonBackgrounds {
        &self.positive_buttons
    }

    #[inline]
    pub const fn negative_buttons(&self) -> &ButtonBackgrounds {
        &self.negative_buttons
    }

    #[inline]
    pub const fn font(&self) -> &FontHandle {
        &self.font
    }

    #[inline]
    pub const fn bold_font(&self) -> &FontHandle {
        &self.bold_font
    }

    /// Load one texture from the skin's file root.
    ///
    /// # Errors
    /// Returns an error if the texture is missing or unreadable.
    pub fn load_texture(&self, file: &str) -> Result<Texture> {
        self.resources.load_texture(&self.config.path(file))
    }

    /// Load a numbered texture set from the skin's file root.
    ///
    /// # Errors
    /// Returns an error if a probed texture fails to load.
    pub fn load_texture_set(&self, template: &str) -> Result<Vec<Texture>> {
        load_indefinite_texture_set(self.resources.as_ref(), &self.config.path(template))
    }

    /// Rules every stylesheet built from this skin starts with.
    ///
    /// # Errors
    /// Returns an error if a slider texture is missing.
    pub fn base_rules(&self) -> Result<Vec<Rule>> {
        let secondary = self.secondary_palette();
        let primary = self.primary_palette();
        let tint = Rgba::from_hex(SLIDER_TRACK_TINT).map_err(ConfigError::from)?;
        let slider_box = |file: &str| -> Result<StyleBox> {
            Ok(StyleBox::patch(self.load_texture(file)?, SLIDER_MARGIN))
        };

        Ok(vec![
            element().prop(BACKGROUND_PANELS, self.panel_backgrounds.clone()),
            element().prop(BAR_STYLEBOXES, self.bar_backgrounds.clone()),
            element().prop(PRIMARY_PALETTE, StyleValue::Palette(primary.into())),
            element().prop(SECONDARY_PALETTE, StyleValue::Palette(secondary.into())),
            element().prop(FONT, self.font.clone()),
            element()
                .class(consts::BOLD)
                .prop(FONT, self.bold_font.clone()),
            element().prop(FONT_COLOR, palette_entry(secondary, 0)),
            of_type(&BAR).prop(STYLE_BOX, self.bar_backgrounds.select(0).clone()),
            of_type(&SLIDER)
                .prop(SLIDER_BACKGROUND, slider_box("slider_fill.png")?.modulate(tint))
                .prop(
                    SLIDER_FOREGROUND,
                    slider_box("slider_outline.png")?.modulate(palette_entry(secondary, 4)),
                )
                .prop(SLIDER_GRABBER, slider_box("slider_grabber.png")?.zoom(2.0))
                .prop(
                    SLIDER_FILL,
                    slider_box("slider_fill.png")?.modulate(palette_entry(primary, 1)),
                ),
            of_type(&TEXTURE_BUTTON)
                .parent_of(of_type(&TEXTURE_RECT))
                .prop(STRETCH_MODE, StyleValue::Keyword("keep-centered")),
        ])
    }

    /// A builder holding the base rules and the built-in sub-sheets.
    /// Further providers can be registered before building.
    ///
    /// # Errors
    /// Returns an error if the base rules cannot be built.
    pub fn builder(&self) -> Result<StylesheetBuilder<'_, Self>> {
        Ok(StylesheetBuilder::new(self)
            .base_rules(self.base_rules()?)
            .register(BarSheet)
            .register(ButtonSheet)
            .register(CheckBoxSheet)
            .register(InputLabelSheet)
            .register(WindowSheet)
            .variant_property(BACKGROUND_PANELS)
            .variant_property(BAR_STYLEBOXES))
    }

    /// Build the complete stylesheet for this skin.
    ///
    /// # Errors
    /// Returns an error if any rule provider fails.
    pub fn stylesheet(&self) -> Result<Stylesheet> {
        self.builder()?.build()
    }
}

/// Palette entry by index. Palettes are validated to five entries on load.
pub fn palette_entry(palette: &[Rgba], index: usize) -> Rgba {
    palette.get(index).copied().unwrap_or(Rgba::TRANSPARENT)
}
