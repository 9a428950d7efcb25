use crate::helpers::SkinSelectorExt as _;
use crate::textures::texture_path;
use crate::{ConfigError, Skin, consts};
use anyhow::Result;
use style_cascade::keys::{PANEL, TEXTURE, TEXTURE_SIZE_TARGET};
use style_cascade::{Rule, RuleProvider, SelectorExt as _};
use style_selectors::{element, of_type};
use style_tree::widget_type::{TEXTURE_BUTTON, TEXTURE_RECT};
use style_values::{Size, Texture};

const CLOSE_TEMPLATE: &str = "window_cross_{0}.png";
const CLOSE_ICON_SIZE: Size = Size::new(32.0, 32.0);
const WINDOW_ICON_SIZE: Size = Size::new(28.0, 28.0);

/// Window backgrounds, the close button and the title icon.
pub struct WindowSheet;

fn close_texture(skin: &Skin, textures: &[Texture], index: usize) -> Result<Texture, ConfigError> {
    textures
        .get(index)
        .cloned()
        .ok_or_else(|| ConfigError::MissingTexture {
            path: skin.config().path(&texture_path(CLOSE_TEMPLATE, index)),
        })
}

impl RuleProvider<Skin> for WindowSheet {
    fn name(&self) -> &'static str {
        "window"
    }

    fn rules(&self, skin: &Skin) -> Result<Vec<Rule>> {
        let crosses = skin.load_texture_set(CLOSE_TEMPLATE)?;
        let background = skin.panel_backgrounds().select(0).clone();
        let close_button = || of_type(&TEXTURE_BUTTON).class(consts::WINDOW_CLOSE_BUTTON);
        let icon = || of_type(&TEXTURE_RECT);

        Ok(vec![
            element()
                .class(consts::WINDOW_BACKGROUND)
                .prop(PANEL, background.clone()),
            element()
                .class(consts::WINDOW_CONTENTS_BACKGROUND)
                .prop(PANEL, background),
            close_button()
                .parent_of(icon())
                .prop(TEXTURE, close_texture(skin, &crosses, 2)?)
                .prop(TEXTURE_SIZE_TARGET, CLOSE_ICON_SIZE),
            close_button()
                .hover()
                .parent_of(icon())
                .prop(TEXTURE, close_texture(skin, &crosses, 3)?),
            close_button()
                .pressed()
                .parent_of(icon())
                .prop(TEXTURE, close_texture(skin, &crosses, 1)?),
            of_type(&TEXTURE_RECT)
                .class(consts::WINDOW_ICON)
                .prop(TEXTURE_SIZE_TARGET, WINDOW_ICON_SIZE),
        ])
    }
}
