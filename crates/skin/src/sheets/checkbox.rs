use crate::{Skin, consts};
use anyhow::Result;
use style_cascade::keys::{TEXTURE, TEXTURE_SIZE_TARGET};
use style_cascade::{Rule, RuleProvider, SelectorExt as _};
use style_selectors::of_type;
use style_tree::widget_type::TEXTURE_RECT;
use style_values::Size;

const ICON_SIZE: Size = Size::new(28.0, 28.0);

pub struct CheckBoxSheet;

impl RuleProvider<Skin> for CheckBoxSheet {
    fn name(&self) -> &'static str {
        "checkbox"
    }

    fn rules(&self, skin: &Skin) -> Result<Vec<Rule>> {
        Ok(vec![
            of_type(&TEXTURE_RECT)
                .class(consts::CHECKBOX)
                .prop(TEXTURE, skin.load_texture("checkbox_off.png")?)
                .prop(TEXTURE_SIZE_TARGET, ICON_SIZE),
            of_type(&TEXTURE_RECT)
                .class(consts::CHECKBOX_CHECKED)
                .prop(TEXTURE, skin.load_texture("checkbox_on.png")?)
                .prop(TEXTURE_SIZE_TARGET, ICON_SIZE),
        ])
    }
}
