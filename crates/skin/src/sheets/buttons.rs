use crate::Skin;
use crate::base::{ButtonBackgrounds, palette_entry};
use crate::helpers::{SkinSelectorExt as _, button};
use anyhow::Result;
use log::warn;
use style_cascade::keys::{FONT_COLOR, STYLE_BOX};
use style_cascade::{Rule, RuleProvider, SelectorExt as _};
use style_selectors::{Selector, of_type};
use style_tree::widget_type::LABEL;

/// Luminance above which button text switches to the dark palette entry.
const BRIGHT_BACKGROUND: f32 = 0.6;

/// Plain, positive and negative buttons in each interaction state, and text
/// that stays legible on them.
pub struct ButtonSheet;

fn state_rules(base: &Selector, backgrounds: &ButtonBackgrounds, rules: &mut Vec<Rule>) {
    let states = [
        (base.clone(), backgrounds.normal()),
        (base.clone().hover(), backgrounds.hover()),
        (base.clone().pressed(), backgrounds.pressed()),
        (base.clone().disabled(), backgrounds.disabled()),
    ];
    for (selector, background) in states {
        let Some(background) = background else {
            warn!("no button background for {selector}");
            continue;
        };
        rules.push(selector.prop(STYLE_BOX, background.clone()));
    }
}

impl RuleProvider<Skin> for ButtonSheet {
    fn name(&self) -> &'static str {
        "buttons"
    }

    fn rules(&self, skin: &Skin) -> Result<Vec<Rule>> {
        let mut rules = Vec::new();
        state_rules(&button(), skin.buttons(), &mut rules);
        state_rules(&button().positive(), skin.positive_buttons(), &mut rules);
        state_rules(&button().negative(), skin.negative_buttons(), &mut rules);

        let secondary = skin.secondary_palette();
        rules.push(
            button()
                .parent_of(of_type(&LABEL))
                .bg_brighter_than(BRIGHT_BACKGROUND)
                .prop(FONT_COLOR, palette_entry(secondary, 4)),
        );
        Ok(rules)
    }
}
