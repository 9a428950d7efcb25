use crate::Skin;
use anyhow::Result;
use style_cascade::keys::FONT;
use style_cascade::{Rule, RuleProvider, SelectorExt as _};
use style_selectors::of_type;
use style_tree::widget_type::INPUT_LABEL;

/// Input labels use the bold font.
pub struct InputLabelSheet;

impl RuleProvider<Skin> for InputLabelSheet {
    fn name(&self) -> &'static str {
        "input label"
    }

    fn rules(&self, skin: &Skin) -> Result<Vec<Rule>> {
        Ok(vec![of_type(&INPUT_LABEL).prop(FONT, skin.bold_font().clone())])
    }
}
