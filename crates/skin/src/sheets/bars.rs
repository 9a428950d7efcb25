use crate::Skin;
use anyhow::Result;
use style_cascade::keys::MIN_SIZE;
use style_cascade::{Rule, RuleProvider, SelectorExt as _};
use style_selectors::of_type;
use style_tree::widget_type::BAR;
use style_values::Size;

/// Separator bars. A bar directly below another bar collapses.
pub struct BarSheet;

impl RuleProvider<Skin> for BarSheet {
    fn name(&self) -> &'static str {
        "bars"
    }

    fn rules(&self, _skin: &Skin) -> Result<Vec<Rule>> {
        Ok(vec![
            of_type(&BAR)
                .below(of_type(&BAR), 1)
                .prop(MIN_SIZE, Size::new(0.0, 0.0)),
        ])
    }
}
