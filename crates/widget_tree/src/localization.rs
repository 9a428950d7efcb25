//! Localization keys for named widgets.

use crate::WidgetTree;
use core::iter;
use indextree::NodeId;
use skin::LocalizationProvider;
use style_tree::NodeView as _;

impl WidgetTree {
    /// `ui-<ScopeType>-<name>`, where the scope is the nearest widget (the
    /// widget itself included) that is a name scope. `None` for unnamed
    /// widgets or widgets outside any scope.
    pub fn localization_key(&self, node: NodeId) -> Option<String> {
        let name = self.node(node)?.name()?;
        let scope = iter::once(node)
            .chain(self.ancestors(node))
            .find(|&candidate| self.node(candidate).is_some_and(|entry| entry.is_name_scope()))?;
        Some(format!("ui-{}-{name}", self.widget_type(scope).name()))
    }

    /// Localized string for `node`. With a `parameter`, `<key>-<parameter>`
    /// is tried first.
    pub fn localized_string(
        &self,
        node: NodeId,
        provider: &dyn LocalizationProvider,
        parameter: Option<&str>,
    ) -> Option<String> {
        let key = self.localization_key(node)?;
        parameter
            .and_then(|param| provider.lookup(&format!("{key}-{param}")))
            .or_else(|| provider.lookup(&key))
    }
}
