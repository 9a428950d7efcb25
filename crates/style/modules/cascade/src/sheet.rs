//! Immutable stylesheets and property resolution.

use crate::keys::STYLE_BOX;
use crate::priority::rank_candidate;
use crate::{CascadePriority, PropertyKey, Rule};
use log::trace;
use style_selectors::{BackgroundProbe, MatchContext};
use style_tree::NodeView;
use style_values::{Rgba, StyleBox, StyleValue, VariantSet};

/// An ordered, immutable collection of rules.
///
/// Rule order is the final tie-break: of two matching rules with equal
/// specificity the later one wins.
#[derive(Clone, Debug, Default)]
pub struct Stylesheet {
    rules: Vec<Rule>,
}

impl Stylesheet {
    /// Wrap rules without validation. Prefer [`crate::StylesheetBuilder`].
    #[inline]
    pub const fn from_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    #[inline]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Resolve `key` for `node`. Luminance selectors see ancestors'
    /// backgrounds as resolved through this same stylesheet.
    pub fn resolve<V: NodeView>(
        &self,
        view: &V,
        node: V::Handle,
        key: PropertyKey,
    ) -> Option<&StyleValue> {
        let context = MatchContext::with_probe(view, self);
        self.resolve_in(&context, node, key)
    }

    /// Resolve `key` for `node` within an explicit match context.
    pub fn resolve_in<V: NodeView>(
        &self,
        context: &MatchContext<'_, V>,
        node: V::Handle,
        key: PropertyKey,
    ) -> Option<&StyleValue> {
        let winner = self
            .candidates(context, node, key)
            .max_by_key(|(priority, _)| *priority);
        let Some((priority, rule)) = winner else {
            trace!("{key}: no matching rule");
            return None;
        };
        trace!(
            "{key}: {} wins with {:?}",
            rule.selector(),
            priority.specificity
        );
        rule.get(key)
    }

    #[inline]
    pub fn resolve_or<'sheet, V: NodeView>(
        &'sheet self,
        view: &V,
        node: V::Handle,
        key: PropertyKey,
        fallback: &'sheet StyleValue,
    ) -> &'sheet StyleValue {
        self.resolve(view, node, key).unwrap_or(fallback)
    }

    #[inline]
    pub fn resolve_color<V: NodeView>(
        &self,
        view: &V,
        node: V::Handle,
        key: PropertyKey,
    ) -> Option<Rgba> {
        self.resolve(view, node, key)?.as_color()
    }

    #[inline]
    pub fn resolve_style_box<V: NodeView>(
        &self,
        view: &V,
        node: V::Handle,
        key: PropertyKey,
    ) -> Option<&StyleBox> {
        self.resolve(view, node, key)?.as_style_box()
    }

    #[inline]
    pub fn resolve_variants<V: NodeView>(
        &self,
        view: &V,
        node: V::Handle,
        key: PropertyKey,
    ) -> Option<&VariantSet> {
        self.resolve(view, node, key)?.as_variants()
    }

    /// Every rule that matches `node` and declares `key`, lowest priority
    /// first. The last entry is the one [`Self::resolve`] returns.
    pub fn matching_rules<V: NodeView>(
        &self,
        view: &V,
        node: V::Handle,
        key: PropertyKey,
    ) -> Vec<(CascadePriority, &Rule)> {
        let context = MatchContext::with_probe(view, self);
        let mut found: Vec<_> = self.candidates(&context, node, key).collect();
        found.sort_by_key(|(priority, _)| *priority);
        found
    }

    fn candidates<'sheet, 'ctx, V: NodeView>(
        &'sheet self,
        context: &'ctx MatchContext<'ctx, V>,
        node: V::Handle,
        key: PropertyKey,
    ) -> impl Iterator<Item = (CascadePriority, &'sheet Rule)> + use<'sheet, 'ctx, V> {
        self.rules
            .iter()
            .enumerate()
            .filter(move |(_, rule)| {
                rule.declares(key) && rule.selector().matches_in(context, node)
            })
            .map(|(index, rule)| (rank_candidate(rule.selector().specificity(), index), rule))
    }
}

/// An ancestor's background is resolved without a probe of its own: its
/// luminance rules only see brightness-aware widgets further up.
impl<V: NodeView> BackgroundProbe<V> for Stylesheet {
    fn background_luminance(&self, view: &V, node: V::Handle) -> Option<f32> {
        let context = MatchContext::new(view);
        let background = self.resolve_in(&context, node, STYLE_BOX)?.as_style_box()?;
        Some(background.luminance())
    }
}

/// Resolve `key` for `node` against `stylesheet`.
#[inline]
pub fn resolve<'sheet, V: NodeView>(
    stylesheet: &'sheet Stylesheet,
    view: &V,
    node: V::Handle,
    key: PropertyKey,
) -> Option<&'sheet StyleValue> {
    stylesheet.resolve(view, node, key)
}
