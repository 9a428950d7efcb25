//! Stylesheet assembly from base rules and registered providers.

use crate::{CascadeError, PropertyKey, Rule, Stylesheet};
use anyhow::{Context as _, Result};
use log::{debug, info};
use tracing::info_span;

/// A source of rules contributed to a stylesheet, e.g. one widget's sub-sheet.
///
/// `S` is whatever the provider builds its rules from, typically a skin
/// holding palettes and loaded textures.
pub trait RuleProvider<S: ?Sized> {
    /// Name used in logs and error context.
    fn name(&self) -> &'static str;

    /// Produce this provider's rules, in declaration order.
    ///
    /// # Errors
    /// Returns an error if the rules cannot be built from `source`.
    fn rules(&self, source: &S) -> Result<Vec<Rule>>;
}

/// Builds a [`Stylesheet`]: base rules first, then each registered provider's
/// rules in registration order.
pub struct StylesheetBuilder<'src, S: ?Sized> {
    source: &'src S,
    base: Vec<Rule>,
    providers: Vec<Box<dyn RuleProvider<S> + 'src>>,
    variant_keys: Vec<PropertyKey>,
}

impl<'src, S: ?Sized> StylesheetBuilder<'src, S> {
    #[inline]
    pub fn new(source: &'src S) -> Self {
        Self {
            source,
            base: Vec::new(),
            providers: Vec::new(),
            variant_keys: Vec::new(),
        }
    }

    /// Append rules ahead of every provider's rules.
    #[must_use]
    pub fn base_rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.base.extend(rules);
        self
    }

    #[must_use]
    pub fn register(mut self, provider: impl RuleProvider<S> + 'src) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Require every rule declaring `key` to hold a variant set.
    #[must_use]
    pub fn variant_property(mut self, key: PropertyKey) -> Self {
        if !self.variant_keys.contains(&key) {
            self.variant_keys.push(key);
        }
        self
    }

    /// Collect and validate all rules.
    ///
    /// # Errors
    /// Returns an error if a provider fails or a depth-selected property
    /// holds something other than a variant set.
    pub fn build(self) -> Result<Stylesheet> {
        let _span = info_span!("style.build_stylesheet").entered();
        let mut rules = self.base;
        let base_count = rules.len();
        for provider in &self.providers {
            let provided = provider
                .rules(self.source)
                .with_context(|| format!("rule provider {} failed", provider.name()))?;
            debug!("{} contributed {} rules", provider.name(), provided.len());
            rules.extend(provided);
        }

        for rule in &rules {
            for &key in &self.variant_keys {
                if let Some(value) = rule.get(key)
                    && value.as_variants().is_none()
                {
                    return Err(CascadeError::NotAVariantSet {
                        key: key.name(),
                        selector: rule.selector().to_string(),
                        found: value.kind(),
                    }
                    .into());
                }
            }
        }

        info!(
            "built stylesheet: {} rules ({} base, {} providers)",
            rules.len(),
            base_count,
            self.providers.len()
        );
        Ok(Stylesheet::from_rules(rules))
    }
}
