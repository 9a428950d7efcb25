//! Style rules.

use crate::PropertyKey;
use std::collections::HashMap;
use style_selectors::Selector;
use style_values::StyleValue;

/// A selector paired with the property values it assigns.
#[derive(Clone, Debug)]
pub struct Rule {
    selector: Selector,
    properties: HashMap<PropertyKey, StyleValue>,
}

impl Rule {
    #[inline]
    pub fn new(selector: Selector) -> Self {
        Self {
            selector,
            properties: HashMap::new(),
        }
    }

    /// Assign `key`, replacing any earlier value for it on this rule.
    #[must_use]
    pub fn prop(mut self, key: PropertyKey, value: impl Into<StyleValue>) -> Self {
        self.properties.insert(key, value.into());
        self
    }

    #[inline]
    pub const fn selector(&self) -> &Selector {
        &self.selector
    }

    #[inline]
    pub fn get(&self, key: PropertyKey) -> Option<&StyleValue> {
        self.properties.get(&key)
    }

    #[inline]
    pub fn declares(&self, key: PropertyKey) -> bool {
        self.properties.contains_key(&key)
    }

    pub fn properties(&self) -> impl Iterator<Item = (PropertyKey, &StyleValue)> {
        self.properties.iter().map(|(key, value)| (*key, value))
    }
}

/// Start a rule straight from a selector: `of_type(&LABEL).prop(FONT_COLOR, color)`.
pub trait SelectorExt {
    #[must_use]
    fn prop(self, key: PropertyKey, value: impl Into<StyleValue>) -> Rule;
}

impl SelectorExt for Selector {
    #[inline]
    fn prop(self, key: PropertyKey, value: impl Into<StyleValue>) -> Rule {
        Rule::new(self).prop(key, value)
    }
}
