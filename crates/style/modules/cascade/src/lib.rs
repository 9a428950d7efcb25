//! Rules, stylesheets and the cascade.
//!
//! A [`Stylesheet`] is an ordered list of [`Rule`]s. Resolving a property on
//! a node keeps the rules that match the node and declare the property, then
//! picks the one with the highest [`CascadePriority`]: specificity first,
//! later declaration on ties.

mod builder;
mod error;
mod key;
mod priority;
mod rule;
mod sheet;

pub use builder::{RuleProvider, StylesheetBuilder};
pub use error::CascadeError;
pub use key::{PropertyKey, keys};
pub use priority::{CascadePriority, rank_candidate};
pub use rule::{Rule, SelectorExt};
pub use sheet::{Stylesheet, resolve};
