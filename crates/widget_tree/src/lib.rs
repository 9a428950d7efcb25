//! Retained widget tree driving the style engine.
//!
//! [`WidgetTree`] stores widgets in an `indextree` arena and implements
//! [`style_tree::NodeView`] over them, so any stylesheet can resolve
//! properties on it directly. Its mutation API keeps depth-aware widgets
//! (bordered panels and bars) up to date: attaching, entering the live tree
//! and style changes recompute their depth and pick their background
//! variant.

mod depth;
mod error;
mod localization;
mod node;
mod tree;
mod view;

pub use error::TreeError;
pub use indextree::NodeId;
pub use node::{DepthRole, PANEL_DEPTH, WidgetKind, WidgetNode};
pub use tree::WidgetTree;
