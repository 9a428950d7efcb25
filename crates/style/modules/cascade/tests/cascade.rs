#![allow(
    clippy::missing_panics_doc,
    reason = "Assertions in tests are expected"
)]
#![allow(clippy::unwrap_used, reason = "Test inputs are known to be valid")]

use anyhow::Result;
use style_cascade::keys::{BACKGROUND_PANELS, FONT_COLOR, STYLE_BOX};
use style_cascade::{
    CascadeError, PropertyKey, Rule, RuleProvider, SelectorExt as _, Stylesheet,
    StylesheetBuilder, resolve,
};
use style_selectors::{element, of_type};
use core::cell::Cell;
use style_tree::{DepthTag, MemoryTree, NodeView, WidgetType};
use style_tree::widget_type::{BUTTON, LABEL, PANEL_CONTAINER, STACK};
use style_values::{Rgba, StyleBox, StyleValue, VariantSet};

const RED: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);
const YELLOW: Rgba = Rgba::new(1.0, 1.0, 0.0, 1.0);
const GREEN: Rgba = Rgba::new(0.0, 1.0, 0.0, 1.0);

fn init_logging() {
    let _ignored = env_logger::builder().is_test(true).try_init();
}

fn warn_panel() -> (MemoryTree, usize) {
    let mut tree = MemoryTree::new();
    let panel = tree.add(&PANEL_CONTAINER);
    tree.add_class(panel, "warn");
    (tree, panel)
}

#[test]
fn more_specific_rule_wins_in_either_order() {
    init_logging();
    let (tree, panel) = warn_panel();
    let plain = || of_type(&PANEL_CONTAINER).prop(FONT_COLOR, RED);
    let warned = || of_type(&PANEL_CONTAINER).class("warn").prop(FONT_COLOR, YELLOW);

    let forward = Stylesheet::from_rules(vec![plain(), warned()]);
    let backward = Stylesheet::from_rules(vec![warned(), plain()]);

    assert_eq!(forward.resolve_color(&tree, panel, FONT_COLOR), Some(YELLOW));
    assert_eq!(backward.resolve_color(&tree, panel, FONT_COLOR), Some(YELLOW));
}

#[test]
fn later_rule_wins_on_equal_specificity() {
    let (tree, panel) = warn_panel();
    let sheet = Stylesheet::from_rules(vec![
        of_type(&PANEL_CONTAINER).prop(FONT_COLOR, RED),
        of_type(&PANEL_CONTAINER).prop(FONT_COLOR, GREEN),
    ]);
    assert_eq!(
        resolve(&sheet, &tree, panel, FONT_COLOR),
        Some(&StyleValue::Color(GREEN))
    );

    let ranked = sheet.matching_rules(&tree, panel, FONT_COLOR);
    assert_eq!(ranked.len(), 2);
    assert!(ranked[0].0 < ranked[1].0);
    assert_eq!(ranked[1].1.get(FONT_COLOR), Some(&StyleValue::Color(GREEN)));
}

#[test]
fn unmatched_or_undeclared_property_is_absent() {
    let (tree, panel) = warn_panel();
    let sheet = Stylesheet::from_rules(vec![
        of_type(&LABEL).prop(FONT_COLOR, RED),
        of_type(&PANEL_CONTAINER).prop(STYLE_BOX, StyleBox::flat(GREEN)),
    ]);

    assert_eq!(sheet.resolve(&tree, panel, FONT_COLOR), None);
    assert_eq!(sheet.resolve(&tree, panel, PropertyKey("unknown")), None);

    let fallback = StyleValue::Color(Rgba::WHITE);
    assert_eq!(
        sheet.resolve_or(&tree, panel, FONT_COLOR, &fallback),
        &fallback
    );
}

#[test]
fn rules_carry_several_properties() {
    let (tree, panel) = warn_panel();
    let rule = element()
        .class("warn")
        .prop(FONT_COLOR, YELLOW)
        .prop(STYLE_BOX, StyleBox::flat(RED))
        .prop(FONT_COLOR, GREEN);
    assert_eq!(rule.properties().count(), 2);

    let sheet = Stylesheet::from_rules(vec![rule]);
    assert_eq!(sheet.resolve_color(&tree, panel, FONT_COLOR), Some(GREEN));
    assert_eq!(
        sheet.resolve_style_box(&tree, panel, STYLE_BOX),
        Some(&StyleBox::flat(RED))
    );
}

#[test]
fn luminance_selectors_see_resolved_ancestor_backgrounds() {
    let mut tree = MemoryTree::new();
    let panel = tree.add(&PANEL_CONTAINER);
    let stack = tree.add_child(panel, &STACK);
    let label = tree.add_child(stack, &LABEL);

    let sheet = Stylesheet::from_rules(vec![
        of_type(&PANEL_CONTAINER).prop(STYLE_BOX, StyleBox::flat(Rgba::WHITE)),
        of_type(&LABEL).prop(FONT_COLOR, Rgba::WHITE),
        of_type(&LABEL).bg_brighter_than(0.5).prop(FONT_COLOR, Rgba::BLACK),
    ]);
    assert_eq!(sheet.resolve_color(&tree, label, FONT_COLOR), Some(Rgba::BLACK));

    let dark = Stylesheet::from_rules(vec![
        of_type(&PANEL_CONTAINER).prop(STYLE_BOX, StyleBox::flat(Rgba::BLACK)),
        of_type(&LABEL).prop(FONT_COLOR, Rgba::WHITE),
        of_type(&LABEL).bg_brighter_than(0.5).prop(FONT_COLOR, Rgba::BLACK),
    ]);
    assert_eq!(dark.resolve_color(&tree, label, FONT_COLOR), Some(Rgba::WHITE));
}

#[test]
fn resolved_background_takes_precedence_over_brightness() {
    let mut tree = MemoryTree::new();
    let panel = tree.add(&PANEL_CONTAINER);
    tree.set_brightness(panel, 1.0);
    let button = tree.add_child(panel, &BUTTON);

    let sheet = Stylesheet::from_rules(vec![
        of_type(&PANEL_CONTAINER).prop(STYLE_BOX, StyleBox::flat(Rgba::BLACK)),
        of_type(&BUTTON).bg_darker_than(0.1).prop(FONT_COLOR, RED),
    ]);
    assert_eq!(sheet.resolve_color(&tree, button, FONT_COLOR), Some(RED));
}

/// Counts parent lookups made through the view.
struct CountingView {
    tree: MemoryTree,
    parent_lookups: Cell<usize>,
}

impl NodeView for CountingView {
    type Handle = usize;

    fn parent(&self, node: usize) -> Option<usize> {
        self.parent_lookups.set(self.parent_lookups.get() + 1);
        self.tree.parent(node)
    }

    fn child_count(&self, node: usize) -> usize {
        self.tree.child_count(node)
    }

    fn child_at(&self, node: usize, index: usize) -> Option<usize> {
        self.tree.child_at(node, index)
    }

    fn widget_type(&self, node: usize) -> &'static WidgetType {
        self.tree.widget_type(node)
    }

    fn has_class(&self, node: usize, class: &str) -> bool {
        self.tree.has_class(node, class)
    }

    fn has_pseudo(&self, node: usize, pseudo: &str) -> bool {
        self.tree.has_pseudo(node, pseudo)
    }

    fn brightness(&self, node: usize) -> Option<f32> {
        self.tree.brightness(node)
    }

    fn depth_tag(&self, node: usize) -> Option<DepthTag> {
        self.tree.depth_tag(node)
    }
}

#[test]
fn luminance_selected_backgrounds_resolve_without_blowup() {
    const DEPTH: usize = 40;
    let mut tree = MemoryTree::new();
    let root = tree.add(&STACK);
    tree.set_brightness(root, 0.9);
    let mut chain = vec![root];
    for _ in 0..DEPTH {
        let parent = *chain.last().unwrap();
        chain.push(tree.add_child(parent, &STACK));
    }
    let view = CountingView {
        tree,
        parent_lookups: Cell::new(0),
    };
    let sheet = Stylesheet::from_rules(vec![
        element()
            .bg_brighter_than(0.5)
            .prop(STYLE_BOX, StyleBox::flat(Rgba::BLACK)),
    ]);

    assert_eq!(
        sheet.resolve_style_box(&view, chain[1], STYLE_BOX),
        Some(&StyleBox::flat(Rgba::BLACK))
    );
    view.parent_lookups.set(0);
    assert_eq!(sheet.resolve_style_box(&view, chain[DEPTH], STYLE_BOX), None);
    let lookups = view.parent_lookups.get();
    assert!(lookups <= 2 * DEPTH * DEPTH, "{lookups} parent lookups at depth {DEPTH}");
}

struct Labels;

impl RuleProvider<Rgba> for Labels {
    fn name(&self) -> &'static str {
        "labels"
    }

    fn rules(&self, accent: &Rgba) -> Result<Vec<Rule>> {
        Ok(vec![of_type(&LABEL).prop(FONT_COLOR, *accent)])
    }
}

struct Broken;

impl RuleProvider<Rgba> for Broken {
    fn name(&self) -> &'static str {
        "broken"
    }

    fn rules(&self, _accent: &Rgba) -> Result<Vec<Rule>> {
        anyhow::bail!("texture missing")
    }
}

#[test]
fn builder_appends_providers_after_base_rules() {
    init_logging();
    let mut tree = MemoryTree::new();
    let label = tree.add(&LABEL);

    let sheet = StylesheetBuilder::new(&GREEN)
        .base_rules([of_type(&LABEL).prop(FONT_COLOR, RED)])
        .register(Labels)
        .build()
        .unwrap();

    assert_eq!(sheet.len(), 2);
    assert_eq!(sheet.resolve_color(&tree, label, FONT_COLOR), Some(GREEN));
}

#[test]
fn builder_reports_failing_provider() {
    let err = StylesheetBuilder::new(&GREEN)
        .register(Labels)
        .register(Broken)
        .build()
        .unwrap_err();
    assert!(format!("{err:#}").contains("broken"));
}

#[test]
fn variant_properties_must_hold_variant_sets() {
    let variants = VariantSet::new(vec![StyleBox::flat(RED), StyleBox::flat(GREEN)]).unwrap();
    let valid = StylesheetBuilder::new(&())
        .base_rules([element().prop(BACKGROUND_PANELS, variants)])
        .variant_property(BACKGROUND_PANELS)
        .build();
    assert!(valid.is_ok());

    let err = StylesheetBuilder::new(&())
        .base_rules([element().prop(BACKGROUND_PANELS, StyleBox::flat(RED))])
        .variant_property(BACKGROUND_PANELS)
        .build()
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<CascadeError>(),
        Some(CascadeError::NotAVariantSet { key: "background-panels", .. })
    ));
}
