#![allow(
    clippy::missing_panics_doc,
    reason = "Assertions in tests are expected"
)]
#![allow(clippy::unwrap_used, reason = "Test fixtures are known to be valid")]
#![allow(
    clippy::assertions_on_result_states,
    reason = "Only the failure itself is under test"
)]

use skin::consts::{BUTTON as BUTTON_CLASS, CHECKBOX, POSITIVE, PSEUDO_HOVER, WINDOW_BACKGROUND};
use skin::{
    ConfigError, FsResourceProvider, LocalizationProvider as _, MapLocalization,
    ResourceProvider as _, Skin, SkinConfig, StaticFontProvider, button,
    load_indefinite_texture_set,
};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use style_cascade::keys::{BACKGROUND_PANELS, FONT, FONT_COLOR, PANEL, STYLE_BOX, TEXTURE};
use style_tree::MemoryTree;
use style_tree::widget_type::{BUTTON, INPUT_LABEL, LABEL, STACK, TEXTURE_RECT};
use style_values::{FontWeight, Rgba, StyleBox};
use tempfile::TempDir;

const SKIN_FILES: &[&str] = &[
    "panel_bg_0.png",
    "panel_bg_1.png",
    "button_bg_0.png",
    "button_bg_1.png",
    "button_bg_2.png",
    "button_bg_3.png",
    "button_positive_bg_0.png",
    "button_negative_bg_0.png",
    "slider_fill.png",
    "slider_outline.png",
    "slider_grabber.png",
    "checkbox_off.png",
    "checkbox_on.png",
    "window_cross_0.png",
    "window_cross_1.png",
    "window_cross_2.png",
    "window_cross_3.png",
];

fn init_logging() {
    let _ignored = env_logger::builder().is_test(true).try_init();
}

fn touch(root: &Path, file: &str) {
    let path = root.join(file);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"png").unwrap();
}

fn skin_dir(files: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for file in files {
        touch(dir.path(), &format!("skin/{file}"));
    }
    dir
}

fn config() -> SkinConfig {
    SkinConfig {
        file_root: "/skin".to_owned(),
        ..SkinConfig::default()
    }
}

fn load(dir: &TempDir) -> anyhow::Result<Skin> {
    let resources = Arc::new(FsResourceProvider::new(dir.path()));
    Skin::load(config(), resources, &StaticFontProvider)
}

#[test]
fn texture_sets_stop_at_the_first_gap() {
    let dir = skin_dir(&["panel_bg_0.png", "panel_bg_1.png", "panel_bg_3.png"]);
    let resources = FsResourceProvider::new(dir.path());

    let textures = load_indefinite_texture_set(&resources, "/skin/panel_bg_{0}.png").unwrap();
    let paths: Vec<_> = textures.iter().map(|texture| texture.path().to_owned()).collect();
    assert_eq!(paths, ["/skin/panel_bg_0.png", "/skin/panel_bg_1.png"]);

    assert!(load_indefinite_texture_set(&resources, "/skin/none_{0}.png").unwrap().is_empty());
}

#[test]
fn mean_color_comes_from_sidecar() {
    let dir = skin_dir(&["tinted.png", "plain.png"]);
    fs::write(dir.path().join("skin/tinted.png.mean"), "#FF0000").unwrap();
    let resources = FsResourceProvider::new(dir.path());

    let tinted = resources.load_texture("/skin/tinted.png").unwrap();
    assert_eq!(tinted.mean_color(), Rgba::new(1.0, 0.0, 0.0, 1.0));
    let plain = resources.load_texture("skin/plain.png").unwrap();
    assert_eq!(plain.mean_color(), skin::DEFAULT_MEAN_COLOR);

    let err = resources.load_texture("/skin/absent.png").unwrap_err();
    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::MissingTexture {
            path: "/skin/absent.png".to_owned()
        })
    );
}

#[test]
fn config_fills_missing_fields_with_defaults() {
    let parsed = SkinConfig::from_json(r#"{ "file_root": "/Textures/Dark", "panel_margin": 5 }"#)
        .unwrap();
    assert_eq!(parsed.file_root, "/Textures/Dark");
    assert_eq!(parsed.panel_margin, 5);
    assert_eq!(parsed.base_font_size, SkinConfig::default().base_font_size);
    assert_eq!(parsed.primary_palette.len(), 5);
    assert_eq!(parsed.path("panel_bg_{0}.png"), "/Textures/Dark/panel_bg_{0}.png");
}

#[test]
fn config_parses_hex_palettes() {
    let parsed = SkinConfig::from_json(
        r##"{
            "primary_palette": ["#FF0000", "#00FF00", "#0000FF", "#FFFFFF", "#000000"],
            "secondary_palette": ["#111111FF", "#222222", "#333333", "#444444", "#555555"]
        }"##,
    )
    .unwrap();
    assert_eq!(parsed.primary_palette[0], Rgba::new(1.0, 0.0, 0.0, 1.0));
    assert_eq!(parsed.primary_palette[4], Rgba::BLACK);
}

#[test]
fn config_rejects_wrong_palette_sizes_and_bad_colors() {
    let err = SkinConfig::from_json(r##"{ "primary_palette": ["#FF0000"] }"##).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::PaletteSize {
            palette: "primary",
            expected: 5,
            found: 1
        })
    );

    let bad = r##"{ "secondary_palette": ["nope", "#000", "#000", "#000", "#000"] }"##;
    assert!(SkinConfig::from_json(bad).is_err());
}

#[test]
fn skin_without_panel_backgrounds_fails_to_load() {
    init_logging();
    let files: Vec<_> = SKIN_FILES
        .iter()
        .copied()
        .filter(|file| !file.starts_with("panel_bg"))
        .collect();
    let dir = skin_dir(&files);

    let err = load(&dir).err().unwrap();
    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::EmptyVariantSet {
            property: BACKGROUND_PANELS.name()
        })
    );
}

#[test]
fn missing_close_button_texture_fails_the_build() {
    let files: Vec<_> = SKIN_FILES
        .iter()
        .copied()
        .filter(|file| *file != "window_cross_3.png")
        .collect();
    let dir = skin_dir(&files);
    let skin = load(&dir).unwrap();

    let err = skin.stylesheet().unwrap_err();
    let root = err.root_cause().downcast_ref::<ConfigError>();
    assert_eq!(
        root,
        Some(&ConfigError::MissingTexture {
            path: "/skin/window_cross_3.png".to_owned()
        })
    );
}

#[test]
fn full_skin_styles_widgets() {
    init_logging();
    let dir = skin_dir(SKIN_FILES);
    let skin = load(&dir).unwrap();
    let sheet = skin.stylesheet().unwrap();
    assert_eq!(skin.panel_backgrounds().len(), 2);

    let mut tree = MemoryTree::new();
    let window = tree.add(&STACK);
    tree.add_class(window, WINDOW_BACKGROUND);
    let input = tree.add_child(window, &INPUT_LABEL);
    let plain = tree.add_child(window, &LABEL);
    let ok = tree.add_child(window, &BUTTON);
    tree.add_class(ok, BUTTON_CLASS);
    let checkbox = tree.add_child(window, &TEXTURE_RECT);
    tree.add_class(checkbox, CHECKBOX);

    let font = sheet.resolve(&tree, input, FONT).unwrap().as_font().unwrap();
    assert_eq!(font.weight, FontWeight::Bold);
    let font = sheet.resolve(&tree, plain, FONT).unwrap().as_font().unwrap();
    assert_eq!(font.weight, FontWeight::Regular);
    assert_eq!(
        sheet.resolve_color(&tree, plain, FONT_COLOR),
        Some(skin.secondary_palette()[0])
    );

    assert_eq!(
        sheet.resolve_style_box(&tree, window, PANEL),
        Some(skin.panel_backgrounds().select(0))
    );

    let texture = sheet.resolve(&tree, checkbox, TEXTURE).unwrap().as_texture().unwrap();
    assert_eq!(texture.path(), "/skin/checkbox_off.png");

    let normal = sheet.resolve_style_box(&tree, ok, STYLE_BOX).cloned();
    assert_eq!(normal.as_ref(), skin.buttons().normal());
    tree.set_pseudo(ok, PSEUDO_HOVER);
    let hovered = sheet.resolve_style_box(&tree, ok, STYLE_BOX).cloned();
    assert_eq!(hovered.as_ref(), skin.buttons().hover());
    assert_ne!(normal, hovered);
}

#[test]
fn missing_positive_states_fall_back_to_plain_states() {
    let dir = skin_dir(SKIN_FILES);
    let skin = load(&dir).unwrap();
    let sheet = skin.stylesheet().unwrap();

    let mut tree = MemoryTree::new();
    let confirm = tree.add(&BUTTON);
    tree.add_class(confirm, BUTTON_CLASS)
        .add_class(confirm, POSITIVE)
        .set_pseudo(confirm, PSEUDO_HOVER);
    assert!(button().matches(&tree, confirm));

    // Only one positive texture exists. The plain hover rule outranks the
    // positive normal rule: a pseudo-state beats an extra class.
    assert!(skin.positive_buttons().hover().is_none());
    assert_eq!(
        sheet.resolve_style_box(&tree, confirm, STYLE_BOX),
        skin.buttons().hover()
    );

    tree.clear_pseudo(confirm, PSEUDO_HOVER);
    assert_eq!(
        sheet.resolve_style_box(&tree, confirm, STYLE_BOX),
        skin.positive_buttons().normal()
    );
}

#[test]
fn texture_boxes_use_the_configured_margin() {
    let dir = skin_dir(SKIN_FILES);
    let skin = load(&dir).unwrap();
    let margin = skin.config().panel_margin;
    assert!(matches!(
        skin.panel_backgrounds().select(1),
        StyleBox::Texture { patch_margin, .. } if *patch_margin == margin
    ));
}

#[test]
fn localization_table_lookup() {
    let mut strings = MapLocalization::new();
    strings.insert("ui-Button-ok", "OK");
    assert_eq!(strings.lookup("ui-Button-ok").as_deref(), Some("OK"));
    assert_eq!(strings.lookup("ui-Button-cancel"), None);
}

#[test]
fn label_text_darkens_inside_bright_buttons() {
    let dir = skin_dir(SKIN_FILES);
    fs::write(dir.path().join("skin/button_bg_0.png.mean"), "#FFFFFF").unwrap();
    fs::write(dir.path().join("skin/button_bg_1.png.mean"), "#000000").unwrap();
    let skin = load(&dir).unwrap();
    let sheet = skin.stylesheet().unwrap();
    let light_text = skin.secondary_palette()[0];
    let dark_text = skin.secondary_palette()[4];
    assert_ne!(light_text, dark_text);

    let mut tree = MemoryTree::new();
    let panel = tree.add(&STACK);
    let ok = tree.add_child(panel, &BUTTON);
    tree.add_class(ok, BUTTON_CLASS);
    let caption = tree.add_child(ok, &LABEL);
    let outside = tree.add_child(panel, &LABEL);

    assert_eq!(sheet.resolve_color(&tree, caption, FONT_COLOR), Some(dark_text));
    assert_eq!(sheet.resolve_color(&tree, outside, FONT_COLOR), Some(light_text));

    tree.set_pseudo(ok, PSEUDO_HOVER);
    assert_eq!(sheet.resolve_color(&tree, caption, FONT_COLOR), Some(light_text));
}
