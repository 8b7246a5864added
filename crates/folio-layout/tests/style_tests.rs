//! Integration tests for style sheets.

use std::collections::HashMap;

use folio_layout::{
    Align, Color, Element, StyleContext, StyleError, StyleRule, StyleSettings, StyleSheet,
};

const SHEET: &str = r##"{
    "settings": {
        "fonts": { "serif": "fonts/Merriweather.ttf" },
        "colors": { "muted": [90, 90, 90, 0.8] }
    },
    "rules": {
        "text": { "font": "serif", "fontSize": 10, "margin": 0.1 },
        "caption": { "inherit": "text", "fontSize": 8, "color": "muted", "align": "center" },
        "credit": { "inherit": "caption", "color": "#ff0000", "verticalAlign": "bottom" }
    }
}"##;

fn sheet() -> StyleSheet {
    StyleSheet::from_json(SHEET).unwrap()
}

#[test]
fn test_from_json() {
    let sheet = sheet();
    assert_eq!(sheet.font("serif"), Some("fonts/Merriweather.ttf"));
    assert_eq!(sheet.color("muted"), Some(Color::rgba(90, 90, 90, 0.8)));
    assert_eq!(sheet.color("#0f0"), Some(Color::rgb(0, 255, 0)));
    assert_eq!(sheet.color("nope"), None);
    assert_eq!(sheet.rule("caption").unwrap().inherit.as_deref(), Some("text"));
    assert!(sheet.rule("missing").is_none());
}

#[test]
fn test_empty_sheet() {
    let sheet = StyleSheet::from_json("{}").unwrap();
    assert!(sheet.settings().fonts.is_empty());
    assert!(sheet.resolve("text").is_none());
}

#[test]
fn test_resolve_follows_inherit_chain() {
    let credit = sheet().resolve("credit").unwrap();
    assert_eq!(credit.font.as_deref(), Some("serif"));
    assert_eq!(credit.font_size, Some(8.0));
    assert_eq!(credit.margin, Some(0.1));
    assert_eq!(credit.color.as_deref(), Some("#ff0000"));
    assert_eq!(credit.align, Some(Align::Center));
    assert_eq!(credit.vertical_align, Some(Align::Right));
}

#[test]
fn test_inherit_cycle() {
    let json = r#"{ "rules": {
        "a": { "inherit": "b" },
        "b": { "inherit": "c" },
        "c": { "inherit": "a" }
    } }"#;
    assert!(matches!(
        StyleSheet::from_json(json),
        Err(StyleError::InheritCycle(name)) if name == "a"
    ));
}

#[test]
fn test_self_inherit() {
    let mut rules = HashMap::new();
    let rule = StyleRule {
        inherit: Some("loop".to_string()),
        ..StyleRule::default()
    };
    let _ = rules.insert("loop".to_string(), rule);
    assert!(matches!(
        StyleSheet::new(StyleSettings::default(), rules),
        Err(StyleError::InheritCycle(_))
    ));
}

#[test]
fn test_unknown_parent() {
    let json = r#"{ "rules": { "a": { "inherit": "ghost" } } }"#;
    match StyleSheet::from_json(json) {
        Err(StyleError::UnknownParent { rule, parent }) => {
            assert_eq!(rule, "a");
            assert_eq!(parent, "ghost");
        }
        other => panic!("expected UnknownParent, got {other:?}"),
    }
}

#[test]
fn test_malformed_json() {
    assert!(matches!(
        StyleSheet::from_json("{ \"rules\": 3 }"),
        Err(StyleError::Json(_))
    ));
}

#[test]
fn test_apply_fills_unset_values() {
    let mut e = Element::text("Photo by A. Author").with_style("credit");
    sheet().apply_to(&mut e);

    assert_eq!(e.font.as_deref(), Some("fonts/Merriweather.ttf"));
    assert_eq!(e.font_size, Some(8.0));
    assert_eq!(e.margin, Some(0.1));
    assert_eq!(e.color(), [255, 0, 0]);
    assert_eq!(e.align().horizontal, Align::Center);
    assert_eq!(e.align().vertical, Align::BOTTOM);
}

#[test]
fn test_apply_keeps_explicit_values() {
    let mut e = Element::text("x").with_style("caption");
    e.font_size = Some(14.0);
    e.set_color(Color::rgb(1, 2, 3));
    e.area.align.horizontal = Align::Left;
    sheet().apply_to(&mut e);

    assert_eq!(e.font_size, Some(14.0));
    assert_eq!(e.color(), [1, 2, 3]);
    assert_eq!(e.align().horizontal, Align::Left);
    assert_eq!(e.font.as_deref(), Some("fonts/Merriweather.ttf"));
}

#[test]
fn test_apply_is_repeatable() {
    let sheet = sheet();
    let mut e = Element::text("x").with_style("caption");
    sheet.apply_to(&mut e);
    let once = e.clone();
    sheet.apply_to(&mut e);
    assert_eq!(e, once);
}

#[test]
fn test_unknown_style_is_ignored() {
    let mut e = Element::text("x").with_style("nothing");
    let before = e.clone();
    sheet().apply_to(&mut e);
    assert_eq!(e, before);
}

#[test]
fn test_color_opacity_from_settings() {
    let mut e = Element::text("x").with_style("caption");
    sheet().apply_to(&mut e);
    assert_eq!(e.color(), [90, 90, 90]);
    assert_eq!(e.opacity(), 0.8);
}
