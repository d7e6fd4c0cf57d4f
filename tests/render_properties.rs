//! Behavioral properties of the recipe pipeline, checked through the public API

use pretty_assertions::assert_eq;
use serde_yaml::{Mapping, Value};

use recipe_svg::renderer::{render_document, RingGeometry, TextStyle};
use recipe_svg::template::{expand_elements, substitute_str};
use recipe_svg::{
    render, ComponentRegistry, Element, IconFont, Recipe, RecipeError, RenderError, Screen,
    SvgBuilder, SvgConfig, TokenTable,
};

fn yaml(src: &str) -> Value {
    serde_yaml::from_str(src).unwrap()
}

fn tokens() -> TokenTable {
    TokenTable::from_value(&yaml("colors: { primary: '#2E8E43', track: '#cccccc' }"))
}

fn recipe(screen: &str, components: &str) -> Recipe {
    Recipe::new(
        Screen::from_value(yaml(screen)).unwrap(),
        tokens(),
        ComponentRegistry::from_value(yaml(components)).unwrap(),
    )
}

fn draw(recipe: &Recipe) -> SvgBuilder {
    let config = SvgConfig::default();
    let font = IconFont::new(b"font", &config);
    let elements = recipe.resolve().unwrap();
    render_document(&recipe.screen.meta, &elements, &font, &config, true).unwrap()
}

const META: &str = "meta:\n  artboard: { w: 360, h: 800 }\n  viewport: { x: 0, y: 0, w: 360, h: 800 }\n";

#[test]
fn color_resolution_is_identity_for_plain_strings() {
    let t = tokens();
    for s in ["#fff", "red", "colors.primary", "@colorsprimary", "primary"] {
        assert_eq!(t.resolve_str(s).unwrap(), Value::String(s.to_string()));
    }
}

#[test]
fn color_resolution_returns_table_entry() {
    let t = tokens();
    assert_eq!(t.resolve_str("@colors.primary").unwrap(), yaml("'#2E8E43'"));
    assert!(matches!(
        t.resolve_str("@colors.secondary"),
        Err(RecipeError::UnknownColor { .. })
    ));
}

#[test]
fn substitution_leaves_unknown_placeholders() {
    let props: Mapping = serde_yaml::from_str("{ known: yes }").unwrap();
    assert_eq!(substitute_str("no placeholders here", &props), "no placeholders here");
    assert_eq!(substitute_str("${name}", &props), "${name}");
    assert_eq!(substitute_str("${known}/${name}", &props), "yes/${name}");
}

#[test]
fn expansion_prefixes_ids_in_order() {
    let r = recipe(
        &format!(
            "{META}elements:\n  - {{ id: bg, type: rect }}\nuses:\n  - {{ use: pair, idPrefix: p_ }}\n  - {{ use: pair, idPrefix: q_ }}\n"
        ),
        "components:\n  pair:\n    elements:\n      - { id: a, type: rect }\n      - { id: b, type: rect }\n",
    );
    let ids: Vec<Value> = expand_elements(&r.screen, &r.components)
        .unwrap()
        .iter()
        .map(|e| e["id"].clone())
        .collect();
    assert_eq!(
        ids,
        vec![yaml("bg"), yaml("p_a"), yaml("p_b"), yaml("q_a"), yaml("q_b")]
    );
}

#[test]
fn progress_ring_dash_lengths() {
    let frame = recipe_svg::Frame::new(0.0, 0.0, 120.0, 120.0);
    let zero = RingGeometry::new(&frame, 18.0, 0.0);
    assert_eq!(zero.dash, 0.0);

    let full = RingGeometry::new(&frame, 18.0, 1.0);
    assert!((full.dash - full.circumference).abs() < 1e-9);
    assert!((full.circumference - 2.0 * std::f64::consts::PI * 51.0).abs() < 1e-9);

    assert_eq!(RingGeometry::new(&frame, 18.0, 1.5), full);
}

#[test]
fn transparent_rect_fill_becomes_none() {
    let r = recipe(
        &format!(
            "{META}elements:\n  - {{ type: rect, frame: {{ x: 0, y: 0, w: 10, h: 10 }}, style: {{ fill: transparent }} }}\n"
        ),
        "components: {}",
    );
    let svg = draw(&r).build();
    assert!(svg.contains(r#"fill="none""#));
    assert!(!svg.contains("transparent"));
}

#[test]
fn three_line_text_offsets() {
    let el = Element::from_value(&yaml(
        "{ type: text, text: \"a\\nb\\nc\", frame: { x: 0, y: 0, w: 100, h: 100 }, style: { fontSize: 10 } }",
    ))
    .unwrap();
    let offsets = TextStyle::from_style(&el.style)
        .unwrap()
        .layout(&el.frame)
        .line_offsets(3);
    let expected = [0.0, 11.0, 22.0];
    for (got, want) in offsets.iter().zip(expected) {
        assert!((got - want).abs() < 1e-9, "{got} != {want}");
    }
}

#[test]
fn end_to_end_component_rect_uses_token_color() {
    let r = recipe(
        &format!("{META}uses:\n  - {{ use: swatch }}\n"),
        "components:\n  swatch:\n    elements:\n      - { type: rect, frame: { x: 0, y: 0, w: 100, h: 100 }, style: { fill: '@colors.primary' } }\n",
    );
    let builder = draw(&r);
    let rects: Vec<&String> = builder
        .elements()
        .iter()
        .filter(|e| e.trim_start().starts_with("<rect"))
        .collect();
    assert_eq!(rects.len(), 1);
    assert!(rects[0].contains(r##"fill="#2E8E43""##));
    assert_eq!(builder.elements().len(), 1);
}

#[test]
fn color_tokens_inside_props_resolve_after_expansion() {
    let r = recipe(
        &format!("{META}uses:\n  - {{ use: swatch, props: {{ tint: '@colors.primary' }} }}\n"),
        "components:\n  swatch:\n    elements:\n      - { type: rect, frame: { x: 0, y: 0, w: 10, h: 10 }, style: { fill: '${tint}' } }\n",
    );
    let builder = draw(&r);
    assert!(builder.elements()[0].contains(r##"fill="#2E8E43""##));
}

#[test]
fn icons_embed_one_font_face() {
    let r = recipe(
        &format!(
            "{META}elements:\n  - {{ type: icon, asset: 'icon:home', frame: {{ x: 0, y: 0, w: 48, h: 48 }} }}\n  - {{ type: icon, asset: 'icon:star', frame: {{ x: 60, y: 0, w: 48, h: 48 }} }}\n"
        ),
        "components: {}",
    );
    let svg = draw(&r).build();
    assert_eq!(svg.matches("@font-face").count(), 1);
    assert!(svg.contains("data:font/woff2;base64,Zm9udA=="));
}

#[test]
fn unknown_widget_draws_nothing() {
    let r = recipe(
        &format!("{META}elements:\n  - {{ type: unknown_widget, frame: {{ x: 0, y: 0, w: 10, h: 10 }} }}\n"),
        "components: {}",
    );
    assert!(draw(&r).elements().is_empty());
}

#[test]
fn unknown_component_aborts_render() {
    let err = render(
        &format!("{META}uses:\n  - {{ use: ghost }}\n"),
        "colors: {}",
        "components: {}",
        b"",
    )
    .unwrap_err();
    assert!(matches!(
        err,
        RenderError::Recipe(RecipeError::UnknownComponent { .. })
    ));
}
