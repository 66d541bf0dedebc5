// Host-side tests for the menu catalog, view model and detail modal state.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod menu {
    include!("../src/core/menu.rs");
}

use menu::*;

const FIXTURE: &str = include_str!("fixtures/menu.json");

fn catalog() -> MenuCatalog {
    MenuCatalog::from_json(FIXTURE).expect("fixture parses")
}

#[test]
fn fixture_loads_categories_and_items() {
    let c = catalog();
    assert_eq!(c.categories().len(), 2);
    assert_eq!(c.item_count(), 3);
    assert_eq!(c.categories()[0].name, "Hot Drinks");
    assert_eq!(c.categories()[0].items[1].image, None);
}

#[test]
fn view_has_one_section_per_category_and_one_card_per_item() {
    let view = catalog().view();
    assert_eq!(view.sections.len(), 2);
    assert_eq!(view.card_count(), 3);
    let ids: Vec<&str> = view
        .sections
        .iter()
        .flat_map(|s| s.cards.iter().map(|c| c.item_id.as_str()))
        .collect();
    assert_eq!(ids, ["hd-espresso", "hd-flat-white", "pa-croissant"]);
    assert_eq!(view.sections[0].anchor, "category-hot-drinks");
    assert_eq!(view.sections[1].anchor, "category-pastries");
    assert_eq!(view.sections[1].cards[0].category_name, "Pastries");
}

#[test]
fn find_item_returns_exact_record() {
    let c = catalog();
    let item = c.find_item("hd-flat-white", "Hot Drinks").expect("present");
    assert_eq!(item, &c.categories()[0].items[1]);
    assert_eq!(item.description, "Double ristretto with velvety milk.");
}

#[test]
fn missing_items_are_not_found() {
    let c = catalog();
    assert!(c.find_item("nope", "Hot Drinks").is_none());
    assert!(c.find_item("pa-croissant", "Hot Drinks").is_none());
    assert!(c.find_item("hd-espresso", "Cold Drinks").is_none());
    assert!(MenuCatalog::default().find_item("x", "y").is_none());
}

#[test]
fn modal_holds_item_until_closed() {
    let c = catalog();
    let mut modal = ItemDetailModal::default();
    assert!(!modal.is_open());
    let opened = modal.open(&c, "pa-croissant", "Pastries").cloned();
    assert_eq!(opened.as_ref().map(|i| i.name.as_str()), Some("Butter Croissant"));
    assert_eq!(modal.current(), opened.as_ref());
    let closed = modal.close();
    assert_eq!(closed, opened);
    assert!(!modal.is_open());
}

#[test]
fn modal_ignores_unknown_ids() {
    let c = catalog();
    let mut modal = ItemDetailModal::default();
    modal.open(&c, "hd-espresso", "Hot Drinks");
    assert!(modal.open(&c, "ghost", "Hot Drinks").is_none());
    assert_eq!(modal.current().map(|i| i.id.as_str()), Some("hd-espresso"));
}

#[test]
fn nutrition_parses_key_value_pairs() {
    let facts = parse_nutrition("Calories: 120, Protein: 6g, Sugar: 9g");
    assert_eq!(facts.len(), 3);
    assert_eq!(facts[0].key, "Calories");
    assert_eq!(facts[0].value.as_deref(), Some("120"));
    assert_eq!(facts[2].key, "Sugar");
    assert_eq!(facts[2].value.as_deref(), Some("9g"));
}

#[test]
fn nutrition_is_lenient_about_missing_separator() {
    let facts = parse_nutrition("Calories: 270, Gluten");
    assert_eq!(facts.len(), 2);
    assert_eq!(facts[1].key, "Gluten");
    assert_eq!(facts[1].value, None);
    assert!(parse_nutrition("").is_empty());
    assert!(parse_nutrition("   ").is_empty());
}

#[test]
fn malformed_nutrition_is_reported() {
    let c = catalog();
    let bad: Vec<&str> = c
        .malformed_nutrition()
        .iter()
        .map(|i| i.id.as_str())
        .collect();
    assert_eq!(bad, ["pa-croissant"]);
}

#[test]
fn category_anchor_slugifies_spaces() {
    assert_eq!(category_anchor("Hot Drinks"), "category-hot-drinks");
    assert_eq!(category_anchor("Cold Brew Bar"), "category-cold-brew-bar");
    assert_eq!(category_anchor("Tea"), "category-tea");
}

#[test]
fn card_markup_escapes_text_and_switches_on_image() {
    let view = catalog().view();
    let with_image = view.sections[1].cards[0].inner_html();
    assert!(with_image.contains("<img src=\"images/croissant.jpg\""));
    assert!(with_image.contains("Butter Croissant"));
    let without = view.sections[0].cards[1].inner_html();
    assert!(!without.contains("<img"));
    assert!(without.contains("Flat White"));

    let card = CardView {
        item_id: "x".into(),
        category_name: "y".into(),
        name: "<b>\"Mocha\" & co</b>".into(),
        image: None,
    };
    let html = card.inner_html();
    assert!(html.contains("&lt;b&gt;&quot;Mocha&quot; &amp; co&lt;/b&gt;"));
    assert!(!html.contains("<b>"));
}

#[test]
fn empty_image_reference_counts_as_none() {
    let json = r#"{"menu_categories":[{"category_name":"Tea","items":[
        {"id":"t1","name":"Sencha","image":"","description":"","nutritional_info":""}]}]}"#;
    let c = MenuCatalog::from_json(json).unwrap();
    assert_eq!(c.view().sections[0].cards[0].image, None);
}

#[test]
fn invalid_json_is_a_parse_error() {
    let err = MenuCatalog::from_json("{ not json").unwrap_err();
    assert!(matches!(err, MenuError::Parse(_)));
    let err = MenuCatalog::from_json(r#"{"menu_categories": 3}"#).unwrap_err();
    assert!(matches!(err, MenuError::Parse(_)));
}

#[test]
fn http_error_message_mentions_status() {
    assert_eq!(MenuError::Http(404).to_string(), "HTTP error! status: 404");
}
