//! Integration tests for the filter engine.
//!
//! These tests run raw catalog text through the parser, the pipeline and
//! the session together, the way a presentation layer would.

use catalog_loader::{Catalog, Product};
use filter_engine::filters::*;
use filter_engine::{
    apply, derive_type_facets, CatalogSession, CatalogView, FilterCriteria, FilterPipeline,
    Selector,
};

const HEADER: &str = "name,url,type,gender,imageId";

fn ten_product_catalog() -> Catalog {
    let rows = [
        "USB-A Plug,https://p/1,USB-A,Male,1",
        "Type-C Plug,https://p/2,Type-C,Male,2",
        "USB-B Socket,https://p/3,USB-B,Female,3",
        "HDMI Cable,https://p/4,HDMI,Male,",
        "Type-C Socket,https://p/5,Type-C,Female,5",
        "Micro-USB Plug,https://p/6,Micro-USB,Male,6",
        "Mini-USB Socket,https://p/7,Mini-USB,Female,",
        "Type-C Cable,https://p/8,Type-C,Male,8",
        "1394 Port,https://p/9,1394,Female,9",
        "USB-3.0 Hub,https://p/10,USB-3.0,Female,10",
    ];
    let text = format!("{HEADER}\n{}", rows.join("\n"));
    Catalog::parse(&text)
}

fn names(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.name.as_str()).collect()
}

#[test]
fn test_type_selection_keeps_catalog_order() {
    let catalog = ten_product_catalog();
    assert_eq!(catalog.len(), 10);

    let criteria = FilterCriteria::new().with_type("Type-C".parse().unwrap());
    let result = apply(catalog.products(), &criteria);

    assert_eq!(names(&result), vec!["Type-C Plug", "Type-C Socket", "Type-C Cable"]);
}

#[test]
fn test_search_selects_by_name_only() {
    let catalog = Catalog::parse(&format!(
        "{HEADER}\nUSB Cable,https://u,USB-A,Male,1\nHDMI Adapter,https://h,HDMI,Male,2"
    ));

    let criteria = FilterCriteria::new().with_search("cable");
    let result = apply(catalog.products(), &criteria);

    assert_eq!(names(&result), vec!["USB Cable"]);
}

#[test]
fn test_identity_and_idempotence() {
    let catalog = ten_product_catalog();

    assert_eq!(apply(catalog.products(), &FilterCriteria::default()), catalog.products());

    let all_criteria = [
        FilterCriteria::default(),
        FilterCriteria::new().with_type(Selector::exact("Type-C")),
        FilterCriteria::new().with_gender(Selector::exact("Female")),
        FilterCriteria::new().with_search("PLUG"),
        FilterCriteria::new()
            .with_type(Selector::exact("USB-B"))
            .with_gender(Selector::exact("Male")),
    ];

    for criteria in &all_criteria {
        let once = apply(catalog.products(), criteria);
        let twice = apply(&once, criteria);
        assert_eq!(once, twice, "apply should be idempotent for {:?}", criteria);
    }
}

#[test]
fn test_filter_order_does_not_change_result() {
    let catalog = ten_product_catalog();
    let criteria = FilterCriteria::new()
        .with_gender(Selector::exact("Male"))
        .with_search("type-c");

    let forward = FilterPipeline::standard().apply(catalog.products(), &criteria);
    let reversed = FilterPipeline::new()
        .add_filter(SearchFilter)
        .add_filter(GenderFilter)
        .add_filter(TypeFilter)
        .apply(catalog.products(), &criteria);

    assert_eq!(forward, reversed);
    assert_eq!(names(&forward), vec!["Type-C Plug", "Type-C Cable"]);
}

#[test]
fn test_malformed_rows_do_not_shift_order() {
    let text = format!(
        "{HEADER}\n\
         First,https://1,USB-A,Male,1\n\
         Broken,https://2,USB-A,Male\n\
         Second\thttps://3\tUSB-B\tFemale\t3\n\
         \n\
         Third,https://4,HDMI,Male,4"
    );
    let catalog = Catalog::parse(&text);

    assert_eq!(names(catalog.products()), vec!["First", "Second", "Third"]);
    assert_eq!(derive_type_facets(catalog.products()), vec!["USB-A", "USB-B", "HDMI"]);
}

#[test]
fn test_header_only_input_is_empty_catalog() {
    let session = CatalogSession::new(Catalog::parse(HEADER));

    assert!(session.type_facets().is_empty());
    assert_eq!(session.view(), CatalogView::EmptyCatalog);
}

#[test]
fn test_session_round_trip_through_ui_events() {
    let mut session = CatalogSession::new(ten_product_catalog());

    // Facets drive the type selector
    let facets = session.type_facets();
    assert_eq!(facets.len(), 8);
    assert_eq!(facets[0], "USB-A");

    session.set_type(Selector::exact(facets[1].clone()));
    session.set_gender("Female".parse().unwrap());
    let view = session.view();
    assert_eq!(view.len(), 1);
    assert_eq!(view.products()[0].name, "Type-C Socket");
    assert_eq!(view.products()[0].image_id(), Some("5"));

    session.set_search("cable");
    assert_eq!(session.view(), CatalogView::NoMatches);

    session.reset();
    assert_eq!(session.view().len(), 10);
}
