//! End-to-end filter scenarios over the public API.

use std::sync::Arc;

use storefront_core::catalog::CatalogSnapshot;
use storefront_core::filter::{CategoryFilter, FilterEngine, SortKey};
use storefront_core::types::{Price, Product, ProductId, Slug};

fn product(id: u64, name: &str, price: &str) -> Product {
    Product {
        id: ProductId(id),
        name: name.to_string(),
        slug: Slug::try_new(name.to_lowercase().replace(' ', "-")).unwrap(),
        price: Price::new(price),
        price_html: None,
        short_description: String::new(),
        description: String::new(),
        images: Vec::new(),
        categories: Vec::new(),
    }
}

#[test]
fn test_price_asc_over_unfiltered_catalog() {
    let catalog = Arc::new(CatalogSnapshot::new(
        vec![product(1, "Snare Drum", "50"), product(2, "Hi-Hat", "30")],
        vec![],
    ));

    let mut engine = FilterEngine::new(catalog);
    engine.set_search_term("");
    engine.set_category(CategoryFilter::All);
    engine.set_sort(SortKey::PriceAsc);

    let names: Vec<&str> = engine.view().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Hi-Hat", "Snare Drum"]);
}

#[test]
fn test_sort_key_parses_from_cli_strings() {
    assert_eq!("newest".parse::<SortKey>().unwrap(), SortKey::Newest);
    assert_eq!("price-asc".parse::<SortKey>().unwrap(), SortKey::PriceAsc);
    assert_eq!("price-desc".parse::<SortKey>().unwrap(), SortKey::PriceDesc);
    assert!("cheapest".parse::<SortKey>().is_err());
}
