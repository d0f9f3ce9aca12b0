use super::*;
use common::{catalog, category, engine, product, product_in, view_names};

mod common {
    use super::*;
    use crate::types::{Category, CategoryId, CategoryRef, Price, ProductId, Slug};

    pub(super) fn category(id: u64, name: &str, slug: &str) -> Category {
        Category {
            id: CategoryId(id),
            name: name.to_string(),
            slug: Slug::try_new(slug).unwrap(),
        }
    }

    pub(super) fn product(id: u64, name: &str, price: &str) -> Product {
        product_in(id, name, price, &[])
    }

    pub(super) fn product_in(id: u64, name: &str, price: &str, categories: &[(u64, &str)]) -> Product {
        Product {
            id: ProductId(id),
            name: name.to_string(),
            slug: Slug::try_new(name.to_lowercase().replace(' ', "-")).unwrap(),
            price: Price::new(price),
            price_html: None,
            short_description: String::new(),
            description: String::new(),
            images: Vec::new(),
            categories: categories
                .iter()
                .map(|&(id, slug)| CategoryRef {
                    id: CategoryId(id),
                    name: slug.to_string(),
                    slug: Slug::try_new(slug).unwrap(),
                })
                .collect(),
        }
    }

    pub(super) fn catalog(products: Vec<Product>, categories: Vec<Category>) -> Arc<CatalogSnapshot> {
        Arc::new(CatalogSnapshot::new(products, categories))
    }

    pub(super) fn engine(products: Vec<Product>, categories: Vec<Category>) -> FilterEngine {
        FilterEngine::new(catalog(products, categories))
    }

    pub(super) fn view_names(engine: &FilterEngine) -> Vec<&str> {
        engine.view().iter().map(|p| p.name.as_str()).collect()
    }
}

mod search_term {
    use super::*;

    #[test]
    fn test_default_view_is_catalog_order() {
        let engine = engine(
            vec![product(1, "Snare Drum", "50"), product(2, "Hi-Hat", "30")],
            vec![],
        );

        assert_eq!(view_names(&engine), ["Snare Drum", "Hi-Hat"]);
    }

    #[test]
    fn test_name_match_is_case_insensitive_substring() {
        let mut engine = engine(
            vec![
                product(1, "Snare Drum", "50"),
                product(2, "Hi-Hat", "30"),
                product(3, "Drum Throne", "80"),
            ],
            vec![],
        );

        engine.set_search_term("DRUM");
        assert_eq!(view_names(&engine), ["Snare Drum", "Drum Throne"]);

        engine.set_search_term("hi-h");
        assert_eq!(view_names(&engine), ["Hi-Hat"]);
    }

    #[test]
    fn test_no_match_yields_empty_view() {
        let mut engine = engine(vec![product(1, "Snare Drum", "50")], vec![]);

        engine.set_search_term("guitar");
        assert!(engine.view().is_empty());
    }
}

mod category_filter {
    use super::*;
    use crate::types::Slug;

    #[test]
    fn test_all_is_a_noop_filter() {
        let drums = category(1, "Drums", "drums");
        let mut engine = engine(
            vec![
                product_in(1, "Snare Drum", "50", &[(1, "drums")]),
                product(2, "Hi-Hat", "30"),
            ],
            vec![drums],
        );

        engine.set_search_term("h");
        let with_all: Vec<String> = view_names(&engine).iter().map(|s| s.to_string()).collect();

        engine.set_category(CategoryFilter::All);
        assert_eq!(view_names(&engine), with_all);
    }

    #[test]
    fn test_membership_is_matched_by_id_not_slug() {
        // The product's embedded ref carries a stale slug; identity matching
        // must still find it through the id.
        let drums = category(1, "Drums", "drums");
        let mut engine = engine(
            vec![product_in(1, "Snare Drum", "50", &[(1, "drums-old")])],
            vec![drums],
        );

        engine.set_category(CategoryFilter::Slug(Slug::try_new("drums").unwrap()));
        assert_eq!(view_names(&engine), ["Snare Drum"]);
    }

    #[test]
    fn test_prefix_slugs_do_not_cross_match() {
        let drums = category(1, "Drums", "drums");
        let hardware = category(2, "Drums Hardware", "drums-hardware");
        let mut engine = engine(
            vec![
                product_in(1, "Snare Drum", "50", &[(1, "drums")]),
                product_in(2, "Cymbal Stand", "40", &[(2, "drums-hardware")]),
            ],
            vec![drums, hardware],
        );

        engine.set_category(CategoryFilter::Slug(Slug::try_new("drums").unwrap()));
        assert_eq!(view_names(&engine), ["Snare Drum"]);
    }

    #[test]
    fn test_unknown_slug_matches_nothing() {
        let mut engine = engine(
            vec![product_in(1, "Snare Drum", "50", &[(1, "drums")])],
            vec![category(1, "Drums", "drums")],
        );

        engine.set_category(CategoryFilter::Slug(Slug::try_new("keyboards").unwrap()));
        assert!(engine.view().is_empty());
    }

    #[test]
    fn test_search_and_category_compose() {
        let drums = category(1, "Drums", "drums");
        let mut engine = engine(
            vec![
                product_in(1, "Snare Drum", "50", &[(1, "drums")]),
                product_in(2, "Drum Throne", "80", &[(1, "drums")]),
                product(3, "Drum Poster", "5"),
            ],
            vec![drums],
        );

        engine.set_search_term("drum");
        engine.set_category(CategoryFilter::Slug(Slug::try_new("drums").unwrap()));
        assert_eq!(view_names(&engine), ["Snare Drum", "Drum Throne"]);
    }
}

mod sorting {
    use super::*;

    #[test]
    fn test_price_asc_orders_cheapest_first() {
        let mut engine = engine(
            vec![product(1, "Snare Drum", "50"), product(2, "Hi-Hat", "30")],
            vec![],
        );

        engine.set_sort(SortKey::PriceAsc);
        assert_eq!(view_names(&engine), ["Hi-Hat", "Snare Drum"]);
    }

    #[test]
    fn test_price_desc_orders_dearest_first() {
        let mut engine = engine(
            vec![product(1, "Hi-Hat", "30"), product(2, "Snare Drum", "50")],
            vec![],
        );

        engine.set_sort(SortKey::PriceDesc);
        assert_eq!(view_names(&engine), ["Snare Drum", "Hi-Hat"]);
    }

    #[test]
    fn test_equal_prices_preserve_catalog_order() {
        let mut engine = engine(
            vec![
                product(1, "Stick Bag", "30"),
                product(2, "Hi-Hat", "30"),
                product(3, "Practice Pad", "30"),
            ],
            vec![],
        );

        engine.set_sort(SortKey::PriceAsc);
        assert_eq!(view_names(&engine), ["Stick Bag", "Hi-Hat", "Practice Pad"]);
    }

    #[test]
    fn test_price_asc_is_monotonic() {
        let mut engine = engine(
            vec![
                product(1, "A", "120"),
                product(2, "B", "15"),
                product(3, "C", "99.5"),
                product(4, "D", "15"),
            ],
            vec![],
        );

        engine.set_sort(SortKey::PriceAsc);
        let prices: Vec<f64> = engine.view().iter().map(|p| p.price.sort_value()).collect();
        assert!(prices.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_non_numeric_price_sorts_lowest() {
        let mut engine = engine(
            vec![
                product(1, "Snare Drum", "50"),
                product(2, "Mystery Box", "N/A"),
                product(3, "Hi-Hat", "30"),
            ],
            vec![],
        );

        engine.set_sort(SortKey::PriceAsc);
        assert_eq!(view_names(&engine), ["Mystery Box", "Hi-Hat", "Snare Drum"]);
    }

    #[test]
    fn test_newest_keeps_catalog_order_after_other_sort() {
        let mut engine = engine(
            vec![product(1, "Snare Drum", "50"), product(2, "Hi-Hat", "30")],
            vec![],
        );

        engine.set_sort(SortKey::PriceAsc);
        engine.set_sort(SortKey::Newest);
        assert_eq!(view_names(&engine), ["Snare Drum", "Hi-Hat"]);
    }
}

mod invariants {
    use super::*;

    #[test]
    fn test_recompute_is_idempotent() {
        let mut engine = engine(
            vec![
                product(1, "Snare Drum", "50"),
                product(2, "Hi-Hat", "30"),
                product(3, "Drum Throne", "80"),
            ],
            vec![],
        );

        engine.set_search_term("drum");
        engine.set_sort(SortKey::PriceAsc);
        let first: Vec<Product> = engine.view().to_vec();

        engine.set_search_term("drum");
        engine.set_sort(SortKey::PriceAsc);
        assert_eq!(engine.view(), first.as_slice());
    }

    #[test]
    fn test_catalog_snapshot_is_never_mutated() {
        let products = vec![product(1, "Snare Drum", "50"), product(2, "Hi-Hat", "30")];
        let snapshot = catalog(products.clone(), vec![]);
        let mut engine = FilterEngine::new(snapshot.clone());

        engine.set_search_term("hi");
        engine.set_sort(SortKey::PriceDesc);

        assert_eq!(snapshot.products(), products.as_slice());
    }
}
