//! Immutable product catalog handed to the filter engine.

use crate::types::{Category, Product, Slug};

/// Snapshot of the product and category lists fetched by a page loader.
///
/// The filter engine never refetches or mutates it. Products stay in the
/// order the backend returned them, which is what the `Newest` sort
/// preserves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSnapshot {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl CatalogSnapshot {
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Resolves a slug to its category, if the catalog knows it.
    pub fn category_by_slug(&self, slug: &Slug) -> Option<&Category> {
        self.categories.iter().find(|category| &category.slug == slug)
    }
}
