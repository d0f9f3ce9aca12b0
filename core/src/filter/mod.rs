//! Filtered, sorted views over an immutable product catalog.
//!
//! # Design
//!
//! - Three independent criteria: free-text name match, category membership,
//!   sort order. Each setter triggers a full recompute of the derived view.
//! - Category membership is resolved slug → id once per recompute, then
//!   tested by id. Matching by slug string per product would cross-match
//!   categories with overlapping slug prefixes.
//! - Recomputation always copies; the catalog snapshot is never mutated.
//! - An empty view is a valid outcome, not an error.

use std::str::FromStr;
use std::sync::Arc;

use thiserror::Error;

use crate::catalog::CatalogSnapshot;
use crate::types::{Product, Slug};

/// Sort order for the derived view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Catalog-supplied order, unchanged.
    #[default]
    Newest,
    /// Ascending by parsed price; unparsable prices sort first.
    PriceAsc,
    /// Descending by parsed price; unparsable prices sort last.
    PriceDesc,
}

#[derive(Error, Debug)]
#[error("unknown sort key: {0}")]
pub struct UnknownSortKey(String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            other => Err(UnknownSortKey(other.to_string())),
        }
    }
}

/// Category criterion: everything, or one category picked by slug.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Slug(Slug),
}

/// The three user-controlled criteria the view is derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_term: String,
    pub category: CategoryFilter,
    pub sort: SortKey,
}

/// Deterministic filter/sort over a catalog snapshot.
pub struct FilterEngine {
    catalog: Arc<CatalogSnapshot>,
    criteria: FilterCriteria,
    view: Vec<Product>,
}

/// Construction.
impl FilterEngine {
    /// Starts with default criteria: no search term, all categories, newest.
    pub fn new(catalog: Arc<CatalogSnapshot>) -> Self {
        Self::with_criteria(catalog, FilterCriteria::default())
    }

    pub fn with_criteria(catalog: Arc<CatalogSnapshot>, criteria: FilterCriteria) -> Self {
        let mut engine = Self {
            catalog,
            criteria,
            view: Vec::new(),
        };
        engine.recompute();
        engine
    }
}

/// Criteria setters. Each one recomputes the derived view.
impl FilterEngine {
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.criteria.search_term = term.into();
        self.recompute();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.criteria.category = category;
        self.recompute();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.criteria.sort = sort;
        self.recompute();
    }
}

/// View access.
impl FilterEngine {
    /// The current derived view. Empty means "no results", which callers
    /// render explicitly.
    pub fn view(&self) -> &[Product] {
        &self.view
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn catalog(&self) -> &CatalogSnapshot {
        &self.catalog
    }
}

impl FilterEngine {
    /// Full recompute on a fresh copy of the catalog list, in fixed order:
    /// name match, then category membership, then sort.
    fn recompute(&mut self) {
        let mut products: Vec<Product> = self.catalog.products().to_vec();

        let needle = self.criteria.search_term.to_lowercase();
        if !needle.is_empty() {
            products.retain(|product| product.name.to_lowercase().contains(&needle));
        }

        if let CategoryFilter::Slug(slug) = &self.criteria.category {
            match self.catalog.category_by_slug(slug) {
                Some(category) => {
                    let wanted = category.id;
                    products.retain(|product| {
                        product.categories.iter().any(|member| member.id == wanted)
                    });
                }
                // Unknown slug resolves to no category: nothing can be a
                // member of it.
                None => products.clear(),
            }
        }

        // sort_by is stable: equal prices keep catalog order.
        match self.criteria.sort {
            SortKey::Newest => {}
            SortKey::PriceAsc => products
                .sort_by(|a, b| a.price.sort_value().total_cmp(&b.price.sort_value())),
            SortKey::PriceDesc => products
                .sort_by(|a, b| b.price.sort_value().total_cmp(&a.price.sort_value())),
        }

        self.view = products;
    }
}

#[cfg(test)]
mod tests;
