use serde::{Deserialize, Serialize};

use super::category::CategoryRef;
use super::price::Price;
use super::slug::Slug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

/// Product image entry from the WooCommerce payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub id: u64,
    pub src: String,
    #[serde(default)]
    pub alt: String,
}

/// Full product as returned by `wc/v3/products`.
///
/// Only display fields are carried; inventory, pricing rules, and variations
/// stay on the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub slug: Slug,
    #[serde(default)]
    pub price: Price,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_html: Option<String>,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub categories: Vec<CategoryRef>,
}

/// Slim product form carried in search results: just what a dropdown row
/// renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub slug: Slug,
    pub price: Price,
    pub thumbnail: Option<String>,
}

impl From<&Product> for ProductSummary {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            slug: product.slug.clone(),
            price: product.price.clone(),
            thumbnail: product.images.first().map(|image| image.src.clone()),
        }
    }
}
