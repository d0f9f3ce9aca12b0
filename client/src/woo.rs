//! WooCommerce product endpoints (`wc/v3`).

use async_trait::async_trait;
use reqwest::Client;
use storefront_core::types::{Category, Product, ProductSummary};
use storefront_search::{SearchBackend, SearchError};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::fetch::{build_client, get_json};

/// Authenticated client for the WooCommerce product endpoints.
#[derive(Clone)]
pub struct WooClient {
    client: Client,
    config: ClientConfig,
}

impl WooClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(&config)?,
            config,
        })
    }

    fn auth(&self) -> Option<(&str, &str)> {
        Some((&self.config.consumer_key, &self.config.consumer_secret))
    }

    async fn get(&self, path: &str) -> Result<Vec<Product>> {
        get_json(&self.client, &self.config.endpoint(path), self.auth()).await
    }

    /// Full product list, capped at the backend's page maximum.
    pub async fn products(&self) -> Result<Vec<Product>> {
        self.get("wc/v3/products?per_page=100").await
    }

    pub async fn product_by_slug(&self, slug: &str) -> Result<Option<Product>> {
        let mut products = self
            .get(&format!("wc/v3/products?slug={}", urlencoding::encode(slug)))
            .await?;
        Ok(if products.is_empty() {
            None
        } else {
            Some(products.remove(0))
        })
    }

    /// Category list, trimmed to identity fields.
    pub async fn categories(&self) -> Result<Vec<Category>> {
        get_json(
            &self.client,
            &self
                .config
                .endpoint("wc/v3/products/categories?_fields=id,name,slug"),
            self.auth(),
        )
        .await
    }

    /// Backend-side free-text product search.
    pub async fn search_products(&self, term: &str) -> Result<Vec<Product>> {
        self.get(&format!(
            "wc/v3/products?search={}",
            urlencoding::encode(term)
        ))
        .await
    }
}

/// The instant-search controller looks products up through this seam.
#[async_trait]
impl SearchBackend for WooClient {
    async fn search(&self, term: &str) -> std::result::Result<Vec<ProductSummary>, SearchError> {
        let products = self.search_products(term).await?;
        Ok(products.iter().map(ProductSummary::from).collect())
    }
}

impl From<ClientError> for SearchError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Status { status } => SearchError::Status(status),
            ClientError::Decode(msg) => SearchError::Payload(msg),
            other => SearchError::Network(other.to_string()),
        }
    }
}
