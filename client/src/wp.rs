//! WordPress content endpoints (`wp/v2`). These are public; no auth.

use reqwest::Client;
use storefront_core::types::Post;

use crate::config::ClientConfig;
use crate::error::Result;
use crate::fetch::{build_client, get_json};

pub struct WpClient {
    client: Client,
    config: ClientConfig,
}

impl WpClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(&config)?,
            config,
        })
    }

    /// Recent blog posts, newest first as WordPress returns them.
    pub async fn posts(&self) -> Result<Vec<Post>> {
        get_json(&self.client, &self.config.endpoint("wp/v2/posts"), None).await
    }

    pub async fn post_by_slug(&self, slug: &str) -> Result<Option<Post>> {
        let url = self
            .config
            .endpoint(&format!("wp/v2/posts?slug={}", urlencoding::encode(slug)));
        let mut posts: Vec<Post> = get_json(&self.client, &url, None).await?;
        Ok(if posts.is_empty() {
            None
        } else {
            Some(posts.remove(0))
        })
    }
}
