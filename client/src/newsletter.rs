//! Newsletter subscription ("The Newsletter Plugin" form endpoint).

use reqwest::Client;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::fetch::build_client;

pub struct NewsletterClient {
    client: Client,
    submit_url: String,
}

impl NewsletterClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            client: build_client(config)?,
            // The plugin's form handler hangs off the site root, not wp-json.
            submit_url: format!("{}/?na=s", config.site_base()),
        })
    }

    /// Submits an address. The plugin replies with an HTML page, so only the
    /// status is checked. `nr=widget` identifies the submission source.
    pub async fn subscribe(&self, email: &str) -> Result<()> {
        let response = self
            .client
            .post(&self.submit_url)
            .form(&[("ne", email), ("nr", "widget")])
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}
