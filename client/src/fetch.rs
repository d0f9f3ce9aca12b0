//! Shared request plumbing for the typed clients.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

pub(crate) fn build_client(config: &ClientConfig) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(|e| ClientError::Network(e.to_string()))
}

/// One GET, status-checked and JSON-decoded. `auth` adds HTTP basic auth
/// (the WooCommerce consumer key/secret pair); WordPress content endpoints
/// are public and pass `None`.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    auth: Option<(&str, &str)>,
) -> Result<T> {
    let mut request = client.get(url);
    if let Some((user, password)) = auth {
        request = request.basic_auth(user, Some(password));
    }

    let response = request
        .send()
        .await
        .map_err(|e| ClientError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        tracing::debug!(url, status = status.as_u16(), "backend request failed");
        return Err(ClientError::Status {
            status: status.as_u16(),
        });
    }

    response
        .json()
        .await
        .map_err(|e| ClientError::Decode(e.to_string()))
}
