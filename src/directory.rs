use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::RedirectError;
use crate::models::redirect::RedirectResponse;
use crate::utils::constants::REDIRECT_PATH;

/// Source of "which group should this visitor join".
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    /// Asks the directory for one available group. Never retries.
    async fn find_available_group(&self) -> Result<RedirectResponse, RedirectError>;
}

/// Directory client backed by the REST API.
pub struct HttpDirectoryClient {
    client: Client,
    endpoint: String,
}

impl HttpDirectoryClient {
    /// `base_url` is expected without a trailing slash, as produced by `Config::load`.
    #[must_use]
    pub fn new(client: Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), REDIRECT_PATH),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl DirectoryClient for HttpDirectoryClient {
    async fn find_available_group(&self) -> Result<RedirectResponse, RedirectError> {
        debug!(endpoint = %self.endpoint, "requesting available group");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|error| RedirectError::Transport(error.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RedirectError::Unavailable {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|error| RedirectError::Transport(error.to_string()))?;

        RedirectResponse::from_body(&body)
    }
}
