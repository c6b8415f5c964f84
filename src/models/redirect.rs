use serde::Deserialize;
use url::Url;

use crate::error::RedirectError;

/// Group chosen by the directory for one visitor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RedirectResponse {
    pub redirect_url: String,

    #[serde(default)]
    pub group_id: Option<String>,

    pub group_name: String,

    pub message: String,
}

impl RedirectResponse {
    pub fn from_body(body: &str) -> Result<Self, RedirectError> {
        let response: Self = serde_json::from_str(body).map_err(|error| {
            RedirectError::Transport(format!("invalid directory response body: {error}"))
        })?;

        parse_redirect_url(&response.redirect_url)?;

        Ok(response)
    }
}

/// Only absolute `http`/`https` links are handed to a navigator.
pub fn parse_redirect_url(raw: &str) -> Result<Url, RedirectError> {
    if raw.trim().is_empty() {
        return Err(RedirectError::Transport(
            "directory response has an empty redirect_url".to_owned(),
        ));
    }

    let url = Url::parse(raw).map_err(|error| {
        RedirectError::Transport(format!("invalid redirect_url '{raw}': {error}"))
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(RedirectError::Transport(format!(
            "redirect_url '{raw}' must use http or https"
        )));
    }

    Ok(url)
}
