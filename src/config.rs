use std::env;
use std::time::Duration;

use url::Url;

use crate::args::Args;
use crate::error::ConfigError;
use crate::utils::constants::{API_URL_ENV, DEFAULT_API_URL};

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub open_browser: bool,
}

impl Config {
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        let api_base_url =
            resolve_api_base_url(args.api_url.as_deref(), env::var(API_URL_ENV).ok())?;

        if args.timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "--timeout-secs",
                "0",
                "must be greater than zero",
            ));
        }

        Ok(Self {
            api_base_url,
            request_timeout: Duration::from_secs(args.timeout_secs),
            open_browser: args.open,
        })
    }
}

/// Flag beats environment beats the local default; blank values count as unset.
fn resolve_api_base_url(flag: Option<&str>, env_value: Option<String>) -> Result<String, ConfigError> {
    let (name, raw) = match (non_blank(flag), non_blank(env_value.as_deref())) {
        (Some(value), _) => ("--api-url", value),
        (None, Some(value)) => (API_URL_ENV, value),
        (None, None) => (API_URL_ENV, DEFAULT_API_URL),
    };

    let normalized = raw.trim_end_matches('/');
    let parsed = Url::parse(normalized).map_err(|error| ConfigError::invalid(name, raw, error))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::invalid(name, raw, "scheme must be http or https"));
    }

    Ok(normalized.to_owned())
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
