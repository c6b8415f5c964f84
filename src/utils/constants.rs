use std::time::Duration;

pub const API_URL_ENV: &str = "API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const REDIRECT_PATH: &str = "/api/redirect";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Delay between showing the chosen group and navigating to it.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

pub const UNAVAILABLE_MESSAGE: &str = "Não foi possível encontrar um grupo disponível";
pub const FALLBACK_ERROR_MESSAGE: &str = "Erro ao redirecionar";
