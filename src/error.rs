use thiserror::Error;

use crate::utils::constants::{FALLBACK_ERROR_MESSAGE, UNAVAILABLE_MESSAGE};

/// Ways a lookup against the group directory can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RedirectError {
    /// No usable response was obtained: connection, timeout, body read or decode failure.
    #[error("{0}")]
    Transport(String),

    /// The directory answered with a non-success status.
    #[error("directory service returned status {status}")]
    Unavailable { status: u16 },
}

impl RedirectError {
    /// Text shown to the visitor. The HTTP status of an unavailable answer is never shown.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Unavailable { .. } => UNAVAILABLE_MESSAGE.to_owned(),
            Self::Transport(detail) if detail.trim().is_empty() => {
                FALLBACK_ERROR_MESSAGE.to_owned()
            }
            Self::Transport(detail) => detail.clone(),
        }
    }
}

/// Invalid command line or environment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name} value '{value}': {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(name: &'static str, value: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidValue {
            name,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}
