use std::fmt::{self, Display, Formatter};

use crate::error::RedirectError;
use crate::models::redirect::RedirectResponse;

/// Result of the single directory lookup a view performs.
pub type FetchOutcome = Result<RedirectResponse, RedirectError>;

/// What the redirect view is showing. `Success` and `Error` are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectState {
    Loading,
    Success {
        redirect_url: String,
        group_name: String,
        message: String,
    },
    Error {
        message: String,
    },
}

impl RedirectState {
    /// Moves `Loading` to a terminal state. Terminal states ignore further outcomes.
    #[must_use]
    pub fn apply(self, outcome: FetchOutcome) -> Self {
        if self.is_terminal() {
            return self;
        }

        match outcome {
            Ok(response) => Self::Success {
                redirect_url: response.redirect_url,
                group_name: response.group_name,
                message: response.message,
            },
            Err(error) => Self::Error {
                message: error.user_message(),
            },
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Navigation target, present only after a successful lookup.
    pub fn destination(&self) -> Option<&str> {
        match self {
            Self::Success { redirect_url, .. } => Some(redirect_url.as_str()),
            _ => None,
        }
    }
}

impl Display for RedirectState {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading => {
                writeln!(formatter, "Buscando grupo disponível...")?;
                write!(
                    formatter,
                    "Por favor, aguarde enquanto procuramos o melhor grupo para você."
                )
            }
            Self::Success {
                redirect_url,
                group_name,
                message,
            } => {
                writeln!(formatter, "{message}")?;
                writeln!(
                    formatter,
                    "Você será redirecionado para o grupo {group_name} em alguns segundos..."
                )?;
                write!(
                    formatter,
                    "Se não for redirecionado automaticamente, clique aqui: {redirect_url}"
                )
            }
            Self::Error { message } => {
                writeln!(formatter, "Ops! Algo deu errado")?;
                write!(formatter, "{message}")
            }
        }
    }
}
