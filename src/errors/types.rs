//! Error type definitions for the CEP proxy application
//!
//! The `Display` strings double as the user-facing messages returned in
//! JSON error bodies, which is why the domain variants carry the exact
//! Portuguese wording the API has always used.

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// The supplied postal code did not normalize to exactly 8 digits
    #[error("CEP inválido. Deve conter 8 dígitos.")]
    InvalidCep,

    /// ViaCEP answered, but with its not-found marker
    #[error("CEP não encontrado.")]
    CepNotFound,

    /// Transport failure or undecodable payload from ViaCEP
    #[error("Erro ao consultar o ViaCEP: {message}")]
    Upstream { message: String },

    /// Error reported by the cep-proxy server to the CLI client
    #[error("{message}")]
    Api { message: String },
}

impl AppError {
    /// Create an upstream error with a custom message
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Create an API error carrying a server-reported message
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::Upstream {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_render_the_api_messages() {
        assert_eq!(
            AppError::InvalidCep.to_string(),
            "CEP inválido. Deve conter 8 dígitos."
        );
        assert_eq!(AppError::CepNotFound.to_string(), "CEP não encontrado.");
    }

    #[test]
    fn upstream_errors_carry_context() {
        let err = AppError::upstream("connection refused");
        assert_eq!(
            err.to_string(),
            "Erro ao consultar o ViaCEP: connection refused"
        );
    }
}
