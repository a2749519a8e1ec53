//! ViaCEP source implementation
//!
//! Talks to the public ViaCEP API (`https://viacep.com.br/ws/{cep}/json/`).
//! ViaCEP signals "no such CEP" not with a 404 but with a 200 whose body
//! carries an `"erro"` key; older deployments sent it as the string
//! `"true"`, newer ones as a boolean. Both are recognized here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::cep::Cep;
use crate::config::UpstreamConfig;
use crate::errors::{AppError, AppResult};
use crate::models::AddressRecord;
use crate::sources::traits::AddressSource;

/// HTTP client for the ViaCEP address API.
pub struct ViaCepClient {
    client: Client,
    base_url: String,
}

impl ViaCepClient {
    /// Create a new ViaCEP client from upstream configuration.
    pub fn new(config: &UpstreamConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("cep-proxy/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn lookup_url(&self, cep: &Cep) -> String {
        format!("{}/ws/{}/json/", self.base_url, cep.key())
    }
}

#[async_trait]
impl AddressSource for ViaCepClient {
    async fn fetch(&self, cep: &Cep) -> AppResult<AddressRecord> {
        let url = self.lookup_url(cep);
        debug!("Fetching address for CEP {} from {}", cep, url);

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body: serde_json::Value = response.json().await?;

        if is_not_found_marker(&body) {
            return Err(AppError::CepNotFound);
        }

        serde_json::from_value(body)
            .map_err(|e| AppError::upstream(format!("unexpected ViaCEP payload: {e}")))
    }
}

fn is_not_found_marker(body: &serde_json::Value) -> bool {
    match body.get("erro") {
        Some(serde_json::Value::Bool(flag)) => *flag,
        Some(serde_json::Value::String(s)) => !s.is_empty(),
        Some(serde_json::Value::Null) => false,
        Some(_) => true,
        None => false,
    }
}
