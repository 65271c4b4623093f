//! HTTP client for a ViaCEP-compatible address service
//!
//! `GET {base_url}/{cep}/json/` answers with the street, neighborhood, city
//! and state for a CEP, or with an `erro` member when the CEP is unknown.

use super::{AddressError, AddressLookup};
use crate::config::AppConfig;
use crate::state::Address;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Default address service
pub const DEFAULT_BASE_URL: &str = "https://viacep.com.br/ws";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// True when `cep` is exactly eight ASCII digits
pub fn is_valid_cep(cep: &str) -> bool {
    cep.len() == 8 && cep.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Debug, Deserialize)]
struct CepResponse {
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    bairro: String,
    #[serde(default, alias = "localidade")]
    cidade: String,
    #[serde(default)]
    uf: String,
    #[serde(default)]
    erro: Option<serde_json::Value>,
}

impl CepResponse {
    fn is_not_found(&self) -> bool {
        match &self.erro {
            None | Some(serde_json::Value::Bool(false)) => false,
            Some(serde_json::Value::String(s)) => s != "false",
            Some(_) => true,
        }
    }
}

fn parse_response(body: &[u8]) -> Result<Address, AddressError> {
    let response: CepResponse = serde_json::from_slice(body)?;
    if response.is_not_found() {
        return Err(AddressError::NotFound);
    }
    Ok(Address {
        street: response.logradouro,
        neighborhood: response.bairro,
        city: response.cidade,
        state: response.uf,
    })
}

/// Client for the CEP service
pub struct ViaCepClient {
    http: reqwest::Client,
    base_url: String,
}

impl ViaCepClient {
    /// Create a client for `base_url`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AddressError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("cidade-limpa/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { http, base_url })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, AddressError> {
        Self::new(config.lookup_url(), config.lookup_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, cep: &str) -> String {
        format!("{}/{}/json/", self.base_url, cep)
    }
}

#[async_trait]
impl AddressLookup for ViaCepClient {
    async fn lookup(&self, cep: &str) -> Result<Address, AddressError> {
        if !is_valid_cep(cep) {
            return Err(AddressError::InvalidCep(cep.to_string()));
        }

        let url = self.url_for(cep);
        tracing::debug!(%url, "looking up address");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AddressError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        parse_response(&body)
    }
}
