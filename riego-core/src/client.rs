//! HTTP client for the calculation endpoint.
//!
//! On native targets reqwest runs on tokio; on `wasm32` it wraps the
//! browser `fetch`. Either way one `calculate` call is one POST, with no
//! retry and no authentication header.

use crate::config::ClientConfig;
use crate::error::{Result, RiegoError};
use crate::form::FormState;
use crate::result::CalculationResult;
use crate::submit::CalculationService;
use async_trait::async_trait;
use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

#[derive(Debug, Clone)]
pub struct RiegoClient {
    http: Client,
    url: String,
}

impl RiegoClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = match config.timeout {
            Some(timeout) => builder.timeout(timeout),
            None => builder,
        };
        Ok(Self {
            http: builder.build()?,
            url: config.calculate_url(),
        })
    }

    /// Client with reqwest defaults; `config.timeout` is ignored.
    pub fn with_defaults(config: &ClientConfig) -> Self {
        Self {
            http: Client::new(),
            url: config.calculate_url(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait(?Send)]
impl CalculationService for RiegoClient {
    async fn calculate(&self, form: &FormState) -> Result<CalculationResult> {
        debug!("POST {} {}", self.url, form.to_json()?);
        let response = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(form.to_json()?)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RiegoError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        CalculationResult::from_json(&body)
    }
}
