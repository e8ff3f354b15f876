use crate::api::models::{LatestRatesResponse, RateTable};
use crate::error::ApiError;
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use std::time::Duration;

const USER_AGENT: &str = concat!("currencli/", env!("CARGO_PKG_VERSION"));
const VALIDATION_BASE_CURRENCY: &str = "USD";

/// Source of exchange-rate tables.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Full rate table for an upper-cased base currency.
    async fn fetch_rates(&self, api_key: &str, base_currency: &str)
    -> Result<RateTable, ApiError>;

    /// Probe the service with the key; never fails, only answers.
    async fn validate_credential(&self, api_key: &str) -> bool;
}

#[derive(Debug, Clone)]
pub struct ExchangeRateClient {
    client: Client,
    pub base_url: String,
}

impl ExchangeRateClient {
    pub fn new(base_url: String, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ApiError::Transport {
                endpoint: "client_init".to_string(),
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(ExchangeRateClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Key and currency are appended as escaped path segments.
    pub fn latest_url(&self, api_key: &str, base_currency: &str) -> Result<Url, ApiError> {
        let invalid_base = |message: String| ApiError::Transport {
            endpoint: Self::redacted_endpoint(base_currency),
            message,
        };

        let mut url = Url::parse(&self.base_url)
            .map_err(|e| invalid_base(format!("Invalid API base URL {}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| invalid_base(format!("API base URL {} cannot take a path", self.base_url)))?
            .pop_if_empty()
            .extend(["v6", api_key, "latest", base_currency]);
        Ok(url)
    }

    // Endpoint label for diagnostics; the key never appears in messages.
    fn redacted_endpoint(base_currency: &str) -> String {
        format!("/v6/***/latest/{}", base_currency)
    }

    async fn handle_response(
        &self,
        response: Response,
        endpoint: &str,
    ) -> Result<RateTable, ApiError> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Http {
                status: status.as_u16(),
                endpoint: endpoint.to_string(),
                message: error_text,
            });
        }

        let body: LatestRatesResponse = response.json().await.map_err(|e| ApiError::Parse {
            endpoint: endpoint.to_string(),
            message: e.without_url().to_string(),
        })?;

        if body.is_error() {
            return Err(ApiError::Provider {
                error_type: body.error_type.unwrap_or_else(|| "unknown".to_string()),
            });
        }

        tracing::debug!(
            "Rates for {} last updated {}",
            body.base_code.as_deref().unwrap_or("unknown base"),
            body.time_last_update_utc.as_deref().unwrap_or("at an unknown time")
        );

        body.conversion_rates.ok_or_else(|| ApiError::Parse {
            endpoint: endpoint.to_string(),
            message: "missing field `conversion_rates`".to_string(),
        })
    }
}

#[async_trait]
impl RateSource for ExchangeRateClient {
    async fn fetch_rates(
        &self,
        api_key: &str,
        base_currency: &str,
    ) -> Result<RateTable, ApiError> {
        let endpoint = Self::redacted_endpoint(base_currency);
        tracing::debug!("GET {}{}", self.base_url, endpoint);

        let url = self.latest_url(api_key, base_currency)?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                endpoint: endpoint.clone(),
                message: e.without_url().to_string(),
            })?;

        let rates = self.handle_response(response, &endpoint).await?;
        tracing::debug!("Received {} rates for {}", rates.len(), base_currency);
        Ok(rates)
    }

    async fn validate_credential(&self, api_key: &str) -> bool {
        match self.fetch_rates(api_key, VALIDATION_BASE_CURRENCY).await {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("API key validation failed: {}", e);
                false
            }
        }
    }
}
