// Lookup externe du prix d'un stock
//
// L'API répond un nombre JSON nu sur GET <base>/stock/<symbol>/price.
// Le trait permet de substituer un stub dans les tests.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum PriceError {
    #[error("price request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected price payload: {0}")]
    Payload(String),
}

#[async_trait]
pub trait PriceLookup: Send + Sync {
    async fn price(&self, symbol: &str) -> Result<f64, PriceError>;
}

pub struct HttpPriceClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPriceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PriceLookup for HttpPriceClient {
    async fn price(&self, symbol: &str) -> Result<f64, PriceError> {
        let url = format!(
            "{}/stock/{}/price",
            self.base_url.trim_end_matches('/'),
            symbol
        );

        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|_| PriceError::Payload(body.clone()))?;

        value
            .as_f64()
            .ok_or_else(|| PriceError::Payload(value.to_string()))
    }
}
