use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::endpoint::Endpoint;
use super::traits::DataSource;
use crate::errors::{CoreError, FetchError};
use crate::models::ancillary::{IndexComparison, Quote};
use crate::models::settings::Settings;
use crate::models::snapshot::PortfolioSnapshot;
use crate::models::stock::StockDetail;

/// `DataSource` backed by the dashboard's JSON API over HTTP.
///
/// - Plain GET requests, no auth, no retries.
/// - Non-2xx status → `FetchError::Network`; malformed body → `FetchError::Parse`.
/// - The only timeout is the client's transport timeout.
pub struct HttpDataSource {
    client: Client,
    base: String,
    portfolio: Endpoint,
}

impl HttpDataSource {
    /// Fails with `CoreError::Config` if the HTTP client can't be built
    /// with the requested transport timeout.
    pub fn new(base: impl Into<String>, timeout: Duration) -> Result<Self, CoreError> {
        let client = Client::builder().timeout(timeout).build().map_err(|e| {
            tracing::error!(error = %e, "Failed to build HTTP client");
            CoreError::Config(format!("HTTP client: {e}"))
        })?;
        Ok(Self {
            client,
            base: base.into(),
            portfolio: Endpoint::Portfolio,
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, CoreError> {
        let source = Self::new(settings.api_base.clone(), settings.request_timeout())?;
        Ok(match &settings.profile {
            Some(id) => source.with_profile(id.clone()),
            None => source,
        })
    }

    /// Poll `/portfolio/{id}` instead of the default portfolio.
    pub fn with_profile(mut self, id: impl Into<String>) -> Self {
        self.portfolio = Endpoint::ProfilePortfolio(id.into());
        self
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<T, FetchError> {
        let url = endpoint.url(&self.base);
        tracing::debug!(%url, "GET");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Network(format!("HTTP {status} from {endpoint}")));
        }

        let body = resp.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| FetchError::Parse(format!("Failed to parse response from {endpoint}: {e}")))
    }
}

#[async_trait]
impl DataSource for HttpDataSource {
    fn name(&self) -> &str {
        "HTTP"
    }

    async fn fetch_portfolio(&self) -> Result<PortfolioSnapshot, FetchError> {
        self.get_json(&self.portfolio).await
    }

    async fn fetch_stock(&self, ticker: &str) -> Result<StockDetail, FetchError> {
        self.get_json(&Endpoint::Stock(ticker.to_string())).await
    }

    async fn fetch_quote(&self) -> Result<Quote, FetchError> {
        self.get_json(&Endpoint::Quote).await
    }

    async fn fetch_index_comparison(&self) -> Result<IndexComparison, FetchError> {
        self.get_json(&Endpoint::IndexComparison).await
    }
}
