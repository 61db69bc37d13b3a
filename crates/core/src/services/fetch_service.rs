use std::sync::Arc;

use crate::errors::{CoreError, FetchError};
use crate::models::ancillary::{IndexComparison, Quote};
use crate::models::snapshot::PortfolioSnapshot;
use crate::models::stock::StockDetail;
use crate::providers::traits::DataSource;

/// Fetch boundary between the view engine and a `DataSource`.
///
/// Cheap to clone: the scheduler hands a clone to every spawned poll.
/// Adds the identity check on stock responses and logs every failure
/// with the source name.
#[derive(Clone)]
pub struct FetchService {
    source: Arc<dyn DataSource>,
}

impl FetchService {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    pub async fn fetch_portfolio(&self) -> Result<PortfolioSnapshot, FetchError> {
        let result = self.source.fetch_portfolio().await;
        match &result {
            Ok(snapshot) => tracing::debug!(
                source = self.source.name(),
                holdings = snapshot.holdings.len(),
                trades = snapshot.recent_trades.len(),
                "Portfolio fetched"
            ),
            Err(e) => tracing::warn!(source = self.source.name(), error = %e, "Portfolio fetch failed"),
        }
        result
    }

    /// Fetch stock detail for `requested` and verify the response is for
    /// that ticker.
    ///
    /// A response naming a different ticker is a `FetchError::DataMismatch`
    /// and its data is dropped. A response with no ticker at all is
    /// accepted and stamped with the requested one.
    pub async fn fetch_stock(&self, requested: &str) -> Result<StockDetail, CoreError> {
        let requested = requested.trim().to_uppercase();
        if requested.is_empty() {
            return Err(CoreError::Validation("No ticker requested".into()));
        }

        let mut detail = self.source.fetch_stock(&requested).await.inspect_err(|e| {
            tracing::warn!(source = self.source.name(), ticker = %requested, error = %e, "Stock fetch failed");
        })?;

        if detail.ticker.trim().is_empty() {
            detail.ticker = requested;
            return Ok(detail);
        }

        if !detail.ticker.trim().eq_ignore_ascii_case(&requested) {
            tracing::error!(requested = %requested, received = %detail.ticker, "Ticker mismatch in stock response");
            return Err(FetchError::DataMismatch {
                requested,
                received: detail.ticker,
            }
            .into());
        }

        detail.ticker = requested;
        Ok(detail)
    }

    pub async fn fetch_quote(&self) -> Result<Quote, FetchError> {
        self.source.fetch_quote().await.inspect_err(|e| {
            tracing::warn!(source = self.source.name(), error = %e, "Quote fetch failed");
        })
    }

    pub async fn fetch_index_comparison(&self) -> Result<IndexComparison, FetchError> {
        self.source.fetch_index_comparison().await.inspect_err(|e| {
            tracing::warn!(source = self.source.name(), error = %e, "Index comparison fetch failed");
        })
    }
}

/// Extract the ticker from a page path like `/stock/aapl` (→ `"AAPL"`).
pub fn ticker_from_path(path: &str) -> Option<String> {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    while let Some(segment) = segments.next() {
        if segment.eq_ignore_ascii_case("stock") {
            let candidate = segments.next()?;
            let letters: String = candidate
                .chars()
                .take_while(|c| c.is_ascii_alphabetic())
                .collect();
            return if letters.is_empty() {
                None
            } else {
                Some(letters.to_uppercase())
            };
        }
    }
    None
}
