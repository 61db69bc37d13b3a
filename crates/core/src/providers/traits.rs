use async_trait::async_trait;

use crate::errors::FetchError;
use crate::models::ancillary::{IndexComparison, Quote};
use crate::models::snapshot::PortfolioSnapshot;
use crate::models::stock::StockDetail;

/// Trait abstraction over where dashboard payloads come from.
///
/// `HttpDataSource` talks to the real API; tests plug in canned sources.
/// Implementations report failures only through `FetchError` and never
/// retry on their own: the next chance is the next scheduled poll.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Human-readable name of this source (for logs).
    fn name(&self) -> &str;

    /// Fetch the portfolio summary.
    async fn fetch_portfolio(&self) -> Result<PortfolioSnapshot, FetchError>;

    /// Fetch single-stock detail. Identity checks happen in `FetchService`.
    async fn fetch_stock(&self, ticker: &str) -> Result<StockDetail, FetchError>;

    /// Fetch the quote of the day.
    async fn fetch_quote(&self) -> Result<Quote, FetchError>;

    /// Fetch the portfolio-vs-index comparison.
    async fn fetch_index_comparison(&self) -> Result<IndexComparison, FetchError>;
}
