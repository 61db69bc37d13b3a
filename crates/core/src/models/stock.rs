use serde::{Deserialize, Serialize};

use super::trade::Trade;

/// A related ticker suggested on the stock detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarStock {
    pub ticker: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub change: f64,
    #[serde(default)]
    pub change_percent: f64,
    #[serde(default)]
    pub reason: String,
}

/// One point of a price series. Upstream uses either `date` or `timestamp`,
/// and either `price` or `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    #[serde(default, alias = "timestamp")]
    pub date: String,
    #[serde(default, alias = "value")]
    pub price: f64,
}

/// Single-stock detail payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockDetail {
    /// May be missing upstream; `FetchService` stamps the requested ticker.
    #[serde(default)]
    pub ticker: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub exchange: String,
    #[serde(default)]
    pub current_price: f64,
    #[serde(default)]
    pub price_change: f64,
    #[serde(default)]
    pub price_change_percent: f64,
    #[serde(default)]
    pub week_range_low: f64,
    #[serde(default)]
    pub week_range_high: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub trades: Vec<Trade>,
    #[serde(default)]
    pub similar_stocks: Vec<SimilarStock>,
    #[serde(default)]
    pub price_history: Vec<PricePoint>,
}
