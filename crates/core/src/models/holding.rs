use serde::{Deserialize, Serialize};

/// One position in a tracked portfolio snapshot.
///
/// `ticker` is the natural key for search and sort. Weights across a
/// snapshot are not required to sum to 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol, uppercased (e.g., "NVDA", "GOOGL")
    pub ticker: String,

    /// Last traded price in USD
    #[serde(default)]
    pub last_price: f64,

    /// Share of the portfolio, in percent
    #[serde(default)]
    pub weight: f64,

    /// Pre-formatted price as shown by the upstream source (e.g., "$135.40")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_display: Option<String>,

    /// Pre-formatted weight as shown by the upstream source (e.g., "19.0%")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_display: Option<String>,
}

impl Holding {
    pub fn new(ticker: impl Into<String>, last_price: f64, weight: f64) -> Self {
        Self {
            ticker: ticker.into().to_uppercase(),
            last_price,
            weight,
            price_display: None,
            weight_display: None,
        }
    }

    /// Attach the upstream display strings.
    pub fn with_display(
        mut self,
        price_display: impl Into<String>,
        weight_display: impl Into<String>,
    ) -> Self {
        self.price_display = Some(price_display.into());
        self.weight_display = Some(weight_display.into());
        self
    }
}
