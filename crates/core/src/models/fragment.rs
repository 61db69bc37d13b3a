//! View fragments: display-ready rows and cards handed to a renderer.
//!
//! Every string here is already formatted; renderers only lay them out.

use serde::Serialize;

/// One row of the holdings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoldingRow {
    pub ticker: String,
    /// e.g. "$135.40"
    pub price: String,
    /// e.g. "19.0%"
    pub weight: String,
}

/// One card of the recent-trades list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TradeCard {
    pub ticker: String,
    pub action: String,
    pub date: String,
    pub amount: String,
    pub trade_type: String,
    pub insight: Option<String>,
}

/// Headline numbers at the top of the portfolio page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryCard {
    /// e.g. "15,234"
    pub copiers: String,
    /// e.g. "$168.00M"
    pub invested: String,
    /// e.g. "+38.0%"
    pub performance: String,
    pub performance_positive: bool,
    pub holdings_count: String,
    pub last_updated: Option<String>,
}

/// Entry of the profile page's top-holdings list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopHolding {
    pub ticker: String,
    pub company_name: String,
    pub weight: String,
}

/// Entry of the sector allocation list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorRow {
    pub name: String,
    /// Bar width, clamped to 0..=100
    pub percentage: f64,
    /// e.g. "32.5%"
    pub label: String,
}

/// One row of the stock page's trading-activity table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockTradeRow {
    pub traded_date: String,
    pub filed_date: String,
    pub action: String,
    pub trade_type: String,
    pub amount: String,
    pub excess_return: String,
    pub compliant: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimilarStockCard {
    pub ticker: String,
    pub name: String,
    pub price: String,
    /// e.g. "+1.85 (+0.99%)"
    pub change: String,
    pub change_positive: bool,
    pub reason: String,
}

/// Everything the stock detail page shows apart from its chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockDetailView {
    pub ticker: String,
    pub company_name: String,
    pub exchange: String,
    pub price: String,
    pub change: String,
    pub change_positive: bool,
    /// e.g. "$108.13 - $152.89"
    pub week_range: String,
    pub status: String,
    pub description: String,
    /// Newest first
    pub trades: Vec<StockTradeRow>,
    /// e.g. "3 transactions"
    pub transaction_count: String,
    /// e.g. "Compliance: 67%"
    pub compliance: String,
    pub similar: Vec<SimilarStockCard>,
}

/// Headline numbers of the portfolio-vs-index comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexComparisonSummary {
    pub portfolio_return: String,
    pub index_return: String,
    pub outperformance: String,
    pub period: String,
}
