use serde::{Deserialize, Serialize};

use super::snapshot::HistoricalPoint;

/// Quote-of-the-day payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub quote: String,
    #[serde(default)]
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Portfolio-vs-index comparison payload.
///
/// Returns are percentages over `period`; the two series share month labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexComparison {
    #[serde(default)]
    pub pelosi_return: f64,
    #[serde(default)]
    pub sp500_return: f64,
    #[serde(default)]
    pub outperformance: f64,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub pelosi_data: Vec<HistoricalPoint>,
    #[serde(default)]
    pub sp500_data: Vec<HistoricalPoint>,
}
