use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::holding::Holding;
use super::trade::Trade;

/// Headline counters shown on the summary card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub copiers: u64,
    #[serde(default)]
    pub holdings_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    /// Total invested, in USD
    #[serde(default)]
    pub total_invested: f64,
    /// Overall return, in percent
    #[serde(default)]
    pub performance_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorAllocation {
    pub name: String,
    #[serde(default)]
    pub percentage: f64,
}

/// One monthly point of a performance series (`date` is "YYYY-MM").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub date: String,
    #[serde(default)]
    pub value: f64,
}

/// Disclosure timing statistics, in days.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilingStatistics {
    #[serde(default)]
    pub avg_reporting_time: f64,
    #[serde(default)]
    pub avg_filing_frequency: f64,
    #[serde(default)]
    pub time_since_last_filing: f64,
}

/// One complete fetched portfolio payload.
///
/// Treated as immutable once received; the view model shares it behind an
/// `Arc` and replaces it wholesale on the next successful fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    #[serde(default)]
    pub stats: Stats,

    #[serde(default)]
    pub performance: Performance,

    /// Holdings in upstream order
    #[serde(default)]
    pub holdings: Vec<Holding>,

    /// Recent trades in upstream order
    #[serde(default)]
    pub recent_trades: Vec<Trade>,

    #[serde(default)]
    pub sector_allocation: Vec<SectorAllocation>,

    #[serde(default)]
    pub historical_performance: Vec<HistoricalPoint>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filing_statistics: Option<FilingStatistics>,

    /// ISO-8601 timestamp, with or without offset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl PortfolioSnapshot {
    /// `last_updated` parsed as a naive timestamp (offset dropped).
    pub fn last_updated_at(&self) -> Option<NaiveDateTime> {
        let raw = self.last_updated.as_deref()?.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_utc());
        }
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").ok()
    }
}
