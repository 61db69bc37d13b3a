use crate::models::ancillary::IndexComparison;
use crate::models::chart::{ChartData, Dataset};
use crate::models::filter::ChartPeriod;
use crate::models::holding::Holding;
use crate::models::snapshot::HistoricalPoint;
use crate::models::stock::PricePoint;
use crate::models::trade::parse_trade_date;
use crate::services::projection_service::ProjectionService;

/// Holdings shown individually in the allocation chart.
pub const ALLOCATION_TOP_N: usize = 5;

/// Label of the bucket holding everything outside the top holdings.
pub const OTHER_LABEL: &str = "OTHER";

/// Generates chart-ready data sets from snapshot data.
///
/// The core computes all the numbers; the chart adapter only draws:
/// - Allocation doughnut: top holdings by weight plus an `OTHER` bucket
/// - Performance line: trailing monthly window chosen by `ChartPeriod`
/// - Price history line for the stock page
/// - Portfolio vs. S&P 500 comparison (two datasets, shared labels)
pub struct ChartService {
    projection: ProjectionService,
}

impl ChartService {
    pub fn new() -> Self {
        Self {
            projection: ProjectionService::new(),
        }
    }

    pub fn allocation_chart(&self, holdings: &[Holding]) -> ChartData {
        if holdings.is_empty() {
            return ChartData::default();
        }
        let (top, rest) = self
            .projection
            .top_holdings_by_weight(holdings, ALLOCATION_TOP_N);

        let mut labels: Vec<String> = top.iter().map(|h| h.ticker.clone()).collect();
        let mut values: Vec<f64> = top.iter().map(|h| h.weight).collect();
        labels.push(OTHER_LABEL.to_string());
        values.push(rest);

        ChartData::single("Allocation", labels, values)
    }

    pub fn performance_chart(&self, history: &[HistoricalPoint], period: ChartPeriod) -> ChartData {
        let window = match period.trailing_points() {
            Some(n) => &history[history.len().saturating_sub(n)..],
            None => history,
        };

        let labels = window.iter().map(|p| month_label(&p.date, "%b %Y")).collect();
        let values = window.iter().map(|p| p.value).collect();
        ChartData::single("Portfolio Value", labels, values)
    }

    pub fn price_history_chart(&self, history: &[PricePoint]) -> ChartData {
        let labels = history
            .iter()
            .map(|p| match parse_trade_date(&p.date) {
                Some(d) => d.format("%b %-d").to_string(),
                None => p.date.clone(),
            })
            .collect();
        let values = history.iter().map(|p| p.price).collect();
        ChartData::single("Price", labels, values)
    }

    /// Labels come from the portfolio series; the index series is truncated
    /// or padded with its last value so both datasets stay parallel.
    pub fn index_comparison_chart(&self, comparison: &IndexComparison) -> ChartData {
        let labels: Vec<String> = comparison
            .pelosi_data
            .iter()
            .map(|p| month_label(&p.date, "%b %y"))
            .collect();
        let portfolio: Vec<f64> = comparison.pelosi_data.iter().map(|p| p.value).collect();

        let mut index: Vec<f64> = comparison
            .sp500_data
            .iter()
            .take(labels.len())
            .map(|p| p.value)
            .collect();
        let pad = index.last().copied().unwrap_or(0.0);
        index.resize(labels.len(), pad);

        ChartData {
            labels,
            datasets: vec![
                Dataset {
                    label: "Portfolio".to_string(),
                    values: portfolio,
                },
                Dataset {
                    label: "S&P 500".to_string(),
                    values: index,
                },
            ],
        }
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}

/// "2025-01" → "Jan 2025" (or "Jan 25" with `%b %y`); unparseable dates pass through.
fn month_label(raw: &str, fmt: &str) -> String {
    match parse_trade_date(raw) {
        Some(d) => d.format(fmt).to_string(),
        None => raw.to_string(),
    }
}
