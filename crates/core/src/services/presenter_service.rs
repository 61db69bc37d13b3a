use std::time::Duration;

use crate::models::ancillary::IndexComparison;
use crate::models::filter::TradesFilter;
use crate::models::fragment::{
    HoldingRow, IndexComparisonSummary, SectorRow, SimilarStockCard, StockDetailView,
    StockTradeRow, SummaryCard, TopHolding, TradeCard,
};
use crate::models::holding::Holding;
use crate::models::snapshot::{PortfolioSnapshot, SectorAllocation};
use crate::models::stock::StockDetail;
use crate::models::trade::Trade;
use crate::services::insight_service::InsightService;
use crate::services::projection_service::ProjectionService;

/// Entries in the profile page's top-holdings list.
pub const TOP_HOLDINGS_LIMIT: usize = 5;

/// Turns snapshot records into display-ready view fragments.
pub struct PresenterService {
    insights: InsightService,
    projection: ProjectionService,
}

impl PresenterService {
    pub fn new() -> Self {
        Self {
            insights: InsightService::new(),
            projection: ProjectionService::new(),
        }
    }

    /// Upstream display strings win; otherwise `$135.40` / `19.0%`.
    pub fn holding_row(&self, holding: &Holding) -> HoldingRow {
        HoldingRow {
            ticker: holding.ticker.clone(),
            price: holding
                .price_display
                .clone()
                .unwrap_or_else(|| format_price(holding.last_price)),
            weight: holding
                .weight_display
                .clone()
                .unwrap_or_else(|| format!("{:.1}%", holding.weight)),
        }
    }

    pub fn trade_card(&self, trade: &Trade) -> TradeCard {
        TradeCard {
            ticker: if trade.ticker.is_empty() {
                "N/A".to_string()
            } else {
                trade.ticker.clone()
            },
            action: trade.action.to_string(),
            date: trade.effective_date().to_string(),
            amount: trade.amount.clone(),
            trade_type: trade.trade_type.to_string(),
            insight: self.insights.insight(trade),
        }
    }

    pub fn summary_card(&self, snapshot: &PortfolioSnapshot) -> SummaryCard {
        let perf = snapshot.performance.performance_percent;
        SummaryCard {
            copiers: group_thousands(snapshot.stats.copiers),
            invested: format_invested(snapshot.performance.total_invested),
            performance: format_signed_percent(perf, 1),
            performance_positive: perf >= 0.0,
            holdings_count: snapshot.stats.holdings_count.to_string(),
            last_updated: snapshot
                .last_updated_at()
                .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                .or_else(|| snapshot.last_updated.clone()),
        }
    }

    pub fn top_holdings(&self, holdings: &[Holding]) -> Vec<TopHolding> {
        let (top, _) = self
            .projection
            .top_holdings_by_weight(holdings, TOP_HOLDINGS_LIMIT);
        top.into_iter()
            .map(|h| TopHolding {
                ticker: h.ticker.clone(),
                company_name: company_name(&h.ticker).to_string(),
                weight: self.holding_row(h).weight,
            })
            .collect()
    }

    pub fn sector_rows(&self, sectors: &[SectorAllocation]) -> Vec<SectorRow> {
        sectors
            .iter()
            .map(|s| SectorRow {
                name: s.name.clone(),
                percentage: s.percentage.clamp(0.0, 100.0),
                label: format!("{}%", s.percentage),
            })
            .collect()
    }

    pub fn stock_detail(&self, detail: &StockDetail) -> StockDetailView {
        let trades = self
            .projection
            .project_trades(&detail.trades, &TradesFilter::default());
        let total = trades.len();
        let compliant = trades.iter().filter(|t| !t.non_compliant).count();

        StockDetailView {
            ticker: detail.ticker.clone(),
            company_name: detail.company_name.clone(),
            exchange: detail.exchange.clone(),
            price: format_price(detail.current_price),
            change: format_change(detail.price_change, detail.price_change_percent),
            change_positive: detail.price_change >= 0.0,
            week_range: format!(
                "{} - {}",
                format_price(detail.week_range_low),
                format_price(detail.week_range_high)
            ),
            status: detail.status.clone(),
            description: detail.description.clone(),
            trades: trades.into_iter().map(stock_trade_row).collect(),
            transaction_count: format!("{total} transactions"),
            compliance: format!("Compliance: {}%", compliance_rate(compliant, total)),
            similar: detail
                .similar_stocks
                .iter()
                .map(|s| SimilarStockCard {
                    ticker: s.ticker.clone(),
                    name: s.name.clone(),
                    price: format_price(s.price),
                    change: format_change(s.change, s.change_percent),
                    change_positive: s.change >= 0.0,
                    reason: s.reason.clone(),
                })
                .collect(),
        }
    }

    pub fn index_comparison(&self, comparison: &IndexComparison) -> IndexComparisonSummary {
        IndexComparisonSummary {
            portfolio_return: format_signed_percent(comparison.pelosi_return, 2),
            index_return: format_signed_percent(comparison.sp500_return, 2),
            outperformance: format_signed_percent(comparison.outperformance, 2),
            period: comparison.period.clone(),
        }
    }
}

impl Default for PresenterService {
    fn default() -> Self {
        Self::new()
    }
}

fn stock_trade_row(trade: &Trade) -> StockTradeRow {
    let or_na = |s: &str| {
        if s.is_empty() {
            "N/A".to_string()
        } else {
            s.to_string()
        }
    };
    StockTradeRow {
        traded_date: or_na(trade.effective_date()),
        filed_date: or_na(&trade.filed_date),
        action: trade.action.to_string(),
        trade_type: trade.trade_type.to_string(),
        amount: trade.amount.clone(),
        excess_return: or_na(trade.excess_return.as_deref().unwrap_or("")),
        compliant: !trade.non_compliant,
    }
}

/// Share of compliant trades, rounded; an empty list counts as fully compliant.
pub fn compliance_rate(compliant: usize, total: usize) -> u32 {
    if total == 0 {
        return 100;
    }
    ((compliant as f64 / total as f64) * 100.0).round() as u32
}

/// `$1,234.50`
pub fn format_price(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = (value.abs() * 100.0).round() as u64;
    format!("{sign}${}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// `$168.00M` from one million up, `$12,345` below.
pub fn format_invested(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("${:.2}M", value / 1_000_000.0)
    } else {
        format!("${}", group_thousands(value.max(0.0).round() as u64))
    }
}

/// `+38.0%` / `-1.2%`
pub fn format_signed_percent(value: f64, decimals: usize) -> String {
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.decimals$}%")
}

/// `+1.85 (+0.99%)`
pub fn format_change(change: f64, change_percent: f64) -> String {
    let sign = if change >= 0.0 { "+" } else { "" };
    format!(
        "{sign}{change:.2} ({})",
        format_signed_percent(change_percent, 2)
    )
}

/// `15234` → `15,234`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Relative age of the last successful refresh.
pub fn freshness_label(elapsed: Option<Duration>) -> String {
    let Some(elapsed) = elapsed else {
        return "Just updated".to_string();
    };
    let secs = elapsed.as_secs();
    if secs < 60 {
        format!("Updated {secs}s ago")
    } else if secs < 3600 {
        format!("Updated {}m ago", secs / 60)
    } else {
        format!("Updated {}h ago", secs / 3600)
    }
}

/// Display name for well-known tickers; the ticker itself otherwise.
pub fn company_name(ticker: &str) -> &str {
    match ticker {
        "NVDA" => "NVIDIA Corporation",
        "GOOGL" => "Alphabet Inc.",
        "AVGO" => "Broadcom Inc.",
        "PANW" => "Palo Alto Networks",
        "TEM" => "Tempus AI, Inc.",
        "VST" => "Vistra Corp.",
        "AMZN" => "Amazon.com, Inc.",
        "CRWD" => "CrowdStrike Holdings",
        "AAPL" => "Apple Inc.",
        "MSFT" => "Microsoft Corporation",
        "TSLA" => "Tesla, Inc.",
        other => other,
    }
}
