#![allow(dead_code)]

// ═══════════════════════════════════════════════════════════════════
// Shared fixtures: scripted data source, recording renderer,
// recording chart adapter and notifier
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use trade_tracker_core::errors::FetchError;
use trade_tracker_core::models::ancillary::{IndexComparison, Quote};
use trade_tracker_core::models::chart::{ChartAnchor, ChartData};
use trade_tracker_core::models::fragment::{
    HoldingRow, IndexComparisonSummary, SectorRow, StockDetailView, SummaryCard, TopHolding,
    TradeCard,
};
use trade_tracker_core::models::holding::Holding;
use trade_tracker_core::models::notification::NewTradeEvent;
use trade_tracker_core::models::snapshot::{
    HistoricalPoint, Performance, PortfolioSnapshot, SectorAllocation, Stats,
};
use trade_tracker_core::models::stock::StockDetail;
use trade_tracker_core::models::trade::{Trade, TradeAction, TradeType};
use trade_tracker_core::providers::traits::DataSource;
use trade_tracker_core::view::charts::ChartAdapter;
use trade_tracker_core::view::notifier::TradeNotifier;
use trade_tracker_core::view::renderer::{Region, ViewRenderer};

// ═══════════════════════════════════════════════════════════════════
// Builders
// ═══════════════════════════════════════════════════════════════════

pub fn trade(ticker: &str, date: &str, action: TradeAction) -> Trade {
    Trade::new(ticker, action, date, "$1,001 - $15,000", TradeType::Stock)
}

pub fn sample_holdings() -> Vec<Holding> {
    vec![
        Holding::new("NVDA", 135.40, 19.0),
        Holding::new("GOOGL", 191.20, 17.0),
        Holding::new("AAPL", 229.87, 8.0),
    ]
}

pub fn sample_snapshot(trades: Vec<Trade>) -> PortfolioSnapshot {
    PortfolioSnapshot {
        stats: Stats {
            copiers: 15234,
            holdings_count: 3,
        },
        performance: Performance {
            total_invested: 168_000_000.0,
            performance_percent: 38.0,
        },
        holdings: sample_holdings(),
        recent_trades: trades,
        sector_allocation: vec![
            SectorAllocation {
                name: "Technology".into(),
                percentage: 72.5,
            },
            SectorAllocation {
                name: "Energy".into(),
                percentage: 8.0,
            },
        ],
        historical_performance: vec![
            HistoricalPoint {
                date: "2024-10".into(),
                value: 100.0,
            },
            HistoricalPoint {
                date: "2024-11".into(),
                value: 104.0,
            },
            HistoricalPoint {
                date: "2024-12".into(),
                value: 111.0,
            },
            HistoricalPoint {
                date: "2025-01".into(),
                value: 118.0,
            },
        ],
        filing_statistics: None,
        last_updated: Some("2025-01-16T10:30:00Z".into()),
    }
}

pub fn sample_quote() -> Quote {
    Quote {
        quote: "I bought it because I believe in it.".into(),
        source: "Press conference".into(),
        context: None,
    }
}

pub fn sample_comparison() -> IndexComparison {
    IndexComparison {
        pelosi_return: 65.3,
        sp500_return: 24.1,
        outperformance: 41.2,
        period: "1Y".into(),
        pelosi_data: vec![
            HistoricalPoint {
                date: "2024-12".into(),
                value: 100.0,
            },
            HistoricalPoint {
                date: "2025-01".into(),
                value: 110.0,
            },
        ],
        sp500_data: vec![HistoricalPoint {
            date: "2024-12".into(),
            value: 100.0,
        }],
    }
}

pub fn stock_detail(ticker: &str) -> StockDetail {
    StockDetail {
        ticker: ticker.into(),
        company_name: "NVIDIA Corporation".into(),
        exchange: "NASDAQ".into(),
        current_price: 135.40,
        price_change: 1.85,
        price_change_percent: 0.99,
        week_range_low: 108.13,
        week_range_high: 152.89,
        status: "Holding".into(),
        description: "GPU maker".into(),
        trades: vec![trade(ticker, "2024-12-20", TradeAction::Purchase)],
        similar_stocks: Vec::new(),
        price_history: vec![
            trade_tracker_core::models::stock::PricePoint {
                date: "2025-01-14".into(),
                price: 131.0,
            },
            trade_tracker_core::models::stock::PricePoint {
                date: "2025-01-15".into(),
                price: 135.4,
            },
        ],
    }
}

// ═══════════════════════════════════════════════════════════════════
// Scripted Data Source
// ═══════════════════════════════════════════════════════════════════

/// Serves portfolio responses in order; the last one repeats forever.
/// Each call picks its response when it starts and may be delayed before
/// returning it.
pub struct ScriptedSource {
    portfolio: Mutex<VecDeque<Result<PortfolioSnapshot, FetchError>>>,
    delays: Mutex<VecDeque<Duration>>,
    stock: Mutex<Option<Result<StockDetail, FetchError>>>,
    quote: Result<Quote, FetchError>,
    comparison: Result<IndexComparison, FetchError>,
    pub portfolio_calls: AtomicUsize,
    pub stock_requests: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new(portfolio: Vec<Result<PortfolioSnapshot, FetchError>>) -> Self {
        Self {
            portfolio: Mutex::new(portfolio.into()),
            delays: Mutex::new(VecDeque::new()),
            stock: Mutex::new(None),
            quote: Ok(sample_quote()),
            comparison: Ok(sample_comparison()),
            portfolio_calls: AtomicUsize::new(0),
            stock_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_stock(self, stock: Result<StockDetail, FetchError>) -> Self {
        *self.stock.lock().unwrap() = Some(stock);
        self
    }

    /// Delay of the n-th portfolio call; calls past the list return at once.
    pub fn with_delays(self, delays: Vec<Duration>) -> Self {
        *self.delays.lock().unwrap() = delays.into();
        self
    }

    pub fn with_quote(mut self, quote: Result<Quote, FetchError>) -> Self {
        self.quote = quote;
        self
    }

    pub fn with_comparison(mut self, comparison: Result<IndexComparison, FetchError>) -> Self {
        self.comparison = comparison;
        self
    }

    pub fn calls(&self) -> usize {
        self.portfolio_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataSource for ScriptedSource {
    fn name(&self) -> &str {
        "Scripted"
    }

    async fn fetch_portfolio(&self) -> Result<PortfolioSnapshot, FetchError> {
        self.portfolio_calls.fetch_add(1, Ordering::SeqCst);
        let response = {
            let mut queue = self.portfolio.lock().unwrap();
            match queue.len() {
                0 => Err(FetchError::Network("no scripted response".into())),
                1 => queue[0].clone(),
                _ => queue.pop_front().unwrap(),
            }
        };
        let delay = self.delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        response
    }

    async fn fetch_stock(&self, ticker: &str) -> Result<StockDetail, FetchError> {
        self.stock_requests.lock().unwrap().push(ticker.to_string());
        match self.stock.lock().unwrap().clone() {
            Some(result) => result,
            None => Err(FetchError::Network("HTTP 404 Not Found from /stock".into())),
        }
    }

    async fn fetch_quote(&self) -> Result<Quote, FetchError> {
        self.quote.clone()
    }

    async fn fetch_index_comparison(&self) -> Result<IndexComparison, FetchError> {
        self.comparison.clone()
    }
}

// ═══════════════════════════════════════════════════════════════════
// Recording Renderer
// ═══════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq)]
pub enum Painted {
    Placeholder(Region, usize),
    Summary(SummaryCard),
    Holdings(Vec<HoldingRow>),
    TopHoldings(Vec<TopHolding>),
    Trades(Vec<TradeCard>),
    Sectors(Vec<SectorRow>),
    Quote(Quote),
    IndexComparison(IndexComparisonSummary),
    StockDetail(StockDetailView),
    Fallback(Region, String),
    Freshness(String),
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub painted: Vec<Painted>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn holdings_renders(&self) -> Vec<&Vec<HoldingRow>> {
        self.painted
            .iter()
            .filter_map(|p| match p {
                Painted::Holdings(rows) => Some(rows),
                _ => None,
            })
            .collect()
    }

    pub fn trades_renders(&self) -> Vec<&Vec<TradeCard>> {
        self.painted
            .iter()
            .filter_map(|p| match p {
                Painted::Trades(cards) => Some(cards),
                _ => None,
            })
            .collect()
    }

    pub fn freshness_labels(&self) -> Vec<String> {
        self.painted
            .iter()
            .filter_map(|p| match p {
                Painted::Freshness(label) => Some(label.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn fallbacks(&self) -> Vec<(Region, String)> {
        self.painted
            .iter()
            .filter_map(|p| match p {
                Painted::Fallback(region, msg) => Some((*region, msg.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn placeholders(&self) -> Vec<(Region, usize)> {
        self.painted
            .iter()
            .filter_map(|p| match p {
                Painted::Placeholder(region, rows) => Some((*region, *rows)),
                _ => None,
            })
            .collect()
    }
}

impl ViewRenderer for RecordingRenderer {
    fn show_placeholder(&mut self, region: Region, rows: usize) {
        self.painted.push(Painted::Placeholder(region, rows));
    }

    fn render_summary(&mut self, card: &SummaryCard) {
        self.painted.push(Painted::Summary(card.clone()));
    }

    fn render_holdings(&mut self, rows: &[HoldingRow]) {
        self.painted.push(Painted::Holdings(rows.to_vec()));
    }

    fn render_top_holdings(&mut self, rows: &[TopHolding]) {
        self.painted.push(Painted::TopHoldings(rows.to_vec()));
    }

    fn render_trades(&mut self, cards: &[TradeCard]) {
        self.painted.push(Painted::Trades(cards.to_vec()));
    }

    fn render_sectors(&mut self, rows: &[SectorRow]) {
        self.painted.push(Painted::Sectors(rows.to_vec()));
    }

    fn render_quote(&mut self, quote: &Quote) {
        self.painted.push(Painted::Quote(quote.clone()));
    }

    fn render_index_comparison(&mut self, summary: &IndexComparisonSummary) {
        self.painted.push(Painted::IndexComparison(summary.clone()));
    }

    fn render_stock_detail(&mut self, view: &StockDetailView) {
        self.painted.push(Painted::StockDetail(view.clone()));
    }

    fn show_fallback(&mut self, region: Region, message: &str) {
        self.painted
            .push(Painted::Fallback(region, message.to_string()));
    }

    fn render_freshness(&mut self, label: &str) {
        self.painted.push(Painted::Freshness(label.to_string()));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Recording Chart Adapter
// ═══════════════════════════════════════════════════════════════════

#[derive(Debug, Default)]
pub struct ChartLog {
    pub created: Vec<(u32, ChartAnchor, ChartData)>,
    pub destroyed: Vec<u32>,
}

impl ChartLog {
    /// Handles created and not yet destroyed.
    pub fn live(&self) -> Vec<(u32, ChartAnchor)> {
        self.created
            .iter()
            .filter(|(id, _, _)| !self.destroyed.contains(id))
            .map(|(id, anchor, _)| (*id, *anchor))
            .collect()
    }

    pub fn last_for(&self, anchor: ChartAnchor) -> Option<&ChartData> {
        self.created
            .iter()
            .rev()
            .find(|(_, a, _)| *a == anchor)
            .map(|(_, _, data)| data)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingCharts {
    pub log: Arc<Mutex<ChartLog>>,
    next: u32,
}

impl RecordingCharts {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChartAdapter for RecordingCharts {
    type Handle = u32;

    fn create(&mut self, anchor: ChartAnchor, data: &ChartData) -> u32 {
        self.next += 1;
        self.log
            .lock()
            .unwrap()
            .created
            .push((self.next, anchor, data.clone()));
        self.next
    }

    fn destroy(&mut self, handle: u32) {
        self.log.lock().unwrap().destroyed.push(handle);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Recording Notifier
// ═══════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    pub events: Arc<Mutex<Vec<NewTradeEvent>>>,
}

impl TradeNotifier for RecordingNotifier {
    fn notify(&mut self, event: &NewTradeEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
