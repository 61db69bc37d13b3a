use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio::time::MissedTickBehavior;

use crate::errors::FetchError;
use crate::models::chart::ChartAnchor;
use crate::models::filter::{ChartPeriod, FilterChange, HoldingsFilter, TradesFilter, View};
use crate::models::fragment::{HoldingRow, TradeCard};
use crate::models::settings::Settings;
use crate::models::snapshot::PortfolioSnapshot;
use crate::services::chart_service::ChartService;
use crate::services::diff_service::DiffService;
use crate::services::fetch_service::FetchService;
use crate::services::presenter_service::{freshness_label, PresenterService};
use crate::services::projection_service::ProjectionService;

use super::charts::{ChartAdapter, ChartRegistry};
use super::notifier::{NoopNotifier, TradeNotifier};
use super::renderer::{Region, ViewRenderer};
use super::view_model::ViewModel;

/// Shown in a region whose data could not be loaded.
pub const NO_DATA_MESSAGE: &str = "No data available";

/// How often the freshness label is re-checked between commits.
const FRESHNESS_REFRESH: Duration = Duration::from_secs(1);

/// Most placeholder cards shown for the trades list.
const TRADE_PLACEHOLDER_LIMIT: usize = 6;

/// Regions filled from the portfolio snapshot.
const PORTFOLIO_REGIONS: [Region; 6] = [
    Region::Summary,
    Region::Holdings,
    Region::TopHoldings,
    Region::Trades,
    Region::Sectors,
    Region::Performance,
];

/// Events fed into [`RenderScheduler::run`] by the front end.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// User changed one view's filter; re-render from the current snapshot.
    FilterChanged(FilterChange),
    /// Poll now instead of waiting for the next tick.
    Refresh,
    Shutdown,
}

/// What a successful poll did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// The fetched snapshot differed from the committed one.
    pub changed: bool,
    /// New-trade notifications delivered.
    pub new_trades: usize,
}

/// What each view showed at its last render: snapshot generation plus the
/// filter state used. An identical mark means the render can be skipped.
#[derive(Debug, Default)]
struct RenderMarks {
    snapshot: Option<u64>,
    holdings: Option<(u64, HoldingsFilter)>,
    trades: Option<(u64, TradesFilter)>,
    performance: Option<(u64, ChartPeriod)>,
    freshness: Option<String>,
}

/// Drives the portfolio page: polls on a timer, commits snapshots into the
/// [`ViewModel`], notifies about new trades and re-renders view fragments.
///
/// Two entry points feed one render pipeline:
/// - [`on_tick`](Self::on_tick): fetch → commit → diff → render
/// - [`on_filter_changed`](Self::on_filter_changed): render only, no network
///
/// All state changes happen on the caller's task, one event at a time.
pub struct RenderScheduler<R: ViewRenderer, C: ChartAdapter> {
    fetcher: FetchService,
    model: ViewModel,
    renderer: R,
    charts: ChartRegistry<C>,
    notifier: Box<dyn TradeNotifier>,
    projection: ProjectionService,
    presenter: PresenterService,
    chart_service: ChartService,
    diff: DiffService,
    marks: RenderMarks,
    poll_interval: Duration,
    placeholder_min_display: Duration,
    fetch_seq: u64,
}

impl<R: ViewRenderer, C: ChartAdapter> RenderScheduler<R, C> {
    pub fn new(fetcher: FetchService, renderer: R, chart_adapter: C) -> Self {
        let defaults = Settings::default();
        Self {
            fetcher,
            model: ViewModel::new(),
            renderer,
            charts: ChartRegistry::new(chart_adapter),
            notifier: Box::new(NoopNotifier),
            projection: ProjectionService::new(),
            presenter: PresenterService::new(),
            chart_service: ChartService::new(),
            diff: DiffService::new(),
            marks: RenderMarks::default(),
            poll_interval: defaults.poll_interval(),
            placeholder_min_display: defaults.placeholder_min_display(),
            fetch_seq: 0,
        }
    }

    pub fn with_notifier(mut self, notifier: Box<dyn TradeNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_placeholder_min_display(mut self, min: Duration) -> Self {
        self.placeholder_min_display = min;
        self
    }

    pub fn view_model(&self) -> &ViewModel {
        &self.model
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn charts(&self) -> &ChartRegistry<C> {
        &self.charts
    }

    pub fn freshness_label(&self) -> String {
        freshness_label(self.model.since_last_commit())
    }

    // ── Entry points ────────────────────────────────────────────────

    /// Fetch the portfolio and, on success, commit and re-render.
    ///
    /// A failed fetch keeps the last good snapshot on screen; only regions
    /// that never received data switch to the fallback message.
    pub async fn on_tick(&mut self) -> Result<TickOutcome, FetchError> {
        self.fetch_seq += 1;
        let seq = self.fetch_seq;
        let result = self.fetcher.fetch_portfolio().await;
        self.apply_fetch(seq, result).await
    }

    /// Store a filter change and re-render that view from the last committed
    /// snapshot. Returns whether anything was rendered.
    pub fn on_filter_changed(&mut self, change: FilterChange) -> bool {
        let view = change.view();
        if self.model.apply_filter(change) {
            tracing::debug!(?view, "Filter changed");
        }
        self.render_view(view)
    }

    /// Fetch the quote of the day and the index comparison. A failure only
    /// affects its own region.
    pub async fn load_ancillary(&mut self) {
        match self.fetcher.fetch_quote().await {
            Ok(quote) => {
                self.renderer.render_quote(&quote);
                self.model.set_quote(quote);
            }
            Err(_) => self.renderer.show_fallback(Region::Quote, NO_DATA_MESSAGE),
        }

        match self.fetcher.fetch_index_comparison().await {
            Ok(comparison) => {
                self.renderer
                    .render_index_comparison(&self.presenter.index_comparison(&comparison));
                let data = self.chart_service.index_comparison_chart(&comparison);
                self.charts.redraw(ChartAnchor::IndexComparison, &data);
                self.model.set_index_comparison(comparison);
            }
            Err(_) => self
                .renderer
                .show_fallback(Region::IndexComparison, NO_DATA_MESSAGE),
        }
    }

    /// Repaint the freshness label if its text changed since the last paint.
    /// Returns whether it was repainted.
    pub fn on_clock(&mut self) -> bool {
        if self.model.snapshot().is_none() {
            return false;
        }
        let label = self.freshness_label();
        if self.marks.freshness.as_deref() == Some(label.as_str()) {
            return false;
        }
        self.renderer.render_freshness(&label);
        self.marks.freshness = Some(label);
        true
    }

    /// Event loop. Polls immediately and then every `poll_interval`; handles
    /// UI events between polls and keeps the freshness label current.
    /// Fetches run as tasks and are never cancelled, so their results commit
    /// in completion order.
    ///
    /// Returns the scheduler once a `Shutdown` arrives or the sender drops.
    pub async fn run(mut self, mut events: mpsc::Receiver<UiEvent>) -> Self {
        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut clock = tokio::time::interval(FRESHNESS_REFRESH);
        clock.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut in_flight: JoinSet<(u64, Result<PortfolioSnapshot, FetchError>)> = JoinSet::new();

        tracing::info!(
            source = self.fetcher.source_name(),
            interval_secs = self.poll_interval.as_secs(),
            "Render scheduler started"
        );

        loop {
            tokio::select! {
                _ = ticker.tick() => self.spawn_fetch(&mut in_flight),
                _ = clock.tick() => {
                    self.on_clock();
                }
                Some(joined) = in_flight.join_next() => match joined {
                    Ok((seq, result)) => {
                        let _ = self.apply_fetch(seq, result).await;
                    }
                    Err(e) => tracing::error!(error = %e, "Portfolio fetch task failed"),
                },
                event = events.recv() => match event {
                    Some(UiEvent::FilterChanged(change)) => {
                        self.on_filter_changed(change);
                    }
                    Some(UiEvent::Refresh) => self.spawn_fetch(&mut in_flight),
                    Some(UiEvent::Shutdown) | None => break,
                },
            }
        }

        tracing::info!(pending = in_flight.len(), "Render scheduler stopped");
        self
    }

    // ── Pipeline ────────────────────────────────────────────────────

    fn spawn_fetch(&mut self, in_flight: &mut JoinSet<(u64, Result<PortfolioSnapshot, FetchError>)>) {
        self.fetch_seq += 1;
        let seq = self.fetch_seq;
        let fetcher = self.fetcher.clone();
        tracing::debug!(seq, "Portfolio fetch started");
        in_flight.spawn(async move { (seq, fetcher.fetch_portfolio().await) });
    }

    async fn apply_fetch(
        &mut self,
        seq: u64,
        result: Result<PortfolioSnapshot, FetchError>,
    ) -> Result<TickOutcome, FetchError> {
        let snapshot = match result {
            Ok(snapshot) => snapshot,
            Err(e) => {
                self.show_fallbacks_for_empty_regions();
                return Err(e);
            }
        };

        let first_load = self.model.snapshot().is_none();
        if first_load {
            self.show_placeholders(&snapshot).await;
        }

        let commit = self.model.commit(snapshot);
        let events = match (&commit.previous, self.model.snapshot()) {
            (Some(previous), Some(current)) => {
                self.diff.diff(&previous.recent_trades, &current.recent_trades)
            }
            _ => Vec::new(),
        };
        drop(commit.previous);

        for event in &events {
            self.notifier.notify(event);
        }

        tracing::info!(
            seq,
            generation = self.model.generation(),
            changed = commit.changed,
            new_trades = events.len(),
            "Snapshot committed"
        );

        self.render_all();
        Ok(TickOutcome {
            changed: commit.changed,
            new_trades: events.len(),
        })
    }

    /// Show placeholders sized to the incoming data and keep them up for
    /// at least `placeholder_min_display`.
    async fn show_placeholders(&mut self, snapshot: &PortfolioSnapshot) {
        self.renderer
            .show_placeholder(Region::Holdings, snapshot.holdings.len());
        self.renderer.show_placeholder(
            Region::Trades,
            snapshot.recent_trades.len().min(TRADE_PLACEHOLDER_LIMIT),
        );
        if !self.placeholder_min_display.is_zero() {
            tokio::time::sleep(self.placeholder_min_display).await;
        }
    }

    fn show_fallbacks_for_empty_regions(&mut self) {
        if self.model.snapshot().is_some() {
            return;
        }
        for region in PORTFOLIO_REGIONS {
            self.renderer.show_fallback(region, NO_DATA_MESSAGE);
        }
    }

    fn render_all(&mut self) {
        self.render_snapshot_regions();
        self.render_view(View::Holdings);
        self.render_view(View::Trades);
        self.render_view(View::Performance);
        let label = self.freshness_label();
        self.renderer.render_freshness(&label);
        self.marks.freshness = Some(label);
    }

    /// Regions that depend on the snapshot alone.
    fn render_snapshot_regions(&mut self) {
        let generation = self.model.generation();
        if self.marks.snapshot == Some(generation) {
            return;
        }
        let Some(snapshot) = self.model.snapshot() else {
            return;
        };

        self.renderer
            .render_summary(&self.presenter.summary_card(snapshot));
        self.renderer
            .render_top_holdings(&self.presenter.top_holdings(&snapshot.holdings));

        if snapshot.sector_allocation.is_empty() {
            self.renderer
                .show_fallback(Region::Sectors, "No sector data available");
        } else {
            self.renderer
                .render_sectors(&self.presenter.sector_rows(&snapshot.sector_allocation));
        }

        let allocation = self.chart_service.allocation_chart(&snapshot.holdings);
        self.charts
            .redraw(ChartAnchor::HoldingsAllocation, &allocation);

        self.marks.snapshot = Some(generation);
    }

    /// Re-render one filter-driven view unless it already shows the current
    /// snapshot generation with the current filter.
    fn render_view(&mut self, view: View) -> bool {
        let generation = self.model.generation();
        let Some(snapshot) = self.model.snapshot() else {
            return false;
        };

        match view {
            View::Holdings => {
                let filter = self.model.holdings_filter();
                if self.marks.holdings.as_ref() == Some(&(generation, filter.clone())) {
                    return false;
                }
                let rows: Vec<HoldingRow> = self
                    .projection
                    .project_holdings(&snapshot.holdings, filter)
                    .into_iter()
                    .map(|h| self.presenter.holding_row(h))
                    .collect();
                self.renderer.render_holdings(&rows);
                self.marks.holdings = Some((generation, filter.clone()));
            }
            View::Trades => {
                let filter = self.model.trades_filter();
                if self.marks.trades.as_ref() == Some(&(generation, filter.clone())) {
                    return false;
                }
                let cards: Vec<TradeCard> = self
                    .projection
                    .project_trades(&snapshot.recent_trades, filter)
                    .into_iter()
                    .map(|t| self.presenter.trade_card(t))
                    .collect();
                self.renderer.render_trades(&cards);
                self.marks.trades = Some((generation, filter.clone()));
            }
            View::Performance => {
                let period = self.model.period();
                if self.marks.performance == Some((generation, period)) {
                    return false;
                }
                let data = self
                    .chart_service
                    .performance_chart(&snapshot.historical_performance, period);
                self.charts.redraw(ChartAnchor::Performance, &data);
                self.marks.performance = Some((generation, period));
            }
        }

        tracing::debug!(?view, generation, "View rendered");
        true
    }
}
