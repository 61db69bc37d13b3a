pub mod config;
pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod view;

use std::sync::Arc;

use errors::CoreError;
use models::holding::Holding;
use models::settings::Settings;
use models::trade::Trade;
use providers::http::HttpDataSource;
use providers::traits::DataSource;
use services::export_service::ExportService;
use services::fetch_service::FetchService;
use view::charts::ChartAdapter;
use view::notifier::{LogNotifier, NoopNotifier, TradeNotifier};
use view::renderer::ViewRenderer;
use view::scheduler::RenderScheduler;
use view::stock_page::StockPage;

/// Main entry point for the Trade Tracker core library.
///
/// Holds the session settings and the data source, and composes the page
/// controllers with the collaborators a front end provides.
#[must_use]
pub struct TradeTracker {
    settings: Settings,
    fetcher: FetchService,
    export_service: ExportService,
}

impl std::fmt::Debug for TradeTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TradeTracker")
            .field("source", &self.fetcher.source_name())
            .field("api_base", &self.settings.api_base)
            .field("profile", &self.settings.profile)
            .finish()
    }
}

impl TradeTracker {
    /// Build a tracker that talks to the HTTP API named in `settings`.
    pub fn new(settings: Settings) -> Result<Self, CoreError> {
        let source = HttpDataSource::from_settings(&settings)?;
        Self::with_source(settings, Arc::new(source))
    }

    /// Build a tracker over any data source (tests, recorded payloads).
    pub fn with_source(settings: Settings, source: Arc<dyn DataSource>) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self {
            settings,
            fetcher: FetchService::new(source),
            export_service: ExportService::new(),
        })
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn fetcher(&self) -> &FetchService {
        &self.fetcher
    }

    // ── Pages ───────────────────────────────────────────────────────

    /// Scheduler for the portfolio page, configured from the settings.
    /// Notifications go to the log unless disabled.
    pub fn portfolio_page<R: ViewRenderer, C: ChartAdapter>(
        &self,
        renderer: R,
        chart_adapter: C,
    ) -> RenderScheduler<R, C> {
        let notifier: Box<dyn TradeNotifier> = if self.settings.notifications {
            Box::new(LogNotifier)
        } else {
            Box::new(NoopNotifier)
        };
        self.portfolio_page_with_notifier(renderer, chart_adapter, notifier)
    }

    /// Same as [`portfolio_page`](Self::portfolio_page) with a front-end
    /// supplied notifier.
    pub fn portfolio_page_with_notifier<R: ViewRenderer, C: ChartAdapter>(
        &self,
        renderer: R,
        chart_adapter: C,
        notifier: Box<dyn TradeNotifier>,
    ) -> RenderScheduler<R, C> {
        let notifier = if self.settings.notifications {
            notifier
        } else {
            Box::new(NoopNotifier)
        };
        RenderScheduler::new(self.fetcher.clone(), renderer, chart_adapter)
            .with_notifier(notifier)
            .with_poll_interval(self.settings.poll_interval())
            .with_placeholder_min_display(self.settings.placeholder_min_display())
    }

    /// Controller for a single-stock detail page.
    pub fn stock_page<R: ViewRenderer, C: ChartAdapter>(
        &self,
        renderer: R,
        chart_adapter: C,
    ) -> StockPage<R, C> {
        StockPage::new(self.fetcher.clone(), renderer, chart_adapter)
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Holdings as CSV.
    pub fn export_holdings_csv(&self, holdings: &[Holding]) -> Result<String, CoreError> {
        self.export_service.holdings_csv(holdings)
    }

    /// Trades as CSV.
    pub fn export_trades_csv(&self, trades: &[Trade]) -> Result<String, CoreError> {
        self.export_service.trades_csv(trades)
    }

    /// Download name for an export of `kind` ("holdings" or "trades").
    pub fn export_file_name(&self, kind: &str, date: chrono::NaiveDate) -> String {
        self.export_service.file_name(kind, date)
    }
}
