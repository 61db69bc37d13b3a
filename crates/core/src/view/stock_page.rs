use crate::errors::CoreError;
use crate::models::chart::ChartAnchor;
use crate::models::stock::StockDetail;
use crate::services::chart_service::ChartService;
use crate::services::fetch_service::{ticker_from_path, FetchService};
use crate::services::presenter_service::PresenterService;

use super::charts::{ChartAdapter, ChartRegistry};
use super::renderer::{Region, ViewRenderer};

/// Shown when the stock detail could not be loaded or failed verification.
pub const STOCK_ERROR_MESSAGE: &str = "Error loading trading activity. Please refresh the page.";

/// Single-stock detail page.
///
/// Loads one ticker, verifies the response is for that ticker and renders
/// it. Any failure, a ticker mismatch included, leaves only the fallback
/// message on the page.
pub struct StockPage<R: ViewRenderer, C: ChartAdapter> {
    fetcher: FetchService,
    renderer: R,
    charts: ChartRegistry<C>,
    presenter: PresenterService,
    chart_service: ChartService,
    current: Option<StockDetail>,
}

impl<R: ViewRenderer, C: ChartAdapter> StockPage<R, C> {
    pub fn new(fetcher: FetchService, renderer: R, chart_adapter: C) -> Self {
        Self {
            fetcher,
            renderer,
            charts: ChartRegistry::new(chart_adapter),
            presenter: PresenterService::new(),
            chart_service: ChartService::new(),
            current: None,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn charts(&self) -> &ChartRegistry<C> {
        &self.charts
    }

    /// Detail currently on screen.
    pub fn current(&self) -> Option<&StockDetail> {
        self.current.as_ref()
    }

    /// Load the ticker named by a page path such as `/stock/NVDA`.
    pub async fn load_path(&mut self, path: &str) -> Result<(), CoreError> {
        match ticker_from_path(path) {
            Some(ticker) => self.load(&ticker).await,
            None => {
                tracing::error!(%path, "No ticker found in path");
                self.fail();
                Err(CoreError::Validation(format!("No ticker found in path '{path}'")))
            }
        }
    }

    pub async fn load(&mut self, ticker: &str) -> Result<(), CoreError> {
        tracing::debug!(%ticker, "Loading stock detail");
        let detail = match self.fetcher.fetch_stock(ticker).await {
            Ok(detail) => detail,
            Err(e) => {
                self.fail();
                return Err(e);
            }
        };

        self.renderer
            .render_stock_detail(&self.presenter.stock_detail(&detail));
        if detail.price_history.is_empty() {
            self.charts.clear(ChartAnchor::PriceHistory);
        } else {
            let data = self.chart_service.price_history_chart(&detail.price_history);
            self.charts.redraw(ChartAnchor::PriceHistory, &data);
        }
        self.current = Some(detail);
        Ok(())
    }

    fn fail(&mut self) {
        self.current = None;
        self.charts.clear(ChartAnchor::PriceHistory);
        self.renderer
            .show_fallback(Region::StockDetail, STOCK_ERROR_MESSAGE);
    }
}
