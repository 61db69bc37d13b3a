// ═══════════════════════════════════════════════════════════════════
// Stock Page Tests: ticker verification, fallback and price chart
// ═══════════════════════════════════════════════════════════════════

mod common;

use std::sync::Arc;

use common::*;
use trade_tracker_core::errors::{CoreError, FetchError};
use trade_tracker_core::models::chart::ChartAnchor;
use trade_tracker_core::models::trade::TradeAction;
use trade_tracker_core::services::fetch_service::FetchService;
use trade_tracker_core::view::renderer::Region;
use trade_tracker_core::view::stock_page::{StockPage, STOCK_ERROR_MESSAGE};

fn page_over(source: ScriptedSource) -> (StockPage<RecordingRenderer, RecordingCharts>, Arc<ScriptedSource>) {
    let source = Arc::new(source);
    let page = StockPage::new(
        FetchService::new(source.clone()),
        RecordingRenderer::new(),
        RecordingCharts::new(),
    );
    (page, source)
}

fn rendered_details(page: &StockPage<RecordingRenderer, RecordingCharts>) -> usize {
    page.renderer()
        .painted
        .iter()
        .filter(|p| matches!(p, Painted::StockDetail(_)))
        .count()
}

// ═══════════════════════════════════════════════════════════════════
// Ticker Verification
// ═══════════════════════════════════════════════════════════════════

mod verification {
    use super::*;

    #[tokio::test]
    async fn test_mismatched_ticker_shows_fallback_not_data() {
        let (mut page, source) = page_over(ScriptedSource::new(vec![]).with_stock(Ok(stock_detail("MSFT"))));

        let err = page.load("AAPL").await.unwrap_err();
        match err {
            CoreError::Fetch(FetchError::DataMismatch { requested, received }) => {
                assert_eq!(requested, "AAPL");
                assert_eq!(received, "MSFT");
            }
            other => panic!("expected DataMismatch, got {other:?}"),
        }

        assert_eq!(rendered_details(&page), 0);
        assert_eq!(
            page.renderer().fallbacks(),
            vec![(Region::StockDetail, STOCK_ERROR_MESSAGE.to_string())]
        );
        assert!(page.current().is_none());
        assert!(!page.charts().is_live(ChartAnchor::PriceHistory));
        assert_eq!(*source.stock_requests.lock().unwrap(), vec!["AAPL".to_string()]);
    }

    #[tokio::test]
    async fn test_matching_ticker_is_case_insensitive() {
        let (mut page, source) = page_over(ScriptedSource::new(vec![]).with_stock(Ok(stock_detail("nvda"))));

        page.load("Nvda").await.unwrap();

        assert_eq!(page.current().unwrap().ticker, "NVDA");
        assert_eq!(*source.stock_requests.lock().unwrap(), vec!["NVDA".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_response_ticker_is_stamped() {
        let (mut page, _) = page_over(ScriptedSource::new(vec![]).with_stock(Ok(stock_detail(""))));

        page.load("TSLA").await.unwrap();
        assert_eq!(page.current().unwrap().ticker, "TSLA");
    }

    #[tokio::test]
    async fn test_blank_ticker_is_rejected_before_fetch() {
        let (mut page, source) = page_over(ScriptedSource::new(vec![]).with_stock(Ok(stock_detail("NVDA"))));

        let err = page.load("  ").await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(source.stock_requests.lock().unwrap().is_empty());
        assert_eq!(page.renderer().fallbacks().len(), 1);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Rendering
// ═══════════════════════════════════════════════════════════════════

mod rendering {
    use super::*;

    #[tokio::test]
    async fn test_successful_load_renders_detail_and_chart() {
        let mut detail = stock_detail("NVDA");
        detail.trades = vec![
            trade("NVDA", "2024-06-24", TradeAction::Sale),
            trade("NVDA", "2024-12-20", TradeAction::Purchase),
        ];
        detail.trades[0].non_compliant = true;
        let (mut page, _) = page_over(ScriptedSource::new(vec![]).with_stock(Ok(detail)));

        page.load("NVDA").await.unwrap();

        let view = page
            .renderer()
            .painted
            .iter()
            .find_map(|p| match p {
                Painted::StockDetail(v) => Some(v.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(view.price, "$135.40");
        assert_eq!(view.change, "+1.85 (+0.99%)");
        assert_eq!(view.week_range, "$108.13 - $152.89");
        assert_eq!(view.transaction_count, "2 transactions");
        assert_eq!(view.compliance, "Compliance: 50%");
        assert_eq!(view.trades[0].traded_date, "2024-12-20");
        assert!(!view.trades[1].compliant);

        assert!(page.charts().is_live(ChartAnchor::PriceHistory));
        let log = page.charts().adapter().log.lock().unwrap();
        let data = log.last_for(ChartAnchor::PriceHistory).unwrap();
        assert_eq!(data.labels, vec!["Jan 14", "Jan 15"]);
    }

    #[tokio::test]
    async fn test_no_price_history_means_no_chart() {
        let mut detail = stock_detail("NVDA");
        detail.price_history.clear();
        let (mut page, _) = page_over(ScriptedSource::new(vec![]).with_stock(Ok(detail)));

        page.load("NVDA").await.unwrap();
        assert!(!page.charts().is_live(ChartAnchor::PriceHistory));
        assert_eq!(page.charts().live_count(), 0);
    }

    #[tokio::test]
    async fn test_network_failure_shows_fallback() {
        let (mut page, _) = page_over(ScriptedSource::new(vec![]));

        let err = page.load("NVDA").await.unwrap_err();
        assert!(matches!(err, CoreError::Fetch(FetchError::Network(_))));
        assert_eq!(rendered_details(&page), 0);
        assert_eq!(
            page.renderer().fallbacks(),
            vec![(Region::StockDetail, STOCK_ERROR_MESSAGE.to_string())]
        );
    }
}

// ═══════════════════════════════════════════════════════════════════
// Page Paths
// ═══════════════════════════════════════════════════════════════════

mod paths {
    use super::*;

    #[tokio::test]
    async fn test_load_path_extracts_ticker() {
        let (mut page, source) = page_over(ScriptedSource::new(vec![]).with_stock(Ok(stock_detail("NVDA"))));

        page.load_path("/stock/nvda").await.unwrap();
        assert_eq!(*source.stock_requests.lock().unwrap(), vec!["NVDA".to_string()]);
    }

    #[tokio::test]
    async fn test_path_without_ticker_fails() {
        let (mut page, source) = page_over(ScriptedSource::new(vec![]).with_stock(Ok(stock_detail("NVDA"))));

        let err = page.load_path("/about").await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(source.stock_requests.lock().unwrap().is_empty());
        assert_eq!(
            page.renderer().fallbacks(),
            vec![(Region::StockDetail, STOCK_ERROR_MESSAGE.to_string())]
        );
    }

    #[tokio::test]
    async fn test_failed_reload_clears_previous_chart() {
        let source = ScriptedSource::new(vec![]).with_stock(Ok(stock_detail("NVDA")));
        let (mut page, _) = page_over(source);

        page.load("NVDA").await.unwrap();
        assert!(page.charts().is_live(ChartAnchor::PriceHistory));

        // Same source now answers for NVDA while AAPL is requested
        assert!(page.load("AAPL").await.is_err());
        assert!(!page.charts().is_live(ChartAnchor::PriceHistory));
        assert!(page.current().is_none());
    }
}
