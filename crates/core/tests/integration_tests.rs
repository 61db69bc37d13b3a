// ═══════════════════════════════════════════════════════════════════
// Integration Tests: TradeTracker facade wiring pages, settings,
// notifications and export over one data source
// ═══════════════════════════════════════════════════════════════════

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::*;
use trade_tracker_core::errors::{CoreError, FetchError};
use trade_tracker_core::models::chart::ChartAnchor;
use trade_tracker_core::models::settings::Settings;
use trade_tracker_core::models::trade::TradeAction;
use trade_tracker_core::providers::http::HttpDataSource;
use trade_tracker_core::providers::traits::DataSource;
use trade_tracker_core::view::charts::NoopChartAdapter;
use trade_tracker_core::TradeTracker;

fn fast_settings() -> Settings {
    Settings {
        placeholder_min_display_ms: 0,
        ..Settings::default()
    }
}

fn tracker_over(source: Arc<ScriptedSource>, settings: Settings) -> TradeTracker {
    TradeTracker::with_source(settings, source).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
// Construction
// ═══════════════════════════════════════════════════════════════════

mod construction {
    use super::*;

    #[test]
    fn test_invalid_settings_are_rejected() {
        let settings = Settings {
            poll_interval_secs: 0,
            ..Settings::default()
        };
        let source = Arc::new(ScriptedSource::new(vec![]));
        assert!(matches!(
            TradeTracker::with_source(settings, source),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn test_http_tracker_builds_from_defaults() {
        let tracker = TradeTracker::new(Settings::default()).unwrap();
        assert_eq!(tracker.fetcher().source_name(), "HTTP");
        assert!(format!("{tracker:?}").contains("127.0.0.1:8080"));
    }

    #[test]
    fn test_http_source_profile_endpoint() {
        let settings = Settings {
            api_base: "http://localhost:9000/api/".into(),
            profile: Some("nancy-pelosi".into()),
            ..Settings::default()
        };
        let source = HttpDataSource::from_settings(&settings).unwrap();
        assert_eq!(source.base(), "http://localhost:9000/api/");
        assert_eq!(source.name(), "HTTP");
    }

    #[tokio::test]
    async fn test_http_source_applies_transport_timeout() {
        // Accepts the connection but never answers
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let _server = tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let source = HttpDataSource::new(format!("http://{addr}/api"), Duration::from_millis(100)).unwrap();
        let started = std::time::Instant::now();
        let result = source.fetch_portfolio().await;

        assert!(matches!(result, Err(FetchError::Network(_))));
        assert!(started.elapsed() < Duration::from_secs(10));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Portfolio Page
// ═══════════════════════════════════════════════════════════════════

mod portfolio_page {
    use super::*;

    #[tokio::test]
    async fn test_poll_cycle_through_facade() {
        let source = Arc::new(ScriptedSource::new(vec![
            Ok(sample_snapshot(vec![trade("AAPL", "2024-01-05", TradeAction::Purchase)])),
            Ok(sample_snapshot(vec![
                trade("AAPL", "2024-01-05", TradeAction::Purchase),
                trade("NVDA", "2024-01-06", TradeAction::Sale),
            ])),
        ]));
        let tracker = tracker_over(source.clone(), fast_settings());
        let notifier = RecordingNotifier::default();

        let mut page = tracker.portfolio_page_with_notifier(
            RecordingRenderer::new(),
            NoopChartAdapter,
            Box::new(notifier.clone()),
        );
        page.on_tick().await.unwrap();
        page.on_tick().await.unwrap();

        assert_eq!(source.calls(), 2);
        assert_eq!(notifier.events.lock().unwrap().len(), 1);
        assert_eq!(page.charts().live_count(), 2);
    }

    #[tokio::test]
    async fn test_disabled_notifications_use_noop() {
        let source = Arc::new(ScriptedSource::new(vec![
            Ok(sample_snapshot(vec![trade("AAPL", "2024-01-05", TradeAction::Purchase)])),
            Ok(sample_snapshot(vec![trade("TSLA", "2024-02-01", TradeAction::Sale)])),
        ]));
        let settings = Settings {
            notifications: false,
            ..fast_settings()
        };
        let tracker = tracker_over(source, settings);
        let notifier = RecordingNotifier::default();

        let mut page = tracker.portfolio_page_with_notifier(
            RecordingRenderer::new(),
            RecordingCharts::new(),
            Box::new(notifier.clone()),
        );
        page.on_tick().await.unwrap();
        let outcome = page.on_tick().await.unwrap();

        // Detection still runs; delivery is suppressed
        assert_eq!(outcome.new_trades, 1);
        assert!(notifier.events.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_placeholder_setting_is_applied() {
        let source = Arc::new(ScriptedSource::new(vec![Ok(sample_snapshot(vec![]))]));
        let settings = Settings {
            placeholder_min_display_ms: 750,
            ..Settings::default()
        };
        let tracker = tracker_over(source, settings);
        let mut page = tracker.portfolio_page(RecordingRenderer::new(), NoopChartAdapter);

        let start = tokio::time::Instant::now();
        page.on_tick().await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(750));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Stock Page
// ═══════════════════════════════════════════════════════════════════

mod stock_page {
    use super::*;

    #[tokio::test]
    async fn test_stock_page_through_facade() {
        let source = Arc::new(ScriptedSource::new(vec![]).with_stock(Ok(stock_detail("NVDA"))));
        let tracker = tracker_over(source, fast_settings());
        let mut page = tracker.stock_page(RecordingRenderer::new(), RecordingCharts::new());

        page.load_path("/stock/NVDA").await.unwrap();
        assert!(page.charts().is_live(ChartAnchor::PriceHistory));
        assert!(page.renderer().fallbacks().is_empty());
    }

    #[tokio::test]
    async fn test_mismatch_through_facade() {
        let source = Arc::new(ScriptedSource::new(vec![]).with_stock(Ok(stock_detail("MSFT"))));
        let tracker = tracker_over(source, fast_settings());
        let mut page = tracker.stock_page(RecordingRenderer::new(), RecordingCharts::new());

        let err = page.load("AAPL").await.unwrap_err();
        assert!(matches!(err, CoreError::Fetch(FetchError::DataMismatch { .. })));
        assert!(page.current().is_none());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Export
// ═══════════════════════════════════════════════════════════════════

mod export {
    use super::*;

    #[tokio::test]
    async fn test_export_current_snapshot() {
        let source = Arc::new(ScriptedSource::new(vec![Ok(sample_snapshot(vec![trade(
            "AAPL",
            "2024-01-05",
            TradeAction::Purchase,
        )]))]));
        let tracker = tracker_over(source, fast_settings());

        let snapshot = tracker.fetcher().fetch_portfolio().await.unwrap();
        let holdings = tracker.export_holdings_csv(&snapshot.holdings).unwrap();
        assert_eq!(holdings.lines().count(), 4);
        let trades = tracker.export_trades_csv(&snapshot.recent_trades).unwrap();
        assert!(trades.contains("\"AAPL\",\"Purchase\""));

        let date = chrono::NaiveDate::from_ymd_opt(2025, 1, 16).unwrap();
        assert_eq!(
            tracker.export_file_name("holdings", date),
            "pelosi-holdings-2025-01-16.csv"
        );
    }
}
