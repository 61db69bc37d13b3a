use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use trade_tracker_core::config::load_settings;
use trade_tracker_core::view::scheduler::UiEvent;
use trade_tracker_core::TradeTracker;

mod commands;
mod render;

use commands::{CommandReader, HELP};
use render::{TextChartAdapter, TextRenderer};

#[derive(Parser, Debug)]
#[command(author, version, about = "Follow a disclosed stock portfolio from the terminal.")]
struct Cli {
    /// TOML settings file; TRACKER_* environment variables override it.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Poll the portfolio and keep the views up to date (default).
    Watch,

    /// Show the trading activity for one ticker.
    Stock {
        /// e.g. "NVDA", or a page path such as "/stock/NVDA"
        ticker: String,
    },

    /// Fetch the portfolio once and write a CSV export.
    Export {
        #[arg(value_enum)]
        kind: ExportKind,

        /// Output file; defaults to the dated download name in the current directory.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ExportKind {
    Holdings,
    Trades,
}

impl ExportKind {
    fn as_str(&self) -> &'static str {
        match self {
            ExportKind::Holdings => "holdings",
            ExportKind::Trades => "trades",
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = load_settings(cli.config.as_deref()).context("Failed to load settings")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let tracker = TradeTracker::new(settings)?;
    tracing::info!(?tracker, "Starting trade tracker");

    match cli.command.unwrap_or(Command::Watch) {
        Command::Watch => watch(&tracker).await,
        Command::Stock { ticker } => stock(&tracker, &ticker).await,
        Command::Export { kind, output } => export(&tracker, kind, output).await,
    }
}

async fn watch(tracker: &TradeTracker) -> Result<()> {
    let (tx, rx) = mpsc::channel::<UiEvent>(32);

    let input = tokio::spawn(async move {
        let mut reader = CommandReader::new();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        println!("{HELP}");
        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => break,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read stdin");
                    break;
                }
            };
            match reader.parse(&line) {
                Ok(Some(event)) => {
                    let stop = event == UiEvent::Shutdown;
                    if tx.send(event).await.is_err() || stop {
                        break;
                    }
                }
                Ok(None) => println!("{HELP}"),
                Err(e) => eprintln!("{e}"),
            }
        }
    });

    let mut scheduler = tracker.portfolio_page(TextRenderer::stdout(), TextChartAdapter::new());
    scheduler.load_ancillary().await;
    let scheduler = scheduler.run(rx).await;

    input.abort();
    tracing::info!(
        generation = scheduler.view_model().generation(),
        "Watch session ended"
    );
    Ok(())
}

async fn stock(tracker: &TradeTracker, ticker: &str) -> Result<()> {
    let mut page = tracker.stock_page(TextRenderer::stdout(), TextChartAdapter::new());
    if ticker.contains('/') {
        page.load_path(ticker).await?;
    } else {
        page.load(ticker).await?;
    }
    Ok(())
}

async fn export(tracker: &TradeTracker, kind: ExportKind, output: Option<PathBuf>) -> Result<()> {
    let snapshot = tracker.fetcher().fetch_portfolio().await?;
    let csv = match kind {
        ExportKind::Holdings => tracker.export_holdings_csv(&snapshot.holdings)?,
        ExportKind::Trades => tracker.export_trades_csv(&snapshot.recent_trades)?,
    };

    let path = output.unwrap_or_else(|| {
        let today = chrono::Local::now().date_naive();
        PathBuf::from(tracker.export_file_name(kind.as_str(), today))
    });
    tokio::fs::write(&path, csv)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}
