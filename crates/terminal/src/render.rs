use std::fmt::Write as _;
use std::io::Write;

use trade_tracker_core::models::ancillary::Quote;
use trade_tracker_core::models::chart::{ChartAnchor, ChartData};
use trade_tracker_core::models::fragment::{
    HoldingRow, IndexComparisonSummary, SectorRow, StockDetailView, SummaryCard, TopHolding,
    TradeCard,
};
use trade_tracker_core::view::charts::ChartAdapter;
use trade_tracker_core::view::renderer::{Region, ViewRenderer};

const BAR_WIDTH: usize = 30;
const SPARK: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Prints every region as a plain-text block. The freshness label stays on
/// the last line and is rewritten in place.
pub struct TextRenderer<W: Write> {
    out: W,
    status_line: bool,
}

impl TextRenderer<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            status_line: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, region: Region, body: &str) {
        let lead = if std::mem::take(&mut self.status_line) { "\n" } else { "" };
        let result = writeln!(self.out, "{lead}── {region:?} ──\n{body}").and_then(|_| self.out.flush());
        if let Err(e) = result {
            tracing::warn!(error = %e, ?region, "Failed to write region");
        }
    }
}

impl<W: Write> ViewRenderer for TextRenderer<W> {
    fn show_placeholder(&mut self, region: Region, rows: usize) {
        let body = "  ░░░░░░░░░░░░\n".repeat(rows.max(1));
        self.emit(region, body.trim_end());
    }

    fn render_summary(&mut self, card: &SummaryCard) {
        let mut body = format!(
            "  Copiers {}   Invested {}   Performance {}   Holdings {}",
            card.copiers, card.invested, card.performance, card.holdings_count
        );
        if let Some(updated) = &card.last_updated {
            let _ = write!(body, "\n  Last updated {updated}");
        }
        self.emit(Region::Summary, &body);
    }

    fn render_holdings(&mut self, rows: &[HoldingRow]) {
        if rows.is_empty() {
            self.emit(Region::Holdings, "  No matching holdings");
            return;
        }
        let mut body = String::new();
        for row in rows {
            let _ = writeln!(body, "  {:<8}{:>12}{:>9}", row.ticker, row.price, row.weight);
        }
        self.emit(Region::Holdings, body.trim_end());
    }

    fn render_top_holdings(&mut self, rows: &[TopHolding]) {
        let mut body = String::new();
        for (i, row) in rows.iter().enumerate() {
            let _ = writeln!(
                body,
                "  {}. {:<6} {:<28}{:>7}",
                i + 1,
                row.ticker,
                row.company_name,
                row.weight
            );
        }
        self.emit(Region::TopHoldings, body.trim_end());
    }

    fn render_trades(&mut self, cards: &[TradeCard]) {
        if cards.is_empty() {
            self.emit(Region::Trades, "  No matching trades");
            return;
        }
        let mut body = String::new();
        for card in cards {
            let _ = writeln!(
                body,
                "  {}  {:<6} {:<9} {:<24} {}",
                card.date, card.ticker, card.action, card.amount, card.trade_type
            );
            if let Some(insight) = &card.insight {
                let _ = writeln!(body, "      {insight}");
            }
        }
        self.emit(Region::Trades, body.trim_end());
    }

    fn render_sectors(&mut self, rows: &[SectorRow]) {
        let mut body = String::new();
        for row in rows {
            let filled = ((row.percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
            let _ = writeln!(
                body,
                "  {:<24}{:<width$} {}",
                row.name,
                "█".repeat(filled.min(BAR_WIDTH)),
                row.label,
                width = BAR_WIDTH
            );
        }
        self.emit(Region::Sectors, body.trim_end());
    }

    fn render_quote(&mut self, quote: &Quote) {
        let mut body = format!("  \"{}\"\n  - {}", quote.quote, quote.source);
        if let Some(context) = &quote.context {
            let _ = write!(body, "\n  {context}");
        }
        self.emit(Region::Quote, &body);
    }

    fn render_index_comparison(&mut self, summary: &IndexComparisonSummary) {
        let body = format!(
            "  Portfolio {}   S&P 500 {}   Outperformance {}   ({})",
            summary.portfolio_return, summary.index_return, summary.outperformance, summary.period
        );
        self.emit(Region::IndexComparison, &body);
    }

    fn render_stock_detail(&mut self, view: &StockDetailView) {
        let mut body = format!(
            "  {} {} ({})\n  {}  {}\n  52w {}   {}\n  {}\n",
            view.ticker,
            view.company_name,
            view.exchange,
            view.price,
            view.change,
            view.week_range,
            view.status,
            view.description
        );
        let _ = writeln!(body, "  {}   {}", view.transaction_count, view.compliance);
        for row in &view.trades {
            let _ = writeln!(
                body,
                "  {}  filed {}  {:<9} {:<13} {:<24} {}{}",
                row.traded_date,
                row.filed_date,
                row.action,
                row.trade_type,
                row.amount,
                row.excess_return,
                if row.compliant { "" } else { "  (late)" }
            );
        }
        if !view.similar.is_empty() {
            body.push_str("  Similar:\n");
            for card in &view.similar {
                let _ = writeln!(
                    body,
                    "    {:<6} {:<24}{:>10}  {}  {}",
                    card.ticker, card.name, card.price, card.change, card.reason
                );
            }
        }
        self.emit(Region::StockDetail, body.trim_end());
    }

    fn show_fallback(&mut self, region: Region, message: &str) {
        self.emit(region, &format!("  {message}"));
    }

    fn render_freshness(&mut self, label: &str) {
        let result = write!(self.out, "\r\x1b[2K[{label}]").and_then(|_| self.out.flush());
        if let Err(e) = result {
            tracing::warn!(error = %e, "Failed to write freshness label");
        }
        self.status_line = true;
    }
}

/// Draws each dataset as a one-line sparkline.
#[derive(Debug, Default)]
pub struct TextChartAdapter {
    next_id: u64,
}

impl TextChartAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChartAdapter for TextChartAdapter {
    type Handle = u64;

    fn create(&mut self, anchor: ChartAnchor, data: &ChartData) -> u64 {
        self.next_id += 1;
        // Clears a freshness label left on the current line.
        let mut out = format!("\r\x1b[2K── chart {anchor:?} ──\n");
        if data.is_empty() {
            out.push_str("  (no points)\n");
        }
        for dataset in &data.datasets {
            let _ = writeln!(out, "  {:<12}{}", dataset.label, sparkline(&dataset.values));
        }
        if let (Some(first), Some(last)) = (data.labels.first(), data.labels.last()) {
            let _ = writeln!(out, "  {first} .. {last}");
        }
        print!("{out}");
        self.next_id
    }

    fn destroy(&mut self, handle: u64) {
        tracing::trace!(handle, "Chart destroyed");
    }
}

fn sparkline(values: &[f64]) -> String {
    let finite = values.iter().copied().filter(|v| v.is_finite());
    let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let span = max - min;
    values
        .iter()
        .map(|v| {
            if !v.is_finite() {
                ' '
            } else if span <= 0.0 {
                SPARK[SPARK.len() / 2]
            } else {
                let idx = ((v - min) / span * (SPARK.len() - 1) as f64).round() as usize;
                SPARK[idx.min(SPARK.len() - 1)]
            }
        })
        .collect()
}
