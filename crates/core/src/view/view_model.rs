use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::models::ancillary::{IndexComparison, Quote};
use crate::models::filter::{ChartPeriod, FilterChange, HoldingsFilter, TradesFilter};
use crate::models::snapshot::PortfolioSnapshot;

/// Result of committing a fetched snapshot.
#[derive(Debug)]
pub struct Commit {
    /// The snapshot that was replaced. Kept only long enough to diff.
    pub previous: Option<Arc<PortfolioSnapshot>>,
    /// `false` when the new snapshot equals the one already committed.
    pub changed: bool,
}

/// Sole owner of the latest snapshot and of every view's filter state.
///
/// Scoped to one page session; nothing here is persisted. Every other
/// component gets `&` access through the scheduler.
#[derive(Debug, Default)]
pub struct ViewModel {
    snapshot: Option<Arc<PortfolioSnapshot>>,
    /// Bumped on every commit that changes the snapshot.
    generation: u64,
    committed_at: Option<Instant>,
    holdings_filter: HoldingsFilter,
    trades_filter: TradesFilter,
    period: ChartPeriod,
    quote: Option<Quote>,
    index_comparison: Option<IndexComparison>,
}

impl ViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Snapshot ────────────────────────────────────────────────────

    pub fn snapshot(&self) -> Option<&PortfolioSnapshot> {
        self.snapshot.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the snapshot wholesale.
    pub fn commit(&mut self, snapshot: PortfolioSnapshot) -> Commit {
        self.committed_at = Some(Instant::now());

        if self.snapshot.as_deref() == Some(&snapshot) {
            return Commit {
                previous: self.snapshot.clone(),
                changed: false,
            };
        }

        let previous = self.snapshot.replace(Arc::new(snapshot));
        self.generation += 1;
        Commit {
            previous,
            changed: true,
        }
    }

    /// Time since the last successful commit.
    pub fn since_last_commit(&self) -> Option<Duration> {
        self.committed_at.map(|t| t.elapsed())
    }

    // ── Filter state ────────────────────────────────────────────────

    pub fn holdings_filter(&self) -> &HoldingsFilter {
        &self.holdings_filter
    }

    pub fn trades_filter(&self) -> &TradesFilter {
        &self.trades_filter
    }

    pub fn period(&self) -> ChartPeriod {
        self.period
    }

    /// Store a user filter change. Returns `false` if nothing changed.
    pub fn apply_filter(&mut self, change: FilterChange) -> bool {
        match change {
            FilterChange::Holdings(f) => replace_if_changed(&mut self.holdings_filter, f),
            FilterChange::Trades(f) => replace_if_changed(&mut self.trades_filter, f),
            FilterChange::Performance(p) => replace_if_changed(&mut self.period, p),
        }
    }

    // ── Ancillary ───────────────────────────────────────────────────

    pub fn quote(&self) -> Option<&Quote> {
        self.quote.as_ref()
    }

    pub fn set_quote(&mut self, quote: Quote) {
        self.quote = Some(quote);
    }

    pub fn index_comparison(&self) -> Option<&IndexComparison> {
        self.index_comparison.as_ref()
    }

    pub fn set_index_comparison(&mut self, comparison: IndexComparison) {
        self.index_comparison = Some(comparison);
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
