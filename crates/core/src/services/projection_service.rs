use std::cmp::Ordering;

use crate::models::filter::{HoldingsFilter, HoldingsSort, TradesFilter};
use crate::models::holding::Holding;
use crate::models::trade::Trade;

/// Filter/sort engine: derives read-only projections of snapshot
/// collections for display.
///
/// Pure: same input, same output. All sorts are stable, so records that tie
/// on the sort key keep their upstream relative order.
pub struct ProjectionService;

impl ProjectionService {
    pub fn new() -> Self {
        Self
    }

    /// Holdings whose ticker contains `filter.search` (case-insensitive),
    /// ordered by `filter.sort`. An empty search term keeps everything; whitespace
    /// is matched literally.
    pub fn project_holdings<'a>(
        &self,
        holdings: &'a [Holding],
        filter: &HoldingsFilter,
    ) -> Vec<&'a Holding> {
        let q = filter.search.to_lowercase();
        let mut rows: Vec<&Holding> = holdings
            .iter()
            .filter(|h| q.is_empty() || h.ticker.to_lowercase().contains(&q))
            .collect();

        match filter.sort {
            HoldingsSort::WeightDesc => rows.sort_by(|a, b| cmp_weight(b.weight, a.weight)),
            HoldingsSort::WeightAsc => rows.sort_by(|a, b| cmp_weight(a.weight, b.weight)),
            HoldingsSort::TickerAsc => rows.sort_by(|a, b| a.ticker.cmp(&b.ticker)),
        }
        rows
    }

    /// Trades matching `filter.search` against ticker OR action
    /// (case-insensitive), then the exact action category, newest first.
    /// Trades whose date can't be parsed sort as the oldest.
    pub fn project_trades<'a>(&self, trades: &'a [Trade], filter: &TradesFilter) -> Vec<&'a Trade> {
        let q = filter.search.to_lowercase();
        let mut rows: Vec<(&Trade, Option<chrono::NaiveDate>)> = trades
            .iter()
            .filter(|t| {
                q.is_empty()
                    || t.ticker.to_lowercase().contains(&q)
                    || t.action.as_str().to_lowercase().contains(&q)
            })
            .filter(|t| filter.action.matches(&t.action))
            .map(|t| (t, t.parsed_date()))
            .collect();

        // Option orders None before Some, so reversing puts unparseable last.
        rows.sort_by(|(_, a), (_, b)| b.cmp(a));
        rows.into_iter().map(|(t, _)| t).collect()
    }

    /// The `n` heaviest holdings plus the summed weight of everything else.
    pub fn top_holdings_by_weight<'a>(&self, holdings: &'a [Holding], n: usize) -> (Vec<&'a Holding>, f64) {
        let mut sorted: Vec<&Holding> = holdings.iter().collect();
        sorted.sort_by(|a, b| cmp_weight(b.weight, a.weight));
        let rest: f64 = sorted.iter().skip(n).map(|h| finite_or_zero(h.weight)).sum();
        sorted.truncate(n);
        (sorted, rest)
    }
}

impl Default for ProjectionService {
    fn default() -> Self {
        Self::new()
    }
}

fn finite_or_zero(w: f64) -> f64 {
    if w.is_finite() {
        w
    } else {
        0.0
    }
}

/// Non-finite weights compare as 0, like a missing weight.
fn cmp_weight(a: f64, b: f64) -> Ordering {
    finite_or_zero(a)
        .partial_cmp(&finite_or_zero(b))
        .unwrap_or(Ordering::Equal)
}
