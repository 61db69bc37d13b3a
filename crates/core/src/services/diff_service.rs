use std::collections::HashSet;

use crate::models::notification::NewTradeEvent;
use crate::models::trade::{Trade, TradeKey};

/// Detects trades that appeared between two successive polls.
pub struct DiffService;

impl DiffService {
    pub fn new() -> Self {
        Self
    }

    /// Every trade in `current` whose `(ticker, date, action)` key is not in
    /// `previous`, in `current` order. Two new trades sharing a key are both
    /// reported.
    ///
    /// An empty `previous` means there is no baseline yet (first load) and
    /// yields no events rather than reporting everything as new.
    pub fn diff(&self, previous: &[Trade], current: &[Trade]) -> Vec<NewTradeEvent> {
        if previous.is_empty() {
            return Vec::new();
        }

        let known: HashSet<TradeKey> = previous.iter().map(Trade::key).collect();

        current
            .iter()
            .filter(|t| !known.contains(&t.key()))
            .map(|t| NewTradeEvent::new(t.clone()))
            .collect()
    }
}

impl Default for DiffService {
    fn default() -> Self {
        Self::new()
    }
}
