use serde::Serialize;

use super::trade::{Trade, TradeAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NotificationLevel {
    Success,
    Info,
}

/// A trade that appeared since the previous poll.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTradeEvent {
    pub trade: Trade,
}

impl NewTradeEvent {
    pub fn new(trade: Trade) -> Self {
        Self { trade }
    }

    /// e.g. "New trade: Purchase $1,001 - $15,000 in NVDA"
    pub fn message(&self) -> String {
        let t = &self.trade;
        if t.amount.is_empty() {
            format!("New trade: {} in {}", t.action, t.ticker)
        } else {
            format!("New trade: {} {} in {}", t.action, t.amount, t.ticker)
        }
    }

    pub fn level(&self) -> NotificationLevel {
        match self.trade.action {
            TradeAction::Purchase => NotificationLevel::Success,
            _ => NotificationLevel::Info,
        }
    }
}
