use crate::models::trade::{Trade, TradeAction, TradeType};

/// Amount bracket treated as a large, high-conviction position.
const LARGE_POSITION_BRACKET: &str = "$5,000,001";

/// One-line commentary attached to trade cards.
pub struct InsightService;

impl InsightService {
    pub fn new() -> Self {
        Self
    }

    /// Ticker-specific note first, then generic hints; `None` when nothing applies.
    pub fn insight(&self, trade: &Trade) -> Option<String> {
        if let Some(note) = ticker_note(&trade.ticker, &trade.action) {
            return Some(note.to_string());
        }
        if trade.amount.contains(LARGE_POSITION_BRACKET) {
            return Some("Large position - High conviction trade".to_string());
        }
        if trade.trade_type == TradeType::CallOption {
            return Some("Options play - Leveraged bet on upside".to_string());
        }
        None
    }
}

impl Default for InsightService {
    fn default() -> Self {
        Self::new()
    }
}

fn ticker_note(ticker: &str, action: &TradeAction) -> Option<&'static str> {
    let note = match (ticker, action) {
        ("NVDA", TradeAction::Purchase) => {
            "Major AI chip bet. Strong conviction on AI infrastructure growth."
        }
        ("NVDA", TradeAction::Sale) => {
            "Taking profits after significant gains. NVDA has been a top performer."
        }
        ("GOOGL", TradeAction::Purchase) => {
            "Big Tech play. Betting on AI integration and ad recovery."
        }
        ("GOOGL", TradeAction::Sale) => "Profit-taking on Google position.",
        ("AAPL", TradeAction::Purchase) => {
            "Tech giant addition. Apple is a core holding with steady growth."
        }
        ("AAPL", TradeAction::Sale) => "Large sale, possibly rebalancing or taking profits.",
        _ => return None,
    };
    Some(note)
}
