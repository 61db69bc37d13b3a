use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// What the disclosed transaction did.
///
/// Serialized as its display text. Unknown actions are kept verbatim in
/// `Other` so the exact-match category filter still works on them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TradeAction {
    Purchase,
    Sale,
    Exchange,
    Other(String),
}

impl TradeAction {
    pub fn as_str(&self) -> &str {
        match self {
            TradeAction::Purchase => "Purchase",
            TradeAction::Sale => "Sale",
            TradeAction::Exchange => "Exchange",
            TradeAction::Other(s) => s,
        }
    }
}

impl std::fmt::Display for TradeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for TradeAction {
    fn from(s: String) -> Self {
        match s.trim() {
            "Purchase" => TradeAction::Purchase,
            "Sale" => TradeAction::Sale,
            "Exchange" => TradeAction::Exchange,
            _ => TradeAction::Other(s),
        }
    }
}

impl From<&str> for TradeAction {
    fn from(s: &str) -> Self {
        TradeAction::from(s.to_string())
    }
}

impl From<TradeAction> for String {
    fn from(a: TradeAction) -> Self {
        match a {
            TradeAction::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl Default for TradeAction {
    fn default() -> Self {
        TradeAction::Other(String::new())
    }
}

/// Instrument type of a disclosed transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TradeType {
    Stock,
    CallOption,
    PutOption,
    Other(String),
}

impl TradeType {
    pub fn as_str(&self) -> &str {
        match self {
            TradeType::Stock => "Stock",
            TradeType::CallOption => "Call Options",
            TradeType::PutOption => "Put Options",
            TradeType::Other(s) => s,
        }
    }

    pub fn is_option(&self) -> bool {
        matches!(self, TradeType::CallOption | TradeType::PutOption)
    }
}

impl std::fmt::Display for TradeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for TradeType {
    fn from(s: String) -> Self {
        match s.trim().to_lowercase().as_str() {
            "stock" => TradeType::Stock,
            "call option" | "call options" => TradeType::CallOption,
            "put option" | "put options" => TradeType::PutOption,
            _ => TradeType::Other(s),
        }
    }
}

impl From<&str> for TradeType {
    fn from(s: &str) -> Self {
        TradeType::from(s.to_string())
    }
}

impl From<TradeType> for String {
    fn from(t: TradeType) -> Self {
        match t {
            TradeType::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl Default for TradeType {
    fn default() -> Self {
        TradeType::Other(String::new())
    }
}

/// Identity of a trade across polls: `(ticker, date, action)`.
///
/// Not a unique id. Two distinct same-day, same-action trades in one ticker
/// share a key and cannot be told apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TradeKey {
    pub ticker: String,
    pub date: String,
    pub action: TradeAction,
}

/// A single disclosed transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub ticker: String,

    #[serde(default)]
    pub action: TradeAction,

    /// Transaction date as reported ("1/14/2025", "2025-01-14", ...)
    #[serde(default)]
    pub date: String,

    /// Some payloads only carry `traded_date`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traded_date: Option<String>,

    /// Reported value bracket (e.g., "$1,001 - $15,000")
    #[serde(default)]
    pub amount: String,

    #[serde(rename = "type", default)]
    pub trade_type: TradeType,

    #[serde(default)]
    pub filed_date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Stock-detail payloads only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excess_return: Option<String>,

    /// Stock-detail payloads only
    #[serde(default)]
    pub non_compliant: bool,
}

impl Trade {
    pub fn new(
        ticker: impl Into<String>,
        action: TradeAction,
        date: impl Into<String>,
        amount: impl Into<String>,
        trade_type: TradeType,
    ) -> Self {
        Self {
            ticker: ticker.into().to_uppercase(),
            action,
            date: date.into(),
            traded_date: None,
            amount: amount.into(),
            trade_type,
            filed_date: String::new(),
            description: None,
            excess_return: None,
            non_compliant: false,
        }
    }

    pub fn key(&self) -> TradeKey {
        TradeKey {
            ticker: self.ticker.clone(),
            date: self.date.clone(),
            action: self.action.clone(),
        }
    }

    /// `date`, or `traded_date` when `date` is empty.
    pub fn effective_date(&self) -> &str {
        if self.date.is_empty() {
            self.traded_date.as_deref().unwrap_or("")
        } else {
            &self.date
        }
    }

    /// Parsed effective date; `None` when it can't be parsed.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_trade_date(self.effective_date())
    }
}

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%b %d, %Y", "%B %d, %Y"];

/// Parse the date formats seen in disclosure payloads.
pub fn parse_trade_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    // "YYYY-MM" (monthly series)
    if let Ok(d) = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}
