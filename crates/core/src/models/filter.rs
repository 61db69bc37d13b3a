use std::str::FromStr;

use crate::errors::CoreError;

use super::trade::TradeAction;

/// Ordering applied to the holdings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoldingsSort {
    /// Largest weight first (default)
    #[default]
    WeightDesc,
    /// Smallest weight first
    WeightAsc,
    /// Alphabetical by ticker
    TickerAsc,
}

impl HoldingsSort {
    pub fn key(&self) -> &'static str {
        match self {
            HoldingsSort::WeightDesc => "weight-desc",
            HoldingsSort::WeightAsc => "weight-asc",
            HoldingsSort::TickerAsc => "ticker-asc",
        }
    }
}

impl FromStr for HoldingsSort {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "weight-desc" => Ok(HoldingsSort::WeightDesc),
            "weight-asc" => Ok(HoldingsSort::WeightAsc),
            "ticker-asc" => Ok(HoldingsSort::TickerAsc),
            other => Err(CoreError::Validation(format!(
                "Unknown holdings sort '{other}': expected weight-desc, weight-asc or ticker-asc"
            ))),
        }
    }
}

/// Exact-match category filter for the trades view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActionFilter {
    #[default]
    All,
    Only(TradeAction),
}

impl ActionFilter {
    pub fn matches(&self, action: &TradeAction) -> bool {
        match self {
            ActionFilter::All => true,
            ActionFilter::Only(wanted) => wanted == action,
        }
    }
}

impl FromStr for ActionFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Ok(ActionFilter::All)
        } else {
            Ok(ActionFilter::Only(TradeAction::from(s)))
        }
    }
}

/// Filter state of the holdings view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HoldingsFilter {
    pub search: String,
    pub sort: HoldingsSort,
}

impl HoldingsFilter {
    pub fn new(search: impl Into<String>, sort: HoldingsSort) -> Self {
        Self {
            search: search.into(),
            sort,
        }
    }
}

/// Filter state of the trades view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TradesFilter {
    pub search: String,
    pub action: ActionFilter,
}

impl TradesFilter {
    pub fn new(search: impl Into<String>, action: ActionFilter) -> Self {
        Self {
            search: search.into(),
            action,
        }
    }
}

/// Window of the performance chart, counted in monthly points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartPeriod {
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    #[default]
    All,
}

impl ChartPeriod {
    /// Number of trailing points to show; `None` means everything.
    /// One month still shows two points so a line can be drawn.
    pub fn trailing_points(&self) -> Option<usize> {
        match self {
            ChartPeriod::OneMonth => Some(2),
            ChartPeriod::ThreeMonths => Some(3),
            ChartPeriod::SixMonths => Some(6),
            ChartPeriod::OneYear => Some(12),
            ChartPeriod::All => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            ChartPeriod::OneMonth => "1M",
            ChartPeriod::ThreeMonths => "3M",
            ChartPeriod::SixMonths => "6M",
            ChartPeriod::OneYear => "1Y",
            ChartPeriod::All => "All",
        }
    }
}

impl FromStr for ChartPeriod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "1M" => Ok(ChartPeriod::OneMonth),
            "3M" => Ok(ChartPeriod::ThreeMonths),
            "6M" => Ok(ChartPeriod::SixMonths),
            "1Y" => Ok(ChartPeriod::OneYear),
            "ALL" => Ok(ChartPeriod::All),
            other => Err(CoreError::Validation(format!(
                "Unknown chart period '{other}': expected 1M, 3M, 6M, 1Y or All"
            ))),
        }
    }
}

/// Views whose content is driven by user filter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Holdings,
    Trades,
    Performance,
}

/// A user-driven change of one view's filter state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    Holdings(HoldingsFilter),
    Trades(TradesFilter),
    Performance(ChartPeriod),
}

impl FilterChange {
    pub fn view(&self) -> View {
        match self {
            FilterChange::Holdings(_) => View::Holdings,
            FilterChange::Trades(_) => View::Trades,
            FilterChange::Performance(_) => View::Performance,
        }
    }
}
