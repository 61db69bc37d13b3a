use anyhow::{bail, Result};
use trade_tracker_core::models::filter::{
    ActionFilter, ChartPeriod, FilterChange, HoldingsFilter, HoldingsSort, TradesFilter,
};
use trade_tracker_core::view::scheduler::UiEvent;

pub const HELP: &str = "\
commands:
  holdings <text>     search holdings by ticker (no text clears)
  sort <key>          weight-desc | weight-asc | ticker-asc
  trades <text>       search trades by ticker or action
  action <name>       show only one action, or `all`
  period <p>          1M | 3M | 6M | 1Y | All
  refresh             poll now
  quit";

/// Turns stdin lines into scheduler events.
///
/// Each filter change carries the view's whole filter state, so the reader
/// keeps its own copy of what it last sent.
#[derive(Debug, Default)]
pub struct CommandReader {
    holdings: HoldingsFilter,
    trades: TradesFilter,
}

impl CommandReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// `Ok(None)` for blank lines and `help`.
    pub fn parse(&mut self, line: &str) -> Result<Option<UiEvent>> {
        let line = line.trim();
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((c, rest)) => (c, rest.trim()),
            None => (line, ""),
        };

        let event = match command.to_lowercase().as_str() {
            "" | "help" | "?" => return Ok(None),
            "holdings" => {
                self.holdings.search = arg.to_string();
                UiEvent::FilterChanged(FilterChange::Holdings(self.holdings.clone()))
            }
            "sort" => {
                self.holdings.sort = arg.parse::<HoldingsSort>()?;
                UiEvent::FilterChanged(FilterChange::Holdings(self.holdings.clone()))
            }
            "trades" => {
                self.trades.search = arg.to_string();
                UiEvent::FilterChanged(FilterChange::Trades(self.trades.clone()))
            }
            "action" => {
                self.trades.action = arg.parse::<ActionFilter>()?;
                UiEvent::FilterChanged(FilterChange::Trades(self.trades.clone()))
            }
            "period" => UiEvent::FilterChanged(FilterChange::Performance(
                arg.parse::<ChartPeriod>()?,
            )),
            "refresh" | "r" => UiEvent::Refresh,
            "quit" | "exit" | "q" => UiEvent::Shutdown,
            other => bail!("Unknown command '{other}', type `help`"),
        };
        Ok(Some(event))
    }
}
