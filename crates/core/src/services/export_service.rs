use crate::errors::CoreError;
use crate::models::holding::Holding;
use crate::models::trade::Trade;

/// CSV export of the current snapshot's collections.
///
/// Every field is quoted and embedded quotes are doubled, so commas inside
/// amount brackets ("$1,001 - $15,000") survive.
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Columns: Ticker, Last Price, Price Display, Weight, Weight Display
    pub fn holdings_csv(&self, holdings: &[Holding]) -> Result<String, CoreError> {
        if holdings.is_empty() {
            return Err(CoreError::Export("No holdings data available".into()));
        }
        let mut csv = String::from("Ticker,Last Price,Price Display,Weight,Weight Display\n");
        for h in holdings {
            push_row(
                &mut csv,
                &[
                    &h.ticker,
                    &h.last_price.to_string(),
                    h.price_display.as_deref().unwrap_or(""),
                    &h.weight.to_string(),
                    h.weight_display.as_deref().unwrap_or(""),
                ],
            );
        }
        Ok(csv)
    }

    /// Columns: Date, Ticker, Action, Amount, Type, Filed Date
    pub fn trades_csv(&self, trades: &[Trade]) -> Result<String, CoreError> {
        if trades.is_empty() {
            return Err(CoreError::Export("No trades data available".into()));
        }
        let mut csv = String::from("Date,Ticker,Action,Amount,Type,Filed Date\n");
        for t in trades {
            push_row(
                &mut csv,
                &[
                    t.effective_date(),
                    &t.ticker,
                    t.action.as_str(),
                    &t.amount,
                    t.trade_type.as_str(),
                    &t.filed_date,
                ],
            );
        }
        Ok(csv)
    }

    /// Suggested download name, e.g. `pelosi-trades-2025-01-16.csv`.
    pub fn file_name(&self, kind: &str, date: chrono::NaiveDate) -> String {
        format!("pelosi-{kind}-{}.csv", date.format("%Y-%m-%d"))
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}

fn push_row(csv: &mut String, fields: &[&str]) {
    let quoted: Vec<String> = fields
        .iter()
        .map(|f| format!("\"{}\"", f.replace('"', "\"\"")))
        .collect();
    csv.push_str(&quoted.join(","));
    csv.push('\n');
}
