use crate::models::ancillary::Quote;
use crate::models::fragment::{
    HoldingRow, IndexComparisonSummary, SectorRow, StockDetailView, SummaryCard, TopHolding,
    TradeCard,
};

/// Independently updated areas of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Summary,
    Holdings,
    TopHoldings,
    Trades,
    Sectors,
    Performance,
    Quote,
    IndexComparison,
    StockDetail,
}

/// Paints view fragments.
///
/// Every `render_*` call carries the complete content of its region and
/// replaces whatever the region showed before, placeholder and fallback
/// included. Calls for one region never touch another.
pub trait ViewRenderer {
    /// Transient loading state sized for `rows` entries.
    fn show_placeholder(&mut self, region: Region, rows: usize);

    fn render_summary(&mut self, card: &SummaryCard);

    fn render_holdings(&mut self, rows: &[HoldingRow]);

    fn render_top_holdings(&mut self, rows: &[TopHolding]);

    fn render_trades(&mut self, cards: &[TradeCard]);

    fn render_sectors(&mut self, rows: &[SectorRow]);

    fn render_quote(&mut self, quote: &Quote);

    fn render_index_comparison(&mut self, summary: &IndexComparisonSummary);

    fn render_stock_detail(&mut self, view: &StockDetailView);

    /// Static message shown in place of a region that could not be loaded.
    fn show_fallback(&mut self, region: Region, message: &str);

    /// "Updated 12s ago" indicator; ignored by default.
    fn render_freshness(&mut self, _label: &str) {}
}
