use crate::models::analytics::PortfolioSummary;
use crate::models::chart::{ChartView, TrendSparkline};
use crate::models::holding::Holding;
use crate::models::selection::SelectionState;

use super::snapshot::DashboardSnapshot;

/// Read-only data contract between the core and whatever renders it.
///
/// A web grid, a native table or a terminal UI binds to this trait and
/// never reaches into the core's internals. Every value is a raw number or
/// plain data; currency and percentage formatting stay on the UI side.
pub trait DashboardView {
    /// Holdings in row order. Rows are keyed by `Holding::symbol`.
    fn holdings(&self) -> &[Holding];

    /// Currency code attached to monetary values.
    fn currency(&self) -> &str;

    /// Portfolio totals and per-holding breakdown.
    fn summary(&self) -> PortfolioSummary;

    /// Current selection and chart window.
    fn selection(&self) -> &SelectionState;

    /// Windowed chart of the selected holding, or `None` for the placeholder state.
    fn chart_view(&self) -> Option<ChartView>;

    /// Sparkline for one row's trend column.
    fn trend_sparkline(&self, symbol: &str) -> Option<TrendSparkline>;

    /// Case-insensitive lookup by symbol.
    fn holding(&self, symbol: &str) -> Option<&Holding> {
        let symbol = symbol.trim();
        self.holdings()
            .iter()
            .find(|h| h.symbol.eq_ignore_ascii_case(symbol))
    }

    /// Everything a renderer needs in one serializable value.
    fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot::from_view(self)
    }
}
