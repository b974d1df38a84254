use crate::models::analytics::{HoldingSummary, PortfolioSummary};
use crate::models::holding::Holding;

/// Folds the holdings collection into portfolio figures.
///
/// Pure functions of the input slice: no caching, no rounding. At tens of
/// holdings a full recomputation is cheaper than tracking changes.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Σ shares × current price. Empty ⇒ 0.
    pub fn total_market_value(&self, holdings: &[Holding]) -> f64 {
        holdings.iter().map(Holding::market_value).sum()
    }

    /// Σ shares × (current price − average cost). Empty ⇒ 0.
    pub fn total_unrealized_pnl(&self, holdings: &[Holding]) -> f64 {
        holdings.iter().map(Holding::unrealized_pnl).sum()
    }

    /// Σ shares × average cost. Empty ⇒ 0.
    pub fn total_cost_basis(&self, holdings: &[Holding]) -> f64 {
        holdings.iter().map(Holding::cost_basis).sum()
    }

    /// Build the full summary: totals, overall return and per-holding allocation.
    pub fn get_portfolio_summary(&self, holdings: &[Holding], currency: &str) -> PortfolioSummary {
        let total_market_value = self.total_market_value(holdings);
        let total_cost_basis = self.total_cost_basis(holdings);
        let total_unrealized_pnl = self.total_unrealized_pnl(holdings);

        let mut holding_summaries: Vec<HoldingSummary> = holdings
            .iter()
            .map(|h| {
                let market_value = h.market_value();
                HoldingSummary {
                    symbol: h.symbol.clone(),
                    share_count: h.share_count,
                    market_value,
                    cost_basis: h.cost_basis(),
                    unrealized_pnl: h.unrealized_pnl(),
                    return_pct: h.unrealized_pnl_pct(),
                    allocation_pct: if total_market_value > 0.0 {
                        market_value / total_market_value * 100.0
                    } else {
                        0.0
                    },
                }
            })
            .collect();

        // Largest allocation first; symbol keeps ties deterministic
        holding_summaries.sort_by(|a, b| {
            b.allocation_pct
                .partial_cmp(&a.allocation_pct)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.symbol.cmp(&b.symbol))
        });

        let total_return_pct = if total_cost_basis > 0.0 {
            total_unrealized_pnl / total_cost_basis * 100.0
        } else {
            0.0
        };

        PortfolioSummary {
            currency: currency.to_string(),
            holding_count: holdings.len(),
            total_market_value,
            total_cost_basis,
            total_unrealized_pnl,
            total_return_pct,
            holdings: holding_summaries,
        }
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
