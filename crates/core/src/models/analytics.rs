use serde::{Deserialize, Serialize};

/// Portfolio-level figures derived from the holdings collection.
///
/// Never stored; recomputed from the holdings whenever it is asked for.
/// Values are unrounded; rounding happens at presentation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Currency code for all monetary values
    pub currency: String,

    /// Number of holdings folded into this summary
    pub holding_count: usize,

    /// Σ shares × current price
    pub total_market_value: f64,

    /// Σ shares × average cost
    pub total_cost_basis: f64,

    /// Σ shares × (current price − average cost)
    pub total_unrealized_pnl: f64,

    /// Percentage return: (total_unrealized_pnl / total_cost_basis) * 100
    pub total_return_pct: f64,

    /// Per-holding breakdown, largest allocation first
    pub holdings: Vec<HoldingSummary>,
}

/// Summary of a single holding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingSummary {
    pub symbol: String,

    pub share_count: u32,

    /// shares × current price
    pub market_value: f64,

    /// shares × average cost
    pub cost_basis: f64,

    /// market_value − cost_basis
    pub unrealized_pnl: f64,

    /// Percentage return for this holding
    pub return_pct: f64,

    /// Allocation percentage (this holding's value / total market value × 100)
    pub allocation_pct: f64,
}
