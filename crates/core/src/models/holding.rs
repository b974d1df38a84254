use serde::{Deserialize, Serialize};

use super::price::{round2, PricePoint};
use crate::errors::CoreError;

/// A ticker to generate a holding for: symbol + display name.
///
/// The symbol is the holding's identity key (grid row id, selection key),
/// so it is always stored uppercased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TickerInfo {
    /// Ticker symbol, uppercased (e.g., "AAPL", "MSFT")
    pub symbol: String,

    /// Human-readable name (e.g., "Apple Inc.")
    pub display_name: String,
}

impl TickerInfo {
    pub fn new(symbol: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into().trim().to_uppercase(),
            display_name: display_name.into(),
        }
    }
}

/// One portfolio position with its synthetic price history.
///
/// Generated once per session and never mutated afterwards. Fields are
/// public for read access by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol, uppercased. Unique within a portfolio.
    pub symbol: String,

    /// Human-readable company name
    pub display_name: String,

    /// Number of shares held (always positive)
    pub share_count: u32,

    /// Average cost per share, rounded to cents
    pub average_cost: f64,

    /// Close of the last detail point, rounded to cents
    pub current_price: f64,

    /// Coarse (monthly) samples for the sparkline column
    pub trend_series: Vec<f64>,

    /// Fine-grained (weekly) OHLCV history, oldest first
    pub detail_series: Vec<PricePoint>,
}

impl Holding {
    /// Build a holding from already generated series.
    ///
    /// `current_price` is derived from the close of the last detail point.
    pub fn from_series(
        ticker: &TickerInfo,
        share_count: u32,
        average_cost: f64,
        trend_series: Vec<f64>,
        detail_series: Vec<PricePoint>,
    ) -> Result<Self, CoreError> {
        let current_price = detail_series.last().map_or(0.0, |p| round2(p.close));
        let holding = Self {
            symbol: ticker.symbol.clone(),
            display_name: ticker.display_name.clone(),
            share_count,
            average_cost: round2(average_cost),
            current_price,
            trend_series,
            detail_series,
        };
        holding.validate()?;
        Ok(holding)
    }

    /// Check the invariants every holding in a portfolio must satisfy.
    ///
    /// Cost and prices are checked after cent rounding, so a sub-cent value
    /// that rounds to zero is rejected.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.symbol.is_empty() || self.symbol != self.symbol.trim().to_uppercase() {
            return Err(CoreError::ValidationError(format!(
                "Holding symbol must be non-empty and uppercased, got '{}'",
                self.symbol
            )));
        }
        if self.share_count == 0 {
            return Err(CoreError::ValidationError(format!(
                "Share count for {} must be positive",
                self.symbol
            )));
        }
        if !self.average_cost.is_finite() || self.average_cost <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Average cost for {} must be positive, got {}",
                self.symbol, self.average_cost
            )));
        }
        let last = self.detail_series.last().ok_or_else(|| {
            CoreError::ValidationError(format!(
                "Detail series for {} must not be empty",
                self.symbol
            ))
        })?;
        if let Some(bad) = self.detail_series.iter().find(|p| !p.is_consistent()) {
            return Err(CoreError::ValidationError(format!(
                "Detail point of {} on {} is not a positive, ordered OHLC record",
                self.symbol, bad.date
            )));
        }
        if self.detail_series.windows(2).any(|w| w[0].date >= w[1].date) {
            return Err(CoreError::ValidationError(format!(
                "Detail series for {} must be in ascending date order",
                self.symbol
            )));
        }
        if self.current_price != round2(last.close) {
            return Err(CoreError::ValidationError(format!(
                "Current price of {} ({}) is not the last close rounded to cents ({})",
                self.symbol,
                self.current_price,
                round2(last.close)
            )));
        }
        if self.trend_series.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(CoreError::ValidationError(format!(
                "Trend series for {} must hold positive prices",
                self.symbol
            )));
        }
        Ok(())
    }

    /// shares × current price
    pub fn market_value(&self) -> f64 {
        f64::from(self.share_count) * self.current_price
    }

    /// shares × average cost
    pub fn cost_basis(&self) -> f64 {
        f64::from(self.share_count) * self.average_cost
    }

    /// shares × (current price − average cost)
    pub fn unrealized_pnl(&self) -> f64 {
        f64::from(self.share_count) * (self.current_price - self.average_cost)
    }

    /// Unrealized P&L as a percentage of cost basis (0 when there is no cost basis).
    pub fn unrealized_pnl_pct(&self) -> f64 {
        let basis = self.cost_basis();
        if basis > 0.0 {
            self.unrealized_pnl() / basis * 100.0
        } else {
            0.0
        }
    }

    pub fn latest_point(&self) -> Option<&PricePoint> {
        self.detail_series.last()
    }
}
