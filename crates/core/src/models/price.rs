use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One synthetic trading-period record (open/high/low/close/volume).
///
/// Invariant: `low <= open`, `low <= close`, `open <= high`, `close <= high`.
/// The generator guarantees this by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl PricePoint {
    /// True when every price is finite and positive and the OHLC ordering holds.
    pub fn is_consistent(&self) -> bool {
        let prices = [self.open, self.high, self.low, self.close];
        if prices.iter().any(|p| !p.is_finite() || *p <= 0.0) {
            return false;
        }
        self.low <= self.open.min(self.close) && self.high >= self.open.max(self.close)
    }

    /// Spread between the period's high and low.
    pub fn range(&self) -> f64 {
        self.high - self.low
    }
}

/// Smallest price that survives rounding to cents.
pub const MIN_PRICE: f64 = 0.01;

/// Round a price to 2 decimal places (cents).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
