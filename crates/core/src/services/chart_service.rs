use crate::models::chart::{ChartView, ChartWindow, TrendDirection, TrendSparkline};
use crate::models::holding::Holding;

/// Derives chart-ready views from a holding's series.
///
/// Windowing is a view-time projection: the holding's own series are
/// only read, never trimmed. Short or empty series and flat price ranges
/// are handled by policy (return what exists, zero range), never by error.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Cut the last `window.point_count()` detail points (or the whole series
    /// if it is shorter) and compute the price bounds over exactly that slice.
    pub fn derive_chart_view(&self, holding: &Holding, window: ChartWindow) -> ChartView {
        let series = &holding.detail_series;
        let start = series.len().saturating_sub(window.point_count());
        let points = series[start..].to_vec();

        let (price_min, price_max) = if points.is_empty() {
            (0.0, 0.0)
        } else {
            points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.low), hi.max(p.high))
            })
        };

        let change_pct = match (points.first(), points.last()) {
            (Some(first), Some(last)) => percent_change(first.close, last.close),
            _ => 0.0,
        };

        ChartView {
            symbol: holding.symbol.clone(),
            window,
            points,
            price_max,
            price_min,
            price_range: (price_max - price_min).max(0.0),
            current_price: holding.current_price,
            change_pct,
        }
    }

    /// Sparkline of the coarse trend series. `None` when there is nothing to draw.
    pub fn trend_sparkline(&self, holding: &Holding) -> Option<TrendSparkline> {
        let values = &holding.trend_series;
        let first = *values.first()?;
        let last = *values.last()?;

        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let change_pct = percent_change(first, last);
        let direction = if change_pct > 0.0 {
            TrendDirection::Up
        } else if change_pct < 0.0 {
            TrendDirection::Down
        } else {
            TrendDirection::Flat
        };

        Some(TrendSparkline {
            values: values.clone(),
            min,
            max,
            change_pct,
            direction,
        })
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}

fn percent_change(from: f64, to: f64) -> f64 {
    if from != 0.0 {
        (to - from) / from * 100.0
    } else {
        0.0
    }
}
