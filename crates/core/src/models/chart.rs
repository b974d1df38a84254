use serde::{Deserialize, Serialize};

use super::price::PricePoint;
use crate::errors::CoreError;

/// Lookback window applied to a holding's detail series for charting.
///
/// Each window keeps a fixed number of the most recent weekly points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartWindow {
    /// Last 13 weekly points
    #[serde(rename = "3M")]
    ThreeMonths,
    /// Last 26 weekly points
    #[serde(rename = "6M")]
    SixMonths,
    /// Last 52 weekly points (the full generated year)
    #[serde(rename = "1Y")]
    #[default]
    OneYear,
}

impl ChartWindow {
    /// All windows, narrowest first (button order in the chart header).
    pub const ALL: [ChartWindow; 3] = [
        ChartWindow::ThreeMonths,
        ChartWindow::SixMonths,
        ChartWindow::OneYear,
    ];

    /// Number of most-recent detail points this window retains.
    pub fn point_count(self) -> usize {
        match self {
            ChartWindow::ThreeMonths => 13,
            ChartWindow::SixMonths => 26,
            ChartWindow::OneYear => 52,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChartWindow::ThreeMonths => "3M",
            ChartWindow::SixMonths => "6M",
            ChartWindow::OneYear => "1Y",
        }
    }
}

impl std::fmt::Display for ChartWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for ChartWindow {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        ChartWindow::ALL
            .into_iter()
            .find(|w| w.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| CoreError::InvalidWindow(s.to_string()))
    }
}

/// A point in a caller-supplied viewport. `y` grows downward, so the
/// highest price maps to `y = 0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// Chart-ready slice of a holding's detail series.
///
/// The core computes all the numbers; the chart collaborator only renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartView {
    /// Symbol of the holding this view was derived from
    pub symbol: String,

    /// Window the slice was cut with
    pub window: ChartWindow,

    /// The last `min(window.point_count(), series length)` points, oldest first
    pub points: Vec<PricePoint>,

    /// Max `high` over `points` (0 when `points` is empty)
    pub price_max: f64,

    /// Min `low` over `points` (0 when `points` is empty)
    pub price_min: f64,

    /// `price_max - price_min`, never negative, may be 0
    pub price_range: f64,

    /// The holding's current price (shown in the chart stats row)
    pub current_price: f64,

    /// Close-to-close change over the window, in percent
    pub change_pct: f64,
}

impl ChartView {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first_date(&self) -> Option<chrono::NaiveDate> {
        self.points.first().map(|p| p.date)
    }

    pub fn last_date(&self) -> Option<chrono::NaiveDate> {
        self.points.last().map(|p| p.date)
    }

    /// Project the closes into a `width` × `height` viewport.
    ///
    /// A flat window (zero range) is drawn as a line through the vertical middle.
    pub fn plot_closes(&self, width: f64, height: f64) -> Vec<PlotPoint> {
        let closes: Vec<f64> = self.points.iter().map(|p| p.close).collect();
        project(&closes, self.price_max, self.price_range, width, height)
    }
}

/// Direction of a holding's trend series, first sample to last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrendDirection::Up => write!(f, "Up"),
            TrendDirection::Down => write!(f, "Down"),
            TrendDirection::Flat => write!(f, "Flat"),
        }
    }
}

/// Compact sparkline of a holding's coarse trend series (grid "Trend" column).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSparkline {
    pub values: Vec<f64>,
    pub min: f64,
    pub max: f64,

    /// (last − first) / first × 100
    pub change_pct: f64,

    pub direction: TrendDirection,
}

impl TrendSparkline {
    /// Project the values into a `width` × `height` viewport.
    pub fn plot(&self, width: f64, height: f64) -> Vec<PlotPoint> {
        project(&self.values, self.max, self.max - self.min, width, height)
    }
}

fn project(values: &[f64], max: f64, range: f64, width: f64, height: f64) -> Vec<PlotPoint> {
    let last_index = values.len().saturating_sub(1);
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = if last_index == 0 {
                width / 2.0
            } else {
                i as f64 / last_index as f64 * width
            };
            let y = if range > 0.0 {
                (max - value) / range * height
            } else {
                height / 2.0
            };
            PlotPoint { x, y }
        })
        .collect()
}
