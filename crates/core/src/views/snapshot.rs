use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::analytics::PortfolioSummary;
use crate::models::chart::{ChartView, TrendSparkline};
use crate::models::holding::Holding;
use crate::models::selection::SelectionState;

use super::traits::DashboardView;

/// Text shown by the chart collaborator while no holding is selected.
pub const PLACEHOLDER_MESSAGE: &str = "Select a ticker to see the detailed price history";

/// One grid row: the holding plus its precomputed sparkline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingRow {
    pub holding: Holding,

    /// `None` renders as a "No data" cell
    pub sparkline: Option<TrendSparkline>,

    pub market_value: f64,
    pub unrealized_pnl: f64,
}

/// Serializable picture of the dashboard for a renderer.
///
/// Exactly one of `chart` / `placeholder` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub currency: String,
    pub rows: Vec<HoldingRow>,
    pub summary: PortfolioSummary,
    pub selection: SelectionState,
    pub chart: Option<ChartView>,
    pub placeholder: Option<String>,
}

impl DashboardSnapshot {
    pub fn from_view<V: DashboardView + ?Sized>(view: &V) -> Self {
        let rows = view
            .holdings()
            .iter()
            .map(|h| HoldingRow {
                sparkline: view.trend_sparkline(&h.symbol),
                market_value: h.market_value(),
                unrealized_pnl: h.unrealized_pnl(),
                holding: h.clone(),
            })
            .collect();

        let chart = view.chart_view();
        let placeholder = match chart {
            Some(_) => None,
            None => Some(PLACEHOLDER_MESSAGE.to_string()),
        };

        Self {
            currency: view.currency().to_string(),
            rows,
            summary: view.summary(),
            selection: view.selection().clone(),
            chart,
            placeholder,
        }
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string(self).map_err(|e| CoreError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
