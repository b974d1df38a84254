use serde::{Deserialize, Serialize};

use super::chart::ChartWindow;

/// Events emitted by the presentation collaborators.
///
/// The grid reports row activation by symbol; the chart reports window
/// button presses. Nothing else mutates dashboard state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardEvent {
    /// The viewer selected the row keyed by `symbol`
    RowActivated { symbol: String },

    /// The viewer cleared the row selection
    RowDeactivated,

    /// The viewer picked a different chart lookback
    WindowChanged { window: ChartWindow },
}

impl DashboardEvent {
    pub fn row_activated(symbol: impl Into<String>) -> Self {
        DashboardEvent::RowActivated {
            symbol: symbol.into(),
        }
    }

    pub fn window_changed(window: ChartWindow) -> Self {
        DashboardEvent::WindowChanged { window }
    }
}

impl std::fmt::Display for DashboardEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashboardEvent::RowActivated { symbol } => write!(f, "RowActivated({symbol})"),
            DashboardEvent::RowDeactivated => write!(f, "RowDeactivated"),
            DashboardEvent::WindowChanged { window } => write!(f, "WindowChanged({window})"),
        }
    }
}
