use serde::{Deserialize, Serialize};

use super::chart::ChartWindow;
use super::holding::Holding;

/// Which single holding is active for detail viewing, and the chart window.
///
/// The holding is referenced by symbol only; the portfolio owns the data.
/// Starts with nothing selected and the widest window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    /// Symbol of the selected holding, if any
    pub selected: Option<String>,

    /// Lookback window for the detail chart
    pub window: ChartWindow,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the active holding. Selecting replaces any previous selection.
    pub fn select(&mut self, holding: Option<&Holding>) {
        self.selected = holding.map(|h| h.symbol.clone());
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Change the chart window. The selection itself is left untouched.
    pub fn set_window(&mut self, window: ChartWindow) {
        self.window = window;
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// Case-insensitive check against the selected symbol.
    pub fn is_selected(&self, symbol: &str) -> bool {
        self.selected
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case(symbol.trim()))
    }
}
