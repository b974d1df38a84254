use serde::{Deserialize, Serialize};

use super::holding::Holding;
use super::settings::Settings;

/// The session's data container: the generated holdings and the settings
/// they were generated with.
///
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Holdings in generation (input) order
    pub holdings: Vec<Holding>,

    /// Settings used for generation (currency, model parameters)
    pub settings: Settings,
}

impl Portfolio {
    pub fn new(holdings: Vec<Holding>, settings: Settings) -> Self {
        Self { holdings, settings }
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Symbols in row order.
    pub fn symbols(&self) -> Vec<&str> {
        self.holdings.iter().map(|h| h.symbol.as_str()).collect()
    }
}
