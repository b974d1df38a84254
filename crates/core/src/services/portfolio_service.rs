use rand::Rng;
use std::collections::HashSet;

use crate::errors::CoreError;
use crate::models::holding::{Holding, TickerInfo};
use crate::models::portfolio::Portfolio;
use crate::models::settings::Settings;
use crate::services::generator_service::PriceSeriesGenerator;

/// Builds the session portfolio and answers lookups against it.
///
/// Pure business logic: no I/O. Randomness comes in from the caller.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Validate the ticker list, generate one holding per ticker and wrap
    /// the result together with the settings used.
    pub fn build_portfolio<R: Rng>(
        &self,
        tickers: &[TickerInfo],
        settings: Settings,
        rng: &mut R,
    ) -> Result<Portfolio, CoreError> {
        settings.validate()?;
        self.validate_tickers(tickers)?;
        let generator = PriceSeriesGenerator::new(settings.generator.clone())?;
        let holdings = generator.generate_with_rng(tickers, rng)?;
        Ok(Portfolio::new(holdings, settings))
    }

    /// Rules:
    /// - Symbols must be non-empty
    /// - Symbols must be unique (compared uppercased)
    pub fn validate_tickers(&self, tickers: &[TickerInfo]) -> Result<(), CoreError> {
        let mut seen = HashSet::new();
        for ticker in tickers {
            let symbol = ticker.symbol.trim().to_uppercase();
            if symbol.is_empty() {
                return Err(CoreError::ValidationError(format!(
                    "Ticker '{}' has an empty symbol",
                    ticker.display_name
                )));
            }
            if !seen.insert(symbol.clone()) {
                return Err(CoreError::DuplicateSymbol(symbol));
            }
        }
        Ok(())
    }

    /// Find a holding by symbol (case-insensitive).
    pub fn find_holding<'a>(&self, portfolio: &'a Portfolio, symbol: &str) -> Option<&'a Holding> {
        let symbol = symbol.trim();
        portfolio
            .holdings
            .iter()
            .find(|h| h.symbol.eq_ignore_ascii_case(symbol))
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
