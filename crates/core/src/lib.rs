pub mod errors;
pub mod models;
pub mod services;
pub mod views;

use log::{debug, info, warn};
use models::{
    analytics::PortfolioSummary,
    chart::{ChartView, ChartWindow, TrendSparkline},
    event::DashboardEvent,
    holding::{Holding, TickerInfo},
    portfolio::Portfolio,
    selection::SelectionState,
    settings::Settings,
};
use rand::Rng;
use services::{
    analytics_service::AnalyticsService, chart_service::ChartService,
    generator_service::{default_tickers, PriceSeriesGenerator},
    portfolio_service::PortfolioService,
};
use views::traits::DashboardView;

use errors::CoreError;

/// Main entry point for the portfolio dashboard core library.
/// Holds the generated holdings, the selection state, and the services
/// that derive everything a renderer shows.
///
/// Holdings are fixed once built. The only mutations are selection and
/// chart-window changes, both driven by presentation events.
#[must_use]
pub struct PortfolioDashboard {
    portfolio: Portfolio,
    selection: SelectionState,
    portfolio_service: PortfolioService,
    analytics_service: AnalyticsService,
    chart_service: ChartService,
}

impl std::fmt::Debug for PortfolioDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioDashboard")
            .field("holdings", &self.portfolio.holdings.len())
            .field("currency", &self.portfolio.settings.currency)
            .field("selection", &self.selection)
            .finish()
    }
}

impl PortfolioDashboard {
    /// Generate the default ticker universe with default settings (unseeded).
    pub fn create_default() -> Result<Self, CoreError> {
        Self::with_settings(Settings::default())
    }

    /// Generate the default ticker universe with custom settings.
    pub fn with_settings(settings: Settings) -> Result<Self, CoreError> {
        Self::with_tickers(&default_tickers(), settings)
    }

    /// Generate holdings for `tickers`. Uses `settings.generator.seed` when
    /// set, otherwise OS entropy.
    pub fn with_tickers(tickers: &[TickerInfo], settings: Settings) -> Result<Self, CoreError> {
        let mut rng = PriceSeriesGenerator::new(settings.generator.clone())?.rng();
        Self::with_rng(tickers, settings, &mut rng)
    }

    /// Generate holdings for `tickers`, drawing from a caller-supplied random source.
    pub fn with_rng<R: Rng>(
        tickers: &[TickerInfo],
        settings: Settings,
        rng: &mut R,
    ) -> Result<Self, CoreError> {
        let portfolio_service = PortfolioService::new();
        let portfolio = portfolio_service.build_portfolio(tickers, settings, rng)?;
        Ok(Self::build(portfolio))
    }

    /// Wrap an existing portfolio (e.g., hand-built holdings).
    /// Every holding must pass [`Holding::validate`] and symbols must be unique.
    pub fn from_portfolio(portfolio: Portfolio) -> Result<Self, CoreError> {
        portfolio.settings.validate()?;
        for holding in &portfolio.holdings {
            holding.validate()?;
        }
        let tickers: Vec<TickerInfo> = portfolio
            .holdings
            .iter()
            .map(|h| TickerInfo::new(h.symbol.clone(), h.display_name.clone()))
            .collect();
        PortfolioService::new().validate_tickers(&tickers)?;
        Ok(Self::build(portfolio))
    }

    // ── Holdings & Summary ──────────────────────────────────────────

    #[must_use]
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.portfolio.settings
    }

    /// Holdings in generation order.
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.portfolio.holdings
    }

    /// Get a holding by symbol (case-insensitive).
    #[must_use]
    pub fn holding(&self, symbol: &str) -> Option<&Holding> {
        self.portfolio_service.find_holding(&self.portfolio, symbol)
    }

    #[must_use]
    pub fn total_market_value(&self) -> f64 {
        self.analytics_service
            .total_market_value(&self.portfolio.holdings)
    }

    #[must_use]
    pub fn total_unrealized_pnl(&self) -> f64 {
        self.analytics_service
            .total_unrealized_pnl(&self.portfolio.holdings)
    }

    /// Totals plus per-holding breakdown, recomputed on every call.
    #[must_use]
    pub fn summary(&self) -> PortfolioSummary {
        self.analytics_service
            .get_portfolio_summary(&self.portfolio.holdings, &self.portfolio.settings.currency)
    }

    /// Sparkline for a row's trend column. `None` for unknown symbols or empty series.
    #[must_use]
    pub fn trend_sparkline(&self, symbol: &str) -> Option<TrendSparkline> {
        self.holding(symbol)
            .and_then(|h| self.chart_service.trend_sparkline(h))
    }

    // ── Selection & Chart ───────────────────────────────────────────

    #[must_use]
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Select the holding keyed by `symbol`, or clear the selection with `None`.
    ///
    /// An unknown symbol is rejected and the current selection is kept.
    pub fn select(&mut self, symbol: Option<&str>) -> Result<(), CoreError> {
        let Some(symbol) = symbol else {
            self.clear_selection();
            return Ok(());
        };

        let holding = self
            .portfolio_service
            .find_holding(&self.portfolio, symbol)
            .ok_or_else(|| {
                warn!("Ignoring selection of unknown symbol {symbol}");
                CoreError::HoldingNotFound(symbol.to_string())
            })?;

        self.selection.select(Some(holding));
        debug!("Selected {}", holding.symbol);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        if self.selection.has_selection() {
            debug!("Selection cleared");
        }
        self.selection.clear();
    }

    /// Change the chart window. The selected holding's series is untouched.
    pub fn set_window(&mut self, window: ChartWindow) {
        debug!("Chart window {} -> {}", self.selection.window, window);
        self.selection.set_window(window);
    }

    #[must_use]
    pub fn selected_holding(&self) -> Option<&Holding> {
        self.selection
            .selected
            .as_deref()
            .and_then(|symbol| self.holding(symbol))
    }

    /// Windowed chart of the selected holding; `None` when nothing is selected.
    #[must_use]
    pub fn chart_view(&self) -> Option<ChartView> {
        self.selected_holding()
            .map(|h| self.chart_service.derive_chart_view(h, self.selection.window))
    }

    /// Apply a presentation event and return the chart view it leads to.
    pub fn handle_event(&mut self, event: DashboardEvent) -> Result<Option<ChartView>, CoreError> {
        debug!("Handling {event}");
        match event {
            DashboardEvent::RowActivated { symbol } => self.select(Some(symbol.as_str()))?,
            DashboardEvent::RowDeactivated => self.clear_selection(),
            DashboardEvent::WindowChanged { window } => self.set_window(window),
        }
        Ok(self.chart_view())
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(portfolio: Portfolio) -> Self {
        info!(
            "Portfolio dashboard ready: {} holdings in {}",
            portfolio.holdings.len(),
            portfolio.settings.currency
        );

        Self {
            portfolio,
            selection: SelectionState::new(),
            portfolio_service: PortfolioService::new(),
            analytics_service: AnalyticsService::new(),
            chart_service: ChartService::new(),
        }
    }
}

impl DashboardView for PortfolioDashboard {
    fn holdings(&self) -> &[Holding] {
        PortfolioDashboard::holdings(self)
    }

    fn currency(&self) -> &str {
        &self.portfolio.settings.currency
    }

    fn summary(&self) -> PortfolioSummary {
        PortfolioDashboard::summary(self)
    }

    fn selection(&self) -> &SelectionState {
        PortfolioDashboard::selection(self)
    }

    fn chart_view(&self) -> Option<ChartView> {
        PortfolioDashboard::chart_view(self)
    }

    fn trend_sparkline(&self, symbol: &str) -> Option<TrendSparkline> {
        PortfolioDashboard::trend_sparkline(self, symbol)
    }

    fn holding(&self, symbol: &str) -> Option<&Holding> {
        PortfolioDashboard::holding(self, symbol)
    }
}
