use chrono::{Days, NaiveDate, Utc};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;

use crate::errors::CoreError;
use crate::models::holding::{Holding, TickerInfo};
use crate::models::price::{round2, PricePoint};
use crate::models::settings::GeneratorSettings;

/// The ticker universe shown when no custom list is supplied.
pub const DEFAULT_TICKERS: [(&str, &str); 10] = [
    ("AAPL", "Apple Inc."),
    ("GOOGL", "Alphabet Inc."),
    ("MSFT", "Microsoft Corp."),
    ("AMZN", "Amazon.com Inc."),
    ("TSLA", "Tesla Inc."),
    ("META", "Meta Platforms Inc."),
    ("NVDA", "NVIDIA Corp."),
    ("NFLX", "Netflix Inc."),
    ("ADBE", "Adobe Inc."),
    ("CRM", "Salesforce Inc."),
];

pub fn default_tickers() -> Vec<TickerInfo> {
    DEFAULT_TICKERS
        .iter()
        .map(|(symbol, name)| TickerInfo::new(*symbol, *name))
        .collect()
}

/// Produces synthetic, internally consistent price histories.
///
/// Model per holding:
/// - a base price and a mildly upward-biased end-of-period target
/// - linear trend from base to target, one full seasonal sine cycle over
///   the series, and bounded uniform noise
/// - OHLC derived from each baseline so that `low <= open, close <= high`
///   holds by construction
///
/// The detail (weekly) and trend (monthly) series use independent draws
/// from the same model; the trend series is not a resample of the detail one.
///
/// Randomness is injected through any [`rand::Rng`], so tests can pass a
/// seeded generator and get reproducible output.
pub struct PriceSeriesGenerator {
    settings: GeneratorSettings,
}

impl PriceSeriesGenerator {
    pub fn new(settings: GeneratorSettings) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// The random source `generate` uses: seeded when `settings.seed` is set,
    /// otherwise seeded from OS entropy.
    pub fn rng(&self) -> StdRng {
        match self.settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Date of the most recent detail point.
    pub fn as_of(&self) -> NaiveDate {
        self.settings
            .as_of
            .unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Generate one holding per ticker, in input order, with the configured random source.
    pub fn generate(&self, tickers: &[TickerInfo]) -> Result<Vec<Holding>, CoreError> {
        let mut rng = self.rng();
        self.generate_with_rng(tickers, &mut rng)
    }

    /// Generate one holding per ticker, in input order, drawing from `rng`.
    pub fn generate_with_rng<R: Rng>(
        &self,
        tickers: &[TickerInfo],
        rng: &mut R,
    ) -> Result<Vec<Holding>, CoreError> {
        let as_of = self.as_of();
        tickers
            .iter()
            .map(|ticker| self.generate_holding(ticker, as_of, rng))
            .collect()
    }

    /// Generate a single holding whose last detail point falls on `as_of`.
    pub fn generate_holding<R: Rng>(
        &self,
        ticker: &TickerInfo,
        as_of: NaiveDate,
        rng: &mut R,
    ) -> Result<Holding, CoreError> {
        let s = &self.settings;
        let base = rng.gen_range(s.base_price_min..s.base_price_max);
        let target = base * (1.0 + rng.gen_range(s.drift_min..s.drift_max));
        let share_count = rng.gen_range(s.shares_min..=s.shares_max);

        let detail_series = self.generate_detail_series(base, target, as_of, rng)?;
        let trend_series = self.generate_trend_series(base, target, rng);

        debug!(
            "Generated {}: base {:.2}, target {:.2}, {} shares, {} detail / {} trend points",
            ticker.symbol,
            base,
            target,
            share_count,
            detail_series.len(),
            trend_series.len()
        );

        Holding::from_series(ticker, share_count, base, trend_series, detail_series)
    }

    /// Evenly spaced OHLCV points, oldest first, the last one dated `as_of`.
    pub fn generate_detail_series<R: Rng>(
        &self,
        base: f64,
        target: f64,
        as_of: NaiveDate,
        rng: &mut R,
    ) -> Result<Vec<PricePoint>, CoreError> {
        let s = &self.settings;
        let n = s.detail_points;
        let mut points = Vec::with_capacity(n);

        for i in 0..n {
            let offset = (n - 1 - i) as u64 * u64::from(s.detail_interval_days);
            let date = as_of.checked_sub_days(Days::new(offset)).ok_or_else(|| {
                CoreError::InvalidSettings(format!(
                    "detail series reaches before the earliest representable date ({offset} days back)"
                ))
            })?;

            let baseline = self.baseline(base, target, i, n, rng);

            // Rounding is monotone, so the ordering built here survives it.
            let open = baseline + base * rng.gen_range(-s.open_jitter_pct..=s.open_jitter_pct);
            let high = round2(open + base * rng.gen_range(0.0..=s.wick_pct));
            let low = round2(open - base * rng.gen_range(0.0..=s.wick_pct));
            let open = round2(open);
            let close = round2(low + rng.gen_range(0.0..=1.0) * (high - low));
            let volume = rng.gen_range(s.volume_min..=s.volume_max);

            points.push(PricePoint {
                date,
                open,
                high,
                low,
                close,
                volume,
            });
        }

        Ok(points)
    }

    /// Coarse closing-price-like samples for the sparkline, from fresh draws.
    pub fn generate_trend_series<R: Rng>(&self, base: f64, target: f64, rng: &mut R) -> Vec<f64> {
        let n = self.settings.trend_points;
        (0..n)
            .map(|i| round2(self.baseline(base, target, i, n, rng)))
            .collect()
    }

    /// Trend + seasonality + noise at index `i` of an `n`-point series.
    fn baseline<R: Rng>(&self, base: f64, target: f64, i: usize, n: usize, rng: &mut R) -> f64 {
        let s = &self.settings;
        let t = if n > 1 {
            i as f64 / (n - 1) as f64
        } else {
            1.0
        };
        let trend = base + (target - base) * t;
        let seasonal = base * s.seasonal_amplitude_pct * (2.0 * PI * i as f64 / n as f64).sin();
        let noise = base * rng.gen_range(-s.noise_pct..=s.noise_pct);
        trend + seasonal + noise
    }
}
