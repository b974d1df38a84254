use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::price::MIN_PRICE;
use crate::errors::CoreError;

/// Dashboard-level settings.
///
/// Every field has a default, so a partial JSON document is enough to
/// override a single knob (see [`Settings::from_json`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Currency code attached to all monetary values (e.g., "USD").
    /// Values stay raw numbers; formatting is up to the UI.
    pub currency: String,

    /// Shape of the synthetic price histories.
    pub generator: GeneratorSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            generator: GeneratorSettings::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON, filling missing fields with defaults, and validate.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self).map_err(|e| CoreError::Serialization(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        let currency = self.currency.trim();
        if currency.is_empty() || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CoreError::InvalidSettings(format!(
                "currency must be an alphabetic code, got '{}'",
                self.currency
            )));
        }
        self.generator.validate()
    }
}

/// Parameters of the synthetic price model.
///
/// Fractions (`*_pct`, drift) are relative to the holding's base price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Number of detail (OHLCV) points per holding
    pub detail_points: usize,

    /// Days between consecutive detail points
    pub detail_interval_days: u32,

    /// Number of coarse trend samples per holding
    pub trend_points: usize,

    /// Base price is drawn uniformly from `[base_price_min, base_price_max)`
    pub base_price_min: f64,
    pub base_price_max: f64,

    /// End-of-period target = base × (1 + U[drift_min, drift_max))
    pub drift_min: f64,
    pub drift_max: f64,

    /// Amplitude of the one-cycle seasonal sine
    pub seasonal_amplitude_pct: f64,

    /// Half-width of the uniform noise band
    pub noise_pct: f64,

    /// Half-width of the open-vs-baseline jitter
    pub open_jitter_pct: f64,

    /// Maximum high/low extension from the open
    pub wick_pct: f64,

    /// Inclusive volume bounds
    pub volume_min: u64,
    pub volume_max: u64,

    /// Inclusive share count bounds
    pub shares_min: u32,
    pub shares_max: u32,

    /// Fixed seed for reproducible sessions; `None` draws from OS entropy
    pub seed: Option<u64>,

    /// Date of the most recent detail point; `None` means today (UTC)
    pub as_of: Option<NaiveDate>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            detail_points: 52,
            detail_interval_days: 7,
            trend_points: 12,
            base_price_min: 50.0,
            base_price_max: 250.0,
            drift_min: -0.10,
            drift_max: 0.30,
            seasonal_amplitude_pct: 0.05,
            noise_pct: 0.05,
            open_jitter_pct: 0.01,
            wick_pct: 0.02,
            volume_min: 100_000,
            volume_max: 1_099_999,
            shares_min: 10,
            shares_max: 109,
            seed: None,
            as_of: None,
        }
    }
}

impl GeneratorSettings {
    /// Check counts, ranges, and that no combination of draws can push a
    /// price below one cent or past the largest finite value.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.detail_points == 0 {
            return Err(CoreError::InvalidSettings("detail_points must be at least 1".into()));
        }
        if self.trend_points == 0 {
            return Err(CoreError::InvalidSettings("trend_points must be at least 1".into()));
        }
        if self.detail_interval_days == 0 {
            return Err(CoreError::InvalidSettings(
                "detail_interval_days must be at least 1".into(),
            ));
        }
        if !(self.base_price_min.is_finite() && self.base_price_max.is_finite())
            || self.base_price_min <= 0.0
            || self.base_price_min >= self.base_price_max
        {
            return Err(CoreError::InvalidSettings(format!(
                "base price range [{}, {}) must be positive and non-empty",
                self.base_price_min, self.base_price_max
            )));
        }
        if !(self.drift_min.is_finite() && self.drift_max.is_finite())
            || self.drift_min >= self.drift_max
        {
            return Err(CoreError::InvalidSettings(format!(
                "drift range [{}, {}) must be non-empty",
                self.drift_min, self.drift_max
            )));
        }

        let fractions = [
            ("seasonal_amplitude_pct", self.seasonal_amplitude_pct),
            ("noise_pct", self.noise_pct),
            ("open_jitter_pct", self.open_jitter_pct),
            ("wick_pct", self.wick_pct),
        ];
        for (name, value) in fractions {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::InvalidSettings(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        // Worst case: full negative drift, seasonal trough, lowest noise,
        // lowest jitter and the longest lower wick, all at once.
        let worst_downside = -self.drift_min.min(0.0)
            + self.seasonal_amplitude_pct
            + self.noise_pct
            + self.open_jitter_pct
            + self.wick_pct;
        if worst_downside >= 1.0 {
            return Err(CoreError::InvalidSettings(format!(
                "combined downside of {worst_downside:.2} could produce non-positive prices"
            )));
        }
        let floor = self.base_price_min * (1.0 - worst_downside);
        if floor < MIN_PRICE {
            return Err(CoreError::InvalidSettings(format!(
                "lowest reachable price {floor} rounds below {MIN_PRICE}"
            )));
        }

        let worst_upside = self.drift_max.max(0.0)
            + self.seasonal_amplitude_pct
            + self.noise_pct
            + self.open_jitter_pct
            + self.wick_pct;
        let ceiling = self.base_price_max * (1.0 + worst_upside);
        if !ceiling.is_finite() || !(ceiling * f64::from(self.shares_max)).is_finite() {
            return Err(CoreError::InvalidSettings(format!(
                "highest reachable price ({} × {:.2}) overflows",
                self.base_price_max,
                1.0 + worst_upside
            )));
        }

        if self.volume_min > self.volume_max {
            return Err(CoreError::InvalidSettings(format!(
                "volume range [{}, {}] is empty",
                self.volume_min, self.volume_max
            )));
        }
        if self.shares_min == 0 || self.shares_min > self.shares_max {
            return Err(CoreError::InvalidSettings(format!(
                "share range [{}, {}] must be positive and non-empty",
                self.shares_min, self.shares_max
            )));
        }
        Ok(())
    }
}
