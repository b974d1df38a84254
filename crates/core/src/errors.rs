use thiserror::Error;

/// Unified error type for the entire portfolio-dashboard-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// Empty series, flat price ranges and a missing selection are NOT errors:
/// they are valid states handled by policy in the chart service.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Configuration ───────────────────────────────────────────────
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    // ── Input validation ────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Duplicate symbol: {0}")]
    DuplicateSymbol(String),

    #[error("Holding not found: {0}")]
    HoldingNotFound(String),

    #[error("Unknown chart window: {0} (expected 3M, 6M or 1Y)")]
    InvalidWindow(String),

    // ── Serialization ───────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}
