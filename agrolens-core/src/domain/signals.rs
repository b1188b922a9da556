//! Signal enums and derived market shapes.
//!
//! Everything here is derived per request and recomputed from declared
//! inputs only — identical inputs always produce identical values. Enums
//! serialize as the string names consumers see on the wire.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::PriceRange;

/// Price trend over the series window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// Short-window momentum direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Momentum {
    Rising,
    Falling,
    Neutral,
}

/// Demand-strength proxy derived from price/volume dispersion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuyerSignal {
    Strong,
    Stable,
    Weak,
}

/// Volatility classification of the price window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

/// Discrete trade recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Buy,
    Sell,
    Hold,
}

/// Momentum computation result. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentumResult {
    pub momentum: Momentum,
    /// Percent change from the earliest to the latest series point.
    pub magnitude_pct: f64,
    /// Number of points the computation saw.
    pub window_size: usize,
}

impl MomentumResult {
    /// The degraded result for empty or single-point series.
    pub fn neutral(window_size: usize) -> Self {
        Self {
            momentum: Momentum::Neutral,
            magnitude_pct: 0.0,
            window_size,
        }
    }
}

/// Descriptive market state derived from raw records plus the trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedMarket {
    pub region: String,
    pub commodity: String,
    pub trend: Trend,
    pub buyer_signal: BuyerSignal,
    pub risk_level: RiskLevel,
    pub latest_price: f64,
    pub average_price: f64,
    pub price_range: PriceRange,
    pub record_count: usize,
    /// Date of the latest record; `None` when the source had zero rows.
    pub as_of: Option<NaiveDate>,
}

/// Deterministic trade recommendation: pure function of
/// (trend, buyer_signal, momentum).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: Action,
    /// Confidence score in [0, 100].
    pub confidence: u8,
    pub reason: String,
}

impl Recommendation {
    /// Build a recommendation, clamping confidence into [0, 100].
    pub fn new(action: Action, confidence: i32, reason: impl Into<String>) -> Self {
        Self {
            action,
            confidence: confidence.clamp(0, 100) as u8,
            reason: reason.into(),
        }
    }
}
