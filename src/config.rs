//! Configuration for the ladder optimizer.
//!
//! The six factor weights live here as a named table rather than as
//! literals inside the scoring math, so they can be tuned or supplied by
//! the caller without touching the ranker.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Upper bound on the number of legs per ladder.
pub const MAX_LADDER_LEGS: usize = 5;

/// Volatility-index fallback used when the caller supplies no index.
pub const DEFAULT_VOL_INDEX: f64 = 57.0;

/// Tolerance for the factor-weight sum check.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Weights applied to the six normalized ranking factors.
///
/// The factors are, in order: expected value (annualized), volatility
/// edge, risk/reward ratio, theta efficiency, Kelly fraction, and strike
/// diversification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    /// Weight of annualized expected value.
    pub expected_value: f64,
    /// Weight of volatility edge versus the index benchmark.
    pub volatility_edge: f64,
    /// Weight of the expected-value to tail-risk ratio.
    pub risk_reward: f64,
    /// Weight of aggregate daily premium decay.
    pub theta_efficiency: f64,
    /// Weight of the Kelly position-sizing fraction.
    pub kelly_fraction: f64,
    /// Weight of strike dispersion across the ladder.
    pub diversification: f64,
}

impl FactorWeights {
    /// Human-readable factor labels, index-aligned with [`Self::as_array`].
    pub const LABELS: [&'static str; 6] = [
        "Expected Value",
        "Volatility Edge",
        "Risk/Reward",
        "Theta Efficiency",
        "Kelly Fraction",
        "Strike Diversification",
    ];

    /// Returns the weights as an array, index-aligned with [`Self::LABELS`].
    #[must_use]
    pub const fn as_array(&self) -> [f64; 6] {
        [
            self.expected_value,
            self.volatility_edge,
            self.risk_reward,
            self.theta_efficiency,
            self.kelly_fraction,
            self.diversification,
        ]
    }

    /// Validates that every weight is finite and non-negative and that the
    /// weights sum to 1.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if a weight is out of range or the
    /// sum deviates from 1.
    pub fn validate(&self) -> Result<()> {
        let weights = self.as_array();
        for (weight, label) in weights.iter().zip(Self::LABELS) {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(Error::invalid_config(format!(
                    "weight for {label} must be finite and non-negative, got {weight}"
                )));
            }
        }
        let sum: f64 = weights.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(Error::invalid_config(format!(
                "factor weights must sum to 1.0, got {sum}"
            )));
        }
        Ok(())
    }
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            expected_value: 0.30,
            volatility_edge: 0.20,
            risk_reward: 0.20,
            theta_efficiency: 0.15,
            kelly_fraction: 0.10,
            diversification: 0.05,
        }
    }
}

/// Configuration for [`LadderOptimizer`](crate::optimizer::LadderOptimizer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Maximum ladder size considered by the automatic leg-count sweep.
    pub max_legs: usize,
    /// Volatility index used when the caller supplies none.
    pub fallback_vol_index: f64,
    /// Factor weights for the composite score.
    pub weights: FactorWeights,
}

impl OptimizerConfig {
    /// Loads a configuration from a JSON document and validates it.
    ///
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::Serialization` if the document cannot be parsed and
    /// `Error::InvalidConfig` if a value is out of range.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if `max_legs` is outside
    /// `1..=MAX_LADDER_LEGS`, the fallback index is not positive, or the
    /// factor weights are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.max_legs == 0 || self.max_legs > MAX_LADDER_LEGS {
            return Err(Error::invalid_config(format!(
                "max_legs must be between 1 and {MAX_LADDER_LEGS}, got {}",
                self.max_legs
            )));
        }
        if !self.fallback_vol_index.is_finite() || self.fallback_vol_index <= 0.0 {
            return Err(Error::invalid_config(format!(
                "fallback_vol_index must be positive, got {}",
                self.fallback_vol_index
            )));
        }
        self.weights.validate()
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_legs: MAX_LADDER_LEGS,
            fallback_vol_index: DEFAULT_VOL_INDEX,
            weights: FactorWeights::default(),
        }
    }
}
