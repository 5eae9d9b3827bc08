//! Candidate leg data model.
//!
//! A leg is a single priced option contract supplied by the data layer.
//! The optimizer treats legs as immutable inputs: admission filters (such
//! as an exercise-probability cap) are the caller's responsibility and
//! are applied before legs reach this crate.

use super::pricing::{self, DAYS_PER_YEAR};
use optionstratlib::OptionStyle;
use serde::{Deserialize, Serialize};

/// A single priced option contract considered as one unit of a ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateLeg {
    /// Strike price in quote currency.
    pub strike: f64,
    /// Exchange-style expiry code (e.g. "27JUN25").
    pub expiry: String,
    /// Days until expiry.
    pub days_to_expiry: u32,
    /// Annualized mark implied volatility, as a percentage.
    pub implied_vol_pct: f64,
    /// Underlying reference price in quote currency.
    pub reference_price: f64,
    /// Premium in underlying units.
    pub premium: f64,
    /// Premium in quote currency.
    pub premium_usd: f64,
    /// Model probability that the option finishes in-the-money.
    pub probability_of_exercise: f64,
    /// Annualized yield on strike-collateralized capital, as a percentage.
    pub annualized_yield_pct: f64,
    /// Strike offset from the reference price, as a percentage.
    pub moneyness_pct: f64,
    /// Call or put. Only puts participate in ladder optimization.
    pub style: OptionStyle,
}

impl CandidateLeg {
    /// Builds a leg from raw market data, deriving the model fields.
    ///
    /// The quote-currency premium, exercise probability, annualized yield,
    /// and moneyness are computed from the pricing model; callers that
    /// already carry these fields can construct the struct directly.
    ///
    /// # Arguments
    ///
    /// * `strike` - Strike price in quote currency
    /// * `expiry` - Exchange-style expiry code
    /// * `days_to_expiry` - Days until expiry
    /// * `implied_vol_pct` - Annualized mark implied volatility percentage
    /// * `reference_price` - Underlying reference price in quote currency
    /// * `premium` - Premium in underlying units
    /// * `style` - Call or put
    #[must_use]
    pub fn from_market(
        strike: f64,
        expiry: impl Into<String>,
        days_to_expiry: u32,
        implied_vol_pct: f64,
        reference_price: f64,
        premium: f64,
        style: OptionStyle,
    ) -> Self {
        let sigma = implied_vol_pct / 100.0;
        let t = f64::from(days_to_expiry) / DAYS_PER_YEAR;

        Self {
            strike,
            expiry: expiry.into(),
            days_to_expiry,
            implied_vol_pct,
            reference_price,
            premium,
            premium_usd: premium * reference_price,
            probability_of_exercise: pricing::probability_of_exercise(
                reference_price,
                strike,
                t,
                sigma,
                style,
            ),
            annualized_yield_pct: pricing::hedged_annual_yield(
                premium,
                reference_price,
                strike,
                days_to_expiry,
            ),
            moneyness_pct: (strike - reference_price) / reference_price * 100.0,
            style,
        }
    }

    /// Returns the `(strike, expiry)` identity used for deduplication.
    ///
    /// Strikes are compared by bit pattern, so two legs are identical only
    /// when their strikes match exactly.
    #[must_use]
    pub fn key(&self) -> LegKey {
        LegKey {
            strike_bits: self.strike.to_bits(),
            expiry: self.expiry.clone(),
        }
    }

    /// Returns true if this leg is a put.
    #[must_use]
    pub fn is_put(&self) -> bool {
        matches!(self.style, OptionStyle::Put)
    }

    /// Time to expiry in years.
    #[must_use]
    pub fn years_to_expiry(&self) -> f64 {
        f64::from(self.days_to_expiry) / DAYS_PER_YEAR
    }
}

/// Identity of a leg within a candidate pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LegKey {
    strike_bits: u64,
    expiry: String,
}
