//! Per-ladder metric computation.
//!
//! The scorer turns one leg group into a [`ScoredLadder`] carrying the
//! raw risk/return aggregates. Scores are relative, so the composite
//! `score` and `top_factor` fields stay unset here and are filled in by
//! the ranker once the whole candidate batch is known.

use super::leg::CandidateLeg;
use super::pricing::{self, DAYS_PER_YEAR};
use crate::utils::instrument_code;
use optionstratlib::OptionStyle;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Number of ranking factors per ladder.
pub const FACTOR_COUNT: usize = 6;

/// Floor applied to the maximum exercise probability when estimating the
/// average loss, so thin tails cannot blow the ratio up.
const MIN_PEX_FLOOR: f64 = 0.01;

/// A leg group with its computed risk/return metrics.
///
/// Constructed once per candidate group by [`score_ladder`]; the `score`
/// and `top_factor` fields are filled in by
/// [`rank_ladders`](super::ranker::rank_ladders) and the value is
/// immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredLadder {
    /// The legs making up this ladder, in generation order.
    pub legs: Vec<CandidateLeg>,
    /// Composite score in `[0, 10]`, assigned by the ranker.
    pub score: f64,
    /// Expected value across legs, in quote currency.
    pub expected_value_usd: f64,
    /// Expected value annualized over the mean days-to-expiry.
    pub expected_value_annualized: f64,
    /// Mean richness of leg implied volatility versus the index benchmark.
    pub volatility_edge: f64,
    /// Aggregate premium decay per day across legs, in quote currency.
    pub theta_efficiency: f64,
    /// Expected value per unit of probability-weighted tail risk.
    pub risk_reward: f64,
    /// Kelly position-sizing fraction derived from edge and risk.
    pub kelly_fraction: f64,
    /// Strike dispersion relative to the reference price.
    pub strike_diversification: f64,
    /// Probability that no leg is exercised (riskiest-leg proxy).
    pub prob_all_otm: f64,
    /// Total premium collected, in quote currency.
    pub total_premium_usd: f64,
    /// Mean per-leg annualized yield percentage.
    pub avg_annualized_yield_pct: f64,
    /// Label of the factor contributing most to the score, assigned by
    /// the ranker.
    pub top_factor: String,
}

impl ScoredLadder {
    /// Raw factor vector used for batch normalization, index-aligned with
    /// [`FactorWeights::LABELS`](crate::config::FactorWeights::LABELS).
    ///
    /// A negative volatility edge is clamped to zero here so that rich
    /// pools are rewarded without letting cheap-vol ladders go negative.
    #[must_use]
    pub fn factor_vector(&self) -> [f64; FACTOR_COUNT] {
        [
            self.expected_value_annualized,
            self.volatility_edge.max(0.0),
            self.risk_reward,
            self.theta_efficiency,
            self.kelly_fraction,
            self.strike_diversification,
        ]
    }

    /// Instrument codes of this ladder's legs, for display highlighting.
    ///
    /// # Arguments
    ///
    /// * `underlying` - The underlying asset symbol (e.g., "BTC")
    #[must_use]
    pub fn highlight_keys(&self, underlying: &str) -> BTreeSet<String> {
        self.legs
            .iter()
            .map(|leg| instrument_code(underlying, &leg.expiry, leg.strike, leg.style))
            .collect()
    }
}

/// Computes the raw metrics for one leg group.
///
/// Per leg, the expected value is the premium kept when the option
/// expires worthless minus the expected tail loss when it is exercised:
/// `premium_usd * (1 - p) - tail_loss * p`. The aggregates follow from
/// there; see the field docs on [`ScoredLadder`].
///
/// `volatility_index` must already be resolved (the orchestrator applies
/// the configured fallback when the caller supplies none). The function
/// is deterministic and side-effect-free; an empty group yields an
/// all-zero ladder.
#[must_use]
pub fn score_ladder(legs: &[CandidateLeg], volatility_index: f64) -> ScoredLadder {
    let n = legs.len();
    if n == 0 {
        return empty_ladder();
    }
    let count = n as f64;

    let mut total_ev = 0.0;
    let mut total_risk = 0.0;
    let mut total_premium = 0.0;
    let mut total_apy = 0.0;
    let mut total_dte = 0.0;
    let mut total_edge = 0.0;
    let mut theta_efficiency = 0.0;
    let mut max_pex = 0.0f64;
    let mut min_strike = f64::MAX;
    let mut max_strike = f64::MIN;

    for leg in legs {
        let sigma = leg.implied_vol_pct / 100.0;
        let t = leg.years_to_expiry();
        let p_itm = leg.probability_of_exercise;
        let tail_loss =
            pricing::conditional_tail_loss(leg.reference_price, leg.strike, t, sigma, OptionStyle::Put);

        total_ev += leg.premium_usd * (1.0 - p_itm) - tail_loss * p_itm;
        total_risk += p_itm * tail_loss;
        total_premium += leg.premium_usd;
        total_apy += leg.annualized_yield_pct;
        total_dte += f64::from(leg.days_to_expiry);
        total_edge += (leg.implied_vol_pct - volatility_index) / volatility_index.max(1.0);
        theta_efficiency += leg.premium_usd / f64::from(leg.days_to_expiry);
        max_pex = max_pex.max(p_itm);
        min_strike = min_strike.min(leg.strike);
        max_strike = max_strike.max(leg.strike);
    }

    let avg_dte = total_dte / count;
    let expected_value_annualized = total_ev * (DAYS_PER_YEAR / avg_dte);
    let risk_reward = if total_risk > 0.0 { total_ev / total_risk } else { 0.0 };

    let prob_all_otm = 1.0 - max_pex;
    let avg_loss = total_risk / max_pex.max(MIN_PEX_FLOOR);
    let kelly_fraction = if total_premium > 0.0 {
        (prob_all_otm - max_pex * avg_loss / total_premium).max(0.0)
    } else {
        0.0
    };

    ScoredLadder {
        legs: legs.to_vec(),
        score: 0.0,
        expected_value_usd: total_ev,
        expected_value_annualized,
        volatility_edge: total_edge / count,
        theta_efficiency,
        risk_reward,
        kelly_fraction,
        strike_diversification: (max_strike - min_strike) / legs[0].reference_price,
        prob_all_otm,
        total_premium_usd: total_premium,
        avg_annualized_yield_pct: total_apy / count,
        top_factor: String::new(),
    }
}

fn empty_ladder() -> ScoredLadder {
    ScoredLadder {
        legs: Vec::new(),
        score: 0.0,
        expected_value_usd: 0.0,
        expected_value_annualized: 0.0,
        volatility_edge: 0.0,
        theta_efficiency: 0.0,
        risk_reward: 0.0,
        kelly_fraction: 0.0,
        strike_diversification: 0.0,
        prob_all_otm: 0.0,
        total_premium_usd: 0.0,
        avg_annualized_yield_pct: 0.0,
        top_factor: String::new(),
    }
}
