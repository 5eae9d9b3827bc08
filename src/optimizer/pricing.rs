//! Closed-form option analytics under a zero risk-free rate.
//!
//! All functions are pure and operate on `f64`. A zero rate is the
//! standard assumption for coin-margined crypto options, where premium
//! and collateral are held in the underlying itself. Degenerate inputs
//! (non-positive time or volatility) yield zero-valued outputs rather
//! than errors.

use optionstratlib::OptionStyle;
use std::f64::consts::{PI, SQRT_2};

/// Days per year used for annualization throughout the optimizer.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Threshold below which a tail probability is treated as zero.
pub const NEGLIGIBLE: f64 = 1e-10;

/// Error-function approximation (Abramowitz & Stegun 7.1.26, |error| <= 1.5e-7).
fn erf(x: f64) -> f64 {
    let a1 = 0.254829592;
    let a2 = -0.284496736;
    let a3 = 1.421413741;
    let a4 = -1.453152027;
    let a5 = 1.061405429;
    let p = 0.3275911;

    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    let t = 1.0 / (1.0 + p * x);
    let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();
    sign * y
}

/// Standard normal cumulative distribution function.
///
/// Satisfies `normal_cdf(0) == 0.5` and
/// `normal_cdf(-x) == 1 - normal_cdf(x)` to within the approximation
/// error of [`erf`].
#[must_use]
pub fn normal_cdf(x: f64) -> f64 {
    0.5 * (1.0 + erf(x / SQRT_2))
}

/// Standard normal probability density function.
#[must_use]
pub fn normal_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

/// Black-Scholes `d1` under a zero rate.
fn d1(s: f64, k: f64, t: f64, sigma: f64) -> f64 {
    ((s / k).ln() + 0.5 * sigma * sigma * t) / (sigma * t.sqrt())
}

/// Probability that the option finishes in-the-money.
///
/// # Arguments
///
/// * `s` - Underlying reference price
/// * `k` - Strike price
/// * `t` - Time to expiry in years
/// * `sigma` - Annualized volatility as a fraction (0.55 for 55%)
/// * `style` - Call or put
///
/// Returns 0 when `t <= 0` or `sigma <= 0`.
#[must_use]
pub fn probability_of_exercise(s: f64, k: f64, t: f64, sigma: f64, style: OptionStyle) -> f64 {
    if t <= 0.0 || sigma <= 0.0 {
        return 0.0;
    }
    let d2 = ((s / k).ln() - 0.5 * sigma * sigma * t) / (sigma * t.sqrt());
    match style {
        OptionStyle::Call => normal_cdf(d2),
        OptionStyle::Put => normal_cdf(-d2),
    }
}

/// First-order sensitivities of a single option contract.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Greeks {
    /// Price sensitivity to the underlying.
    pub delta: f64,
    /// Delta sensitivity to the underlying.
    pub gamma: f64,
    /// Price sensitivity per 1-point change in volatility.
    pub vega: f64,
    /// Price decay per calendar day.
    pub theta: f64,
}

/// Computes delta, gamma, vega, and theta under a zero rate.
///
/// Vega is expressed per 1-point move in the volatility percentage and
/// theta per calendar day. Returns an all-zero struct when `t <= 0` or
/// `sigma <= 0`.
#[must_use]
pub fn greeks(s: f64, k: f64, t: f64, sigma: f64, style: OptionStyle) -> Greeks {
    if t <= 0.0 || sigma <= 0.0 {
        return Greeks::default();
    }
    let sqrt_t = t.sqrt();
    let d1 = d1(s, k, t, sigma);
    let pdf = normal_pdf(d1);

    let delta = match style {
        OptionStyle::Call => normal_cdf(d1),
        OptionStyle::Put => normal_cdf(d1) - 1.0,
    };

    Greeks {
        delta,
        gamma: pdf / (s * sigma * sqrt_t),
        vega: s * pdf * sqrt_t / 100.0,
        theta: -(s * sigma * pdf) / (2.0 * sqrt_t) / DAYS_PER_YEAR,
    }
}

/// Expected magnitude of loss on the exercised side of the distribution.
///
/// For puts this is `max(0, K*N(-d2) - S*N(-d1))`, for calls
/// `max(0, S*N(d1) - K*N(d2))`. Returns 0 when `t <= 0`, `sigma <= 0`,
/// or the relevant tail probability falls below [`NEGLIGIBLE`].
#[must_use]
pub fn conditional_tail_loss(s: f64, k: f64, t: f64, sigma: f64, style: OptionStyle) -> f64 {
    if t <= 0.0 || sigma <= 0.0 {
        return 0.0;
    }
    let sqrt_t = t.sqrt();
    let d1 = d1(s, k, t, sigma);
    let d2 = d1 - sigma * sqrt_t;

    match style {
        OptionStyle::Put => {
            let tail = normal_cdf(-d2);
            if tail < NEGLIGIBLE {
                return 0.0;
            }
            (k * tail - s * normal_cdf(-d1)).max(0.0)
        }
        OptionStyle::Call => {
            let tail = normal_cdf(d2);
            if tail < NEGLIGIBLE {
                return 0.0;
            }
            (s * normal_cdf(d1) - k * tail).max(0.0)
        }
    }
}

/// Annualized yield assuming 100% of capital is collateralized at the strike.
///
/// # Arguments
///
/// * `premium` - Premium in underlying units
/// * `ref_price` - Underlying reference price in quote currency
/// * `strike` - Strike price in quote currency
/// * `days_to_expiry` - Days until expiry
///
/// Returns 0 when `days_to_expiry == 0` or `strike <= 0`.
#[must_use]
pub fn hedged_annual_yield(premium: f64, ref_price: f64, strike: f64, days_to_expiry: u32) -> f64 {
    if days_to_expiry == 0 || strike <= 0.0 {
        return 0.0;
    }
    (premium * ref_price / strike) * (DAYS_PER_YEAR / f64::from(days_to_expiry)) * 100.0
}
