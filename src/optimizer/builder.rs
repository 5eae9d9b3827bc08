//! Ladder construction and selection.
//!
//! The optimizer builds two candidate pools from the caller's legs:
//! same-expiry groups from each expiry bucket, and cross-expiry groups
//! from the highest-yielding legs overall. Both pools are capped so a
//! full search stays in the low thousands of groups and completes well
//! inside one refresh cycle. All generated groups are scored, ranked as
//! one batch, and the single best ladder is returned.

use super::combinatorics::{combinations, combinations_with_repetition};
use super::leg::CandidateLeg;
use super::ranker::rank_ladders;
use super::scorer::{ScoredLadder, score_ladder};
use crate::config::{MAX_LADDER_LEGS, OptimizerConfig};
use crate::error::Result;
use std::collections::HashSet;
use tracing::debug;

/// Cross-expiry pool size when repetition is allowed.
const TOP_CAP_WITH_REPETITION: usize = 8;

/// Cross-expiry pool size when repetition is disallowed.
const TOP_CAP_WITHOUT_REPETITION: usize = 15;

/// Builds and ranks put ladders from a candidate pool.
///
/// The optimizer is pure: each call is self-contained, deterministic for
/// identical inputs, and holds no state between calls. Overlapping calls
/// from a polling caller therefore need no locking; the last result wins.
#[derive(Debug, Clone, Default)]
pub struct LadderOptimizer {
    config: OptimizerConfig,
}

impl LadderOptimizer {
    /// Creates an optimizer with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an optimizer with a caller-supplied configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the configuration fails
    /// validation.
    pub fn with_config(config: OptimizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Finds the best ladder of exactly `num_legs` legs.
    ///
    /// Only put legs participate. Duplicate `(strike, expiry)` entries are
    /// dropped keeping the first occurrence, so callers that pre-sort by
    /// descending yield keep the most attractive quote per contract.
    ///
    /// Returns `None` when `num_legs` is outside `1..=MAX_LADDER_LEGS`,
    /// when the pool cannot satisfy the requested size and repetition
    /// policy, or when no candidate group can be generated. This path is
    /// never an error: an empty or stale pool is an expected condition.
    #[must_use]
    pub fn optimize(
        &self,
        legs: &[CandidateLeg],
        volatility_index: Option<f64>,
        num_legs: usize,
        allow_repetition: bool,
    ) -> Option<ScoredLadder> {
        if num_legs == 0 || num_legs > MAX_LADDER_LEGS {
            return None;
        }

        let puts: Vec<CandidateLeg> = legs.iter().filter(|leg| leg.is_put()).cloned().collect();
        if allow_repetition {
            if puts.is_empty() {
                return None;
            }
        } else if puts.len() < num_legs {
            return None;
        }

        // First occurrence wins per (strike, expiry).
        let mut seen_legs = HashSet::new();
        let mut deduped = Vec::with_capacity(puts.len());
        for leg in puts {
            if seen_legs.insert(leg.key()) {
                deduped.push(leg);
            }
        }

        let vol_index = volatility_index.unwrap_or(self.config.fallback_vol_index);
        let per_expiry_cap = if allow_repetition {
            (num_legs + 2).min(5)
        } else {
            (num_legs + 5).max(8)
        };

        // Expiry buckets in first-seen order keeps generation deterministic.
        let mut buckets: Vec<(String, Vec<CandidateLeg>)> = Vec::new();
        for leg in &deduped {
            match buckets.iter_mut().find(|(expiry, _)| *expiry == leg.expiry) {
                Some((_, bucket)) => bucket.push(leg.clone()),
                None => buckets.push((leg.expiry.clone(), vec![leg.clone()])),
            }
        }

        let mut seen_groups: HashSet<String> = HashSet::new();
        let mut candidates: Vec<ScoredLadder> = Vec::new();

        for (_, bucket) in &mut buckets {
            bucket.sort_by(|a, b| b.strike.total_cmp(&a.strike));
            bucket.truncate(per_expiry_cap);
            let groups = if allow_repetition {
                combinations_with_repetition(bucket, num_legs)
            } else {
                combinations(bucket, num_legs)
            };
            for group in groups {
                if seen_groups.insert(group_key(&group)) {
                    candidates.push(score_ladder(&group, vol_index));
                }
            }
        }

        // Cross-expiry pool: the highest-yielding legs overall.
        let top_cap = if allow_repetition {
            TOP_CAP_WITH_REPETITION
        } else {
            TOP_CAP_WITHOUT_REPETITION
        };
        let mut top_legs = deduped.clone();
        top_legs.sort_by(|a, b| b.annualized_yield_pct.total_cmp(&a.annualized_yield_pct));
        top_legs.truncate(top_cap);
        let groups = if allow_repetition {
            combinations_with_repetition(&top_legs, num_legs)
        } else {
            combinations(&top_legs, num_legs)
        };
        for group in groups {
            if seen_groups.insert(group_key(&group)) {
                candidates.push(score_ladder(&group, vol_index));
            }
        }

        if candidates.is_empty() {
            return None;
        }

        debug!(
            legs = deduped.len(),
            expiries = buckets.len(),
            candidates = candidates.len(),
            num_legs,
            allow_repetition,
            "ranking ladder candidates"
        );

        rank_ladders(candidates, &self.config.weights).into_iter().next()
    }

    /// Finds the best ladder across every leg count in `1..=max_legs`.
    ///
    /// This is the "automatic" mode: one [`Self::optimize`] sweep per leg
    /// count, keeping the globally highest-scoring result. Returns `None`
    /// when no leg count yields a ladder.
    #[must_use]
    pub fn optimize_auto(
        &self,
        legs: &[CandidateLeg],
        volatility_index: Option<f64>,
        allow_repetition: bool,
    ) -> Option<ScoredLadder> {
        let mut best: Option<ScoredLadder> = None;
        for num_legs in 1..=self.config.max_legs {
            if let Some(ladder) = self.optimize(legs, volatility_index, num_legs, allow_repetition) {
                let improved = best
                    .as_ref()
                    .is_none_or(|current| ladder.score > current.score);
                if improved {
                    best = Some(ladder);
                }
            }
        }
        best
    }
}

/// Canonical identity of a generated group: sorted `(strike, expiry)`
/// pairs. Same-expiry and cross-expiry generation can produce the same
/// group; the key keeps it from being scored twice.
fn group_key(legs: &[CandidateLeg]) -> String {
    let mut parts: Vec<String> = legs
        .iter()
        .map(|leg| format!("{}@{}", leg.strike.to_bits(), leg.expiry))
        .collect();
    parts.sort_unstable();
    parts.join("|")
}
