//! Cross-candidate normalization and composite scoring.
//!
//! Ranking is relative to the batch: each factor is min-max normalized
//! across every generated candidate, weighted, and summed into a 0-10
//! composite. A factor on which the whole batch ties contributes a
//! neutral 0.5.

use super::scorer::{FACTOR_COUNT, ScoredLadder};
use crate::config::FactorWeights;

/// Range below which a factor is considered tied across the batch.
const TIE_THRESHOLD: f64 = 1e-10;

/// Normalizes factors across the candidate set, assigns composite scores,
/// and returns the candidates sorted by descending score.
///
/// The sort is stable, so ties keep their generation order. Each
/// candidate also receives the label of its largest weighted term in
/// `top_factor`. An empty input yields an empty output.
#[must_use]
pub fn rank_ladders(mut candidates: Vec<ScoredLadder>, weights: &FactorWeights) -> Vec<ScoredLadder> {
    if candidates.is_empty() {
        return candidates;
    }

    let mut mins = [f64::MAX; FACTOR_COUNT];
    let mut maxs = [f64::MIN; FACTOR_COUNT];
    for candidate in &candidates {
        for (i, value) in candidate.factor_vector().iter().enumerate() {
            mins[i] = mins[i].min(*value);
            maxs[i] = maxs[i].max(*value);
        }
    }

    let weight_values = weights.as_array();
    for candidate in &mut candidates {
        let factors = candidate.factor_vector();
        let mut composite = 0.0;
        let mut top_index = 0;
        let mut top_term = f64::MIN;

        for i in 0..FACTOR_COUNT {
            let range = maxs[i] - mins[i];
            let normalized = if range > TIE_THRESHOLD {
                (factors[i] - mins[i]) / range
            } else {
                0.5
            };
            let term = weight_values[i] * normalized;
            composite += term;
            if term > top_term {
                top_term = term;
                top_index = i;
            }
        }

        candidate.score = (10.0 * composite).clamp(0.0, 10.0);
        candidate.top_factor = FactorWeights::LABELS[top_index].to_string();
    }

    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimizer::leg::CandidateLeg;
    use crate::optimizer::scorer::score_ladder;
    use optionstratlib::OptionStyle;

    fn put(strike: f64, iv: f64, premium: f64) -> CandidateLeg {
        CandidateLeg::from_market(strike, "27JUN25", 30, iv, 60_000.0, premium, OptionStyle::Put)
    }

    fn candidates() -> Vec<ScoredLadder> {
        vec![
            score_ladder(&[put(54_000.0, 55.0, 0.010)], 57.0),
            score_ladder(&[put(52_000.0, 60.0, 0.008)], 57.0),
            score_ladder(&[put(56_000.0, 50.0, 0.015)], 57.0),
        ]
    }

    #[test]
    fn test_rank_scores_within_bounds() {
        let ranked = rank_ladders(candidates(), &FactorWeights::default());
        assert_eq!(ranked.len(), 3);
        for ladder in &ranked {
            assert!(ladder.score >= 0.0 && ladder.score <= 10.0, "score = {}", ladder.score);
            assert!(!ladder.top_factor.is_empty());
        }
    }

    #[test]
    fn test_rank_sorted_descending() {
        let ranked = rank_ladders(candidates(), &FactorWeights::default());
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_rank_identical_batch_all_neutral() {
        // Every factor ties, so every normalized value is 0.5 and each
        // composite is exactly half the weight mass.
        let one = score_ladder(&[put(54_000.0, 55.0, 0.010)], 57.0);
        let batch = vec![one.clone(), one.clone(), one];
        let ranked = rank_ladders(batch, &FactorWeights::default());
        for ladder in &ranked {
            assert!((ladder.score - 5.0).abs() < 1e-9, "score = {}", ladder.score);
        }
    }

    #[test]
    fn test_rank_tie_preserves_input_order() {
        // Same strike, vol, premium, and tenor: every factor ties, so the
        // stable sort must keep the input order of the expiry labels.
        let june = score_ladder(
            &[CandidateLeg::from_market(
                54_000.0, "27JUN25", 30, 55.0, 60_000.0, 0.010, OptionStyle::Put,
            )],
            57.0,
        );
        let september = score_ladder(
            &[CandidateLeg::from_market(
                54_000.0, "26SEP25", 30, 55.0, 60_000.0, 0.010, OptionStyle::Put,
            )],
            57.0,
        );
        let ranked = rank_ladders(vec![june, september], &FactorWeights::default());
        assert_eq!(ranked[0].score, ranked[1].score);
        assert_eq!(ranked[0].legs[0].expiry, "27JUN25");
        assert_eq!(ranked[1].legs[0].expiry, "26SEP25");
    }

    #[test]
    fn test_rank_empty_input() {
        let ranked = rank_ladders(Vec::new(), &FactorWeights::default());
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_rank_top_factor_follows_weight_shift() {
        // With all weight on diversification, the dominant label must be
        // diversification for every candidate that leads that factor.
        let weights = FactorWeights {
            expected_value: 0.0,
            volatility_edge: 0.0,
            risk_reward: 0.0,
            theta_efficiency: 0.0,
            kelly_fraction: 0.0,
            diversification: 1.0,
        };
        let wide = score_ladder(&[put(50_000.0, 55.0, 0.010), put(58_000.0, 55.0, 0.010)], 57.0);
        let narrow = score_ladder(&[put(54_000.0, 55.0, 0.010), put(54_500.0, 55.0, 0.010)], 57.0);
        let ranked = rank_ladders(vec![narrow, wide], &weights);
        assert_eq!(ranked[0].top_factor, "Strike Diversification");
        assert!(ranked[0].strike_diversification > ranked[1].strike_diversification);
    }
}
