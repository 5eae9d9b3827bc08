//! End-to-end tests for the optimization pipeline on a concrete chain.
//!
//! The scenario is three same-expiry puts on a 60000 reference price:
//! 54000 (55% iv, 0.010 premium), 52000 (60% iv, 0.008), and 56000
//! (50% iv, 0.015), held for 30 days.

use option_ladder_optimizer::config::FactorWeights;
use option_ladder_optimizer::optimizer::{
    CandidateLeg, LadderOptimizer, combinatorics::combinations, rank_ladders, score_ladder,
};
use optionstratlib::OptionStyle;

fn chain() -> Vec<CandidateLeg> {
    vec![
        CandidateLeg::from_market(54_000.0, "27JUN25", 30, 55.0, 60_000.0, 0.010, OptionStyle::Put),
        CandidateLeg::from_market(52_000.0, "27JUN25", 30, 60.0, 60_000.0, 0.008, OptionStyle::Put),
        CandidateLeg::from_market(56_000.0, "27JUN25", 30, 50.0, 60_000.0, 0.015, OptionStyle::Put),
    ]
}

fn strikes_of(legs: &[CandidateLeg]) -> Vec<f64> {
    let mut strikes: Vec<f64> = legs.iter().map(|leg| leg.strike).collect();
    strikes.sort_by(f64::total_cmp);
    strikes
}

#[test]
fn test_scenario_annualized_yields() {
    let legs = chain();
    assert!((legs[0].annualized_yield_pct - 13.5).abs() < 0.1);
    assert!((legs[1].annualized_yield_pct - 11.2).abs() < 0.1);
    assert!((legs[2].annualized_yield_pct - 19.6).abs() < 0.1);
}

#[test]
fn test_scenario_exercise_probabilities_ordered_by_moneyness() {
    let legs = chain();
    // Closer to the money means a higher exercise probability.
    let p54 = legs[0].probability_of_exercise;
    let p52 = legs[1].probability_of_exercise;
    let p56 = legs[2].probability_of_exercise;
    assert!(p56 > p54 && p54 > p52, "p56 = {p56}, p54 = {p54}, p52 = {p52}");
    for p in [p52, p54, p56] {
        assert!(p > 0.0 && p < 1.0);
    }
}

#[test]
fn test_scenario_full_pair_ranking() {
    // Score the three candidate pairs directly and rank them as a batch.
    let pairs = combinations(&chain(), 2);
    assert_eq!(pairs.len(), 3);

    let scored = pairs.iter().map(|pair| score_ladder(pair, 57.0)).collect();
    let ranked = rank_ladders(scored, &FactorWeights::default());

    for pair in ranked.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }

    // The 54000/52000 pair keeps most of the premium with the smallest
    // probability-weighted tail risk and leads on expected value; the
    // 56000 leg's richer premium cannot offset its exercise risk, and
    // the pair holding both near-the-money legs comes last.
    assert_eq!(strikes_of(&ranked[0].legs), vec![52_000.0, 54_000.0]);
    assert_eq!(strikes_of(&ranked[1].legs), vec![52_000.0, 56_000.0]);
    assert_eq!(strikes_of(&ranked[2].legs), vec![54_000.0, 56_000.0]);
    assert_eq!(ranked[0].top_factor, "Expected Value");
}

#[test]
fn test_optimizer_matches_direct_pipeline() {
    let optimizer = LadderOptimizer::new();
    let best = optimizer.optimize(&chain(), Some(57.0), 2, false).unwrap();

    let scored = combinations(&chain(), 2)
        .iter()
        .map(|pair| score_ladder(pair, 57.0))
        .collect();
    let ranked = rank_ladders(scored, &FactorWeights::default());

    assert_eq!(strikes_of(&best.legs), strikes_of(&ranked[0].legs));
    assert!((best.score - ranked[0].score).abs() < 1e-12);
}

#[test]
fn test_optimizer_idempotent_bitwise() {
    let optimizer = LadderOptimizer::new();
    let legs = chain();
    let first = optimizer.optimize(&legs, Some(57.0), 2, false).unwrap();
    let second = optimizer.optimize(&legs, Some(57.0), 2, false).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.score.to_bits(), second.score.to_bits());
    assert_eq!(
        first.expected_value_usd.to_bits(),
        second.expected_value_usd.to_bits()
    );
    assert_eq!(
        first.kelly_fraction.to_bits(),
        second.kelly_fraction.to_bits()
    );
}

#[test]
fn test_no_ladder_is_not_an_error() {
    let optimizer = LadderOptimizer::new();

    // Fewer unique legs than requested without repetition.
    assert!(optimizer.optimize(&chain(), Some(57.0), 4, false).is_none());

    // Empty pool, with and without repetition.
    assert!(optimizer.optimize(&[], Some(57.0), 1, false).is_none());
    assert!(optimizer.optimize(&[], Some(57.0), 1, true).is_none());
}

#[test]
fn test_automatic_sweep_beats_every_fixed_count() {
    let optimizer = LadderOptimizer::new();
    let legs = chain();
    let auto = optimizer.optimize_auto(&legs, Some(57.0), false).unwrap();

    for num_legs in 1..=5 {
        if let Some(fixed) = optimizer.optimize(&legs, Some(57.0), num_legs, false) {
            assert!(auto.score >= fixed.score);
        }
    }
}

#[test]
fn test_mixed_expiry_pool() {
    let optimizer = LadderOptimizer::new();
    let mut legs = chain();
    legs.push(CandidateLeg::from_market(
        50_000.0, "26SEP25", 120, 65.0, 60_000.0, 0.035, OptionStyle::Put,
    ));
    legs.push(CandidateLeg::from_market(
        48_000.0, "26SEP25", 120, 70.0, 60_000.0, 0.028, OptionStyle::Put,
    ));

    let best = optimizer.optimize(&legs, Some(57.0), 3, false).unwrap();
    assert_eq!(best.legs.len(), 3);
    assert!(best.score >= 0.0 && best.score <= 10.0);

    // Legs within the ladder are pairwise distinct contracts.
    for (i, a) in best.legs.iter().enumerate() {
        for b in &best.legs[i + 1..] {
            assert!(a.strike != b.strike || a.expiry != b.expiry);
        }
    }
}
