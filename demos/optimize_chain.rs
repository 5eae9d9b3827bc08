//! Chain Optimization Example
//!
//! This example demonstrates the core optimization pipeline:
//! - Building candidate legs from raw market data
//! - Finding the best fixed-size ladder
//! - Sweeping leg counts with the automatic mode
//! - Reading the factor breakdown and highlight keys
//!
//! Run with: `cargo run --example optimize_chain`

use option_ladder_optimizer::optimizer::{CandidateLeg, LadderOptimizer};
use optionstratlib::OptionStyle;
use tracing::info;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("=== Chain Optimization Example ===");

    // A small synthetic BTC chain: two expiries, reference price 60000.
    let legs = vec![
        CandidateLeg::from_market(56_000.0, "27JUN25", 30, 50.0, 60_000.0, 0.015, OptionStyle::Put),
        CandidateLeg::from_market(54_000.0, "27JUN25", 30, 55.0, 60_000.0, 0.010, OptionStyle::Put),
        CandidateLeg::from_market(52_000.0, "27JUN25", 30, 60.0, 60_000.0, 0.008, OptionStyle::Put),
        CandidateLeg::from_market(50_000.0, "27JUN25", 30, 66.0, 60_000.0, 0.006, OptionStyle::Put),
        CandidateLeg::from_market(52_000.0, "26SEP25", 120, 62.0, 60_000.0, 0.034, OptionStyle::Put),
        CandidateLeg::from_market(48_000.0, "26SEP25", 120, 70.0, 60_000.0, 0.024, OptionStyle::Put),
    ];
    info!("Candidate pool: {} put legs", legs.len());
    for leg in &legs {
        info!(
            "  {} @ {}: {:.1}% iv, {:.1}% apy, P(ex) {:.3}",
            leg.strike, leg.expiry, leg.implied_vol_pct, leg.annualized_yield_pct,
            leg.probability_of_exercise
        );
    }

    let optimizer = LadderOptimizer::new();

    // Best two-leg ladder against a volatility index of 57.
    info!("--- Fixed Two-Leg Ladder ---");
    match optimizer.optimize(&legs, Some(57.0), 2, false) {
        Some(best) => print_ladder(&best),
        None => info!("no ladder available"),
    }

    // Automatic mode: sweep 1..=5 legs and keep the global best.
    info!("--- Automatic Leg-Count Sweep ---");
    match optimizer.optimize_auto(&legs, Some(57.0), false) {
        Some(best) => {
            print_ladder(&best);
            info!("Highlight keys:");
            for key in best.highlight_keys("BTC") {
                info!("  {}", key);
            }
        }
        None => info!("no ladder available"),
    }
}

fn print_ladder(ladder: &option_ladder_optimizer::optimizer::ScoredLadder) {
    info!(
        "Score {:.2}/10 ({} legs), driven by {}",
        ladder.score,
        ladder.legs.len(),
        ladder.top_factor
    );
    for leg in &ladder.legs {
        info!("  {} {} ({}d)", leg.strike, leg.expiry, leg.days_to_expiry);
    }
    info!("  Expected value:     {:>10.2} USD", ladder.expected_value_usd);
    info!("  Annualized EV:      {:>10.2} USD", ladder.expected_value_annualized);
    info!("  Total premium:      {:>10.2} USD", ladder.total_premium_usd);
    info!("  Theta efficiency:   {:>10.2} USD/day", ladder.theta_efficiency);
    info!("  Risk/reward:        {:>10.3}", ladder.risk_reward);
    info!("  Kelly fraction:     {:>10.3}", ladder.kelly_fraction);
    info!("  P(all legs OTM):    {:>10.3}", ladder.prob_all_otm);
    info!("  Avg annual yield:   {:>9.2}%", ladder.avg_annualized_yield_pct);
}
