//! Periodic Refresh Example
//!
//! This example drives the refresh service the way a display layer
//! would: a mock candidate source simulates a drifting market, the
//! service recomputes the best ladder each cycle, and the latest result
//! stays readable from the cache between refreshes.
//!
//! Run with: `cargo run --example periodic_refresh`

use async_trait::async_trait;
use option_ladder_optimizer::Result;
use option_ladder_optimizer::optimizer::CandidateLeg;
use option_ladder_optimizer::service::{
    CandidateSnapshot, CandidateSource, LadderRefreshService, RunKey,
};
use optionstratlib::OptionStyle;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::info;

/// Mock source whose reference price drifts on every fetch.
struct DriftingSource {
    ticks: AtomicU64,
}

#[async_trait]
impl CandidateSource for DriftingSource {
    async fn fetch(&self) -> Result<CandidateSnapshot> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        let reference = 60_000.0 + tick as f64 * 250.0;
        let legs = vec![
            CandidateLeg::from_market(56_000.0, "27JUN25", 30, 50.0, reference, 0.015, OptionStyle::Put),
            CandidateLeg::from_market(54_000.0, "27JUN25", 30, 55.0, reference, 0.010, OptionStyle::Put),
            CandidateLeg::from_market(52_000.0, "27JUN25", 30, 60.0, reference, 0.008, OptionStyle::Put),
            CandidateLeg::from_market(50_000.0, "26SEP25", 120, 65.0, reference, 0.030, OptionStyle::Put),
        ];
        Ok(CandidateSnapshot::new(legs, Some(57.0)))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("=== Periodic Refresh Example ===");

    let service = LadderRefreshService::new(
        "BTC",
        DriftingSource {
            ticks: AtomicU64::new(0),
        },
    );
    let key = RunKey::automatic(false);

    for cycle in 1..=3u32 {
        info!("--- Refresh Cycle {} ---", cycle);
        match service.refresh(key).await? {
            Some(result) => {
                info!(
                    "Published {}: score {:.2}, {} legs, top factor {}",
                    result.id,
                    result.ladder.score,
                    result.ladder.legs.len(),
                    result.ladder.top_factor
                );
                for highlight in &result.highlight_keys {
                    info!("  highlight {}", highlight);
                }
            }
            None => info!("no ladder available this cycle"),
        }
        tokio::time::sleep(Duration::from_millis(200)).await;
    }

    // Between refreshes, readers hit the cache rather than the source.
    if let Some(latest) = service.latest(key) {
        info!("Latest cached result: {} at {}", latest.id, latest.computed_at);
    }
    info!("{}", service.stats());

    Ok(())
}
