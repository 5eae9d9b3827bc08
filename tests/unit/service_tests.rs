//! Integration tests for the refresh service.

use async_trait::async_trait;
use option_ladder_optimizer::Result;
use option_ladder_optimizer::optimizer::CandidateLeg;
use option_ladder_optimizer::service::{
    CandidateSnapshot, CandidateSource, LadderRefreshService, RunKey,
};
use optionstratlib::OptionStyle;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Source that serves a fixed chain and counts fetches.
struct CountingSource {
    legs: Vec<CandidateLeg>,
    fetches: Arc<AtomicUsize>,
}

#[async_trait]
impl CandidateSource for CountingSource {
    async fn fetch(&self) -> Result<CandidateSnapshot> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(CandidateSnapshot::new(self.legs.clone(), Some(57.0)))
    }
}

fn chain() -> Vec<CandidateLeg> {
    vec![
        CandidateLeg::from_market(54_000.0, "27JUN25", 30, 55.0, 60_000.0, 0.010, OptionStyle::Put),
        CandidateLeg::from_market(52_000.0, "27JUN25", 30, 60.0, 60_000.0, 0.008, OptionStyle::Put),
        CandidateLeg::from_market(56_000.0, "27JUN25", 30, 50.0, 60_000.0, 0.015, OptionStyle::Put),
        CandidateLeg::from_market(50_000.0, "26SEP25", 120, 65.0, 60_000.0, 0.035, OptionStyle::Put),
    ]
}

#[tokio::test]
async fn test_service_refresh_integration() {
    let source = CountingSource {
        legs: chain(),
        fetches: Arc::new(AtomicUsize::new(0)),
    };
    let service = LadderRefreshService::new("BTC", source);

    // One refresh per run variant a display layer would pin.
    let fixed = service.refresh(RunKey::fixed(2, false)).await.unwrap().unwrap();
    let auto = service.refresh(RunKey::automatic(false)).await.unwrap().unwrap();

    assert_eq!(fixed.ladder.legs.len(), 2);
    assert!(!auto.ladder.legs.is_empty());
    assert!(auto.ladder.score >= fixed.ladder.score);

    // Highlight keys cover exactly the chosen legs.
    assert_eq!(fixed.highlight_keys.len(), fixed.ladder.legs.len());
    for key in &fixed.highlight_keys {
        assert!(key.starts_with("BTC-") && key.ends_with("-P"), "key = {key}");
    }

    let stats = service.stats();
    assert_eq!(stats.cached_results, 2);
    assert!(stats.last_computed_at.is_some());
}

#[tokio::test]
async fn test_service_fetches_fresh_snapshot_per_refresh() {
    let fetches = Arc::new(AtomicUsize::new(0));
    let source = CountingSource {
        legs: chain(),
        fetches: Arc::clone(&fetches),
    };
    let service = LadderRefreshService::new("BTC", source);
    let key = RunKey::fixed(2, false);

    service.refresh(key).await.unwrap();
    service.refresh(key).await.unwrap();
    service.refresh(key).await.unwrap();
    assert_eq!(fetches.load(Ordering::SeqCst), 3);

    // Reading the cache must not hit the source.
    assert!(service.latest(key).is_some());
    assert_eq!(fetches.load(Ordering::SeqCst), 3);
    assert_eq!(service.stats().cached_results, 1);
}
