//! Periodic refresh service around the pure optimizer.
//!
//! Polling, caching of the last published result, and the automatic
//! leg-count sweep live here, outside the scoring and ranking functions.
//! The service pulls a snapshot from the data collaborator, runs the
//! optimizer, and publishes the result into a concurrent cache that
//! display layers read between refreshes. Concurrent refreshes need no
//! coordination: the optimizer is stateless and the cache is
//! last-write-wins per run key.

use crate::config::OptimizerConfig;
use crate::error::Result;
use crate::optimizer::{CandidateLeg, LadderOptimizer, ScoredLadder};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// A point-in-time view of the candidate pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSnapshot {
    /// Candidate legs, ordered by the supplier (most attractive first).
    pub legs: Vec<CandidateLeg>,
    /// Market-wide volatility index, when the venue publishes one.
    pub volatility_index: Option<f64>,
    /// When the snapshot was taken.
    pub taken_at: DateTime<Utc>,
}

impl CandidateSnapshot {
    /// Creates a snapshot stamped with the current time.
    #[must_use]
    pub fn new(legs: Vec<CandidateLeg>, volatility_index: Option<f64>) -> Self {
        Self {
            legs,
            volatility_index,
            taken_at: Utc::now(),
        }
    }
}

/// External collaborator that supplies candidate legs.
///
/// Implementations own retrieval, retries, and staleness policy; the
/// service only consumes the resulting snapshot. Admission filters such
/// as an exercise-probability cap belong on this side of the seam.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Fetches the current candidate snapshot.
    ///
    /// # Errors
    ///
    /// Returns `Error::Source` when the upstream data cannot be
    /// retrieved. An empty snapshot is not an error.
    async fn fetch(&self) -> Result<CandidateSnapshot>;
}

/// Identifies one optimization run variant in the result cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunKey {
    /// Requested leg count, or `None` for the automatic sweep.
    pub num_legs: Option<usize>,
    /// Whether a leg may appear more than once in a ladder.
    pub allow_repetition: bool,
}

impl RunKey {
    /// Run with a fixed leg count.
    #[must_use]
    pub const fn fixed(num_legs: usize, allow_repetition: bool) -> Self {
        Self {
            num_legs: Some(num_legs),
            allow_repetition,
        }
    }

    /// Run sweeping every leg count and keeping the best result.
    #[must_use]
    pub const fn automatic(allow_repetition: bool) -> Self {
        Self {
            num_legs: None,
            allow_repetition,
        }
    }
}

impl fmt::Display for RunKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.num_legs {
            Some(n) => write!(f, "{n}-leg")?,
            None => write!(f, "auto")?,
        }
        if self.allow_repetition {
            write!(f, "+rep")?;
        }
        Ok(())
    }
}

/// A published optimization result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LadderResult {
    /// Unique identifier of this computation.
    pub id: Uuid,
    /// When the result was computed.
    pub computed_at: DateTime<Utc>,
    /// The underlying asset symbol.
    pub underlying: String,
    /// The best-ranked ladder.
    pub ladder: ScoredLadder,
    /// Instrument codes of the chosen legs, for display highlighting.
    pub highlight_keys: BTreeSet<String>,
}

impl LadderResult {
    /// Wraps a ladder into a published result for the given underlying.
    #[must_use]
    pub fn new(underlying: impl Into<String>, ladder: ScoredLadder) -> Self {
        let underlying = underlying.into();
        let highlight_keys = ladder.highlight_keys(&underlying);
        Self {
            id: Uuid::new_v4(),
            computed_at: Utc::now(),
            underlying,
            ladder,
            highlight_keys,
        }
    }
}

/// Refresh service for one underlying.
///
/// Owns the candidate source, the optimizer, and the per-run-key result
/// cache. Uses `DashMap` so refresh tasks and readers never contend on a
/// single lock.
pub struct LadderRefreshService<S> {
    /// The underlying asset symbol.
    underlying: String,
    /// The candidate source collaborator.
    source: S,
    /// The pure optimization engine.
    optimizer: LadderOptimizer,
    /// Last published result per run key.
    results: DashMap<RunKey, LadderResult>,
}

impl<S: CandidateSource> LadderRefreshService<S> {
    /// Creates a refresh service with the default optimizer configuration.
    #[must_use]
    pub fn new(underlying: impl Into<String>, source: S) -> Self {
        Self {
            underlying: underlying.into(),
            source,
            optimizer: LadderOptimizer::new(),
            results: DashMap::new(),
        }
    }

    /// Creates a refresh service with a caller-supplied configuration.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidConfig` if the configuration fails
    /// validation.
    pub fn with_config(
        underlying: impl Into<String>,
        source: S,
        config: OptimizerConfig,
    ) -> Result<Self> {
        Ok(Self {
            underlying: underlying.into(),
            source,
            optimizer: LadderOptimizer::with_config(config)?,
            results: DashMap::new(),
        })
    }

    /// Returns the underlying asset symbol.
    #[must_use]
    pub fn underlying(&self) -> &str {
        &self.underlying
    }

    /// Fetches a fresh snapshot, optimizes, and publishes the result.
    ///
    /// When the pool yields no ladder the stale entry for `key` is
    /// removed, so readers never see a ladder the current market no
    /// longer supports.
    ///
    /// # Errors
    ///
    /// Returns `Error::Source` when the candidate source fails. A pool
    /// that yields no ladder is a successful refresh returning `Ok(None)`.
    pub async fn refresh(&self, key: RunKey) -> Result<Option<LadderResult>> {
        let snapshot = self.source.fetch().await?;
        debug!(
            run = %key,
            legs = snapshot.legs.len(),
            volatility_index = snapshot.volatility_index,
            "refreshing ladder"
        );

        let ladder = match key.num_legs {
            Some(num_legs) => self.optimizer.optimize(
                &snapshot.legs,
                snapshot.volatility_index,
                num_legs,
                key.allow_repetition,
            ),
            None => self.optimizer.optimize_auto(
                &snapshot.legs,
                snapshot.volatility_index,
                key.allow_repetition,
            ),
        };

        match ladder {
            Some(ladder) => {
                let result = LadderResult::new(self.underlying.clone(), ladder);
                info!(
                    run = %key,
                    score = result.ladder.score,
                    legs = result.ladder.legs.len(),
                    top_factor = %result.ladder.top_factor,
                    "published ladder"
                );
                self.results.insert(key, result.clone());
                Ok(Some(result))
            }
            None => {
                warn!(run = %key, "no ladder available");
                self.results.remove(&key);
                Ok(None)
            }
        }
    }

    /// Returns the last published result for `key`, if any.
    #[must_use]
    pub fn latest(&self, key: RunKey) -> Option<LadderResult> {
        self.results.get(&key).map(|entry| entry.value().clone())
    }

    /// Returns statistics about the result cache.
    #[must_use]
    pub fn stats(&self) -> ServiceStats {
        let last_computed_at = self
            .results
            .iter()
            .map(|entry| entry.value().computed_at)
            .max();
        ServiceStats {
            underlying: self.underlying.clone(),
            cached_results: self.results.len(),
            last_computed_at,
        }
    }
}

/// Statistics about a refresh service.
#[derive(Debug, Clone)]
pub struct ServiceStats {
    /// The underlying asset symbol.
    pub underlying: String,
    /// Number of run keys with a published result.
    pub cached_results: usize,
    /// Timestamp of the newest published result.
    pub last_computed_at: Option<DateTime<Utc>>,
}

impl fmt::Display for ServiceStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} cached results, last computed at {}",
            self.underlying,
            self.cached_results,
            self.last_computed_at
                .map_or_else(|| "never".to_string(), |ts| ts.to_rfc3339()),
        )
    }
}
