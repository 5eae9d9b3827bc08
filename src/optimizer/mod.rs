//! Ladder optimization module.
//!
//! This module implements the full search pipeline from candidate legs
//! to the single best-scoring ladder:
//!
//! ## Pipeline
//!
//! ```text
//! candidate legs (from the data layer)
//!   └── LadderOptimizer (dedup, expiry buckets, pool caps)
//!         └── combinatorics (same-expiry and cross-expiry leg groups)
//!               └── score_ladder (raw factors, via the pricing model)
//!                     └── rank_ladders (batch normalization, 0-10 score)
//!                           └── best ScoredLadder
//! ```
//!
//! ## Components
//!
//! - [`pricing`]: closed-form option analytics under a zero rate
//! - [`combinatorics`]: deterministic subset and multiset enumeration
//! - [`CandidateLeg`]: immutable input contract supplied by the caller
//! - [`score_ladder`]: per-group raw metric computation
//! - [`rank_ladders`]: cross-group normalization and composite scoring
//! - [`LadderOptimizer`]: orchestration, pool capping, and selection
//!
//! ## Example
//!
//! ```rust
//! use option_ladder_optimizer::optimizer::{CandidateLeg, LadderOptimizer};
//! use optionstratlib::OptionStyle;
//!
//! let legs = vec![
//!     CandidateLeg::from_market(54_000.0, "27JUN25", 30, 55.0, 60_000.0, 0.010, OptionStyle::Put),
//!     CandidateLeg::from_market(52_000.0, "27JUN25", 30, 60.0, 60_000.0, 0.008, OptionStyle::Put),
//!     CandidateLeg::from_market(56_000.0, "27JUN25", 30, 50.0, 60_000.0, 0.015, OptionStyle::Put),
//! ];
//!
//! let optimizer = LadderOptimizer::new();
//! let best = optimizer.optimize(&legs, Some(57.0), 2, false).unwrap();
//! assert_eq!(best.legs.len(), 2);
//! assert!(best.score >= 0.0 && best.score <= 10.0);
//! ```

pub mod combinatorics;
pub mod pricing;

mod builder;
mod leg;
mod ranker;
mod scorer;

// Re-export all public types
pub use builder::LadderOptimizer;
pub use leg::{CandidateLeg, LegKey};
pub use ranker::rank_ladders;
pub use scorer::{FACTOR_COUNT, ScoredLadder, score_ladder};
