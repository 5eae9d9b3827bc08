//! # Option Ladder Optimizer - Cash-Secured Put Ladder Construction
//!
//! A Rust library that searches the combinatorial space of fixed-size
//! put-leg groups ("ladders"), scores each group on six risk/return
//! factors derived from option-pricing theory, and returns the single
//! best-scoring ladder for periodic, near-real-time recomputation.
//!
//! ## Key Features
//!
//! - **Closed-Form Analytics**: Zero-rate Black-Scholes exercise
//!   probability, Greeks, and conditional tail loss, suitable for
//!   coin-margined crypto options.
//!
//! - **Bounded Combinatorial Search**: Same-expiry and cross-expiry leg
//!   groups with explicit pool caps, keeping every call inside one
//!   refresh cycle without parallelism.
//!
//! - **Batch-Relative Ranking**: Min-max normalization of six factors
//!   across the generated candidate set with a named, tunable weight
//!   table and a 0-10 composite score.
//!
//! - **Pure, Deterministic Core**: No shared mutable state and no I/O;
//!   identical inputs always produce bit-identical results.
//!
//! - **Refresh Service**: An async seam to the data-supplying
//!   collaborator plus a `DashMap`-backed last-result cache for display
//!   layers, with `Uuid`-stamped published results.
//!
//! - **Result-Based Error Handling**: Configuration and collaborator
//!   failures return `Result<T, Error>`; an empty or insufficient
//!   candidate pool is an expected condition, not an error.
//!
//! ## Architecture
//!
//! The library follows a layered structure from pure analytics up to the
//! refresh service:
//!
//! ```text
//! LadderRefreshService (polls the CandidateSource, publishes results)
//!   └── LadderOptimizer (dedup, expiry buckets, pool caps, selection)
//!         ├── combinatorics (subset / multiset enumeration)
//!         ├── score_ladder (six raw factors per group)
//!         │     └── pricing (exercise probability, tail loss, Greeks)
//!         └── rank_ladders (batch normalization, composite 0-10 score)
//! ```
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`optimizer`] | Pricing model, combination generators, scorer, ranker, orchestrator |
//! | [`service`] | Candidate-source seam and periodic refresh service |
//! | [`config`] | Optimizer configuration and the factor-weight table |
//! | [`error`] | Error types and `Result` type alias |
//! | [`utils`] | Utility functions (expiry and instrument codes) |
//!
//! ## Example Usage
//!
//! ### Optimizing a Candidate Pool
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
//!
//! // Best two-leg ladder, no repeated contracts.
//! let best = optimizer.optimize(&legs, Some(57.0), 2, false).unwrap();
//! assert_eq!(best.legs.len(), 2);
//! assert!(best.score >= 0.0 && best.score <= 10.0);
//!
//! // Automatic mode sweeps leg counts 1..=5 and keeps the global best.
//! let auto = optimizer.optimize_auto(&legs, Some(57.0), false).unwrap();
//! assert!(auto.score >= best.score);
//! ```
//!
//! ### Highlight Keys for Display Layers
//!
//! ```rust
//! use option_ladder_optimizer::optimizer::{CandidateLeg, LadderOptimizer};
//! use optionstratlib::OptionStyle;
//!
//! let legs = vec![
//!     CandidateLeg::from_market(54_000.0, "27JUN25", 30, 55.0, 60_000.0, 0.010, OptionStyle::Put),
//!     CandidateLeg::from_market(52_000.0, "27JUN25", 30, 60.0, 60_000.0, 0.008, OptionStyle::Put),
//! ];
//!
//! let best = LadderOptimizer::new().optimize(&legs, None, 2, false).unwrap();
//! let keys = best.highlight_keys("BTC");
//! assert!(keys.contains("BTC-27JUN25-54000-P"));
//! ```
//!
//! ## Examples
//!
//! The library includes runnable examples:
//!
//! | Example | Description |
//! |---------|-------------|
//! | `optimize_chain` | Build a synthetic chain and print the ranked result |
//! | `periodic_refresh` | Drive the refresh service against a mock source |
//!
//! Run examples with:
//! ```bash
//! cargo run --example optimize_chain
//! cargo run --example periodic_refresh
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Candidate Generation**: `O(G * C(p, k))` where `G` is the number
//!   of expiry buckets plus one, `p` the capped pool size (at most 15),
//!   and `k` the leg count (at most 5)
//! - **Ranking**: single pass per factor over the candidate batch
//! - **No Concurrency Required**: each call is self-terminating and
//!   bounded; overlapping refreshes follow last-result-wins
//!
//! ## Dependencies
//!
//! - **optionstratlib** (0.13): Option-domain types (`OptionStyle`)
//! - **dashmap** (6): Concurrent result cache for the refresh service
//! - **chrono** (0.4): Timestamps and expiry-date handling
//! - **uuid** (1): Published-result identifiers
//! - **thiserror** (2.0): Error handling
//! - **serde** (1.0): Serialization support
//! - **tracing** (0.1): Structured diagnostics

pub mod config;
pub mod error;
pub mod optimizer;
pub mod service;
pub mod utils;

pub use error::{Error, Result};
