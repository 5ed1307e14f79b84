//! Facade crate for the tripsort ranking engine.
//!
//! This crate re-exports the core domain types and exposes the weighted
//! scoring engine behind a feature flag.

#![forbid(unsafe_code)]

pub use tripsort_core::{Candidate, CandidateError, Domain, MAX_SCORE, Scorer};

#[cfg(feature = "scorer")]
pub use tripsort_scorer::{
    ConfigError, DomainConfig, MetricSpec, ReputationSpec, ScoringConfig, WeightedScorer,
};
