//! Deterministic multi-factor scoring for travel search candidates.
//!
//! The crate provides the ranking engine the tripsort services use to
//! order heterogeneous search results (flights, hotels, restaurants,
//! activities, products, coworking spaces):
//! - **Normalisation** maps each configured numeric attribute (price,
//!   duration, rating, ...) onto the shared `0..=100` scale against the
//!   cohort's observed spread.
//! - **Reputation lookup** resolves a categorical attribute (airline,
//!   brand, cuisine, ...) against a static per-domain table with a
//!   neutral fallback for unknown categories.
//! - **Weighted combination** folds the sub-scores into one overall score
//!   per candidate using the domain's weight vector.
//! - **Ranking** sorts the cohort best first; ties keep their input order.
//!
//! Configuration is validated eagerly when a [`WeightedScorer`] is built,
//! so a malformed weight table fails fast before any candidate is scored.
//! Ranking itself is infallible: records without a usable identity are
//! dropped and logged, never escalated to a request failure.
//!
//! # Examples
//!
//! ```
//! use tripsort_core::{Candidate, Domain, Scorer};
//! use tripsort_scorer::{ScoringConfig, WeightedScorer};
//!
//! let scorer = WeightedScorer::new(ScoringConfig::default()).expect("defaults are valid");
//! let cohort = vec![
//!     Candidate::new("Harbour View")
//!         .with_numeric("price", 120.0)
//!         .with_numeric("rating", 4.5),
//!     Candidate::new("Old Mill Inn")
//!         .with_numeric("price", 90.0)
//!         .with_numeric("rating", 4.1),
//! ];
//! let ranked = scorer.rank(Domain::Hotel, cohort);
//! assert_eq!(ranked.len(), 2);
//! assert!(ranked.iter().all(|candidate| candidate.overall().is_some()));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod engine;
mod error;
mod normalise;
mod reputation;

pub use config::{DomainConfig, MetricSpec, ReputationSpec, ScoringConfig, WEIGHT_SUM_TOLERANCE};
pub use engine::{WeightedScorer, combine};
pub use error::ConfigError;
pub use normalise::normalise;
pub use reputation::lookup;
