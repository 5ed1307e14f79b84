//! Core domain types for the tripsort ranking engine.
//!
//! The crate defines the vocabulary shared by search collaborators and
//! scoring engines:
//! - [`Candidate`] carries one search result's identity, raw numeric and
//!   categorical attributes, and the derived sub-scores an engine records
//!   on it.
//! - [`Domain`] selects which per-domain configuration a scorer applies.
//! - [`Scorer`] is the seam request handlers consume: rank a cohort of
//!   candidates, best first, on the shared `0.0..=100.0` scale.
//!
//! # Examples
//!
//! ```
//! use tripsort_core::{Candidate, Domain};
//!
//! let candidate = Candidate::new("Harbour View Hotel")
//!     .with_numeric("price", 120.0)
//!     .with_numeric("rating", 4.5)
//!     .with_category("brand", "Hyatt");
//!
//! assert_eq!(candidate.name(), "Harbour View Hotel");
//! assert_eq!(candidate.numeric("price"), Some(120.0));
//! assert_eq!(Domain::Hotel.as_str(), "hotel");
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod candidate;
pub mod domain;
pub mod scorer;

pub use candidate::{Candidate, CandidateError};
pub use domain::Domain;
pub use scorer::{MAX_SCORE, Scorer};
