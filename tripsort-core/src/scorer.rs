//! Rank candidate cohorts for a search domain.
//!
//! The `Scorer` trait turns a cohort of [`Candidate`](crate::Candidate)
//! records into a ranked list, best first, for a given
//! [`Domain`](crate::Domain).

use crate::{Candidate, Domain};

/// Upper bound of the shared score scale.
///
/// Every sub-score and overall score lies in `0.0..=MAX_SCORE`.
pub const MAX_SCORE: f32 = 100.0;

/// Rank a cohort of candidates for a domain.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one scorer can
/// serve concurrent request handlers. Ranking is infallible: invalid input
/// records are dropped and logged rather than failing the cohort, and
/// misconfiguration must be rejected when the scorer is constructed, never
/// at ranking time.
///
/// Implementations must:
/// - Produce finite (`f32::is_finite`) scores.
/// - Normalise every derived score into the range `0.0..=MAX_SCORE`.
/// - Order the result descending by overall score, preserving input order
///   on ties (stable sort).
///
/// Use [`Scorer::sanitise`] to apply the numeric guards.
///
/// # Examples
///
/// ```rust
/// use tripsort_core::{Candidate, Domain, Scorer};
///
/// struct PassthroughScorer;
///
/// impl Scorer for PassthroughScorer {
///     fn rank(&self, _domain: Domain, candidates: Vec<Candidate>) -> Vec<Candidate> {
///         candidates
///     }
/// }
///
/// let cohort = vec![Candidate::new("Aurora Bistro")];
/// let ranked = PassthroughScorer.rank(Domain::Restaurant, cohort);
/// assert_eq!(ranked.len(), 1);
/// ```
pub trait Scorer: Send + Sync {
    /// Rank `candidates` for `domain`, best first.
    fn rank(&self, domain: Domain, candidates: Vec<Candidate>) -> Vec<Candidate>;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=MAX_SCORE`.
    fn sanitise(score: f32) -> f32 {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, MAX_SCORE)
    }
}
